//! Scene-facing agent notifications

use gloam_nav::Waypoint;
use serde::{Deserialize, Serialize};

/// Notifications an agent queues for the host scene layer.
///
/// `kill` queues `EffectRequested` before `Despawned`; hosts that replay
/// the queue in order spawn the death effect while the ghost object still
/// exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GhostEvent {
    /// Instantiate a one-shot visual effect
    EffectRequested {
        prefab: String,
        position: Waypoint,
        /// Euler rotation in degrees
        rotation: [f32; 3],
    },
    /// Remove the agent's scene object
    Despawned,
}
