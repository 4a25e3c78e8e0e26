//! Wall breaker collision rules

use gloam_nav::Cell;
use serde::{Deserialize, Serialize};

/// What a deployed wall breaker collided with, as reported by host physics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakerHit {
    /// A ghost, by session index
    Ghost { ghost: usize },
    /// A wall cube
    Wall { cell: Cell, boundary: bool },
    /// Floor, decoration, anything else
    Other,
}

/// What the session should do about a breaker hit.
///
/// The breaker itself is consumed whatever the outcome; `Spent` means
/// nothing else happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakerOutcome {
    /// Destroy the ghost it struck
    GhostDestroyed { ghost: usize },
    /// Open the wall it struck
    WallBroken { cell: Cell },
    /// Consumed with no effect
    Spent,
}

impl BreakerHit {
    /// First-contact resolution: ghosts die, breakable walls open, boundary
    /// walls and everything else just eat the breaker.
    pub fn resolve(&self) -> BreakerOutcome {
        match self {
            BreakerHit::Ghost { ghost } => BreakerOutcome::GhostDestroyed { ghost: *ghost },
            BreakerHit::Wall {
                cell,
                boundary: false,
            } => BreakerOutcome::WallBroken { cell: *cell },
            BreakerHit::Wall { boundary: true, .. } => BreakerOutcome::Spent,
            BreakerHit::Other => BreakerOutcome::Spent,
        }
    }
}
