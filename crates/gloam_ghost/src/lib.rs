//! Gloam Ghost - Chase Agents
//!
//! This crate drives the ghosts that hunt the player.
//!
//! # Features
//!
//! - Two-phase frame driver (logical replanning, physics movement)
//! - Pluggable goal strategies: chase, scatter, patrol, wander
//! - Sleep mode and death/despawn notifications
//! - Shared maze handle so wall breaks reach every ghost
//!
//! # Example
//!
//! ```ignore
//! use gloam_ghost::prelude::*;
//!
//! let mut ghost = GhostAgent::new(
//!     GhostConfig::new(spawn).with_move_speed(0.1),
//!     BehaviorKind::Chase.build(),
//!     maze.clone(),
//! )?;
//!
//! ghost.on_logical_tick(player_cell, dt);
//! ghost.on_physics_tick();
//! ```

pub mod agent;
pub mod behavior;
pub mod events;

pub mod prelude {
    pub use crate::agent::{GhostAgent, GhostConfig, GhostError};
    pub use crate::behavior::{
        BehaviorContext, BehaviorKind, ChaseBehavior, GhostBehavior, PatrolBehavior,
        ScatterBehavior, WanderBehavior,
    };
    pub use crate::events::GhostEvent;
}

pub use prelude::*;
