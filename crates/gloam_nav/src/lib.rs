//! Gloam Nav - Grid Pathfinding and Path Following
//!
//! This crate provides the navigation core for maze agents.
//!
//! # Features
//!
//! - Cell/waypoint data model on a fixed height plane
//! - Breadth-first shortest paths with a deterministic tie-break order
//! - Reusable search buffers (steady-state planning does not allocate)
//! - Waypoint-stack following with exact arrival snapping
//!
//! # Example
//!
//! ```ignore
//! use gloam_nav::prelude::*;
//!
//! let mut finder = PathFinder::new();
//! let mut path = finder.find_path(Cell::new(0, 0), Cell::new(4, 4), &maze);
//!
//! let mut mover = Mover::new(Cell::new(0, 0).to_waypoint(), 0.1);
//! while !path.is_empty() {
//!     mover.advance(&mut path);
//! }
//! ```

pub mod finder;
pub mod follower;
pub mod path;

pub mod prelude {
    pub use crate::finder::{GridMaze, PathFinder};
    pub use crate::follower::{Mover, DEFAULT_ARRIVAL_EPSILON};
    pub use crate::path::{Cell, Path, Waypoint};
}

pub use prelude::*;
