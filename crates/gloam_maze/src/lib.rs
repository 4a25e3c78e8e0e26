//! Gloam Maze - Grid Maze Model
//!
//! This crate provides the maze the chase is played on.
//!
//! # Features
//!
//! - Flat occupancy grid with per-cell walls
//! - Breakable walls with an unbreakable boundary shell
//! - ASCII layout parsing with spawn and pellet markers
//!
//! # Example
//!
//! ```ignore
//! use gloam_maze::prelude::*;
//!
//! let layout = MazeLayout::parse("#####\n#P.G#\n#####")?;
//! let mut grid = layout.grid;
//! grid.break_wall(2, 2);
//! ```

pub mod grid;
pub mod layout;

pub mod prelude {
    pub use crate::grid::MazeGrid;
    pub use crate::layout::{LayoutError, MazeLayout};
}

pub use prelude::*;
