//! Maze occupancy grid with breakable walls

use gloam_nav::{Cell, GridMaze};
use serde::{Deserialize, Serialize};

/// The maze as a flat row-major occupancy grid.
///
/// Cells are addressed by `(x, z)` with `z` as the row axis. Walls are
/// per-cell; boundary walls form the outer shell and cannot be broken.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MazeGrid {
    width: i32,
    height: i32,
    blocked: Vec<bool>,
    boundary: Vec<bool>,
}

impl MazeGrid {
    /// Create a fully open grid
    pub fn new(width: i32, height: i32) -> Self {
        let size = (width.max(0) as usize) * (height.max(0) as usize);
        Self {
            width,
            height,
            blocked: vec![false; size],
            boundary: vec![false; size],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, x: i32, z: i32) -> bool {
        x >= 0 && z >= 0 && x < self.width && z < self.height
    }

    /// Whether `(x, z)` holds a wall. Out-of-bounds cells read as blocked.
    pub fn is_blocked(&self, x: i32, z: i32) -> bool {
        if !self.in_bounds(x, z) {
            return true;
        }
        self.blocked[self.index(x, z)]
    }

    /// Place or remove a wall. Out of bounds is a no-op.
    pub fn set_blocked(&mut self, x: i32, z: i32, blocked: bool) {
        if self.in_bounds(x, z) {
            let index = self.index(x, z);
            self.blocked[index] = blocked;
        }
    }

    /// Whether the wall at `(x, z)` belongs to the unbreakable shell
    pub fn is_boundary(&self, x: i32, z: i32) -> bool {
        if !self.in_bounds(x, z) {
            return false;
        }
        self.boundary[self.index(x, z)]
    }

    /// Mark a cell as part of the unbreakable shell. Out of bounds is a
    /// no-op.
    pub fn set_boundary(&mut self, x: i32, z: i32, boundary: bool) {
        if self.in_bounds(x, z) {
            let index = self.index(x, z);
            self.boundary[index] = boundary;
        }
    }

    /// Remove the wall at `(x, z)`.
    ///
    /// Returns true when a wall was actually removed. Open cells, boundary
    /// walls, and out-of-bounds coordinates are refused.
    pub fn break_wall(&mut self, x: i32, z: i32) -> bool {
        if !self.in_bounds(x, z) {
            return false;
        }
        let index = self.index(x, z);
        if !self.blocked[index] || self.boundary[index] {
            return false;
        }
        self.blocked[index] = false;
        true
    }

    /// All unblocked cells, row by row
    pub fn open_cells(&self) -> Vec<Cell> {
        let mut cells = Vec::new();
        for z in 0..self.height {
            for x in 0..self.width {
                if !self.blocked[self.index(x, z)] {
                    cells.push(Cell::new(x, z));
                }
            }
        }
        cells
    }

    fn index(&self, x: i32, z: i32) -> usize {
        (z * self.width + x) as usize
    }
}

impl GridMaze for MazeGrid {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn is_blocked(&self, x: i32, z: i32) -> bool {
        MazeGrid::is_blocked(self, x, z)
    }
}
