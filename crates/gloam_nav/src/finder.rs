//! Breadth-first shortest paths over a grid maze

use std::collections::VecDeque;

use crate::path::{Cell, Path};

/// Neighbor offsets in expansion order: down, up, left, right.
///
/// The order is load-bearing: together with FIFO expansion it fixes which
/// of several equal-length routes is returned.
const STEP_X: [i32; 4] = [0, 0, -1, 1];
const STEP_Z: [i32; 4] = [-1, 1, 0, 0];

/// Read access to the maze occupancy grid.
///
/// Implementors only need to answer for in-bounds coordinates; the planner
/// bounds-checks before querying.
pub trait GridMaze {
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    fn is_blocked(&self, x: i32, z: i32) -> bool;
}

/// Breadth-first path planner with reusable search buffers.
///
/// Each agent owns one. The visited and parent arrays are sized to the maze
/// on first use and cleared per query, so steady-state planning does not
/// allocate. No results are cached; every call searches afresh.
#[derive(Debug, Clone, Default)]
pub struct PathFinder {
    /// Flat parent index per cell, -1 for the search root
    parent: Vec<i32>,
    visited: Vec<bool>,
    queue: VecDeque<i32>,
    width: i32,
    height: i32,
}

impl PathFinder {
    /// Create a planner; buffers are sized lazily on first query
    pub fn new() -> Self {
        Self::default()
    }

    /// Shortest path from `start` to `goal`, or an empty path if no route
    /// exists.
    ///
    /// When `goal == start` the path holds the single snapped goal waypoint.
    /// Otherwise the returned path excludes the start cell and includes the
    /// goal, popping the start-adjacent step first.
    pub fn find_path(&mut self, start: Cell, goal: Cell, maze: &impl GridMaze) -> Path {
        let mut path = Path::new();

        if start == goal {
            path.push(goal.to_waypoint());
            return path;
        }

        self.reset(maze.width(), maze.height());
        if !self.in_bounds(start.x, start.z) {
            return path;
        }

        let root = self.flatten(start.x, start.z);
        self.visited[root as usize] = true;
        self.queue.push_back(root);

        while let Some(current) = self.queue.pop_front() {
            let cx = current % self.width;
            let cz = current / self.width;

            for step in 0..4 {
                let nx = cx + STEP_X[step];
                let nz = cz + STEP_Z[step];

                if !self.in_bounds(nx, nz) {
                    continue;
                }
                let neighbor = self.flatten(nx, nz);
                if self.visited[neighbor as usize] {
                    continue;
                }
                if maze.is_blocked(nx, nz) {
                    continue;
                }

                if nx == goal.x && nz == goal.z {
                    self.reconstruct(current, goal, &mut path);
                    return path;
                }

                self.visited[neighbor as usize] = true;
                self.parent[neighbor as usize] = current;
                self.queue.push_back(neighbor);
            }
        }

        // Queue exhausted: the goal is unreachable
        path
    }

    /// Push the goal, then the parent chain from the node that discovered
    /// it back to (but excluding) the root. The last push is the step
    /// adjacent to the start, so pops walk outward.
    fn reconstruct(&self, discovered_from: i32, goal: Cell, path: &mut Path) {
        path.push(goal.to_waypoint());

        let mut node = discovered_from;
        while self.parent[node as usize] != -1 {
            let cell = Cell::new(node % self.width, node / self.width);
            path.push(cell.to_waypoint());
            node = self.parent[node as usize];
        }
    }

    fn reset(&mut self, width: i32, height: i32) {
        let size = (width.max(0) as usize) * (height.max(0) as usize);
        self.width = width;
        self.height = height;
        self.visited.clear();
        self.visited.resize(size, false);
        self.parent.clear();
        self.parent.resize(size, -1);
        self.queue.clear();
    }

    fn in_bounds(&self, x: i32, z: i32) -> bool {
        x >= 0 && z >= 0 && x < self.width && z < self.height
    }

    fn flatten(&self, x: i32, z: i32) -> i32 {
        z * self.width + x
    }
}
