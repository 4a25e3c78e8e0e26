//! Cells, waypoints, and the waypoint stack agents walk

use serde::{Deserialize, Serialize};

/// A maze cell addressed by integer grid coordinates.
///
/// The maze lives on the x/z plane; `z` is the row axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub z: i32,
}

impl Cell {
    /// Create a new cell
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Manhattan distance to another cell
    pub fn manhattan_distance(&self, other: &Cell) -> i32 {
        (self.x - other.x).abs() + (self.z - other.z).abs()
    }

    /// Project onto the movement plane (y = 0)
    pub fn to_waypoint(self) -> Waypoint {
        Waypoint::new(self.x as f32, 0.0, self.z as f32)
    }

    /// Cell containing a continuous position.
    ///
    /// Arrival snapping keeps agent positions exactly on cell centers, so
    /// rounding is exact whenever an agent is at rest.
    pub fn from_waypoint(waypoint: &Waypoint) -> Self {
        Self {
            x: waypoint.x.round() as i32,
            z: waypoint.z.round() as i32,
        }
    }
}

/// A continuous position in world space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Waypoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Waypoint {
    /// Create a new waypoint
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Distance to another waypoint on the x/z plane
    pub fn planar_distance_to(&self, other: &Waypoint) -> f32 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        (dx * dx + dz * dz).sqrt()
    }
}

/// A planned route consumed back to front.
///
/// The planner pushes the goal first and the start-adjacent step last, so
/// `next_waypoint` always reads the nearest remaining step and the final
/// pop yields the goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Path {
    waypoints: Vec<Waypoint>,
}

impl Path {
    /// Create an empty path
    pub fn new() -> Self {
        Self {
            waypoints: Vec::new(),
        }
    }

    /// Whether any steps remain
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Remaining step count
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Push a waypoint on top of the stack
    pub fn push(&mut self, waypoint: Waypoint) {
        self.waypoints.push(waypoint);
    }

    /// The next step to move toward
    pub fn next_waypoint(&self) -> Option<&Waypoint> {
        self.waypoints.last()
    }

    /// The final destination, if any
    pub fn destination(&self) -> Option<&Waypoint> {
        self.waypoints.first()
    }

    /// Remove and return the next step
    pub fn pop_next(&mut self) -> Option<Waypoint> {
        self.waypoints.pop()
    }

    /// Drop all remaining steps
    pub fn clear(&mut self) {
        self.waypoints.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        let a = Cell::new(0, 0);
        let b = Cell::new(3, 4);

        assert_eq!(a.manhattan_distance(&b), 7);
        assert_eq!(b.manhattan_distance(&a), 7);
        assert_eq!(a.manhattan_distance(&a), 0);
    }

    #[test]
    fn test_cell_waypoint_projection() {
        let cell = Cell::new(2, 5);
        let waypoint = cell.to_waypoint();

        assert_eq!(waypoint, Waypoint::new(2.0, 0.0, 5.0));
        assert_eq!(Cell::from_waypoint(&waypoint), cell);
    }

    #[test]
    fn test_cell_from_offset_position() {
        // Mid-leg positions resolve to the nearest cell center
        let waypoint = Waypoint::new(1.4, 0.0, 2.6);
        assert_eq!(Cell::from_waypoint(&waypoint), Cell::new(1, 3));
    }

    #[test]
    fn test_path_pops_nearest_step_first() {
        let mut path = Path::new();
        path.push(Cell::new(2, 2).to_waypoint()); // goal, pushed first
        path.push(Cell::new(1, 2).to_waypoint());
        path.push(Cell::new(0, 2).to_waypoint());

        assert_eq!(path.len(), 3);
        assert_eq!(path.destination(), Some(&Cell::new(2, 2).to_waypoint()));
        assert_eq!(path.pop_next(), Some(Cell::new(0, 2).to_waypoint()));
        assert_eq!(path.pop_next(), Some(Cell::new(1, 2).to_waypoint()));
        assert_eq!(path.pop_next(), Some(Cell::new(2, 2).to_waypoint()));
        assert!(path.is_empty());
    }

    #[test]
    fn test_path_clear() {
        let mut path = Path::new();
        path.push(Waypoint::new(1.0, 0.0, 0.0));
        path.clear();

        assert!(path.is_empty());
        assert_eq!(path.next_waypoint(), None);
    }
}
