//! Fixed-tick waypoint following

use serde::{Deserialize, Serialize};

use crate::path::{Path, Waypoint};

/// Arrival window half-width, per axis
pub const DEFAULT_ARRIVAL_EPSILON: f32 = 0.001;

/// Walks a path one fixed physics tick at a time.
///
/// Movement is a straight translation along the current facing by
/// `move_speed` per tick; the fixed-step cadence is the time base, so no
/// delta scaling is applied. Pick a speed that evenly divides the cell
/// spacing or legs will never land inside the arrival window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mover {
    /// Current position
    pub position: Waypoint,
    /// Unit direction on the x/z plane
    pub facing: Waypoint,
    /// Distance covered per physics tick
    pub move_speed: f32,
    /// Per-axis arrival window
    pub arrival_epsilon: f32,
}

impl Mover {
    /// Create a mover at `position` facing +z
    pub fn new(position: Waypoint, move_speed: f32) -> Self {
        Self {
            position,
            facing: Waypoint::new(0.0, 0.0, 1.0),
            move_speed,
            arrival_epsilon: DEFAULT_ARRIVAL_EPSILON,
        }
    }

    /// Override the arrival window
    pub fn with_arrival_epsilon(mut self, epsilon: f32) -> Self {
        self.arrival_epsilon = epsilon;
        self
    }

    /// Advance one tick toward the path's next waypoint.
    ///
    /// Turns to face the waypoint, then either snaps onto it and pops it
    /// (both x and z within the arrival window) or translates along the
    /// facing by `move_speed`. The arrival test is per axis, not Euclidean,
    /// and runs before any movement. Snapping assigns the waypoint
    /// wholesale, so float error cannot accumulate across legs.
    pub fn advance(&mut self, path: &mut Path) {
        let target = match path.next_waypoint() {
            Some(waypoint) => *waypoint,
            None => return,
        };

        self.face_toward(&target);

        let dx = (self.position.x - target.x).abs();
        let dz = (self.position.z - target.z).abs();
        if dx < self.arrival_epsilon && dz < self.arrival_epsilon {
            self.position = target;
            path.pop_next();
        } else {
            self.position.x += self.facing.x * self.move_speed;
            self.position.z += self.facing.z * self.move_speed;
        }
    }

    /// Turn to face a target on the x/z plane. Facing is kept when the
    /// target is (nearly) underfoot.
    fn face_toward(&mut self, target: &Waypoint) {
        let dx = target.x - self.position.x;
        let dz = target.z - self.position.z;
        let distance = (dx * dx + dz * dz).sqrt();

        if distance > 0.001 {
            self.facing = Waypoint::new(dx / distance, 0.0, dz / distance);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translates_toward_waypoint() {
        let mut mover = Mover::new(Waypoint::new(0.0, 0.0, 0.0), 0.1);
        let mut path = Path::new();
        path.push(Waypoint::new(1.0, 0.0, 0.0));

        mover.advance(&mut path);

        assert!((mover.position.x - 0.1).abs() < 1e-6);
        assert_eq!(mover.position.z, 0.0);
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_faces_before_moving() {
        let mut mover = Mover::new(Waypoint::new(0.0, 0.0, 0.0), 0.1);
        let mut path = Path::new();
        path.push(Waypoint::new(-1.0, 0.0, 0.0));

        mover.advance(&mut path);

        assert!((mover.facing.x + 1.0).abs() < 1e-6);
        assert!(mover.facing.z.abs() < 1e-6);
        assert!(mover.position.x < 0.0);
    }

    #[test]
    fn test_snaps_and_pops_on_arrival() {
        let mut mover = Mover::new(Waypoint::new(0.99995, 0.0, 0.0003), 0.1);
        let mut path = Path::new();
        path.push(Waypoint::new(2.0, 0.0, 0.0)); // next leg
        path.push(Waypoint::new(1.0, 0.0, 0.0));

        mover.advance(&mut path);

        assert_eq!(mover.position.x, 1.0);
        assert_eq!(mover.position.z, 0.0);
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_arrival_is_per_axis() {
        // Diagonal offset inside the per-axis window but outside the
        // Euclidean circle of the same radius still counts as arrived.
        let mut mover = Mover::new(Waypoint::new(0.9991, 0.0, 0.0009), 0.05);
        let mut path = Path::new();
        path.push(Waypoint::new(1.0, 0.0, 0.0));

        mover.advance(&mut path);

        assert!(path.is_empty());
        assert_eq!(mover.position.x, 1.0);
        assert_eq!(mover.position.z, 0.0);
    }

    #[test]
    fn test_empty_path_is_a_no_op() {
        let mut mover = Mover::new(Waypoint::new(3.0, 0.0, 4.0), 0.1);
        let mut path = Path::new();

        mover.advance(&mut path);

        assert_eq!(mover.position, Waypoint::new(3.0, 0.0, 4.0));
    }

    #[test]
    fn test_walks_a_full_leg() {
        let mut mover = Mover::new(Waypoint::new(0.0, 0.0, 0.0), 0.1);
        let mut path = Path::new();
        path.push(Waypoint::new(0.0, 0.0, 1.0));

        // Ten translate ticks, then the snap tick pops the waypoint
        for _ in 0..10 {
            mover.advance(&mut path);
        }
        assert_eq!(path.len(), 1);

        mover.advance(&mut path);
        assert!(path.is_empty());
        assert_eq!(mover.position.z, 1.0);
    }

    #[test]
    fn test_snap_adopts_waypoint_height() {
        // Paths live on the y = 0 plane, so snapping also flattens any y
        // offset the host left on the agent
        let mut mover = Mover::new(Waypoint::new(0.0, 0.5, 0.9996), 0.1);
        let mut path = Path::new();
        path.push(Waypoint::new(0.0, 0.0, 1.0));

        mover.advance(&mut path);

        assert_eq!(mover.position, Waypoint::new(0.0, 0.0, 1.0));
    }
}
