//! Laser burn timer

use serde::{Deserialize, Serialize};

/// Tracks how long the laser has been firing.
///
/// While active, the session emits one beam request per physics tick; the
/// actual raycast is host physics. Starting again mid-burn restarts the
/// clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaserTimer {
    active: bool,
    elapsed: f32,
    max_time: f32,
}

impl LaserTimer {
    /// Timer that burns for `max_time` seconds per activation
    pub fn new(max_time: f32) -> Self {
        Self {
            active: false,
            elapsed: 0.0,
            max_time,
        }
    }

    /// Begin (or restart) a burn
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.active = true;
    }

    /// Advance the clock by one logical frame
    pub fn tick(&mut self, dt: f32) {
        if self.active {
            self.elapsed += dt;
        }
        if self.elapsed >= self.max_time {
            self.active = false;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn max_time(&self) -> f32 {
        self.max_time
    }
}
