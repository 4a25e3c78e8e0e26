//! Player State
//!
//! The player is host-driven: the engine moves the body and reports cell
//! entries and button presses. This module keeps the scripted side in one
//! place: the item belt, the laser timer, pellet energy, and the
//! one-deployable-at-a-time guard.

use gloam_items::{ItemBelt, ItemKind, LaserTimer};
use gloam_nav::{Cell, Waypoint};

use crate::config::PlayerConfig;

/// Scripted player state
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// Grid cell the player currently occupies
    pub cell: Cell,

    /// Unit facing on the maze plane, used to aim laser beams
    pub facing: Waypoint,

    belt: ItemBelt,
    laser: LaserTimer,
    energy: i32,
    is_using_item: bool,
}

impl PlayerState {
    /// The starting kit is a single laser
    pub fn new(config: &PlayerConfig, spawn: Cell) -> Self {
        let mut belt = ItemBelt::new(config.belt_capacity);
        belt.add(ItemKind::Laser);
        Self {
            cell: spawn,
            facing: Waypoint::new(0.0, 0.0, 1.0),
            belt,
            laser: LaserTimer::new(config.laser_max_time),
            energy: 0,
            is_using_item: false,
        }
    }

    /// Add a pickup to the belt. Returns the slot it landed in; a full
    /// belt drops the pickup silently.
    pub fn grant(&mut self, kind: ItemKind) -> Option<usize> {
        self.belt.add(kind)
    }

    /// Deploy the item in `slot` and return its kind.
    ///
    /// Empty slots are no-ops, and so is every press made while a wall
    /// breaker is still in flight. Deploying a portal grants its exit
    /// half on the spot; deploying the laser starts the beam timer.
    pub fn use_item(&mut self, slot: usize) -> Option<ItemKind> {
        if self.is_using_item {
            return None;
        }
        let kind = self.belt.use_slot(slot)?;
        if let Some(follow_up) = kind.follow_up() {
            self.belt.add(follow_up);
        }
        match kind {
            ItemKind::Laser => self.laser.start(),
            ItemKind::WallBreaker => self.is_using_item = true,
            _ => {}
        }
        Some(kind)
    }

    /// Advance the laser timer by one logical tick
    pub fn tick(&mut self, dt: f32) {
        self.laser.tick(dt);
    }

    pub fn add_energy(&mut self, amount: i32) {
        self.energy += amount;
    }

    pub fn energy(&self) -> i32 {
        self.energy
    }

    pub fn belt(&self) -> &ItemBelt {
        &self.belt
    }

    pub fn belt_mut(&mut self) -> &mut ItemBelt {
        &mut self.belt
    }

    pub fn laser(&self) -> &LaserTimer {
        &self.laser
    }

    /// True while a deployed wall breaker has not resolved yet
    pub fn is_using_item(&self) -> bool {
        self.is_using_item
    }

    /// Called once the in-flight wall breaker hit something
    pub fn clear_using_item(&mut self) {
        self.is_using_item = false;
    }
}
