//! Gloam Items - Player Items
//!
//! This crate holds the item rules: the belt, the laser timer, and what a
//! wall breaker does on contact.
//!
//! # Example
//!
//! ```ignore
//! use gloam_items::prelude::*;
//!
//! let mut belt = ItemBelt::new(8);
//! belt.add(ItemKind::Laser);
//! if let Some(kind) = belt.use_slot(0) {
//!     println!("deployed {}", kind);
//! }
//! ```

pub mod belt;
pub mod breaker;
pub mod item;
pub mod laser;

pub mod prelude {
    pub use crate::belt::{BeltEvent, ItemBelt};
    pub use crate::breaker::{BreakerHit, BreakerOutcome};
    pub use crate::item::ItemKind;
    pub use crate::laser::LaserTimer;
}

pub use prelude::*;
