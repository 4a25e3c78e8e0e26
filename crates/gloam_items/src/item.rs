//! Item kinds

use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything a player can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// Thrown; breaks a wall or destroys a ghost on contact
    WallBreaker,
    /// Entry portal; using it grants the exit half
    Portal,
    /// Exit portal, granted by using `Portal`
    PortalB,
    /// Timed forward beam
    Laser,
}

impl ItemKind {
    /// Item granted as a side effect of using this one
    pub fn follow_up(&self) -> Option<ItemKind> {
        match self {
            ItemKind::Portal => Some(ItemKind::PortalB),
            _ => None,
        }
    }

    /// Prefab the host instantiates when this item is deployed.
    ///
    /// The laser has no deployable object; the session emits beam requests
    /// while its timer runs instead.
    pub fn prefab(&self) -> Option<&'static str> {
        match self {
            ItemKind::WallBreaker => Some("wall_breaker"),
            ItemKind::Portal => Some("portal_a"),
            ItemKind::PortalB => Some("portal_b"),
            ItemKind::Laser => None,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemKind::WallBreaker => "WallBreaker",
            ItemKind::Portal => "Portal",
            ItemKind::PortalB => "PortalB",
            ItemKind::Laser => "Laser",
        };
        write!(f, "{}", name)
    }
}
