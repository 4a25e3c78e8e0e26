//! The player's fixed-slot item belt

use serde::{Deserialize, Serialize};

use crate::item::ItemKind;

/// Belt events, drained by the host for pickup/use feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeltEvent {
    /// Item landed in a slot
    ItemAdded { slot: usize, kind: ItemKind },
    /// Item taken from a slot
    ItemUsed { slot: usize, kind: ItemKind },
    /// No free slot; the item was dropped
    BeltFull { kind: ItemKind },
}

/// Fixed-capacity item storage with first-free-slot insertion.
///
/// Slots keep their index for the lifetime of the belt; using slot 2 never
/// shifts slot 3 down.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemBelt {
    /// None = empty slot
    slots: Vec<Option<ItemKind>>,
    owned: usize,
    #[serde(skip)]
    events: Vec<BeltEvent>,
}

impl ItemBelt {
    /// Create a belt with `capacity` empty slots
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            owned: 0,
            events: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots
    pub fn owned(&self) -> usize {
        self.owned
    }

    pub fn has_space(&self) -> bool {
        self.owned < self.slots.len()
    }

    /// Contents of a slot; None for empty or out-of-range slots
    pub fn slot(&self, index: usize) -> Option<ItemKind> {
        self.slots.get(index).copied().flatten()
    }

    pub fn slots(&self) -> &[Option<ItemKind>] {
        &self.slots
    }

    /// Put an item in the first free slot.
    ///
    /// Returns the slot it landed in, or None when the belt is full and the
    /// item is dropped.
    pub fn add(&mut self, kind: ItemKind) -> Option<usize> {
        match self.slots.iter().position(|slot| slot.is_none()) {
            Some(index) => {
                self.slots[index] = Some(kind);
                self.owned += 1;
                self.events.push(BeltEvent::ItemAdded { slot: index, kind });
                Some(index)
            }
            None => {
                self.events.push(BeltEvent::BeltFull { kind });
                None
            }
        }
    }

    /// Take the item out of a slot.
    ///
    /// Empty and out-of-range slots yield None and change nothing.
    pub fn use_slot(&mut self, index: usize) -> Option<ItemKind> {
        let kind = self.slots.get_mut(index)?.take()?;
        self.owned -= 1;
        self.events.push(BeltEvent::ItemUsed { slot: index, kind });
        Some(kind)
    }

    /// Take all queued belt events, oldest first
    pub fn drain_events(&mut self) -> Vec<BeltEvent> {
        self.events.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_free_slot_insertion() {
        let mut belt = ItemBelt::new(3);

        assert_eq!(belt.add(ItemKind::Laser), Some(0));
        assert_eq!(belt.add(ItemKind::Portal), Some(1));
        assert_eq!(belt.owned(), 2);
        assert!(belt.has_space());

        // Freeing slot 0 makes it the next target again
        assert_eq!(belt.use_slot(0), Some(ItemKind::Laser));
        assert_eq!(belt.add(ItemKind::WallBreaker), Some(0));
        assert_eq!(belt.slot(0), Some(ItemKind::WallBreaker));
        assert_eq!(belt.slot(1), Some(ItemKind::Portal));
    }

    #[test]
    fn test_full_belt_drops_the_item() {
        let mut belt = ItemBelt::new(2);
        belt.add(ItemKind::Laser);
        belt.add(ItemKind::Laser);

        assert!(!belt.has_space());
        assert_eq!(belt.add(ItemKind::Portal), None);
        assert_eq!(belt.owned(), 2);

        let events = belt.drain_events();
        assert_eq!(
            events.last(),
            Some(&BeltEvent::BeltFull {
                kind: ItemKind::Portal
            })
        );
    }

    #[test]
    fn test_using_empty_or_bad_slot_is_a_no_op() {
        let mut belt = ItemBelt::new(2);
        belt.add(ItemKind::Laser);

        assert_eq!(belt.use_slot(1), None);
        assert_eq!(belt.use_slot(7), None);
        assert_eq!(belt.owned(), 1);
    }

    #[test]
    fn test_use_does_not_shift_slots() {
        let mut belt = ItemBelt::new(3);
        belt.add(ItemKind::Laser);
        belt.add(ItemKind::Portal);
        belt.add(ItemKind::WallBreaker);

        belt.use_slot(1);

        assert_eq!(belt.slot(0), Some(ItemKind::Laser));
        assert_eq!(belt.slot(1), None);
        assert_eq!(belt.slot(2), Some(ItemKind::WallBreaker));
    }

    #[test]
    fn test_event_order() {
        let mut belt = ItemBelt::new(2);
        belt.add(ItemKind::Laser);
        belt.use_slot(0);

        let events = belt.drain_events();
        assert_eq!(
            events,
            vec![
                BeltEvent::ItemAdded {
                    slot: 0,
                    kind: ItemKind::Laser
                },
                BeltEvent::ItemUsed {
                    slot: 0,
                    kind: ItemKind::Laser
                },
            ]
        );
        assert!(belt.drain_events().is_empty());
    }
}
