//! The hunter's kit: a fixed row of item slots

use serde::{Deserialize, Serialize};

use crate::errors::TradeError;
use crate::object::Item;
use crate::{KIT_CAPACITY, UPGRADED_KIT_CAPACITY};

/// Bounded inventory holding each item at most once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kit {
    slots: Vec<Option<Item>>,
}

impl Default for Kit {
    fn default() -> Self {
        Self::new()
    }
}

impl Kit {
    /// An empty kit with the standard number of slots
    pub fn new() -> Self {
        Self {
            slots: vec![None; KIT_CAPACITY],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.empty_slot().is_none()
    }

    pub fn contains(&self, item: Item) -> bool {
        self.position(item).is_some()
    }

    /// Slot index holding `item`
    pub fn position(&self, item: Item) -> Option<usize> {
        self.slots.iter().position(|slot| *slot == Some(item))
    }

    /// Raw slot view, empty slots included
    pub fn slots(&self) -> &[Option<Item>] {
        &self.slots
    }

    /// Occupied slots in slot order
    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// Put `item` in the first empty slot
    pub fn insert(&mut self, item: Item) -> Result<usize, TradeError> {
        if self.contains(item) {
            return Err(TradeError::AlreadyOwned { item });
        }
        let idx = self.empty_slot().ok_or(TradeError::KitFull { item })?;
        self.slots[idx] = Some(item);
        Ok(idx)
    }

    /// Empty the slot holding `item`. Returns false if it wasn't there.
    pub fn remove(&mut self, item: Item) -> bool {
        match self.position(item) {
            Some(idx) => {
                self.slots[idx] = None;
                true
            }
            None => false,
        }
    }

    /// Grow to the upgraded capacity, keeping every item in its slot.
    ///
    /// Returns false if the kit was already upgraded.
    pub fn upgrade(&mut self) -> bool {
        if self.slots.len() >= UPGRADED_KIT_CAPACITY {
            return false;
        }
        self.slots.resize(UPGRADED_KIT_CAPACITY, None);
        true
    }

    fn empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_new_kit_is_empty() {
        let kit = Kit::new();
        assert_eq!(kit.capacity(), KIT_CAPACITY);
        assert!(kit.is_empty());
        assert_eq!(kit.len(), 0);
    }

    #[test]
    fn test_insert_uses_first_empty_slot() {
        let mut kit = Kit::new();
        assert_eq!(kit.insert(Item::Rope), Ok(0));
        assert_eq!(kit.insert(Item::Boat), Ok(1));
        assert!(kit.remove(Item::Rope));
        assert_eq!(kit.insert(Item::Water), Ok(0));
        assert_eq!(kit.items().collect::<Vec<_>>(), vec![Item::Water, Item::Boat]);
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut kit = Kit::new();
        kit.insert(Item::Shovel).unwrap();
        assert_eq!(
            kit.insert(Item::Shovel),
            Err(TradeError::AlreadyOwned { item: Item::Shovel })
        );
        assert_eq!(kit.len(), 1);
    }

    #[test]
    fn test_full_kit_rejects_insert() {
        let mut kit = Kit::new();
        for item in Item::iter().take(KIT_CAPACITY) {
            kit.insert(item).unwrap();
        }
        assert!(kit.is_full());
        assert_eq!(
            kit.insert(Item::Sword),
            Err(TradeError::KitFull { item: Item::Sword })
        );
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut kit = Kit::new();
        kit.insert(Item::Horse).unwrap();
        assert!(!kit.remove(Item::Boat));
        assert_eq!(kit.len(), 1);
    }

    #[test]
    fn test_upgrade_keeps_contents() {
        let mut kit = Kit::new();
        for item in Item::iter().take(KIT_CAPACITY) {
            kit.insert(item).unwrap();
        }
        let before: Vec<_> = kit.items().collect();

        assert!(kit.upgrade());
        assert_eq!(kit.capacity(), UPGRADED_KIT_CAPACITY);
        assert_eq!(kit.items().collect::<Vec<_>>(), before);
        assert_eq!(kit.insert(Item::Sword), Ok(KIT_CAPACITY));

        assert!(!kit.upgrade());
        assert_eq!(kit.capacity(), UPGRADED_KIT_CAPACITY);
    }
}
