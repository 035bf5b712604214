//! Inventory - the 42-slot grid store
//!
//! Slots are stored in row-major order, so every scan (first empty slot,
//! first task match) walks `0-0, 0-1, ... 0-5, 1-0, ...` deterministically.
//! No slot is ever added or removed; only the item it holds changes.

use crate::core::error::{MergeError, Result};
use crate::core::types::{all_slot_keys, SlotKey, SLOT_COUNT};
use crate::grid::slot::Slot;
use crate::items::{registry, Category, ItemInstance, STARTING_GENERATORS};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Inventory {
    slots: Vec<Slot>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    /// A grid with every slot empty
    pub fn new() -> Self {
        Self {
            slots: all_slot_keys().map(Slot::empty).collect(),
        }
    }

    /// A grid with one instance of every generator at its starting slot
    pub fn with_starting_generators() -> Self {
        let mut inventory = Self::new();
        for (key, category) in STARTING_GENERATORS {
            if let Some(def) = registry().generator(category) {
                if let Some(idx) = key.index() {
                    inventory.slots[idx].item = Some(ItemInstance::new(def));
                }
            }
        }
        inventory
    }

    fn index_of(key: SlotKey) -> Result<usize> {
        key.index()
            .ok_or_else(|| MergeError::InvalidSlot(key.to_string()))
    }

    /// Get a slot by key
    pub fn get(&self, key: SlotKey) -> Result<&Slot> {
        Ok(&self.slots[Self::index_of(key)?])
    }

    /// Get a slot by its canonical `"row-col"` string
    pub fn slot(&self, key: &str) -> Result<&Slot> {
        self.get(key.parse()?)
    }

    pub fn item(&self, key: SlotKey) -> Result<Option<&ItemInstance>> {
        Ok(self.get(key)?.item.as_ref())
    }

    /// First empty slot in row-major order, `None` when the grid is full
    pub fn first_empty_slot(&self) -> Option<SlotKey> {
        self.slots.iter().find(|s| s.is_empty()).map(|s| s.key)
    }

    /// Put an item into an empty slot
    pub fn place(&mut self, key: SlotKey, item: ItemInstance) -> Result<()> {
        let idx = Self::index_of(key)?;
        let slot = &mut self.slots[idx];
        if slot.item.is_some() {
            return Err(MergeError::SlotOccupied(key));
        }
        tracing::debug!("Placed {} at {}", item.id, key);
        slot.item = Some(item);
        Ok(())
    }

    /// Empty a slot, returning whatever it held
    pub fn clear(&mut self, key: SlotKey) -> Result<Option<ItemInstance>> {
        let idx = Self::index_of(key)?;
        Ok(self.slots[idx].item.take())
    }

    /// Exchange the items of two slots; either side may be empty
    pub fn swap(&mut self, a: SlotKey, b: SlotKey) -> Result<()> {
        let ia = Self::index_of(a)?;
        let ib = Self::index_of(b)?;
        if ia == ib {
            return Ok(());
        }
        let item_a = self.slots[ia].item.take();
        let item_b = std::mem::replace(&mut self.slots[ib].item, item_a);
        self.slots[ia].item = item_b;
        tracing::debug!("Swapped {} <-> {}", a, b);
        Ok(())
    }

    /// First slot in row-major order holding a `(category, tier)` item
    pub fn find_first(&self, category: Category, tier: u8) -> Option<SlotKey> {
        self.slots
            .iter()
            .find(|s| s.item.as_ref().is_some_and(|i| i.matches(category, tier)))
            .map(|s| s.key)
    }

    /// All slots in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    /// Occupied slots in row-major order
    pub fn items(&self) -> impl Iterator<Item = (SlotKey, &ItemInstance)> {
        self.slots
            .iter()
            .filter_map(|s| s.item.as_ref().map(|i| (s.key, i)))
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied_count() == SLOT_COUNT
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}
