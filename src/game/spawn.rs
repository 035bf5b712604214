//! Generator spawning

use crate::core::error::{MergeError, Result};
use crate::core::types::SlotKey;
use crate::grid::Inventory;
use crate::items::{registry, ItemInstance};

/// Fresh tier-1 instance of whatever a generator produces
///
/// `None` when the item is not a generator.
pub fn spawn_from(generator: &ItemInstance) -> Option<ItemInstance> {
    let output = generator.category().spawns()?;
    registry().definition(output, 1).map(ItemInstance::new)
}

/// Activate the generator at `key`, placing its output in the first empty slot
///
/// Fails with `GridFull` and leaves the grid untouched when there is no
/// room. The generator itself is never consumed.
pub fn activate_generator(inventory: &mut Inventory, key: SlotKey) -> Result<(SlotKey, ItemInstance)> {
    let generator = inventory.item(key)?.ok_or(MergeError::EmptySlot(key))?;
    let spawned = spawn_from(generator).ok_or(MergeError::NotAGenerator(key))?;

    let empty = inventory.first_empty_slot().ok_or(MergeError::GridFull)?;
    tracing::info!("{} produced {} at {}", generator.name(), spawned.name(), empty);
    inventory.place(empty, spawned.clone())?;
    Ok((empty, spawned))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::all_slot_keys;
    use crate::items::Category;

    #[test]
    fn test_every_generator_spawns_its_tier_one() {
        for generator_cat in Category::GENERATORS {
            let gen = ItemInstance::new(registry().generator(generator_cat).unwrap());
            let spawned = spawn_from(&gen).unwrap();
            assert_eq!(Some(spawned.category()), generator_cat.spawns());
            assert_eq!(spawned.tier(), 1);
        }
    }

    #[test]
    fn test_non_generator_spawns_nothing() {
        let item = ItemInstance::new(registry().definition(Category::Clue, 1).unwrap());
        assert!(spawn_from(&item).is_none());
    }

    #[test]
    fn test_activate_places_in_first_empty() {
        let mut inv = Inventory::with_starting_generators();
        let (key, spawned) = activate_generator(&mut inv, SlotKey::new(0, 1)).unwrap();
        assert_eq!(key, SlotKey::new(1, 1));
        assert_eq!(spawned.category(), Category::Occult);
        assert_eq!(inv.occupied_count(), 8);
        // generator stays put
        assert!(inv.item(SlotKey::new(0, 1)).unwrap().unwrap().is_generator());
    }

    #[test]
    fn test_activate_on_full_grid_changes_nothing() {
        let mut inv = Inventory::with_starting_generators();
        let filler = registry().definition(Category::Media, 2).unwrap();
        for key in all_slot_keys() {
            if inv.get(key).unwrap().is_empty() {
                inv.place(key, ItemInstance::new(filler)).unwrap();
            }
        }
        let before: Vec<_> = inv.items().map(|(k, i)| (k, i.id.clone())).collect();

        let result = activate_generator(&mut inv, SlotKey::new(0, 0));
        assert!(matches!(result, Err(MergeError::GridFull)));

        let after: Vec<_> = inv.items().map(|(k, i)| (k, i.id.clone())).collect();
        assert_eq!(before, after);
    }
}
