//! Integration tests for the board rules
//!
//! These tests drive the game through clicks the way a player would:
//! - Generator spawning into the first free slot (and refusing when full)
//! - Move, merge and swap resolution between two clicked slots
//! - Selection lifecycle (select, deselect, second click always clears)
//! - Chain registry shape

use haunt_merge::core::config::GameConfig;
use haunt_merge::core::error::MergeError;
use haunt_merge::core::types::{SlotKey, SLOT_COUNT};
use haunt_merge::game::{ClickOutcome, GameSession, MergeOutcome, Selection};
use haunt_merge::items::{registry, Category, ItemInstance, CHAIN_LENGTH};
use haunt_merge::story::OfflineNarrator;

fn session() -> GameSession<OfflineNarrator> {
    GameSession::new(GameConfig::default().with_seed(7), OfflineNarrator)
}

fn put(session: &mut GameSession<OfflineNarrator>, key: &str, category: Category, tier: u8) {
    let def = registry().definition(category, tier).unwrap();
    session
        .state
        .inventory
        .place(key.parse().unwrap(), ItemInstance::new(def))
        .unwrap();
}

fn at(session: &GameSession<OfflineNarrator>, key: &str) -> Option<ItemInstance> {
    session.state.inventory.item(key.parse().unwrap()).unwrap().cloned()
}

/// Snapshot of (slot, instance id) pairs for comparing boards
fn snapshot(session: &GameSession<OfflineNarrator>) -> Vec<(SlotKey, String)> {
    session
        .state
        .inventory
        .items()
        .map(|(key, item)| (key, item.id.as_str().to_string()))
        .collect()
}

// ============================================================================
// Merge Resolution
// ============================================================================

#[test]
fn test_equal_items_merge_into_next_tier() {
    let mut s = session();
    put(&mut s, "3-0", Category::Clue, 1);
    put(&mut s, "3-1", Category::Clue, 1);
    let before_a = at(&s, "3-0").unwrap().id;
    let before_b = at(&s, "3-1").unwrap().id;

    assert_eq!(s.click_str("3-0").unwrap(), ClickOutcome::Selected(SlotKey::new(3, 0)));
    let outcome = s.click_str("3-1").unwrap();
    assert!(matches!(
        outcome,
        ClickOutcome::Resolved { outcome: MergeOutcome::Merged(_), .. }
    ));

    assert!(at(&s, "3-0").is_none());
    let merged = at(&s, "3-1").unwrap();
    assert_eq!(merged.category(), Category::Clue);
    assert_eq!(merged.tier(), 2);
    assert_ne!(merged.id, before_a);
    assert_ne!(merged.id, before_b);
    assert_eq!(s.state.progress.exp, 5);
}

#[test]
fn test_max_tier_items_swap() {
    let mut s = session();
    put(&mut s, "4-0", Category::Occult, 7);
    put(&mut s, "4-1", Category::Occult, 7);
    let a = at(&s, "4-0").unwrap().id;
    let b = at(&s, "4-1").unwrap().id;

    s.click_str("4-0").unwrap();
    let outcome = s.click_str("4-1").unwrap();
    assert!(matches!(
        outcome,
        ClickOutcome::Resolved { outcome: MergeOutcome::Swapped, .. }
    ));
    assert_eq!(at(&s, "4-0").unwrap().id, b);
    assert_eq!(at(&s, "4-1").unwrap().id, a);
    assert_eq!(s.state.progress.exp, 0);
}

#[test]
fn test_cross_category_swap_keeps_count() {
    let mut s = session();
    put(&mut s, "5-0", Category::Flora, 3);
    put(&mut s, "5-1", Category::Media, 3);
    let count = s.state.inventory.occupied_count();

    s.click_str("5-0").unwrap();
    s.click_str("5-1").unwrap();
    assert_eq!(at(&s, "5-0").unwrap().category(), Category::Media);
    assert_eq!(at(&s, "5-1").unwrap().category(), Category::Flora);
    assert_eq!(s.state.inventory.occupied_count(), count);
}

#[test]
fn test_move_onto_empty_slot() {
    let mut s = session();
    put(&mut s, "2-2", Category::Anatomy, 5);
    let id = at(&s, "2-2").unwrap().id;

    s.click_str("2-2").unwrap();
    let outcome = s.click_str("6-5").unwrap();
    assert!(matches!(
        outcome,
        ClickOutcome::Resolved { outcome: MergeOutcome::Moved, .. }
    ));
    assert!(at(&s, "2-2").is_none());
    assert_eq!(at(&s, "6-5").unwrap().id, id);
}

#[test]
fn test_generators_never_merge() {
    let mut s = session();
    // Two archives side by side still swap
    let archive = registry().generator(Category::GeneratorArchive).unwrap();
    s.state
        .inventory
        .place(SlotKey::new(6, 0), ItemInstance::new(archive))
        .unwrap();

    // Clicking a generator spawns instead of selecting it, so generator
    // sources go straight to the resolver.
    let outcome = s.state.combine(SlotKey::new(0, 0), SlotKey::new(6, 0)).unwrap();
    assert_eq!(outcome, MergeOutcome::Swapped);
    assert!(at(&s, "0-0").unwrap().is_generator());
    assert!(at(&s, "6-0").unwrap().is_generator());

    put(&mut s, "6-1", Category::Clue, 1);
    let outcome = s.state.combine(SlotKey::new(6, 1), SlotKey::new(0, 1)).unwrap();
    assert_eq!(outcome, MergeOutcome::Swapped);
    assert_eq!(at(&s, "0-1").unwrap().category(), Category::Clue);
    assert_eq!(s.state.progress.exp, 0);
}

// ============================================================================
// Generator Spawning
// ============================================================================

#[test]
fn test_spawn_uses_first_empty_slot() {
    let mut s = session();
    assert_eq!(
        s.click_str("0-3").unwrap(),
        ClickOutcome::Spawned { slot: SlotKey::new(1, 1) }
    );
    assert_eq!(
        s.click_str("0-3").unwrap(),
        ClickOutcome::Spawned { slot: SlotKey::new(1, 2) }
    );
    let first = at(&s, "1-1").unwrap();
    let second = at(&s, "1-2").unwrap();
    assert_eq!(first.category(), Category::Flora);
    assert_eq!(first.tier(), 1);
    assert_ne!(first.id, second.id);
    assert_eq!(s.controller.selection(), Selection::Idle);
}

#[test]
fn test_spawn_into_full_grid_changes_nothing() {
    let mut s = session();
    let filler = registry().definition(Category::Alchemy, 2).unwrap();
    while let Some(key) = s.state.inventory.first_empty_slot() {
        s.state.inventory.place(key, ItemInstance::new(filler)).unwrap();
    }
    assert_eq!(s.state.inventory.occupied_count(), SLOT_COUNT);
    let before = snapshot(&s);

    assert_eq!(s.click_str("0-0").unwrap(), ClickOutcome::GridFull);
    assert_eq!(snapshot(&s), before);
    assert_eq!(
        s.state.log.latest().unwrap().message,
        MergeError::GridFull.to_string()
    );
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_deselect_leaves_board_untouched() {
    let mut s = session();
    put(&mut s, "3-3", Category::Survival, 2);
    let before = snapshot(&s);

    s.click_str("3-3").unwrap();
    assert_eq!(s.click_str("3-3").unwrap(), ClickOutcome::Deselected);
    assert_eq!(s.controller.selection(), Selection::Idle);
    assert_eq!(snapshot(&s), before);
}

#[test]
fn test_empty_click_when_idle_is_ignored() {
    let mut s = session();
    let before = snapshot(&s);
    assert_eq!(s.click_str("6-5").unwrap(), ClickOutcome::Ignored);
    assert_eq!(snapshot(&s), before);
}

#[test]
fn test_malformed_keys_are_rejected() {
    let mut s = session();
    for key in ["7-0", "0-6", "x-1", "11", ""] {
        assert!(
            matches!(s.click_str(key), Err(MergeError::InvalidSlot(_))),
            "{key} should be rejected"
        );
    }
}

// ============================================================================
// Chain Registry
// ============================================================================

#[test]
fn test_every_chain_has_seven_ordered_tiers() {
    for category in Category::COLLECTIBLES {
        let chain = registry().chain_for(category).unwrap();
        assert_eq!(chain.len(), CHAIN_LENGTH);
        for (i, def) in chain.iter().enumerate() {
            assert_eq!(def.tier as usize, i + 1);
            assert_eq!(def.category, category);
        }
    }
}

#[test]
fn test_every_generator_spawns_tier_one_of_its_chain() {
    for generator in Category::GENERATORS {
        let output = generator.spawns().unwrap();
        assert!(!output.is_generator());
        assert!(registry().definition(output, 1).is_some());
        assert!(registry().generator(generator).is_some());
    }
}
