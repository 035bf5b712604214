//! Click-driven selection state machine
//!
//! ```text
//! Idle --click empty--------> Idle
//! Idle --click generator----> Idle        (spawn)
//! Idle --click item---------> Selected(K)
//! Selected(S) --click S-----> Idle        (deselect)
//! Selected(S) --click K-----> Idle        (move / merge / swap S -> K)
//! ```
//!
//! A selection never survives a second click.

use crate::core::error::{MergeError, Result};
use crate::core::types::SlotKey;
use crate::game::merge::MergeOutcome;
use crate::game::state::GameState;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Selection {
    #[default]
    Idle,
    Selected(SlotKey),
}

/// What a single click did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ClickOutcome {
    /// Empty slot clicked with nothing selected
    Ignored,
    /// A generator produced an item into `slot`
    Spawned { slot: SlotKey },
    /// A generator was clicked but there was no room; already logged
    GridFull,
    Selected(SlotKey),
    Deselected,
    Resolved {
        source: SlotKey,
        target: SlotKey,
        outcome: MergeOutcome,
    },
}

#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    selection: Selection,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected(&self) -> Option<SlotKey> {
        match self.selection {
            Selection::Selected(key) => Some(key),
            Selection::Idle => None,
        }
    }

    /// Drop the selection if it points at `key`
    pub fn release(&mut self, key: SlotKey) {
        if self.selected() == Some(key) {
            self.selection = Selection::Idle;
        }
    }

    /// Handle a click on `key`
    ///
    /// Malformed keys fail before any state changes.
    pub fn click(&mut self, state: &mut GameState, key: SlotKey) -> Result<ClickOutcome> {
        // Some(is_generator) for an occupied slot
        let occupant = state.inventory.get(key)?.item.as_ref().map(|i| i.is_generator());

        match self.selection {
            Selection::Selected(source) if source == key => {
                self.selection = Selection::Idle;
                Ok(ClickOutcome::Deselected)
            }
            Selection::Selected(source) => {
                self.selection = Selection::Idle;
                // The selected item may have been handed in since it was picked
                if state.inventory.item(source)?.is_none() {
                    return Ok(ClickOutcome::Deselected);
                }
                let outcome = state.combine(source, key)?;
                Ok(ClickOutcome::Resolved {
                    source,
                    target: key,
                    outcome,
                })
            }
            Selection::Idle => match occupant {
                None => Ok(ClickOutcome::Ignored),
                Some(true) => match state.activate_generator(key) {
                    Ok(spawned) => Ok(ClickOutcome::Spawned { slot: spawned }),
                    Err(MergeError::GridFull) => Ok(ClickOutcome::GridFull),
                    Err(err) => Err(err),
                },
                Some(false) => {
                    self.selection = Selection::Selected(key);
                    Ok(ClickOutcome::Selected(key))
                }
            },
        }
    }

    /// Click by canonical `"row-col"` key
    pub fn click_str(&mut self, state: &mut GameState, key: &str) -> Result<ClickOutcome> {
        self.click(state, key.parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::items::{registry, Category, ItemInstance};

    fn setup() -> (InteractionController, GameState) {
        (
            InteractionController::new(),
            GameState::new(GameConfig::default().with_seed(3)),
        )
    }

    #[test]
    fn test_click_empty_is_ignored() {
        let (mut ctl, mut state) = setup();
        let outcome = ctl.click(&mut state, SlotKey::new(5, 5)).unwrap();
        assert_eq!(outcome, ClickOutcome::Ignored);
        assert_eq!(ctl.selection(), Selection::Idle);
    }

    #[test]
    fn test_click_generator_spawns_and_stays_idle() {
        let (mut ctl, mut state) = setup();
        let outcome = ctl.click(&mut state, SlotKey::new(0, 0)).unwrap();
        assert_eq!(outcome, ClickOutcome::Spawned { slot: SlotKey::new(1, 1) });
        assert_eq!(ctl.selection(), Selection::Idle);
    }

    #[test]
    fn test_select_then_deselect() {
        let (mut ctl, mut state) = setup();
        ctl.click(&mut state, SlotKey::new(0, 0)).unwrap();
        let key = SlotKey::new(1, 1);
        assert_eq!(ctl.click(&mut state, key).unwrap(), ClickOutcome::Selected(key));
        assert_eq!(ctl.selected(), Some(key));
        assert_eq!(ctl.click(&mut state, key).unwrap(), ClickOutcome::Deselected);
        assert_eq!(ctl.selection(), Selection::Idle);
    }

    #[test]
    fn test_second_click_always_clears_selection() {
        let (mut ctl, mut state) = setup();
        let def = registry().definition(Category::Clue, 1).unwrap();
        state.inventory.place(SlotKey::new(3, 3), ItemInstance::new(def)).unwrap();
        ctl.click(&mut state, SlotKey::new(3, 3)).unwrap();
        let outcome = ctl.click(&mut state, SlotKey::new(6, 0)).unwrap();
        assert!(matches!(
            outcome,
            ClickOutcome::Resolved { outcome: MergeOutcome::Moved, .. }
        ));
        assert_eq!(ctl.selection(), Selection::Idle);
    }

    #[test]
    fn test_emptied_selection_clears_quietly() {
        let (mut ctl, mut state) = setup();
        let def = registry().definition(Category::Clue, 1).unwrap();
        state.inventory.place(SlotKey::new(3, 3), ItemInstance::new(def)).unwrap();
        ctl.click(&mut state, SlotKey::new(3, 3)).unwrap();
        state.inventory.clear(SlotKey::new(3, 3)).unwrap();

        let before = state.inventory.occupied_count();
        assert_eq!(ctl.click(&mut state, SlotKey::new(5, 5)).unwrap(), ClickOutcome::Deselected);
        assert_eq!(ctl.selection(), Selection::Idle);
        assert_eq!(state.inventory.occupied_count(), before);
    }

    #[test]
    fn test_release_only_matching_slot() {
        let (mut ctl, mut state) = setup();
        let def = registry().definition(Category::Clue, 1).unwrap();
        state.inventory.place(SlotKey::new(3, 3), ItemInstance::new(def)).unwrap();
        ctl.click(&mut state, SlotKey::new(3, 3)).unwrap();
        ctl.release(SlotKey::new(4, 4));
        assert_eq!(ctl.selected(), Some(SlotKey::new(3, 3)));
        ctl.release(SlotKey::new(3, 3));
        assert_eq!(ctl.selection(), Selection::Idle);
    }

    #[test]
    fn test_invalid_key_keeps_selection() {
        let (mut ctl, mut state) = setup();
        let def = registry().definition(Category::Clue, 1).unwrap();
        state.inventory.place(SlotKey::new(3, 3), ItemInstance::new(def)).unwrap();
        ctl.click(&mut state, SlotKey::new(3, 3)).unwrap();
        assert!(ctl.click_str(&mut state, "9-9").is_err());
        assert_eq!(ctl.selected(), Some(SlotKey::new(3, 3)));
    }
}
