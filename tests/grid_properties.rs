//! Property tests for the board
//!
//! Random click sequences, with task hand-ins mixed in, must never
//! duplicate or lose an instance except through a spawn (+1), a merge (-1)
//! or a completed task (-1), and generators stay put in number.

use haunt_merge::core::config::GameConfig;
use haunt_merge::core::types::{SlotKey, GRID_COLS, GRID_ROWS};
use haunt_merge::game::{ClickOutcome, CompletionOutcome, GameSession, MergeOutcome};
use haunt_merge::story::OfflineNarrator;
use proptest::prelude::*;
use std::collections::HashSet;
use tokio::runtime::Runtime;

#[derive(Debug, Clone)]
enum Step {
    Click(u8, u8),
    HandIn(usize),
}

fn click_strategy() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((0..GRID_ROWS, 0..GRID_COLS), 1..200)
}

fn step_strategy() -> impl Strategy<Value = Vec<Step>> {
    let step = prop_oneof![
        4 => (0..GRID_ROWS, 0..GRID_COLS).prop_map(|(r, c)| Step::Click(r, c)),
        1 => (0usize..3).prop_map(Step::HandIn),
    ];
    prop::collection::vec(step, 1..200)
}

fn assert_board_sound(session: &GameSession<OfflineNarrator>) -> Result<(), TestCaseError> {
    let count = session.state.inventory.occupied_count();
    let ids: HashSet<String> = session
        .state
        .inventory
        .items()
        .map(|(_, item)| item.id.as_str().to_string())
        .collect();
    prop_assert_eq!(ids.len(), count);

    let generators = session
        .state
        .inventory
        .items()
        .filter(|(_, item)| item.is_generator())
        .count();
    prop_assert_eq!(generators, 7);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn clicks_and_hand_ins_conserve_instances(steps in step_strategy(), seed in any::<u64>()) {
        let rt = Runtime::new().unwrap();
        let mut session = GameSession::new(GameConfig::default().with_seed(seed), OfflineNarrator);

        for step in steps {
            let before = session.state.inventory.occupied_count();
            let expected = match step {
                Step::Click(row, col) => match session.click(SlotKey::new(row, col)).unwrap() {
                    ClickOutcome::Spawned { .. } => before + 1,
                    ClickOutcome::Resolved { outcome: MergeOutcome::Merged(_), .. } => before - 1,
                    _ => before,
                },
                Step::HandIn(index) => {
                    if index >= session.state.tasks.len() {
                        continue;
                    }
                    match rt.block_on(session.complete_task_at(index)).unwrap() {
                        CompletionOutcome::Completed { .. } => before - 1,
                        CompletionOutcome::MissingRequirement => before,
                    }
                }
            };
            prop_assert_eq!(session.state.inventory.occupied_count(), expected);
            assert_board_sound(&session)?;
        }
    }

    #[test]
    fn merged_items_are_one_tier_up(clicks in click_strategy()) {
        let mut session = GameSession::new(GameConfig::default().with_seed(1), OfflineNarrator);

        for (row, col) in clicks {
            let key = SlotKey::new(row, col);
            let target_before = session.state.inventory.item(key).unwrap().cloned();
            if let ClickOutcome::Resolved { outcome: MergeOutcome::Merged(item), target, .. } =
                session.click(key).unwrap()
            {
                let consumed = target_before.unwrap();
                prop_assert_eq!(target, key);
                prop_assert_eq!(item.category(), consumed.category());
                prop_assert_eq!(item.tier(), consumed.tier() + 1);
            }
        }
    }
}
