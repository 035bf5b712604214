//! The single owned game aggregate
//!
//! Inventory, task list, progress counters and the message log live
//! together and are only ever mutated through `&mut GameState`, one
//! operation at a time.

use crate::core::config::GameConfig;
use crate::core::error::{MergeError, Result};
use crate::core::types::SlotKey;
use crate::game::log::GameLog;
use crate::game::merge::{self, MergeOutcome};
use crate::game::progress::GameProgress;
use crate::game::spawn;
use crate::game::tasks::{initial_tasks, Task, TaskSeed};
use crate::grid::Inventory;
use crate::items::ItemInstance;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Result of handing an item over for a task
#[derive(Debug, Clone)]
pub struct Fulfilment {
    pub task: Task,
    pub slot: SlotKey,
    pub consumed: ItemInstance,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub inventory: Inventory,
    pub tasks: Vec<Task>,
    pub progress: GameProgress,
    pub log: GameLog,
    pub completed_tasks: u32,
    config: GameConfig,
    rng: ChaCha8Rng,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameState {
    /// Fresh game: generators in place, three starting tasks
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            inventory: Inventory::with_starting_generators(),
            tasks: initial_tasks(),
            progress: GameProgress::new(),
            log: GameLog::with_opening(config.log_capacity),
            completed_tasks: 0,
            config,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Record a recoverable failure in the player log
    fn report(&mut self, err: &MergeError) {
        if err.is_recoverable() {
            self.log.system(err.to_string());
        }
    }

    /// Spawn from the generator at `key` into the first empty slot
    pub fn activate_generator(&mut self, key: SlotKey) -> Result<SlotKey> {
        match spawn::activate_generator(&mut self.inventory, key) {
            Ok((slot, _)) => Ok(slot),
            Err(err) => {
                self.report(&err);
                Err(err)
            }
        }
    }

    /// Play the item at `source` onto `target`: move, merge or swap
    pub fn combine(&mut self, source: SlotKey, target: SlotKey) -> Result<MergeOutcome> {
        let outcome = merge::resolve(&mut self.inventory, source, target)?;
        if matches!(outcome, MergeOutcome::Merged(_)) {
            self.progress.add_exp(self.config.merge_exp_reward);
        }
        Ok(outcome)
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// Is there an item on the grid that satisfies this task?
    pub fn can_complete(&self, task_id: &str) -> bool {
        self.task(task_id).is_some_and(|t| {
            self.inventory
                .find_first(t.required_category, t.required_tier)
                .is_some()
        })
    }

    /// Consume the first matching item and pay out the task, all at once
    ///
    /// Either every effect lands (item cleared, reward granted, task
    /// removed, counter bumped) or none does.
    pub fn fulfill_task(&mut self, task_id: &str) -> Result<Fulfilment> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == task_id)
            .ok_or_else(|| MergeError::TaskNotFound(task_id.to_string()))?;

        let task = &self.tasks[idx];
        let Some(slot) = self
            .inventory
            .find_first(task.required_category, task.required_tier)
        else {
            let err = MergeError::MissingRequirement {
                category: task.required_category,
                tier: task.required_tier,
                item_name: task.required_item_name.clone(),
            };
            self.report(&err);
            return Err(err);
        };

        let consumed = self
            .inventory
            .clear(slot)?
            .ok_or(MergeError::EmptySlot(slot))?;
        let task = self.tasks.remove(idx);
        self.progress.grant(task.reward_stars, task.reward_exp);
        self.completed_tasks += 1;

        tracing::info!(
            "Completed task '{}' with {} from {} (+{} stars, +{} exp)",
            task.description,
            consumed.name(),
            slot,
            task.reward_stars,
            task.reward_exp
        );

        Ok(Fulfilment {
            task,
            slot,
            consumed,
        })
    }

    /// Has the active list shrunk enough to ask for another task?
    pub fn needs_new_task(&self) -> bool {
        self.tasks.len() <= self.config.task_refill_threshold
    }

    /// Turn a generated seed into a task and append it
    pub fn add_generated_task(&mut self, seed: TaskSeed) -> Option<&Task> {
        let task = Task::generated(seed, &mut self.rng, &self.config)?;
        tracing::info!(
            "New task '{}' needs tier {} {}",
            task.description,
            task.required_tier,
            task.required_item_name
        );
        self.tasks.push(task);
        self.tasks.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{registry, Category};

    fn seeded() -> GameState {
        GameState::new(GameConfig::default().with_seed(42))
    }

    fn put(state: &mut GameState, key: SlotKey, category: Category, tier: u8) {
        let def = registry().definition(category, tier).unwrap();
        state.inventory.place(key, ItemInstance::new(def)).unwrap();
    }

    #[test]
    fn test_new_game() {
        let state = seeded();
        assert_eq!(state.inventory.occupied_count(), 7);
        assert_eq!(state.tasks.len(), 3);
        assert_eq!(state.progress.level, 1);
        assert_eq!(state.log.len(), 1);
    }

    #[test]
    fn test_merge_grants_exp() {
        let mut state = seeded();
        put(&mut state, SlotKey::new(2, 0), Category::Clue, 1);
        put(&mut state, SlotKey::new(2, 1), Category::Clue, 1);
        let outcome = state.combine(SlotKey::new(2, 0), SlotKey::new(2, 1)).unwrap();
        assert!(matches!(outcome, MergeOutcome::Merged(_)));
        assert_eq!(state.progress.exp, 5);
    }

    #[test]
    fn test_swap_grants_nothing() {
        let mut state = seeded();
        put(&mut state, SlotKey::new(2, 0), Category::Clue, 1);
        put(&mut state, SlotKey::new(2, 1), Category::Clue, 2);
        state.combine(SlotKey::new(2, 0), SlotKey::new(2, 1)).unwrap();
        assert_eq!(state.progress.exp, 0);
    }

    #[test]
    fn test_fulfill_missing_logs_and_changes_nothing() {
        let mut state = seeded();
        let result = state.fulfill_task("t1");
        assert!(matches!(result, Err(MergeError::MissingRequirement { tier: 1, .. })));
        assert_eq!(state.tasks.len(), 3);
        assert_eq!(state.progress.stars, 0);
        assert!(state.log.latest().unwrap().message.contains("Dust Bunnies"));
    }

    #[test]
    fn test_fulfill_unknown_task() {
        let mut state = seeded();
        assert!(matches!(state.fulfill_task("nope"), Err(MergeError::TaskNotFound(_))));
    }

    #[test]
    fn test_fulfill_consumes_and_rewards() {
        let mut state = seeded();
        put(&mut state, SlotKey::new(4, 4), Category::Clue, 1);
        assert!(state.can_complete("t1"));
        let fulfilment = state.fulfill_task("t1").unwrap();
        assert_eq!(fulfilment.slot, SlotKey::new(4, 4));
        assert_eq!(state.progress.stars, 1);
        assert_eq!(state.progress.exp, 10);
        assert_eq!(state.completed_tasks, 1);
        assert!(state.task("t1").is_none());
        assert!(state.inventory.get(SlotKey::new(4, 4)).unwrap().is_empty());
    }

    #[test]
    fn test_refill_threshold() {
        let mut state = seeded();
        assert!(state.needs_new_task());
        for i in 0..2 {
            state.add_generated_task(TaskSeed::new(format!("Task {}", i), None));
        }
        assert_eq!(state.tasks.len(), 5);
        assert!(!state.needs_new_task());
    }

    #[test]
    fn test_grid_full_is_logged() {
        let mut state = seeded();
        let filler = registry().definition(Category::Anatomy, 3).unwrap();
        while let Some(key) = state.inventory.first_empty_slot() {
            state.inventory.place(key, ItemInstance::new(filler)).unwrap();
        }
        let result = state.activate_generator(SlotKey::new(0, 0));
        assert!(matches!(result, Err(MergeError::GridFull)));
        assert_eq!(state.log.latest().unwrap().message, MergeError::GridFull.to_string());
    }
}
