//! Narrator used when no LLM is configured

use crate::game::tasks::{Task, TaskSeed};
use crate::story::StoryTeller;

/// Line used whenever real narration is unavailable
pub const FALLBACK_FLAVOR: &str = "A chill crawls up your spine...";

/// Fixed narration, no new tasks
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineNarrator;

impl StoryTeller for OfflineNarrator {
    async fn completion_flavor(&self, _task: &Task) -> String {
        FALLBACK_FLAVOR.to_string()
    }

    async fn next_task_seed(&self, _level: u32) -> Option<TaskSeed> {
        None
    }
}
