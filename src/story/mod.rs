//! Story collaborators - narrative text and new task seeds
//!
//! Gameplay never waits on these to stay consistent: the grid and reward
//! changes of a completed task are already applied before any text is
//! requested, and nothing is rolled back when generation fails.

pub mod narrator;

pub use narrator::{OfflineNarrator, FALLBACK_FLAVOR};

use crate::game::tasks::{Task, TaskSeed};

/// Source of narrative text for completed and upcoming tasks
#[allow(async_fn_in_trait)]
pub trait StoryTeller {
    /// One line of narration for a completed task; never fails
    async fn completion_flavor(&self, task: &Task) -> String;

    /// Seed for the next task, or `None` when generation is unavailable
    async fn next_task_seed(&self, level: u32) -> Option<TaskSeed>;
}
