//! A running game: state, click controller and the story collaborator

use crate::core::config::GameConfig;
use crate::core::error::{MergeError, Result};
use crate::core::types::SlotKey;
use crate::game::selection::{ClickOutcome, InteractionController};
use crate::game::state::GameState;
use crate::game::tasks::Task;
use crate::story::StoryTeller;

/// What happened when the player tried to hand in a task
#[derive(Debug, Clone)]
pub enum CompletionOutcome {
    Completed {
        task: Task,
        slot: SlotKey,
        flavor: String,
        new_task: Option<Task>,
    },
    /// No matching item on the grid; already logged
    MissingRequirement,
}

pub struct GameSession<S> {
    pub state: GameState,
    pub controller: InteractionController,
    storyteller: S,
}

impl<S: StoryTeller> GameSession<S> {
    pub fn new(config: GameConfig, storyteller: S) -> Self {
        Self {
            state: GameState::new(config),
            controller: InteractionController::new(),
            storyteller,
        }
    }

    pub fn click(&mut self, key: SlotKey) -> Result<ClickOutcome> {
        self.controller.click(&mut self.state, key)
    }

    pub fn click_str(&mut self, key: &str) -> Result<ClickOutcome> {
        self.controller.click_str(&mut self.state, key)
    }

    /// Hand in a task, then narrate it and top the task list up
    ///
    /// The item, reward and task removal are applied before any text is
    /// requested.
    pub async fn complete_task(&mut self, task_id: &str) -> Result<CompletionOutcome> {
        let fulfilment = match self.state.fulfill_task(task_id) {
            Ok(f) => f,
            Err(MergeError::MissingRequirement { .. }) => {
                return Ok(CompletionOutcome::MissingRequirement)
            }
            Err(err) => return Err(err),
        };
        self.controller.release(fulfilment.slot);

        let flavor = self.storyteller.completion_flavor(&fulfilment.task).await;
        self.state.log.story(flavor.clone());

        let mut new_task = None;
        if self.state.needs_new_task() {
            let level = self.state.progress.level;
            match self.storyteller.next_task_seed(level).await {
                Some(seed) => new_task = self.state.add_generated_task(seed).cloned(),
                None => tracing::debug!("No task seed available; task list stays short"),
            }
        }

        Ok(CompletionOutcome::Completed {
            task: fulfilment.task,
            slot: fulfilment.slot,
            flavor,
            new_task,
        })
    }

    /// Hand in the n-th active task (0-based)
    pub async fn complete_task_at(&mut self, index: usize) -> Result<CompletionOutcome> {
        let id = self
            .state
            .tasks
            .get(index)
            .map(|t| t.id.clone())
            .ok_or_else(|| MergeError::TaskNotFound(format!("#{}", index + 1)))?;
        self.complete_task(&id).await
    }
}
