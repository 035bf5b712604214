//! LLM-backed collaborators

use crate::assets::{IconArtist, ImageHandle};
use crate::core::error::Result;
use crate::game::tasks::{Task, TaskSeed};
use crate::llm::client::LlmClient;
use crate::llm::parser;
use crate::story::StoryTeller;

/// Used when the request fails outright
pub const ERROR_FLAVOR: &str = "The shadows seem to lengthen as you finish the task.";
/// Used when the model answers with nothing
pub const EMPTY_FLAVOR: &str = "The darkness seems to deepen...";

/// Narrates completions and invents tasks through an [`LlmClient`]
#[derive(Clone)]
pub struct LlmNarrator {
    client: LlmClient,
}

impl LlmNarrator {
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &LlmClient {
        &self.client
    }
}

impl StoryTeller for LlmNarrator {
    async fn completion_flavor(&self, task: &Task) -> String {
        match self
            .client
            .complete(parser::FLAVOR_SYSTEM_PROMPT, &parser::flavor_prompt(task))
            .await
        {
            Ok(text) => parser::clean_flavor(&text).unwrap_or_else(|| EMPTY_FLAVOR.to_string()),
            Err(err) => {
                tracing::warn!("Narration failed: {}", err);
                ERROR_FLAVOR.to_string()
            }
        }
    }

    async fn next_task_seed(&self, level: u32) -> Option<TaskSeed> {
        let response = self
            .client
            .complete(parser::TASK_SYSTEM_PROMPT, &parser::task_prompt(level))
            .await
            .map_err(|err| tracing::warn!("Task generation failed: {}", err))
            .ok()?;

        parser::parse_task_seed(&response)
            .map_err(|err| tracing::warn!("Discarding task seed: {}", err))
            .ok()
    }
}

/// Draws item icons through the client's images endpoint
#[derive(Clone)]
pub struct LlmIconArtist {
    client: LlmClient,
}

impl LlmIconArtist {
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }
}

impl IconArtist for LlmIconArtist {
    async fn icon_art(&self, image_prompt: &str) -> Result<Option<ImageHandle>> {
        self.client.generate_image(image_prompt).await
    }
}
