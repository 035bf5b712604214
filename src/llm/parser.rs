//! Prompts and reply parsing for the story collaborators
//!
//! The model answers in free text; these helpers turn that into a flavour
//! line or a [`TaskSeed`] and reject anything unusable.

use crate::core::error::{MergeError, Result};
use crate::game::tasks::{Task, TaskSeed};

/// System prompt for completion narration
pub const FLAVOR_SYSTEM_PROMPT: &str = "You are the narrator of a horror game. \
Answer with one short, creepy or suspenseful sentence (at most 20 words) \
focused on atmosphere, sound or shadow. Do not use quotation marks.";

/// System prompt for new task seeds
pub const TASK_SYSTEM_PROMPT: &str = r#"You invent short tasks for a horror merge game.
Themes: ghosts, murder mysteries, occult rituals. Keep it simple.

OUTPUT FORMAT (JSON only, no explanation):
{"description": "short task description", "storyContext": "one line of story background"}

Example:
{"description": "Find the bloodied rag", "storyContext": "The stain on the wall is still fresh."}
"#;

pub fn flavor_prompt(task: &Task) -> String {
    format!(
        "The player just finished this task: \"{}\".\nSituation: {}.\nDescribe the result.",
        task.description, task.story_context
    )
}

pub fn task_prompt(level: u32) -> String {
    format!("Generate one horror task for a player at level {}.", level)
}

/// Tidy a narration reply; `None` if nothing is left
pub fn clean_flavor(response: &str) -> Option<String> {
    let line = response
        .trim()
        .trim_matches(|c| c == '"' || c == '\u{201c}' || c == '\u{201d}')
        .trim();
    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}

/// Parse a task seed out of a model reply
pub fn parse_task_seed(response: &str) -> Result<TaskSeed> {
    let json_str = extract_json(response)?;
    let seed: TaskSeed = serde_json::from_str(json_str)?;

    if !seed.is_usable() {
        return Err(MergeError::LlmError("Task seed has no description".into()));
    }
    Ok(seed)
}

/// Extract JSON object from LLM response (handles surrounding text)
fn extract_json(response: &str) -> Result<&str> {
    let start = response
        .find('{')
        .ok_or_else(|| MergeError::LlmError("No JSON found in response".into()))?;
    let end = response
        .rfind('}')
        .ok_or_else(|| MergeError::LlmError("No closing brace found in response".into()))?;
    if end < start {
        return Err(MergeError::LlmError("Malformed JSON in response".into()));
    }
    Ok(&response[start..=end])
}
