//! Narrative tasks that consume one grid item for a reward

use crate::core::config::GameConfig;
use crate::items::{registry, Category};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Story context used when a generated seed omits one
pub const DEFAULT_STORY_CONTEXT: &str = "The shadows stir.";

/// A task: hand over one `(category, tier)` item, receive stars and exp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub description: String,
    pub required_category: Category,
    pub required_tier: u8,
    /// Display name of the required item
    pub required_item_name: String,
    pub reward_stars: u32,
    pub reward_exp: u32,
    /// Narrative seed handed to the flavour-text generator
    pub story_context: String,
}

/// Narrative seed for a freshly generated task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSeed {
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "storyContext")]
    pub story_context: Option<String>,
}

impl TaskSeed {
    pub fn new(description: impl Into<String>, story_context: Option<String>) -> Self {
        Self {
            description: description.into(),
            story_context,
        }
    }

    /// A seed without a description cannot become a task
    pub fn is_usable(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

impl Task {
    fn fixed(
        id: &str,
        description: &str,
        category: Category,
        reward_exp: u32,
        story_context: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            required_category: category,
            required_tier: 1,
            required_item_name: item_name(category, 1),
            reward_stars: 1,
            reward_exp,
            story_context: story_context.to_string(),
        }
    }

    /// Build a task from a generated seed, picking the requirement at random
    ///
    /// The category is uniform over the seven collectible categories and the
    /// tier uniform over `1..=generated_task_max_tier`. Returns `None` for a
    /// seed without a description.
    pub fn generated<R: Rng>(seed: TaskSeed, rng: &mut R, config: &GameConfig) -> Option<Self> {
        if !seed.is_usable() {
            return None;
        }

        let category = Category::COLLECTIBLES[rng.gen_range(0..Category::COLLECTIBLES.len())];
        let tier = rng.gen_range(1..=config.generated_task_max_tier);
        let story_context = seed
            .story_context
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STORY_CONTEXT.to_string());

        Some(Self {
            id: format!("gen_task_{}", Uuid::new_v4().simple()),
            description: seed.description.trim().to_string(),
            required_category: category,
            required_tier: tier,
            required_item_name: item_name(category, tier),
            reward_stars: config.generated_task_reward_stars,
            reward_exp: config.generated_task_reward_exp,
            story_context,
        })
    }
}

/// Chain name of a `(category, tier)` requirement
fn item_name(category: Category, tier: u8) -> String {
    registry()
        .definition(category, tier)
        .map(|d| d.name.to_string())
        .unwrap_or_else(|| "Item".to_string())
}

/// The three tasks every game starts with
pub fn initial_tasks() -> Vec<Task> {
    vec![
        Task::fixed(
            "t1",
            "Search the dust",
            Category::Clue,
            10,
            "You wake in a dark hallway. Something in the corner seems to move.",
        ),
        Task::fixed(
            "t2",
            "Find a light",
            Category::Occult,
            15,
            "It is too dark to see anything. You need to light a candle, even a cursed one.",
        ),
        Task::fixed(
            "t3",
            "Arm yourself",
            Category::Survival,
            15,
            "There may be worse than ghosts in this house. Find something to defend yourself.",
        ),
    ]
}
