use thiserror::Error;

use crate::core::types::SlotKey;
use crate::items::Category;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("Invalid slot: {0}")]
    InvalidSlot(String),

    #[error("Slot already occupied: {0}")]
    SlotOccupied(SlotKey),

    #[error("Slot is empty: {0}")]
    EmptySlot(SlotKey),

    #[error("Cannot combine a slot with itself: {0}")]
    SameSlot(SlotKey),

    #[error("Not a generator: {0}")]
    NotAGenerator(SlotKey),

    #[error("Grid is full - merge items to free up space")]
    GridFull,

    #[error("Missing: tier {tier} {item_name} ({category:?})")]
    MissingRequirement {
        category: Category,
        tier: u8,
        item_name: String,
    },

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Asset unavailable: {0}")]
    AssetUnavailable(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("LLM error: {0}")]
    LlmError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl MergeError {
    /// Player-facing conditions that are reported through the game log
    /// instead of aborting anything.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MergeError::GridFull | MergeError::MissingRequirement { .. }
        )
    }

    /// Only quota exhaustion is worth backing off for.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, MergeError::RateLimited(_))
    }
}

pub type Result<T> = std::result::Result<T, MergeError>;
