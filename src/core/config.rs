//! Game configuration with documented constants
//!
//! Every tunable number of the merge game lives here. Values can be
//! overridden from a TOML file; anything not given keeps its default.

use crate::core::error::{MergeError, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Configuration for the merge game and its background asset loader
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === MERGING ===
    /// Experience granted for every successful merge
    pub merge_exp_reward: u32,

    // === TASKS ===
    /// A new task is requested once the active list shrinks to this size
    pub task_refill_threshold: usize,

    /// Highest tier a generated task may ask for
    ///
    /// Generated tasks pick a tier uniformly from 1..=this value.
    pub generated_task_max_tier: u8,

    /// Stars granted by generated tasks
    pub generated_task_reward_stars: u32,

    /// Experience granted by generated tasks
    pub generated_task_reward_exp: u32,

    // === LOG ===
    /// How many player-facing log entries are retained
    pub log_capacity: usize,

    /// Seed for task generation; random when absent
    pub rng_seed: Option<u64>,

    // === ASSET LOADING ===
    /// Pause between icon requests, and the first backoff step
    pub asset_initial_delay_ms: u64,

    /// Backoff never waits longer than this
    pub asset_max_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            merge_exp_reward: 5,

            task_refill_threshold: 3,
            generated_task_max_tier: 4,
            generated_task_reward_stars: 1,
            generated_task_reward_exp: 15,

            log_capacity: 5,
            rng_seed: None,

            asset_initial_delay_ms: 3_000,
            asset_max_delay_ms: 60_000,
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig =
            toml::from_str(content).map_err(|e| MergeError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn asset_initial_delay(&self) -> Duration {
        Duration::from_millis(self.asset_initial_delay_ms)
    }

    pub fn asset_max_delay(&self) -> Duration {
        Duration::from_millis(self.asset_max_delay_ms)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !(1..=7).contains(&self.generated_task_max_tier) {
            return Err(MergeError::ConfigError(format!(
                "generated_task_max_tier ({}) must be within 1..=7",
                self.generated_task_max_tier
            )));
        }

        if self.log_capacity == 0 {
            return Err(MergeError::ConfigError("log_capacity must be positive".into()));
        }

        if self.asset_initial_delay_ms == 0 || self.asset_initial_delay_ms > self.asset_max_delay_ms
        {
            return Err(MergeError::ConfigError(format!(
                "asset_initial_delay_ms ({}) must be positive and <= asset_max_delay_ms ({})",
                self.asset_initial_delay_ms, self.asset_max_delay_ms
            )));
        }

        Ok(())
    }
}
