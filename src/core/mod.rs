pub mod config;
pub mod error;
pub mod types;

pub use config::GameConfig;
pub use error::{MergeError, Result};
pub use types::{all_slot_keys, InstanceId, SlotKey, GRID_COLS, GRID_ROWS, SLOT_COUNT};
