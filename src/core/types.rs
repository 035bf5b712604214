//! Core type definitions used throughout the codebase

use crate::core::error::MergeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Number of grid rows
pub const GRID_ROWS: u8 = 7;

/// Number of grid columns
pub const GRID_COLS: u8 = 6;

/// Total number of slots, fixed for the lifetime of a game
pub const SLOT_COUNT: usize = GRID_ROWS as usize * GRID_COLS as usize;

/// Grid position, canonically written as `"row-col"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotKey {
    pub row: u8,
    pub col: u8,
}

impl SlotKey {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major index into the grid, `None` when the key is off the board
    pub fn index(&self) -> Option<usize> {
        if self.row < GRID_ROWS && self.col < GRID_COLS {
            Some(self.row as usize * GRID_COLS as usize + self.col as usize)
        } else {
            None
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index < SLOT_COUNT {
            let cols = GRID_COLS as usize;
            Some(Self::new((index / cols) as u8, (index % cols) as u8))
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.index().is_some()
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl FromStr for SlotKey {
    type Err = MergeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MergeError::InvalidSlot(s.to_string());
        let (row, col) = s.trim().split_once('-').ok_or_else(invalid)?;
        let row: u8 = row.parse().map_err(|_| invalid())?;
        let col: u8 = col.parse().map_err(|_| invalid())?;
        let key = SlotKey::new(row, col);
        if key.is_valid() {
            Ok(key)
        } else {
            Err(invalid())
        }
    }
}

/// Every canonical slot key in row-major order
pub fn all_slot_keys() -> impl Iterator<Item = SlotKey> {
    (0..SLOT_COUNT).filter_map(SlotKey::from_index)
}

/// Runtime identity of an item instance: definition id plus a unique suffix
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub String);

impl InstanceId {
    /// Stamp a fresh id derived from a definition id
    pub fn stamp(definition_id: &str) -> Self {
        Self(format!("{}_{}", definition_id, Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_key_round_trip_display() {
        let key: SlotKey = "3-4".parse().unwrap();
        assert_eq!(key, SlotKey::new(3, 4));
        assert_eq!(key.to_string(), "3-4");
    }

    #[test]
    fn test_slot_key_rejects_off_board() {
        assert!("7-0".parse::<SlotKey>().is_err());
        assert!("0-6".parse::<SlotKey>().is_err());
        assert!("a-b".parse::<SlotKey>().is_err());
        assert!("12".parse::<SlotKey>().is_err());
        assert!(!SlotKey::new(9, 9).is_valid());
    }

    #[test]
    fn test_all_slot_keys_row_major() {
        let keys: Vec<_> = all_slot_keys().collect();
        assert_eq!(keys.len(), SLOT_COUNT);
        assert_eq!(keys[0], SlotKey::new(0, 0));
        assert_eq!(keys[5], SlotKey::new(0, 5));
        assert_eq!(keys[6], SlotKey::new(1, 0));
        assert_eq!(keys[41], SlotKey::new(6, 5));
    }

    #[test]
    fn test_instance_ids_are_unique() {
        let a = InstanceId::stamp("clue_1");
        let b = InstanceId::stamp("clue_1");
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("clue_1_"));
    }
}
