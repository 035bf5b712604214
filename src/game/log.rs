//! Player-facing message log
//!
//! Recoverable gameplay conditions (grid full, missing requirement) and
//! story lines land here instead of being raised to the caller. Only the
//! most recent entries are kept, newest first.

use serde::Serialize;
use std::collections::VecDeque;

/// Default number of retained entries
pub const DEFAULT_LOG_CAPACITY: usize = 5;

/// Line shown before the player has done anything
pub const OPENING_LINE: &str =
    "This house reeks of death. You will need every trick you know to survive...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LogKind {
    Story,
    System,
}

/// An entry in the game log
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub seq: u64,
    pub message: String,
    pub kind: LogKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    next_seq: u64,
}

impl Default for GameLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}

impl GameLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            next_seq: 0,
        }
    }

    /// A log holding only the opening line
    pub fn with_opening(capacity: usize) -> Self {
        let mut log = Self::new(capacity);
        log.system(OPENING_LINE);
        log
    }

    pub fn push(&mut self, message: impl Into<String>, kind: LogKind) {
        self.entries.push_front(LogEntry {
            seq: self.next_seq,
            message: message.into(),
            kind,
        });
        self.next_seq += 1;
        self.entries.truncate(self.capacity);
    }

    pub fn system(&mut self, message: impl Into<String>) {
        self.push(message, LogKind::System);
    }

    pub fn story(&mut self, message: impl Into<String>) {
        self.push(message, LogKind::Story);
    }

    /// Most recent entry
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    /// Entries, newest first
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
