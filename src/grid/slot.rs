//! A single grid position

use crate::core::types::SlotKey;
use crate::items::ItemInstance;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Slot {
    pub key: SlotKey,
    pub item: Option<ItemInstance>,
    /// Reserved for content gating; nothing sets or checks it yet
    pub locked: bool,
}

impl Slot {
    pub fn empty(key: SlotKey) -> Self {
        Self {
            key,
            item: None,
            locked: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }
}
