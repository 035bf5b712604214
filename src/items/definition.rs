//! Item templates and their runtime instances

use crate::core::types::InstanceId;
use crate::items::category::Category;
use crate::items::glyph::Glyph;
use serde::Serialize;

/// Immutable item template loaded once from the chain registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDefinition {
    /// Stable id per chain position, e.g. `clue_3`
    pub id: &'static str,
    pub name: &'static str,
    /// 1..=7 within a chain; always 1 for generators
    pub tier: u8,
    pub category: Category,
    /// Raw icon token as written in the item tables
    pub icon_key: &'static str,
    /// Fallback visual, resolved from `icon_key` at load time
    pub glyph: Glyph,
    pub color: &'static str,
    /// Opaque prompt handed to the icon art generator
    pub image_prompt: &'static str,
}

impl ItemDefinition {
    pub fn is_generator(&self) -> bool {
        self.category.is_generator()
    }
}

/// A definition stamped with a unique runtime id
///
/// Several instances of the same definition can sit on the grid at once;
/// only their ids differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemInstance {
    pub id: InstanceId,
    pub definition: &'static ItemDefinition,
}

impl ItemInstance {
    pub fn new(definition: &'static ItemDefinition) -> Self {
        Self {
            id: InstanceId::stamp(definition.id),
            definition,
        }
    }

    pub fn name(&self) -> &'static str {
        self.definition.name
    }

    pub fn tier(&self) -> u8 {
        self.definition.tier
    }

    pub fn category(&self) -> Category {
        self.definition.category
    }

    pub fn glyph(&self) -> Glyph {
        self.definition.glyph
    }

    pub fn is_generator(&self) -> bool {
        self.definition.is_generator()
    }

    /// Does this instance satisfy a `(category, tier)` requirement?
    pub fn matches(&self, category: Category, tier: u8) -> bool {
        self.category() == category && self.tier() == tier
    }
}
