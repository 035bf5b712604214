//! Merge resolution - what happens when one slot is played onto another
//!
//! Decision order for an occupied source:
//! 1. empty target: move
//! 2. generator source: swap, generators never merge
//! 3. same category, same tier, below the chain's top: merge into the next tier
//! 4. anything else: swap
//!
//! Exactly one of move, merge or swap happens per call.

use crate::core::error::{MergeError, Result};
use crate::core::types::SlotKey;
use crate::grid::Inventory;
use crate::items::{registry, ItemDefinition, ItemInstance};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeDecision {
    Move,
    /// Both inputs are consumed; one instance of this definition is produced
    Merge(&'static ItemDefinition),
    Swap,
}

/// What actually happened on the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MergeOutcome {
    Moved,
    Merged(ItemInstance),
    Swapped,
}

/// Has this item reached the top of its chain?
///
/// Items without a chain (generators) are always at their top.
pub fn at_max_tier(item: &ItemInstance) -> bool {
    match registry().chain_length(item.category()) {
        Some(len) => item.tier() as usize >= len,
        None => true,
    }
}

/// Decide how `source` combines with whatever sits in the target slot
pub fn decide(source: &ItemInstance, target: Option<&ItemInstance>) -> MergeDecision {
    let Some(target) = target else {
        return MergeDecision::Move;
    };

    if source.is_generator() {
        return MergeDecision::Swap;
    }

    let same_category = source.category() == target.category();
    let same_tier = source.tier() == target.tier();

    if same_category && same_tier && !at_max_tier(source) {
        if let Some(next) = registry().definition(source.category(), source.tier() + 1) {
            return MergeDecision::Merge(next);
        }
    }

    MergeDecision::Swap
}

/// Apply the decision for `source -> target` to the inventory
///
/// The merged instance lands in the target slot and the source slot is
/// left empty.
pub fn resolve(inventory: &mut Inventory, source: SlotKey, target: SlotKey) -> Result<MergeOutcome> {
    if source == target {
        return Err(MergeError::SameSlot(source));
    }

    let decision = {
        let source_item = inventory.item(source)?.ok_or(MergeError::EmptySlot(source))?;
        decide(source_item, inventory.item(target)?)
    };

    match decision {
        MergeDecision::Move | MergeDecision::Swap => {
            inventory.swap(source, target)?;
            if decision == MergeDecision::Move {
                tracing::debug!("Moved {} -> {}", source, target);
                Ok(MergeOutcome::Moved)
            } else {
                Ok(MergeOutcome::Swapped)
            }
        }
        MergeDecision::Merge(next) => {
            let merged = ItemInstance::new(next);
            inventory.clear(source)?;
            inventory.clear(target)?;
            inventory.place(target, merged.clone())?;
            tracing::info!("Merged into {} (tier {}) at {}", next.name, next.tier, target);
            Ok(MergeOutcome::Merged(merged))
        }
    }
}
