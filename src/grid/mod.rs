//! Grid layer - slots and the inventory store

pub mod inventory;
pub mod slot;

pub use inventory::Inventory;
pub use slot::Slot;
