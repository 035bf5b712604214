//! Items - categories, definitions, instances and the chain registry

pub mod category;
pub mod chains;
pub mod definition;
pub mod glyph;

pub use category::Category;
pub use chains::{registry, ChainRegistry, CHAIN_LENGTH, STARTING_GENERATORS};
pub use definition::{ItemDefinition, ItemInstance};
pub use glyph::Glyph;
