//! Item categories: seven collectible merge chains and their generators

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Evidence found around the house
    Clue,
    /// Ritual paraphernalia
    Occult,
    /// Tools and improvised weapons
    Survival,
    /// Cursed plants
    Flora,
    /// Body parts
    Anatomy,
    /// Photographs and tapes
    Media,
    /// Potions and reagents
    Alchemy,

    GeneratorArchive,
    GeneratorAltar,
    GeneratorToolbox,
    GeneratorGreenhouse,
    GeneratorMorgue,
    GeneratorDarkroom,
    GeneratorLab,
}

impl Category {
    /// Categories that have a seven-tier merge chain, in chain order
    pub const COLLECTIBLES: [Category; 7] = [
        Category::Clue,
        Category::Occult,
        Category::Survival,
        Category::Flora,
        Category::Anatomy,
        Category::Media,
        Category::Alchemy,
    ];

    /// Generator categories, in starting-layout order
    pub const GENERATORS: [Category; 7] = [
        Category::GeneratorArchive,
        Category::GeneratorAltar,
        Category::GeneratorToolbox,
        Category::GeneratorGreenhouse,
        Category::GeneratorMorgue,
        Category::GeneratorDarkroom,
        Category::GeneratorLab,
    ];

    pub fn is_generator(&self) -> bool {
        self.spawns().is_some()
    }

    /// The collectible category a generator produces
    pub fn spawns(&self) -> Option<Category> {
        match self {
            Category::GeneratorArchive => Some(Category::Clue),
            Category::GeneratorAltar => Some(Category::Occult),
            Category::GeneratorToolbox => Some(Category::Survival),
            Category::GeneratorGreenhouse => Some(Category::Flora),
            Category::GeneratorMorgue => Some(Category::Anatomy),
            Category::GeneratorDarkroom => Some(Category::Media),
            Category::GeneratorLab => Some(Category::Alchemy),
            _ => None,
        }
    }

    /// Short label shown next to task requirements
    pub fn label(&self) -> &'static str {
        match self {
            Category::Clue => "Clue",
            Category::Occult => "Occult",
            Category::Survival => "Survival",
            Category::Flora => "Flora",
            Category::Anatomy => "Anatomy",
            Category::Media => "Media",
            Category::Alchemy => "Alchemy",
            Category::GeneratorArchive => "Archive",
            Category::GeneratorAltar => "Altar",
            Category::GeneratorToolbox => "Toolbox",
            Category::GeneratorGreenhouse => "Greenhouse",
            Category::GeneratorMorgue => "Morgue",
            Category::GeneratorDarkroom => "Darkroom",
            Category::GeneratorLab => "Lab",
        }
    }
}
