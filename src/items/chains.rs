//! Chain registry - the seven merge chains and seven generators
//!
//! Tables below list each chain in tier order; tier and category are
//! assigned from position when the registry is built, so every chain is
//! contiguous 1..=7 by construction.

use crate::core::types::SlotKey;
use crate::items::category::Category;
use crate::items::definition::ItemDefinition;
use crate::items::glyph::Glyph;
use std::sync::OnceLock;

/// Length of every collectible chain
pub const CHAIN_LENGTH: usize = 7;

/// Row of an item table: id, name, icon token, colour token, image prompt
type RawItem = (&'static str, &'static str, &'static str, &'static str, &'static str);

#[rustfmt::skip]
const CLUE_CHAIN: [RawItem; CHAIN_LENGTH] = [
    ("clue_1", "Dust Bunnies", "wind", "slate-500",
     "A pixel art icon of a small pile of grey dust bunnies on a dark floor, horror game style, dark background"),
    ("clue_2", "Antique Key", "key", "amber-600",
     "A pixel art icon of a rusty antique brass key, sinister atmosphere, dark background"),
    ("clue_3", "Rusty Nail", "pin", "orange-800",
     "A pixel art icon of a crooked rusty iron nail, sharp and dangerous, dark background"),
    ("clue_4", "Torn Letter", "letter", "slate-200",
     "A pixel art icon of a torn piece of yellowed paper with unreadable scribbles, dark background"),
    ("clue_5", "Bloodied Rag", "drop", "red-600",
     "A pixel art icon of a torn white rag stained with fresh red blood, horror style, dark background"),
    ("clue_6", "Nameless Finger Bone", "bone", "slate-100",
     "A pixel art icon of a small white human finger bone, creepy, dark background"),
    ("clue_7", "Human Skull", "skull", "slate-300",
     "A pixel art icon of a cracked human skull, ominous shadows, horror game asset, dark background"),
];

#[rustfmt::skip]
const OCCULT_CHAIN: [RawItem; CHAIN_LENGTH] = [
    ("occult_1", "Black Candle", "flame", "purple-400",
     "A pixel art icon of a short black candle with a purple flame, occult vibe, dark background"),
    ("occult_2", "Crow Feather", "feather", "slate-600",
     "A pixel art icon of a jet black crow feather, shiny and ominous, dark background"),
    ("occult_3", "Coarse Salt", "salt", "white",
     "A pixel art icon of a small pile of white coarse salt for exorcism, dark background"),
    ("occult_4", "Tarot Card", "card", "indigo-400",
     "A pixel art icon of a single mysterious tarot card with the Death arcana, dark background"),
    ("occult_5", "Voodoo Doll", "doll", "amber-900",
     "A pixel art icon of a crude burlap voodoo doll with a pin in it, scary, dark background"),
    ("occult_6", "Spirit Box", "radio", "teal-500",
     "A pixel art icon of a spirit box ghost hunting radio device, glowing lights, dark background"),
    ("occult_7", "Book of the Dead", "book", "red-900",
     "A pixel art icon of an ancient leather book with a face on the cover, Necronomicon style, dark background"),
];

#[rustfmt::skip]
const SURVIVAL_CHAIN: [RawItem; CHAIN_LENGTH] = [
    ("surv_1", "Corroded Screw", "bolt", "slate-400",
     "Pixel art icon, single rusty screw, dark background"),
    ("surv_2", "Screwdriver", "wrench", "yellow-600",
     "Pixel art icon, old yellow handle screwdriver, dark background"),
    ("surv_3", "Pliers", "scissors", "slate-500",
     "Pixel art icon, heavy duty pliers, metallic, dark background"),
    ("surv_4", "Sledgehammer", "hammer", "slate-300",
     "Pixel art icon, heavy sledgehammer with bloodstain, dark background"),
    ("surv_5", "Crowbar", "hook", "red-500",
     "Pixel art icon, red painted crowbar, half life style, dark background"),
    ("surv_6", "Flashlight", "flashlight", "yellow-200",
     "Pixel art icon, heavy duty flashlight beam on, dark background"),
    ("surv_7", "Flare Gun", "crosshair", "orange-500",
     "Pixel art icon, orange emergency flare gun, dangerous, dark background"),
];

#[rustfmt::skip]
const FLORA_CHAIN: [RawItem; CHAIN_LENGTH] = [
    ("flora_1", "Withered Seed", "seed", "amber-800",
     "Pixel art icon, dried up black plant seed, dark background"),
    ("flora_2", "Dead Twig", "herb", "amber-900",
     "Pixel art icon, snappy dead twig, dark background"),
    ("flora_3", "Rotting Leaf", "leaf", "green-900",
     "Pixel art icon, slimy brown rotting leaf, dark background"),
    ("flora_4", "Toadstool", "mushroom", "purple-800",
     "Pixel art icon, spotted purple poisonous mushroom, glowing, dark background"),
    ("flora_5", "Maneater Bud", "flower", "red-700",
     "Pixel art icon, carnivorous plant bud with teeth, dark background"),
    ("flora_6", "Mandrake", "root", "amber-600",
     "Pixel art icon, screaming mandrake root, human shape, dark background"),
    ("flora_7", "Devil's Bloom", "sunflower", "red-500",
     "Pixel art icon, blooming giant rafflesia flower, blood red, dark background"),
];

#[rustfmt::skip]
const ANATOMY_CHAIN: [RawItem; CHAIN_LENGTH] = [
    ("anat_1", "Bloody Molar", "tooth", "white",
     "Pixel art icon, bloody molar tooth, dark background"),
    ("anat_2", "Clouded Eyeball", "eye", "blue-200",
     "Pixel art icon, severed eyeball with optic nerve, blue iris, dark background"),
    ("anat_3", "Severed Finger", "hand", "rose-300",
     "Pixel art icon, severed human finger, pale skin, dark background"),
    ("anat_4", "Human Ear", "ear", "rose-300",
     "Pixel art icon, severed human ear, grotesque, dark background"),
    ("anat_5", "Heart", "heart", "red-800",
     "Pixel art icon, realistic human heart organ, beating, dark background"),
    ("anat_6", "Brain", "brain", "pink-300",
     "Pixel art icon, human brain, pink and grey, dark background"),
    ("anat_7", "Stitched Horror", "ghost", "green-800",
     "Pixel art icon, frankenstein style flesh golem face, stitched, dark background"),
];

#[rustfmt::skip]
const MEDIA_CHAIN: [RawItem; CHAIN_LENGTH] = [
    ("media_1", "Exposed Film", "film", "slate-800",
     "Pixel art icon, unrolled film canister, dark background"),
    ("media_2", "Blurred Negative", "picture", "slate-600",
     "Pixel art icon, photographic negative strip, ghostly faces, dark background"),
    ("media_3", "Developer Fluid", "drop", "yellow-100",
     "Pixel art icon, chemical bottle with skull label, toxic, dark background"),
    ("media_4", "Eerie Photograph", "picture", "white",
     "Pixel art icon, black and white photo of a ghost in hallway, dark background"),
    ("media_5", "Haunted Tape", "cassette", "slate-900",
     "Pixel art icon, vhs cassette tape, cursed label, dark background"),
    ("media_6", "Tape Recorder", "mic", "slate-400",
     "Pixel art icon, old tape recorder, evp session, dark background"),
    ("media_7", "Static Television", "television", "slate-200",
     "Pixel art icon, old tv set displaying static noise, poltergeist, dark background"),
];

#[rustfmt::skip]
const ALCHEMY_CHAIN: [RawItem; CHAIN_LENGTH] = [
    ("alch_1", "Empty Test Tube", "test_tube", "white",
     "Pixel art icon, empty glass test tube, dark background"),
    ("alch_2", "Quicksilver", "disc", "slate-300",
     "Pixel art icon, puddle of liquid metal mercury, shiny, dark background"),
    ("alch_3", "Brimstone", "cloud", "yellow-400",
     "Pixel art icon, pile of yellow sulfur powder, alchemy, dark background"),
    ("alch_4", "Green Ooze", "drop", "green-500",
     "Pixel art icon, oozing green slime blob, radioactive, dark background"),
    ("alch_5", "Boiling Flask", "flask", "purple-500",
     "Pixel art icon, conical flask with bubbling purple liquid, dark background"),
    ("alch_6", "Philosopher's Shard", "gem", "red-600",
     "Pixel art icon, fragment of the philosophers stone, glowing red, dark background"),
    ("alch_7", "Elixir of Life", "goblet", "yellow-500",
     "Pixel art icon, ornate bottle with golden glowing liquid, elixir of life, dark background"),
];

/// Generators in [`Category::GENERATORS`] order
#[rustfmt::skip]
const GENERATOR_TABLE: [RawItem; 7] = [
    ("gen_archive", "Dusty Archive", "cabinet", "amber-700",
     "A pixel art icon of a dusty old filing cabinet overflowing with papers, cobwebs, mysterious, dark background"),
    ("gen_altar", "Cursed Altar", "ghost", "purple-600",
     "A pixel art icon of a small stone altar with runic carvings and blood stains, occult horror, dark background"),
    ("gen_toolbox", "Battered Toolbox", "toolbox", "slate-600",
     "Pixel art icon, rusty metal toolbox, open, tools spilling out, horror atmosphere"),
    ("gen_greenhouse", "Rotting Greenhouse", "sprout", "green-900",
     "Pixel art icon, small glass terrarium with dead plants and fog inside, horror atmosphere"),
    ("gen_morgue", "Morgue Drawer", "ice", "cyan-800",
     "Pixel art icon, metal morgue drawer door, slightly open, cold mist escaping, horror"),
    ("gen_darkroom", "Ghostly Darkroom", "camera", "red-900",
     "Pixel art icon, red safety light bulb for photography darkroom, hanging wire, horror"),
    ("gen_lab", "Alchemy Bench", "alembic", "blue-900",
     "Pixel art icon, wooden chemistry table with retorts and burners, frankenstein lab style"),
];

/// Where each generator sits when a game starts
pub const STARTING_GENERATORS: [(SlotKey, Category); 7] = [
    (SlotKey::new(0, 0), Category::GeneratorArchive),
    (SlotKey::new(0, 1), Category::GeneratorAltar),
    (SlotKey::new(0, 2), Category::GeneratorToolbox),
    (SlotKey::new(0, 3), Category::GeneratorGreenhouse),
    (SlotKey::new(0, 4), Category::GeneratorMorgue),
    (SlotKey::new(0, 5), Category::GeneratorDarkroom),
    (SlotKey::new(1, 0), Category::GeneratorLab),
];

fn build(raw: &RawItem, tier: u8, category: Category) -> ItemDefinition {
    let (id, name, icon_key, color, image_prompt) = *raw;
    ItemDefinition {
        id,
        name,
        tier,
        category,
        icon_key,
        glyph: Glyph::from_key(icon_key),
        color,
        image_prompt,
    }
}

/// All item definitions, indexed by category
#[derive(Debug)]
pub struct ChainRegistry {
    /// In [`Category::COLLECTIBLES`] order
    chains: Vec<Vec<ItemDefinition>>,
    /// In [`Category::GENERATORS`] order
    generators: Vec<ItemDefinition>,
}

impl ChainRegistry {
    fn load() -> Self {
        let tables = [
            &CLUE_CHAIN,
            &OCCULT_CHAIN,
            &SURVIVAL_CHAIN,
            &FLORA_CHAIN,
            &ANATOMY_CHAIN,
            &MEDIA_CHAIN,
            &ALCHEMY_CHAIN,
        ];

        let chains = tables
            .iter()
            .zip(Category::COLLECTIBLES)
            .map(|(table, category)| {
                table
                    .iter()
                    .enumerate()
                    .map(|(i, raw)| build(raw, i as u8 + 1, category))
                    .collect::<Vec<_>>()
            })
            .collect();

        let generators = GENERATOR_TABLE
            .iter()
            .zip(Category::GENERATORS)
            .map(|(raw, category)| build(raw, 1, category))
            .collect();

        Self { chains, generators }
    }

    /// Ordered chain for a collectible category; `None` for generators
    pub fn chain_for(&self, category: Category) -> Option<&[ItemDefinition]> {
        let idx = Category::COLLECTIBLES.iter().position(|c| *c == category)?;
        self.chains.get(idx).map(Vec::as_slice)
    }

    pub fn chain_length(&self, category: Category) -> Option<usize> {
        self.chain_for(category).map(<[ItemDefinition]>::len)
    }

    /// Chain entry at `tier` (1-based)
    pub fn definition(&self, category: Category, tier: u8) -> Option<&ItemDefinition> {
        self.chain_for(category)?.iter().find(|d| d.tier == tier)
    }

    /// The single definition of a generator category
    pub fn generator(&self, category: Category) -> Option<&ItemDefinition> {
        let idx = Category::GENERATORS.iter().position(|c| *c == category)?;
        self.generators.get(idx)
    }

    /// Look a definition up by its stable id
    pub fn find(&self, id: &str) -> Option<&ItemDefinition> {
        self.all_definitions().find(|d| d.id == id)
    }

    /// Generators first, then every chain in tier order
    pub fn all_definitions(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.generators.iter().chain(self.chains.iter().flatten())
    }
}

static REGISTRY: OnceLock<ChainRegistry> = OnceLock::new();

/// Get the global chain registry (built on first access)
pub fn registry() -> &'static ChainRegistry {
    REGISTRY.get_or_init(ChainRegistry::load)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_chain_has_seven_contiguous_tiers() {
        for category in Category::COLLECTIBLES {
            let chain = registry().chain_for(category).unwrap();
            assert_eq!(chain.len(), CHAIN_LENGTH);
            for (i, def) in chain.iter().enumerate() {
                assert_eq!(def.tier as usize, i + 1);
                assert_eq!(def.category, category);
            }
        }
    }

    #[test]
    fn test_generators_have_no_chain() {
        for category in Category::GENERATORS {
            assert!(registry().chain_for(category).is_none());
            let def = registry().generator(category).unwrap();
            assert_eq!(def.tier, 1);
            assert!(def.is_generator());
        }
    }

    #[test]
    fn test_definition_ids_are_unique() {
        let mut ids: Vec<_> = registry().all_definitions().map(|d| d.id).collect();
        assert_eq!(ids.len(), 56);
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 56);
    }

    #[test]
    fn test_all_icon_tokens_resolve() {
        for def in registry().all_definitions() {
            assert_ne!(def.glyph, Glyph::Unknown, "{} has unknown icon {}", def.id, def.icon_key);
        }
    }

    #[test]
    fn test_find_by_id() {
        let def = registry().find("occult_7").unwrap();
        assert_eq!(def.category, Category::Occult);
        assert_eq!(def.tier, 7);
        assert!(registry().find("nope").is_none());
    }

    #[test]
    fn test_starting_generators_cover_every_generator() {
        let cats: Vec<_> = STARTING_GENERATORS.iter().map(|(_, c)| *c).collect();
        assert_eq!(cats, Category::GENERATORS.to_vec());
        assert!(STARTING_GENERATORS.iter().all(|(k, _)| k.is_valid()));
    }
}
