//! Fallback visuals for items without generated art
//!
//! Icon tokens from the item tables are resolved to a closed set of glyphs
//! once, when the chain registry is built. Tokens that are not recognised
//! resolve to [`Glyph::Unknown`].

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Glyph {
    Wind,
    Key,
    Pin,
    Letter,
    Drop,
    Bone,
    Skull,
    Flame,
    Feather,
    Salt,
    Card,
    Doll,
    Radio,
    Book,
    Bolt,
    Wrench,
    Scissors,
    Hammer,
    Hook,
    Flashlight,
    Crosshair,
    Seed,
    Herb,
    Leaf,
    Mushroom,
    Flower,
    Root,
    Sunflower,
    Tooth,
    Eye,
    Hand,
    Ear,
    Heart,
    Brain,
    Ghost,
    Film,
    Picture,
    Cassette,
    Mic,
    Television,
    TestTube,
    Disc,
    Cloud,
    Flask,
    Gem,
    Goblet,
    Cabinet,
    Toolbox,
    Sprout,
    Ice,
    Camera,
    Alembic,
    Unknown,
}

impl Glyph {
    /// Resolve an icon token, falling back to [`Glyph::Unknown`]
    pub fn from_key(key: &str) -> Self {
        match key {
            "wind" => Glyph::Wind,
            "key" => Glyph::Key,
            "pin" => Glyph::Pin,
            "letter" => Glyph::Letter,
            "drop" => Glyph::Drop,
            "bone" => Glyph::Bone,
            "skull" => Glyph::Skull,
            "flame" => Glyph::Flame,
            "feather" => Glyph::Feather,
            "salt" => Glyph::Salt,
            "card" => Glyph::Card,
            "doll" => Glyph::Doll,
            "radio" => Glyph::Radio,
            "book" => Glyph::Book,
            "bolt" => Glyph::Bolt,
            "wrench" => Glyph::Wrench,
            "scissors" => Glyph::Scissors,
            "hammer" => Glyph::Hammer,
            "hook" => Glyph::Hook,
            "flashlight" => Glyph::Flashlight,
            "crosshair" => Glyph::Crosshair,
            "seed" => Glyph::Seed,
            "herb" => Glyph::Herb,
            "leaf" => Glyph::Leaf,
            "mushroom" => Glyph::Mushroom,
            "flower" => Glyph::Flower,
            "root" => Glyph::Root,
            "sunflower" => Glyph::Sunflower,
            "tooth" => Glyph::Tooth,
            "eye" => Glyph::Eye,
            "hand" => Glyph::Hand,
            "ear" => Glyph::Ear,
            "heart" => Glyph::Heart,
            "brain" => Glyph::Brain,
            "ghost" => Glyph::Ghost,
            "film" => Glyph::Film,
            "picture" => Glyph::Picture,
            "cassette" => Glyph::Cassette,
            "mic" => Glyph::Mic,
            "television" => Glyph::Television,
            "test_tube" => Glyph::TestTube,
            "disc" => Glyph::Disc,
            "cloud" => Glyph::Cloud,
            "flask" => Glyph::Flask,
            "gem" => Glyph::Gem,
            "goblet" => Glyph::Goblet,
            "cabinet" => Glyph::Cabinet,
            "toolbox" => Glyph::Toolbox,
            "sprout" => Glyph::Sprout,
            "ice" => Glyph::Ice,
            "camera" => Glyph::Camera,
            "alembic" => Glyph::Alembic,
            _ => Glyph::Unknown,
        }
    }

    /// Terminal rendering of the glyph
    pub fn symbol(&self) -> &'static str {
        match self {
            Glyph::Wind => "🌫",
            Glyph::Key => "🗝",
            Glyph::Pin => "📌",
            Glyph::Letter => "📜",
            Glyph::Drop => "🩸",
            Glyph::Bone => "🦴",
            Glyph::Skull => "💀",
            Glyph::Flame => "🕯",
            Glyph::Feather => "🪶",
            Glyph::Salt => "🧂",
            Glyph::Card => "🃏",
            Glyph::Doll => "🪆",
            Glyph::Radio => "📻",
            Glyph::Book => "📕",
            Glyph::Bolt => "🔩",
            Glyph::Wrench => "🔧",
            Glyph::Scissors => "✂",
            Glyph::Hammer => "🔨",
            Glyph::Hook => "🪝",
            Glyph::Flashlight => "🔦",
            Glyph::Crosshair => "🎯",
            Glyph::Seed => "🌰",
            Glyph::Herb => "🌿",
            Glyph::Leaf => "🍂",
            Glyph::Mushroom => "🍄",
            Glyph::Flower => "🌺",
            Glyph::Root => "🥕",
            Glyph::Sunflower => "🌻",
            Glyph::Tooth => "🦷",
            Glyph::Eye => "👁",
            Glyph::Hand => "✋",
            Glyph::Ear => "👂",
            Glyph::Heart => "🫀",
            Glyph::Brain => "🧠",
            Glyph::Ghost => "👻",
            Glyph::Film => "🎞",
            Glyph::Picture => "🖼",
            Glyph::Cassette => "📼",
            Glyph::Mic => "🎙",
            Glyph::Television => "📺",
            Glyph::TestTube => "🧪",
            Glyph::Disc => "💿",
            Glyph::Cloud => "☁",
            Glyph::Flask => "⚗",
            Glyph::Gem => "💎",
            Glyph::Goblet => "🍷",
            Glyph::Cabinet => "🗄",
            Glyph::Toolbox => "🧰",
            Glyph::Sprout => "🌱",
            Glyph::Ice => "🧊",
            Glyph::Camera => "📷",
            Glyph::Alembic => "🏺",
            Glyph::Unknown => "❔",
        }
    }
}
