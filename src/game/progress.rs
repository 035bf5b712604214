//! Player progress counters and the derived haunting view

use serde::Serialize;

/// Stars needed per story chapter
pub const STARS_PER_CHAPTER: u32 = 5;

/// Stars beyond this no longer change the haunting view
pub const MAX_REVEAL_LEVEL: u32 = 20;

/// Stars and exp only ever grow
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameProgress {
    pub stars: u32,
    pub level: u32,
    pub exp: u32,
    pub story_chapter: u32,
}

impl Default for GameProgress {
    fn default() -> Self {
        Self {
            stars: 0,
            level: 1,
            exp: 0,
            story_chapter: 1,
        }
    }
}

impl GameProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_exp(&mut self, exp: u32) {
        self.exp = self.exp.saturating_add(exp);
    }

    /// Grant a task reward; the chapter follows the star count
    pub fn grant(&mut self, stars: u32, exp: u32) {
        self.stars = self.stars.saturating_add(stars);
        self.add_exp(exp);
        self.story_chapter = self.stars / STARS_PER_CHAPTER + 1;
    }

    pub fn haunting(&self) -> HauntingView {
        HauntingView::from_stars(self.stars)
    }
}

/// How much of the haunted hallway has been revealed
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HauntingView {
    pub reveal_level: u32,
    /// 0.0..=1.0
    pub ghost_opacity: f32,
    /// 0.2..=1.0, thins as the house is cleansed
    pub fog_intensity: f32,
    pub eyes_visible: bool,
    pub bloodstain_visible: bool,
}

impl HauntingView {
    pub fn from_stars(stars: u32) -> Self {
        let reveal_level = stars.min(MAX_REVEAL_LEVEL);
        let reveal = reveal_level as f32;
        Self {
            reveal_level,
            ghost_opacity: (reveal * 0.1).min(1.0),
            fog_intensity: (1.0 - reveal * 0.05).max(0.2),
            eyes_visible: reveal_level > 2,
            bloodstain_visible: reveal_level > 8,
        }
    }
}
