//! Generated icon cache shared between the loader and the front-end

use crate::items::{Glyph, ItemInstance};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// Opaque handle to generated art (a data URL)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageHandle(pub String);

impl ImageHandle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// What the loader is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AssetStatus {
    #[default]
    Idle,
    Generating,
    RateLimited,
}

/// How a tile should be drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileVisual {
    Image(ImageHandle),
    Glyph(Glyph),
}

#[derive(Debug, Default)]
struct CacheInner {
    /// definition id -> art
    images: AHashMap<String, ImageHandle>,
    status: AssetStatus,
    pending: usize,
}

/// Cheap to clone; every clone sees the same images
#[derive(Debug, Clone, Default)]
pub struct IconCache {
    inner: Arc<RwLock<CacheInner>>,
}

impl IconCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn read<T>(&self, f: impl FnOnce(&CacheInner) -> T) -> T {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        f(&guard)
    }

    fn write<T>(&self, f: impl FnOnce(&mut CacheInner) -> T) -> T {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }

    pub fn insert(&self, definition_id: &str, image: ImageHandle) {
        self.write(|c| {
            c.images.insert(definition_id.to_string(), image);
        });
    }

    pub fn get(&self, definition_id: &str) -> Option<ImageHandle> {
        self.read(|c| c.images.get(definition_id).cloned())
    }

    pub fn contains(&self, definition_id: &str) -> bool {
        self.read(|c| c.images.contains_key(definition_id))
    }

    pub fn len(&self) -> usize {
        self.read(|c| c.images.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn status(&self) -> AssetStatus {
        self.read(|c| c.status)
    }

    /// Definitions still waiting for art
    pub fn pending(&self) -> usize {
        self.read(|c| c.pending)
    }

    pub(crate) fn set_progress(&self, status: AssetStatus, pending: usize) {
        self.write(|c| {
            c.status = status;
            c.pending = pending;
        });
    }

    /// Generated art if there is any, otherwise the item's glyph
    pub fn visual_for(&self, item: &ItemInstance) -> TileVisual {
        match self.get(item.definition.id) {
            Some(image) => TileVisual::Image(image),
            None => TileVisual::Glyph(item.glyph()),
        }
    }
}
