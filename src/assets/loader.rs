//! Background icon generation
//!
//! Drains a [`BackoffQueue`] one definition at a time. There is never more
//! than one art request in flight. Results land in the shared [`IconCache`]
//! so the board can pick them up on its next render.

use crate::assets::backoff::BackoffQueue;
use crate::assets::cache::{AssetStatus, IconCache, ImageHandle};
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::items::{registry, ItemDefinition};
use std::time::Duration;

/// Something that can draw an icon for an item prompt
///
/// `Ok(None)` means "no art for this one" and the loader moves on.
/// A [`MergeError::RateLimited`](crate::core::error::MergeError::RateLimited)
/// error makes the loader retry the same prompt after backing off; any
/// other error skips it.
#[allow(async_fn_in_trait)]
pub trait IconArtist {
    async fn icon_art(&self, image_prompt: &str) -> Result<Option<ImageHandle>>;
}

pub struct AssetLoader {
    queue: BackoffQueue,
    cache: IconCache,
}

impl AssetLoader {
    /// Queue every definition (generators first) that has no art yet
    pub fn new(cache: IconCache, config: &GameConfig) -> Self {
        let pending: Vec<&'static ItemDefinition> = registry()
            .all_definitions()
            .filter(|def| !cache.contains(def.id))
            .collect();
        Self::with_queue(
            cache,
            BackoffQueue::new(
                pending,
                config.asset_initial_delay(),
                config.asset_max_delay(),
            ),
        )
    }

    pub fn with_queue(cache: IconCache, queue: BackoffQueue) -> Self {
        let status = if queue.is_empty() {
            AssetStatus::Idle
        } else {
            AssetStatus::Generating
        };
        cache.set_progress(status, queue.len());
        Self { queue, cache }
    }

    pub fn queue(&self) -> &BackoffQueue {
        &self.queue
    }

    pub fn cache(&self) -> &IconCache {
        &self.cache
    }

    /// Issue one request for the head of the queue
    ///
    /// Returns how long to wait before the next step, or `None` when
    /// nothing is left.
    pub async fn step<A: IconArtist>(&mut self, artist: &A) -> Option<Duration> {
        let def = self.queue.head()?;
        let next = match artist.icon_art(def.image_prompt).await {
            Ok(Some(image)) => {
                tracing::debug!("Generated icon for {}", def.id);
                self.cache.insert(def.id, image);
                self.queue.on_success()
            }
            Ok(None) => {
                tracing::debug!("No icon for {}; skipping", def.id);
                self.queue.on_success()
            }
            Err(err) if err.is_rate_limit() => {
                let delay = self.queue.on_failure();
                tracing::warn!(
                    "Icon generation rate limited on {}; retrying in {:?}",
                    def.id,
                    delay
                );
                Some(delay)
            }
            Err(err) => {
                tracing::warn!("Icon generation failed for {}: {}", def.id, err);
                self.queue.on_success()
            }
        };

        let status = if self.queue.is_empty() {
            AssetStatus::Idle
        } else if self.queue.is_backing_off() {
            AssetStatus::RateLimited
        } else {
            AssetStatus::Generating
        };
        self.cache.set_progress(status, self.queue.len());
        next
    }

    /// Drain the queue, sleeping between requests
    pub async fn run<A: IconArtist>(mut self, artist: A) -> IconCache {
        tracing::info!("Generating {} icons in the background", self.queue.len());
        while let Some(delay) = self.step(&artist).await {
            tokio::time::sleep(delay).await;
        }
        tracing::info!("Icon generation finished ({} cached)", self.cache.len());
        self.cache
    }
}
