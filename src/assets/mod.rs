//! Icon art: cache, backoff queue and the background loader

pub mod backoff;
pub mod cache;
pub mod loader;

pub use backoff::BackoffQueue;
pub use cache::{AssetStatus, IconCache, ImageHandle, TileVisual};
pub use loader::{AssetLoader, IconArtist};
