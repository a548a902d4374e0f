//! Map data source trait.

use crate::{MapTextItem, Result, TileId};
use async_trait::async_trait;

/// Provides the tile list and per-tile location data.
///
/// The production implementation talks to the War API over HTTP; tests
/// substitute in-memory sources.
///
/// All implementations must be `Send + Sync` so that tile requests can be
/// driven concurrently on the Tokio runtime.
#[async_trait]
pub trait MapSource: Send + Sync {
    /// Returns the tile identifiers in upstream order.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be fetched or parsed.
    async fn tiles(&self) -> Result<Vec<TileId>>;

    /// Returns the named locations of a tile, in upstream order.
    ///
    /// # Errors
    ///
    /// Returns an error if the details cannot be fetched, the service
    /// reports a failure status, or the payload lacks `mapTextItems`.
    async fn tile_details(&self, tile: &TileId) -> Result<Vec<MapTextItem>>;
}
