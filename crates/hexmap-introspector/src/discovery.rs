//! Map discovery over a [`MapSource`].
//!
//! Tile detail requests go through an ordered buffered stream: up to
//! `concurrency` requests are in flight, and results are yielded in the
//! order of the tile list regardless of completion order.

use crate::analyzer;
use crate::types::{TileInfo, WorldInfo};
use futures::stream::{self, StreamExt, TryStreamExt};
use hexmap_core::traits::MapSource;
use hexmap_core::{Result, TileId};
use tracing::{debug, info};

/// Discovers tiles and locations from a map source.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use hexmap_core::traits::MapSource;
/// use hexmap_core::{MapTextItem, Result, TileId};
/// use hexmap_introspector::Introspector;
///
/// struct OneTile;
///
/// #[async_trait]
/// impl MapSource for OneTile {
///     async fn tiles(&self) -> Result<Vec<TileId>> {
///         Ok(vec![TileId::new("StonecradleHex")])
///     }
///
///     async fn tile_details(&self, _tile: &TileId) -> Result<Vec<MapTextItem>> {
///         Ok(vec![MapTextItem {
///             text: "The Cord".to_string(),
///             map_marker_type: "Major".to_string(),
///             x: 0.5,
///             y: 0.5,
///         }])
///     }
/// }
///
/// # #[tokio::main]
/// # async fn main() {
/// let world = Introspector::new(OneTile).discover().await.unwrap();
/// assert_eq!(world.tiles[0].name, "Stonecradle");
/// assert_eq!(world.tiles[0].locations[0].ident, "TheCord");
/// # }
/// ```
#[derive(Debug)]
pub struct Introspector<S> {
    source: S,
    concurrency: usize,
}

impl<S: MapSource> Introspector<S> {
    /// Creates a sequential introspector.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self {
            source,
            concurrency: 1,
        }
    }

    /// Sets the maximum number of tile requests in flight (at least 1).
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Returns the configured concurrency.
    #[must_use]
    pub const fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Returns the underlying source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Fetches the tile list and pairs each id with its derived name.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile list cannot be fetched.
    pub async fn list_tiles(&self) -> Result<Vec<(TileId, String)>> {
        let ids = self.source.tiles().await?;
        Ok(ids
            .into_iter()
            .map(|id| {
                let name = analyzer::tile_name(id.as_str());
                (id, name)
            })
            .collect())
    }

    /// Discovers every tile and its locations.
    ///
    /// Tiles are returned in tile-list order. The first failing request
    /// aborts discovery and no partial result is returned.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the source.
    pub async fn discover(&self) -> Result<WorldInfo> {
        let ids = self.source.tiles().await?;
        info!(
            "Discovered {} tiles (concurrency {})",
            ids.len(),
            self.concurrency
        );

        let tiles: Vec<TileInfo> = stream::iter(ids)
            .map(|id| self.discover_tile(id))
            .buffered(self.concurrency)
            .try_collect()
            .await?;

        let world = WorldInfo { tiles };
        info!(
            "Collected {} locations across {} tiles",
            world.location_count(),
            world.tiles.len()
        );

        Ok(world)
    }

    async fn discover_tile(&self, id: TileId) -> Result<TileInfo> {
        info!("Getting details for {} hex", analyzer::tile_name(id.as_str()));

        let items = self.source.tile_details(&id).await?;
        let tile = analyzer::analyze_tile(id, &items);

        for location in &tile.locations {
            debug!(
                "  {} position: {} ({})",
                tile.name, location.ident, location.marker
            );
        }

        Ok(tile)
    }
}
