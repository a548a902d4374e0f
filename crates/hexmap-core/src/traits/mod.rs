//! Core traits for the hex-map code generator.
//!
//! - `source` - where tile lists and tile details come from
//!
//! # Examples
//!
//! ```
//! use async_trait::async_trait;
//! use hexmap_core::traits::MapSource;
//! use hexmap_core::{MapTextItem, Result, TileId};
//!
//! struct SingleTile;
//!
//! #[async_trait]
//! impl MapSource for SingleTile {
//!     async fn tiles(&self) -> Result<Vec<TileId>> {
//!         Ok(vec![TileId::new("StonecradleHex")])
//!     }
//!
//!     async fn tile_details(&self, _tile: &TileId) -> Result<Vec<MapTextItem>> {
//!         Ok(vec![])
//!     }
//! }
//! ```

mod source;

pub use source::MapSource;
