//! Wire types for the War API map endpoints.
//!
//! The map list endpoint returns a bare JSON array of tile identifiers and
//! the per-tile `static` endpoint returns an object carrying the named
//! locations of that tile in `mapTextItems`.
//!
//! # Examples
//!
//! ```
//! use hexmap_core::{TileId, TileStatic};
//!
//! let tiles: Vec<TileId> = serde_json::from_str(r#"["StonecradleHex"]"#).unwrap();
//! assert_eq!(tiles[0].as_str(), "StonecradleHex");
//!
//! let details: TileStatic = serde_json::from_str(
//!     r#"{"mapTextItems": [{"text": "The Cord", "x": 0.5, "y": 0.25, "mapMarkerType": "Major"}]}"#,
//! ).unwrap();
//! assert_eq!(details.map_text_items[0].text, "The Cord");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tile identifier as published by the map list endpoint (e.g. `StonecradleHex`).
///
/// # Examples
///
/// ```
/// use hexmap_core::TileId;
///
/// let id = TileId::new("DeadLandsHex");
/// assert_eq!(id.as_str(), "DeadLandsHex");
/// assert_eq!(id.to_string(), "DeadLandsHex");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(String);

impl TileId {
    /// Creates a new tile identifier.
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `TileId` and returns the inner `String`.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TileId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TileId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A named location on a tile.
///
/// Unknown fields in the payload are ignored; all four fields below are
/// required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapTextItem {
    /// Display text, e.g. `The Heir's Knife`
    pub text: String,
    /// Marker classification, `Major` or `Minor` upstream
    pub map_marker_type: String,
    /// Horizontal position on the tile
    pub x: f64,
    /// Vertical position on the tile
    pub y: f64,
}

/// Static payload of a single tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileStatic {
    /// Named locations of the tile, in upstream order
    pub map_text_items: Vec<MapTextItem>,
}
