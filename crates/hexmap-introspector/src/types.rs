//! Analyzed map data ready for code generation.

use hexmap_core::TileId;
use serde::{Deserialize, Serialize};

/// All tiles discovered in one run, in upstream list order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldInfo {
    /// Tiles in the order the map list endpoint returned them
    pub tiles: Vec<TileInfo>,
}

impl WorldInfo {
    /// Total number of locations across all tiles.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexmap_introspector::WorldInfo;
    ///
    /// assert_eq!(WorldInfo::default().location_count(), 0);
    /// ```
    #[must_use]
    pub fn location_count(&self) -> usize {
        self.tiles.iter().map(|tile| tile.locations.len()).sum()
    }
}

/// One map tile with its named locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileInfo {
    /// Upstream identifier, e.g. `StonecradleHex`
    pub id: TileId,
    /// Identifier with the fixed-width suffix removed, e.g. `Stonecradle`
    pub name: String,
    /// Named locations in upstream order
    pub locations: Vec<LocationInfo>,
}

/// A named location with its derived identifier and classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    /// Display text as published upstream
    pub text: String,
    /// Display text with spaces and apostrophes removed
    pub ident: String,
    /// Lowercased marker type
    pub marker: String,
    /// Whether the marker is `major`
    pub is_major: bool,
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
}

impl LocationInfo {
    /// Returns the `(x, y)` pair.
    #[must_use]
    pub const fn coords(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}
