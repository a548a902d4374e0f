//! Derivation of names and identifiers from raw map data.
//!
//! Only the characters listed are removed. Upstream text that is not a
//! valid Rust identifier stays invalid and is reported by the code
//! generator's validation pass.

use crate::types::{LocationInfo, TileInfo};
use hexmap_core::{MapTextItem, TILE_SUFFIX_LEN, TileId};

/// Marker value classified as a major location (compared case-insensitively).
pub const MAJOR_MARKER: &str = "major";

/// Derives the tile name by dropping the last [`TILE_SUFFIX_LEN`] characters.
///
/// Identifiers shorter than the suffix yield an empty name.
///
/// # Examples
///
/// ```
/// use hexmap_introspector::analyzer::tile_name;
///
/// assert_eq!(tile_name("A3Hex123"), "A3Hex");
/// assert_eq!(tile_name("StonecradleHex"), "Stonecradle");
/// assert_eq!(tile_name("ab"), "");
/// ```
#[must_use]
pub fn tile_name(id: &str) -> String {
    let keep = id.chars().count().saturating_sub(TILE_SUFFIX_LEN);
    id.chars().take(keep).collect()
}

/// Derives a location identifier by removing spaces and apostrophes.
///
/// # Examples
///
/// ```
/// use hexmap_introspector::analyzer::location_ident;
///
/// assert_eq!(location_ident("St. Mary's Church"), "St.MarysChurch");
/// assert_eq!(location_ident("The Heir's Knife"), "TheHeirsKnife");
/// ```
#[must_use]
pub fn location_ident(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, ' ' | '\'')).collect()
}

/// Returns `true` when the marker type is `major` in any casing.
///
/// # Examples
///
/// ```
/// use hexmap_introspector::analyzer::is_major_marker;
///
/// assert!(is_major_marker("Major"));
/// assert!(!is_major_marker("Minor"));
/// ```
#[must_use]
pub fn is_major_marker(marker: &str) -> bool {
    marker.to_lowercase() == MAJOR_MARKER
}

/// Builds a [`LocationInfo`] from a raw text item.
#[must_use]
pub fn analyze_location(item: &MapTextItem) -> LocationInfo {
    LocationInfo {
        ident: location_ident(&item.text),
        text: item.text.clone(),
        marker: item.map_marker_type.to_lowercase(),
        is_major: is_major_marker(&item.map_marker_type),
        x: item.x,
        y: item.y,
    }
}

/// Builds a [`TileInfo`] from a tile id and its raw text items.
#[must_use]
pub fn analyze_tile(id: TileId, items: &[MapTextItem]) -> TileInfo {
    TileInfo {
        name: tile_name(id.as_str()),
        locations: items.iter().map(analyze_location).collect(),
        id,
    }
}
