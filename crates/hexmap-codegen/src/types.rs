//! Template contexts.
//!
//! Everything the templates print is pre-formatted here, so templates only
//! interpolate strings and booleans.

use crate::literals::{coords_literal, string_literal};
use hexmap_introspector::{LocationInfo, TileInfo};
use serde::Serialize;

/// Context for the per-tile templates.
#[derive(Debug, Clone, Serialize)]
pub struct TileContext {
    /// Upstream tile id
    pub id: String,
    /// Tile name, used as the enum name
    pub name: String,
    /// Tile name as a string literal
    pub name_literal: String,
    /// Locations in upstream order
    pub locations: Vec<LocationContext>,
}

impl From<&TileInfo> for TileContext {
    fn from(tile: &TileInfo) -> Self {
        Self {
            id: tile.id.to_string(),
            name: tile.name.clone(),
            name_literal: string_literal(&tile.name),
            locations: tile.locations.iter().map(LocationContext::from).collect(),
        }
    }
}

/// One enum case and its lookup values.
#[derive(Debug, Clone, Serialize)]
pub struct LocationContext {
    /// Display text, used in doc comments
    pub text: String,
    /// Display text as a string literal
    pub text_literal: String,
    /// Enum case name
    pub ident: String,
    /// Enum case name as a string literal
    pub ident_literal: String,
    /// Lowercased marker type
    pub marker: String,
    /// Classification
    pub major: bool,
    /// `(x, y)` literal
    pub coords: String,
}

impl From<&LocationInfo> for LocationContext {
    fn from(location: &LocationInfo) -> Self {
        Self {
            text: location.text.clone(),
            text_literal: string_literal(&location.text),
            ident: location.ident.clone(),
            ident_literal: string_literal(&location.ident),
            marker: location.marker.clone(),
            major: location.is_major,
            coords: coords_literal(location.x, location.y),
        }
    }
}

/// Context for the top-level enum and its dispatch impl.
#[derive(Debug, Clone, Serialize)]
pub struct MapContext {
    /// Tiles in upstream order
    pub tiles: Vec<TileSummary>,
}

/// Tile entry of the top-level enum.
#[derive(Debug, Clone, Serialize)]
pub struct TileSummary {
    /// Tile name
    pub name: String,
}

impl MapContext {
    /// Builds the context from tiles in order.
    pub fn from_tiles<'t>(tiles: impl IntoIterator<Item = &'t TileInfo>) -> Self {
        Self {
            tiles: tiles
                .into_iter()
                .map(|tile| TileSummary {
                    name: tile.name.clone(),
                })
                .collect(),
        }
    }
}
