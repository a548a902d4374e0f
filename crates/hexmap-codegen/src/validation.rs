//! Identifier checks for generated code.
//!
//! Tile names and location identifiers become Rust enum names and enum
//! cases verbatim. Upstream text is not guaranteed to produce valid tokens
//! (a location may start with a digit or contain a period), and two
//! locations on one tile may collapse to the same identifier. A tile with
//! no locations yields an empty enum whose `match self {}` on `&self` does
//! not compile. This module reports such cases; whether they block generation is decided by the
//! [`IdentifierPolicy`](hexmap_core::IdentifierPolicy).
//!
//! # Examples
//!
//! ```
//! use hexmap_codegen::validation::{check_identifier, IssueKind};
//!
//! assert_eq!(check_identifier("TheCord"), None);
//! assert_eq!(check_identifier("St.MarysChurch"), Some(IssueKind::InvalidChar('.')));
//! assert_eq!(check_identifier("12Oaks"), Some(IssueKind::InvalidStart('1')));
//! ```

use hexmap_introspector::WorldInfo;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// What is wrong with an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Identifier is empty
    Empty,
    /// First character cannot start an identifier
    InvalidStart(char),
    /// Character cannot appear in an identifier
    InvalidChar(char),
    /// Identifier already used in the same scope
    Duplicate,
    /// Tile has no locations to enumerate
    NoLocations,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty identifier"),
            Self::InvalidStart(c) => write!(f, "cannot start with {c:?}"),
            Self::InvalidChar(c) => write!(f, "contains {c:?}"),
            Self::Duplicate => f.write_str("duplicate identifier"),
            Self::NoLocations => f.write_str("tile has no locations"),
        }
    }
}

/// An identifier that would not compile as intended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentifierIssue {
    /// Tile id the identifier belongs to
    pub tile: String,
    /// Location display text, `None` for the tile name itself
    pub location: Option<String>,
    /// The generated identifier
    pub ident: String,
    /// Problem found
    pub kind: IssueKind,
}

impl fmt::Display for IdentifierIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(text) => write!(
                f,
                "location '{}' in tile {} -> '{}': {}",
                text, self.tile, self.ident, self.kind
            ),
            None => write!(f, "tile {} -> '{}': {}", self.tile, self.ident, self.kind),
        }
    }
}

/// Checks a single identifier against Rust token rules.
///
/// Returns the first problem found, or `None` if the identifier is valid.
#[must_use]
pub fn check_identifier(ident: &str) -> Option<IssueKind> {
    let mut chars = ident.chars();
    let Some(first) = chars.next() else {
        return Some(IssueKind::Empty);
    };

    if ident == "_" || !(first == '_' || first.is_alphabetic()) {
        return Some(IssueKind::InvalidStart(first));
    }

    chars
        .find(|c| !(*c == '_' || c.is_alphanumeric()))
        .map(IssueKind::InvalidChar)
}

/// Checks every tile name and location identifier of a world.
///
/// Issues are returned in document order.
#[must_use]
pub fn check_world(world: &WorldInfo) -> Vec<IdentifierIssue> {
    let mut issues = Vec::new();
    let mut tile_names = HashSet::new();

    for tile in &world.tiles {
        let tile_id = tile.id.to_string();

        if let Some(kind) = check_identifier(&tile.name) {
            issues.push(IdentifierIssue {
                tile: tile_id.clone(),
                location: None,
                ident: tile.name.clone(),
                kind,
            });
        } else if !tile_names.insert(tile.name.as_str()) {
            issues.push(IdentifierIssue {
                tile: tile_id.clone(),
                location: None,
                ident: tile.name.clone(),
                kind: IssueKind::Duplicate,
            });
        }

        if tile.locations.is_empty() {
            issues.push(IdentifierIssue {
                tile: tile_id.clone(),
                location: None,
                ident: tile.name.clone(),
                kind: IssueKind::NoLocations,
            });
        }

        let mut seen = HashSet::new();
        for location in &tile.locations {
            let kind = check_identifier(&location.ident).or_else(|| {
                (!seen.insert(location.ident.as_str())).then_some(IssueKind::Duplicate)
            });

            if let Some(kind) = kind {
                issues.push(IdentifierIssue {
                    tile: tile_id.clone(),
                    location: Some(location.text.clone()),
                    ident: location.ident.clone(),
                    kind,
                });
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexmap_core::TileId;
    use hexmap_introspector::{LocationInfo, TileInfo};

    fn location(text: &str, ident: &str) -> LocationInfo {
        LocationInfo {
            text: text.to_string(),
            ident: ident.to_string(),
            marker: "minor".to_string(),
            is_major: false,
            x: 0.0,
            y: 0.0,
        }
    }

    fn tile(id: &str, name: &str, locations: Vec<LocationInfo>) -> TileInfo {
        TileInfo {
            id: TileId::new(id),
            name: name.to_string(),
            locations,
        }
    }

    #[test]
    fn test_valid_identifiers() {
        assert_eq!(check_identifier("TheHeirsKnife"), None);
        assert_eq!(check_identifier("_private"), None);
        assert_eq!(check_identifier("Fort2"), None);
        assert_eq!(check_identifier("Århus"), None);
    }

    #[test]
    fn test_invalid_identifiers() {
        assert_eq!(check_identifier(""), Some(IssueKind::Empty));
        assert_eq!(check_identifier("_"), Some(IssueKind::InvalidStart('_')));
        assert_eq!(check_identifier("-Ember"), Some(IssueKind::InvalidStart('-')));
        assert_eq!(check_identifier("Fort-Ember"), Some(IssueKind::InvalidChar('-')));
    }

    #[test]
    fn test_clean_world_has_no_issues() {
        let world = WorldInfo {
            tiles: vec![tile(
                "StonecradleHex",
                "Stonecradle",
                vec![location("The Cord", "TheCord"), location("Longing", "Longing")],
            )],
        };
        assert!(check_world(&world).is_empty());
    }

    #[test]
    fn test_duplicate_locations_in_tile() {
        let world = WorldInfo {
            tiles: vec![tile(
                "StonecradleHex",
                "Stonecradle",
                vec![location("The Cord", "TheCord"), location("TheCord", "TheCord")],
            )],
        };

        let issues = check_world(&world);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::Duplicate);
        assert_eq!(issues[0].location.as_deref(), Some("TheCord"));
    }

    #[test]
    fn test_same_ident_on_different_tiles_is_fine() {
        let world = WorldInfo {
            tiles: vec![
                tile("AHex", "A", vec![location("Port", "Port")]),
                tile("BHex", "B", vec![location("Port", "Port")]),
            ],
        };
        assert!(check_world(&world).is_empty());
    }

    #[test]
    fn test_tile_name_issues() {
        let world = WorldInfo {
            tiles: vec![
                tile("Hex", "", vec![location("Port", "Port")]),
                tile("WestgateHex", "Westgate", vec![location("Port", "Port")]),
                tile("WestgateXyz", "Westgate", vec![location("Port", "Port")]),
            ],
        };

        let issues = check_world(&world);
        let kinds: Vec<_> = issues.iter().map(|i| i.kind).collect();
        assert_eq!(kinds, [IssueKind::Empty, IssueKind::Duplicate]);
        assert_eq!(issues[1].tile, "WestgateXyz");
    }

    #[test]
    fn test_tile_without_locations() {
        let world = WorldInfo {
            tiles: vec![
                tile("EmptyHex", "Empty", vec![]),
                tile("AHex", "A", vec![location("Port", "Port")]),
            ],
        };

        let issues = check_world(&world);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::NoLocations);
        assert_eq!(issues[0].tile, "EmptyHex");
        assert_eq!(issues[0].location, None);
        assert_eq!(issues[0].to_string(), "tile EmptyHex -> 'Empty': tile has no locations");
    }

    #[test]
    fn test_issue_display() {
        let issue = IdentifierIssue {
            tile: "StonecradleHex".to_string(),
            location: Some("St. Mary's Church".to_string()),
            ident: "St.MarysChurch".to_string(),
            kind: IssueKind::InvalidChar('.'),
        };
        assert_eq!(
            issue.to_string(),
            "location 'St. Mary's Church' in tile StonecradleHex -> 'St.MarysChurch': contains '.'"
        );
    }
}
