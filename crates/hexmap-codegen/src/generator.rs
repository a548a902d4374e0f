//! Map code generator.
//!
//! Renders a [`WorldInfo`] into a [`GeneratedDocument`]:
//!
//! ```text
//! per tile, in upstream order:
//!   TileEnum, Classification, Coordinates[, Naming]
//! Divider
//! Trait
//! MapEnum[, MapDispatch]
//! ```
//!
//! The bracketed fragments are only emitted in the rich style.
//!
//! # Examples
//!
//! ```
//! use hexmap_codegen::MapGenerator;
//! use hexmap_core::{CodeStyle, TileId};
//! use hexmap_introspector::{LocationInfo, TileInfo, WorldInfo};
//!
//! let world = WorldInfo {
//!     tiles: vec![TileInfo {
//!         id: TileId::new("StonecradleHex"),
//!         name: "Stonecradle".to_string(),
//!         locations: vec![LocationInfo {
//!             text: "The Cord".to_string(),
//!             ident: "TheCord".to_string(),
//!             marker: "major".to_string(),
//!             is_major: true,
//!             x: 12.5,
//!             y: -3.0,
//!         }],
//!     }],
//! };
//!
//! let generator = MapGenerator::new(CodeStyle::Classic).unwrap();
//! let text = generator.generate(&world).unwrap().render();
//! assert!(text.contains("Stonecradle::TheCord => (12.5, -3.0),"));
//! ```

use crate::document::{DIVIDER, Fragment, FragmentKind, GeneratedDocument};
use crate::template_engine::TemplateEngine;
use crate::types::{MapContext, TileContext};
use crate::validation;
use hexmap_core::{CodeStyle, Error, IdentifierPolicy, Result};
use hexmap_introspector::{TileInfo, WorldInfo};

/// Template names used for one code style.
#[derive(Debug, Clone, Copy)]
struct StyleTemplates {
    classification: &'static str,
    coordinates: &'static str,
    naming: Option<&'static str>,
    location_trait: &'static str,
    map_enum: &'static str,
    map_dispatch: Option<&'static str>,
}

const TILE_ENUM_TEMPLATE: &str = "common/tile_enum";

const CLASSIC: StyleTemplates = StyleTemplates {
    classification: "classic/classification",
    coordinates: "classic/coordinates",
    naming: None,
    location_trait: "classic/location_trait",
    map_enum: "classic/map_enum",
    map_dispatch: None,
};

const RICH: StyleTemplates = StyleTemplates {
    classification: "rich/classification",
    coordinates: "rich/coordinates",
    naming: Some("rich/naming"),
    location_trait: "rich/location_trait",
    map_enum: "rich/map_enum",
    map_dispatch: Some("rich/map_dispatch"),
};

const fn templates_for(style: CodeStyle) -> StyleTemplates {
    match style {
        CodeStyle::Classic => CLASSIC,
        CodeStyle::Rich => RICH,
    }
}

/// Generator for map source text.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`.
#[derive(Debug)]
pub struct MapGenerator<'a> {
    engine: TemplateEngine<'a>,
    style: CodeStyle,
    policy: IdentifierPolicy,
}

impl MapGenerator<'_> {
    /// Creates a generator for a code style with the best-effort policy.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails.
    pub fn new(style: CodeStyle) -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::new()?,
            style,
            policy: IdentifierPolicy::BestEffort,
        })
    }

    /// Sets the identifier policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: IdentifierPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Code style in use.
    #[must_use]
    pub const fn style(&self) -> CodeStyle {
        self.style
    }

    /// Identifier policy in use.
    #[must_use]
    pub const fn policy(&self) -> IdentifierPolicy {
        self.policy
    }

    /// Generates the full document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] under the strict policy when any
    /// identifier issue is found, or a template error if rendering fails.
    pub fn generate(&self, world: &WorldInfo) -> Result<GeneratedDocument> {
        tracing::info!(
            "Generating {} code for {} tiles",
            self.style,
            world.tiles.len()
        );

        self.check_identifiers(world)?;

        let templates = templates_for(self.style);
        let mut doc = GeneratedDocument::new(self.style);

        for tile in &world.tiles {
            doc.extend(self.tile_fragments(tile)?);
        }

        doc.push(Fragment::new(FragmentKind::Divider, DIVIDER));

        let no_context = serde_json::Value::Object(serde_json::Map::new());
        doc.push(Fragment::new(
            FragmentKind::Trait,
            self.engine.render(templates.location_trait, &no_context)?,
        ));

        let map_context = MapContext::from_tiles(&world.tiles);
        doc.push(Fragment::new(
            FragmentKind::MapEnum,
            self.engine.render(templates.map_enum, &map_context)?,
        ));

        if let Some(template) = templates.map_dispatch {
            doc.push(Fragment::new(
                FragmentKind::MapDispatch,
                self.engine.render(template, &map_context)?,
            ));
        }

        tracing::info!("Generated {} fragments", doc.fragment_count());
        Ok(doc)
    }

    /// Renders the fragments of a single tile.
    ///
    /// # Errors
    ///
    /// Returns a template error if rendering fails.
    pub fn tile_fragments(&self, tile: &TileInfo) -> Result<Vec<Fragment>> {
        let templates = templates_for(self.style);
        let context = TileContext::from(tile);
        let name = tile.name.as_str();

        let mut fragments = vec![
            Fragment::for_tile(
                FragmentKind::TileEnum,
                name,
                self.engine.render(TILE_ENUM_TEMPLATE, &context)?,
            ),
            Fragment::for_tile(
                FragmentKind::Classification,
                name,
                self.engine.render(templates.classification, &context)?,
            ),
            Fragment::for_tile(
                FragmentKind::Coordinates,
                name,
                self.engine.render(templates.coordinates, &context)?,
            ),
        ];

        if let Some(template) = templates.naming {
            fragments.push(Fragment::for_tile(
                FragmentKind::Naming,
                name,
                self.engine.render(template, &context)?,
            ));
        }

        tracing::debug!("Rendered {} fragments for tile {}", fragments.len(), tile.id);
        Ok(fragments)
    }

    fn check_identifiers(&self, world: &WorldInfo) -> Result<()> {
        let issues = validation::check_world(world);
        if issues.is_empty() {
            return Ok(());
        }

        match self.policy {
            IdentifierPolicy::BestEffort => {
                for issue in &issues {
                    tracing::warn!("Generated code will not compile: {issue}");
                }
                Ok(())
            }
            IdentifierPolicy::Strict => {
                let reason = issues
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                Err(Error::ValidationError {
                    field: "generated identifiers".to_string(),
                    reason: format!("{} issue(s): {reason}", issues.len()),
                })
            }
        }
    }
}
