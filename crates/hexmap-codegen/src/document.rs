//! The generated document: an ordered list of text fragments.
//!
//! Each generation step returns fragments; the document concatenates them
//! once, appending a newline after each, and writes the result in a single
//! call.
//!
//! # Examples
//!
//! ```
//! use hexmap_codegen::{Fragment, FragmentKind, GeneratedDocument};
//! use hexmap_core::CodeStyle;
//!
//! let mut doc = GeneratedDocument::new(CodeStyle::Classic);
//! doc.push(Fragment::new(FragmentKind::Trait, "pub trait MapLocation {}\n"));
//! assert_eq!(doc.render(), "pub trait MapLocation {}\n\n");
//! ```

use hexmap_core::{CodeStyle, Error, Result};
use serde::Serialize;
use std::path::Path;

/// Banner separating the per-tile blocks from the shared declarations.
pub const DIVIDER: &str = "--------------------------
--------------------------
--------------------------
ADD ALL BELOW TO THE TOP OF FILE
--------------------------
--------------------------
--------------------------
";

/// What a fragment contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FragmentKind {
    /// Enum of a tile's locations
    TileEnum,
    /// Major/minor lookup (opens the tile's trait impl)
    Classification,
    /// Coordinate lookup
    Coordinates,
    /// Api and friendly name lookups (rich style only)
    Naming,
    /// Divider banner
    Divider,
    /// Shared trait declaration
    Trait,
    /// Top-level enum of all tiles
    MapEnum,
    /// Trait impl for the top-level enum (rich style only)
    MapDispatch,
}

/// One block of generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    /// Fragment kind
    pub kind: FragmentKind,
    /// Tile name for per-tile fragments
    pub tile: Option<String>,
    /// Rendered text
    pub content: String,
}

impl Fragment {
    /// Creates a fragment not tied to a tile.
    #[must_use]
    pub fn new(kind: FragmentKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            tile: None,
            content: content.into(),
        }
    }

    /// Creates a per-tile fragment.
    #[must_use]
    pub fn for_tile(
        kind: FragmentKind,
        tile: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            tile: Some(tile.into()),
            content: content.into(),
        }
    }
}

/// Ordered fragments making up one output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedDocument {
    style: CodeStyle,
    fragments: Vec<Fragment>,
}

impl GeneratedDocument {
    /// Creates an empty document.
    #[must_use]
    pub const fn new(style: CodeStyle) -> Self {
        Self {
            style,
            fragments: Vec::new(),
        }
    }

    /// Appends a fragment.
    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    /// Appends several fragments in order.
    pub fn extend(&mut self, fragments: impl IntoIterator<Item = Fragment>) {
        self.fragments.extend(fragments);
    }

    /// Style the document was generated with.
    #[must_use]
    pub const fn style(&self) -> CodeStyle {
        self.style
    }

    /// Fragments in output order.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Number of fragments.
    #[must_use]
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    /// Tile names in the order their enums appear.
    #[must_use]
    pub fn tile_names(&self) -> Vec<&str> {
        self.fragments
            .iter()
            .filter(|f| f.kind == FragmentKind::TileEnum)
            .filter_map(|f| f.tile.as_deref())
            .collect()
    }

    /// Concatenates all fragments, each followed by a newline.
    #[must_use]
    pub fn render(&self) -> String {
        let capacity = self.fragments.iter().map(|f| f.content.len() + 1).sum();
        let mut out = String::with_capacity(capacity);
        for fragment in &self.fragments {
            out.push_str(&fragment.content);
            out.push('\n');
        }
        out
    }

    /// Writes the rendered document, replacing any existing file.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be written.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let text = self.render();

        std::fs::write(path, &text).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;

        tracing::info!("Wrote {} bytes to {}", text.len(), path.display());
        Ok(text.len())
    }
}
