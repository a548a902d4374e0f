//! War API map discovery and analysis.
//!
//! Fetches the tile list and each tile's named locations, and derives the
//! identifiers used for code generation.
//!
//! # Examples
//!
//! ```no_run
//! use hexmap_core::SourceConfig;
//! use hexmap_introspector::{Introspector, WarApiClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = WarApiClient::new(&SourceConfig::default())?;
//! let introspector = Introspector::new(client);
//! let world = introspector.discover().await?;
//!
//! for tile in &world.tiles {
//!     println!("{}: {} locations", tile.name, tile.locations.len());
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod analyzer;
pub mod client;
pub mod discovery;
pub mod types;

pub use client::WarApiClient;
pub use discovery::Introspector;
pub use types::{LocationInfo, TileInfo, WorldInfo};
