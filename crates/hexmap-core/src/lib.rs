//! Core types, traits, and errors for the hex-map code generator.
//!
//! This crate provides the foundational types and abstractions shared by
//! the introspector, the code generator, and the CLI.
//!
//! # Architecture
//!
//! The core consists of:
//! - Wire types for the War API (`TileId`, `MapTextItem`, `TileStatic`)
//! - Error hierarchy with contextual information
//! - The `MapSource` trait that abstracts where map data comes from
//! - Configuration types with defaults matching the upstream service

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod types;

pub mod cli;
pub mod traits;

pub use config::{
    CodeStyle, DEFAULT_BASE_URL, DEFAULT_OUTPUT_PATH, GeneratorConfig, IdentifierPolicy,
    OutputConfig, SourceConfig, TILE_SUFFIX_LEN,
};
pub use error::{Error, Result};
pub use types::{MapTextItem, TileId, TileStatic};
