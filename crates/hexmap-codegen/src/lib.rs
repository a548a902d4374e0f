//! Code generation for War API map data.
//!
//! Transforms a discovered [`WorldInfo`](hexmap_introspector::WorldInfo)
//! into Rust source text using Handlebars templates: one enum per tile,
//! lookup functions for classification and coordinates, a shared trait, and
//! a top-level enum of all tiles.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod document;
pub mod generator;
pub mod literals;
pub mod template_engine;
pub mod types;
pub mod validation;

pub use document::{DIVIDER, Fragment, FragmentKind, GeneratedDocument};
pub use generator::MapGenerator;
pub use validation::{IdentifierIssue, IssueKind};
