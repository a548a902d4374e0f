//! Hexmap CLI library.
//!
//! This library provides the core functionality for the `hexmap` tool,
//! exposing argument definitions, configuration loading, commands and
//! formatters so they can be tested.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::unused_async)]

use clap::ValueEnum;
use hexmap_core::CodeStyle;

pub mod cli;
pub mod commands;
pub mod config;
pub mod formatters;

pub use cli::{Cli, Commands};

/// Flavor of generated code, as accepted on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum GeneratorStyle {
    /// `MapLocation` trait with `is_major` and `location` lookups.
    #[default]
    Classic,
    /// `Location` trait with naming lookups and a dispatching `Map` enum.
    Rich,
}

impl From<GeneratorStyle> for CodeStyle {
    fn from(style: GeneratorStyle) -> Self {
        match style {
            GeneratorStyle::Classic => Self::Classic,
            GeneratorStyle::Rich => Self::Rich,
        }
    }
}
