//! CLI argument definitions and parsing.
//!
//! Defines the command-line interface structure using clap:
//! - `Cli` - Main CLI entry point
//! - `Commands` - Available subcommands

use crate::GeneratorStyle;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Foxhole hex-map code generator.
///
/// Fetches every map tile and its named locations from the Foxhole War API
/// and emits Rust enums and lookup tables describing them.
#[derive(Parser, Debug)]
#[command(name = "hexmap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    pub format: String,

    /// Configuration file (default: <config dir>/hexmap/config.toml)
    #[arg(long, global = true, env = "HEXMAP_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate map code from the War API.
    ///
    /// Fetches the tile list, then each tile's static map data, and writes
    /// the generated code to the output file. The file is only written once
    /// every request has succeeded.
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Default: classic style into ./mapdump.txt
    /// hexmap generate
    ///
    /// # Rich style, four requests in flight
    /// hexmap generate --style rich --concurrency 4 --output src/map.rs
    /// ```
    Generate {
        /// Output file, overwritten on success (default: mapdump.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// War API map list endpoint
        #[arg(long, env = "HEXMAP_BASE_URL")]
        base_url: Option<String>,

        /// Flavor of generated code
        #[arg(long, value_enum)]
        style: Option<GeneratorStyle>,

        /// Maximum number of tile requests in flight
        #[arg(short = 'j', long)]
        concurrency: Option<usize>,

        /// Per-request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Fail instead of warning when an identifier would not compile
        #[arg(long)]
        strict: bool,

        /// Print the generated code to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// List map tiles and the enum names derived from them.
    Tiles {
        /// War API map list endpoint
        #[arg(long, env = "HEXMAP_BASE_URL")]
        base_url: Option<String>,

        /// Per-request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Generate shell completions.
    ///
    /// Generates completion scripts for various shells that can be
    /// sourced or saved to enable tab completion for this CLI.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}
