//! Configuration file loading.
//!
//! Settings are resolved in this order, later sources winning:
//!
//! 1. Built-in defaults
//! 2. TOML file: `--config`/`HEXMAP_CONFIG`, else
//!    `<config dir>/hexmap/config.toml` when it exists
//! 3. Command-line flags
//!
//! ```toml
//! [source]
//! base_url = "https://war-service-live.foxholeservices.com/api/worldconquest/maps"
//! timeout_seconds = 30
//! concurrency = 4
//!
//! [output]
//! path = "mapdump.txt"
//! style = "rich"
//! strict = false
//! ```

use anyhow::{Context, Result};
use hexmap_core::{CodeStyle, GeneratorConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Returns the default configuration file path.
///
/// - Linux: `~/.config/hexmap/config.toml`
/// - macOS: `~/Library/Application Support/hexmap/config.toml`
/// - Windows: `%APPDATA%\hexmap\config.toml`
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hexmap").join("config.toml"))
}

/// Parses configuration from TOML text.
///
/// Missing sections and keys fall back to their defaults.
pub fn parse_config(text: &str) -> Result<GeneratorConfig> {
    toml::from_str(text).context("invalid configuration TOML")
}

/// Loads the configuration file.
///
/// An explicit path must exist. Without one, the default location is used
/// if present, otherwise built-in defaults are returned.
pub fn load_config(explicit: Option<&Path>) -> Result<GeneratorConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path().filter(|p| p.is_file()) {
            Some(path) => path,
            None => {
                debug!("No configuration file, using defaults");
                return Ok(GeneratorConfig::default());
            }
        },
    };

    debug!("Loading configuration from {}", path.display());
    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read configuration file {}", path.display()))?;

    parse_config(&text).with_context(|| format!("in configuration file {}", path.display()))
}

/// Command-line values that override the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Map list endpoint
    pub base_url: Option<String>,
    /// Output file
    pub output: Option<PathBuf>,
    /// Code style
    pub style: Option<CodeStyle>,
    /// Requests in flight
    pub concurrency: Option<usize>,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// Force the strict identifier policy
    pub strict: bool,
}

impl Overrides {
    /// Applies the overrides that are set.
    ///
    /// `strict` can only be switched on from the command line.
    pub fn apply(self, config: &mut GeneratorConfig) {
        if let Some(base_url) = self.base_url {
            config.source.base_url = base_url;
        }
        if let Some(output) = self.output {
            config.output.path = output;
        }
        if let Some(style) = self.style {
            config.output.style = style;
        }
        if let Some(concurrency) = self.concurrency {
            config.source.concurrency = concurrency;
        }
        if let Some(timeout) = self.timeout_seconds {
            config.source.timeout_seconds = Some(timeout);
        }
        if self.strict {
            config.output.strict = true;
        }
    }
}

/// Loads, overrides and validates the configuration.
pub fn resolve(explicit: Option<&Path>, overrides: Overrides) -> Result<GeneratorConfig> {
    let mut config = load_config(explicit)?;
    overrides.apply(&mut config);
    config.validate()?;
    Ok(config)
}
