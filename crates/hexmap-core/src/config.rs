//! Configuration types for the hex-map code generator.
//!
//! Defaults reproduce the fixed constants of the original one-shot tool:
//! the live War API endpoint, sequential requests, no timeout, and a
//! `mapdump.txt` output file in the working directory.
//!
//! # Examples
//!
//! ```
//! use hexmap_core::{CodeStyle, GeneratorConfig, DEFAULT_OUTPUT_PATH};
//!
//! let config = GeneratorConfig::default();
//! assert_eq!(config.source.concurrency, 1);
//! assert_eq!(config.output.style, CodeStyle::Classic);
//! assert_eq!(config.output.path.to_str(), Some(DEFAULT_OUTPUT_PATH));
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Map list endpoint; per-tile details live at `{base}/{tile}/static`.
pub const DEFAULT_BASE_URL: &str =
    "https://war-service-live.foxholeservices.com/api/worldconquest/maps";

/// Output file written by `generate`.
pub const DEFAULT_OUTPUT_PATH: &str = "mapdump.txt";

/// Number of trailing characters stripped from a tile id to form its name.
pub const TILE_SUFFIX_LEN: usize = 3;

/// Flavor of generated source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeStyle {
    /// `MapLocation` trait with `is_major` and `location`, as the original dump
    #[default]
    Classic,
    /// `Location` trait with coordinates and api/friendly names plus a dispatching `Map` enum
    Rich,
}

impl CodeStyle {
    /// Returns the string representation of the style.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Rich => "rich",
        }
    }
}

impl fmt::Display for CodeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CodeStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "rich" => Ok(Self::Rich),
            _ => Err(Error::InvalidArgument(format!(
                "invalid code style: '{s}' (expected: classic or rich)"
            ))),
        }
    }
}

/// What to do with identifiers that would not compile as Rust tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierPolicy {
    /// Log every issue and emit the text unchanged
    #[default]
    BestEffort,
    /// Refuse to generate when any issue is found
    Strict,
}

/// Where map data is fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Map list endpoint
    pub base_url: String,

    /// Per-request timeout in seconds. `None` waits indefinitely.
    pub timeout_seconds: Option<u64>,

    /// Maximum number of tile detail requests in flight.
    ///
    /// Output order does not depend on this value.
    pub concurrency: usize,
}

impl SourceConfig {
    /// Returns the request timeout, if any.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
            concurrency: 1,
        }
    }
}

/// How the generated document is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Destination file, overwritten on every run
    pub path: PathBuf,

    /// Flavor of generated text
    pub style: CodeStyle,

    /// Reject invalid or duplicate identifiers instead of warning
    pub strict: bool,
}

impl OutputConfig {
    /// Returns the identifier policy implied by `strict`.
    #[must_use]
    pub const fn policy(&self) -> IdentifierPolicy {
        if self.strict {
            IdentifierPolicy::Strict
        } else {
            IdentifierPolicy::BestEffort
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            style: CodeStyle::default(),
            strict: false,
        }
    }
}

/// Complete generator configuration.
///
/// # Examples
///
/// ```
/// use hexmap_core::GeneratorConfig;
///
/// let mut config = GeneratorConfig::default();
/// config.source.concurrency = 0;
/// assert!(config.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Upstream settings
    #[serde(default)]
    pub source: SourceConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl GeneratorConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the base URL is not http(s), the
    /// concurrency is zero, the timeout is zero, or the output path is empty.
    pub fn validate(&self) -> Result<()> {
        let url = self.source.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::ConfigError {
                message: format!("base_url must be an http(s) URL, got '{url}'"),
            });
        }

        if self.source.concurrency == 0 {
            return Err(Error::ConfigError {
                message: "concurrency must be at least 1".to_string(),
            });
        }

        if self.source.timeout_seconds == Some(0) {
            return Err(Error::ConfigError {
                message: "timeout_seconds must be greater than 0".to_string(),
            });
        }

        if self.output.path.as_os_str().is_empty() {
            return Err(Error::ConfigError {
                message: "output path cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}
