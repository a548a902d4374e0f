//! CLI-specific types.
//!
//! # Examples
//!
//! ```
//! use hexmap_core::cli::{ExitCode, OutputFormat};
//!
//! let format = OutputFormat::Pretty;
//! assert_eq!(format.as_str(), "pretty");
//!
//! let code = ExitCode::SUCCESS;
//! assert_eq!(code.as_i32(), 0);
//! ```

use std::fmt;
use std::str::FromStr;

/// CLI output format for command summaries.
///
/// Only affects what is printed to stdout; the generated document itself
/// is always plain source text.
///
/// # Examples
///
/// ```
/// use hexmap_core::cli::OutputFormat;
///
/// let format: OutputFormat = "json".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// JSON output for machine parsing
    Json,
    /// Plain text output for scripts
    Text,
    /// Pretty-printed output with colors for human reading
    #[default]
    Pretty,
}

impl OutputFormat {
    /// Returns the string representation of the format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Pretty => "pretty",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            "pretty" => Ok(Self::Pretty),
            _ => Err(crate::Error::InvalidArgument(format!(
                "invalid output format: '{s}' (expected: json, text, or pretty)"
            ))),
        }
    }
}

/// CLI exit code with semantic meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Successful execution (exit code 0).
    pub const SUCCESS: Self = Self(0);

    /// General error (exit code 1).
    pub const ERROR: Self = Self(1);

    /// Invalid input or arguments (exit code 2).
    pub const INVALID_INPUT: Self = Self(2);

    /// Map service unreachable or answered with an error (exit code 3).
    pub const SERVER_ERROR: Self = Self(3);

    /// Strict identifier validation failed (exit code 4).
    pub const VALIDATION_FAILED: Self = Self(4);

    /// Returns the exit code as an integer.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// Maps a library error to the exit code reported by the CLI.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexmap_core::Error;
    /// use hexmap_core::cli::ExitCode;
    ///
    /// let err = Error::HttpStatus { url: "u".to_string(), status: 502 };
    /// assert_eq!(ExitCode::for_error(&err), ExitCode::SERVER_ERROR);
    /// ```
    #[must_use]
    pub const fn for_error(err: &crate::Error) -> Self {
        match err {
            crate::Error::ConnectionFailed { .. } | crate::Error::HttpStatus { .. } => {
                Self::SERVER_ERROR
            }
            crate::Error::ValidationError { .. } => Self::VALIDATION_FAILED,
            crate::Error::ConfigError { .. } | crate::Error::InvalidArgument(_) => {
                Self::INVALID_INPUT
            }
            _ => Self::ERROR,
        }
    }
}

impl Default for ExitCode {
    fn default() -> Self {
        Self::SUCCESS
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
