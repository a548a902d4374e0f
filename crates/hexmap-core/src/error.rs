//! Error types for the hex-map code generator.
//!
//! Every library crate in the workspace reports failures through [`Error`].
//! The CLI wraps these in `anyhow` with context naming the failing step.
//!
//! # Examples
//!
//! ```
//! use hexmap_core::{Error, Result};
//!
//! fn check_concurrency(value: usize) -> Result<usize> {
//!     if value == 0 {
//!         return Err(Error::ConfigError {
//!             message: "concurrency must be at least 1".to_string(),
//!         });
//!     }
//!     Ok(value)
//! }
//!
//! let err = check_concurrency(0).unwrap_err();
//! assert!(err.is_config_error());
//! ```

use thiserror::Error;

/// Main error type for the hex-map code generator.
#[derive(Error, Debug)]
pub enum Error {
    /// Request to the map service could not be completed.
    ///
    /// Covers DNS failures, refused connections, TLS errors and timeouts.
    #[error("connection to map service failed: {url}")]
    ConnectionFailed {
        /// URL that was being requested
        url: String,
        /// Underlying transport error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Map service answered with a non-success status.
    #[error("map service returned HTTP {status} for {url}")]
    HttpStatus {
        /// URL that was being requested
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// Serialization/deserialization error.
    ///
    /// Raised when a response body does not have the expected shape,
    /// for example when `mapTextItems` is missing.
    #[error("serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Configuration error.
    #[error("configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Invalid argument error.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Generated identifiers failed validation under the strict policy.
    #[error("validation error in {field}: {reason}")]
    ValidationError {
        /// What was being validated (tile or location identifiers)
        field: String,
        /// Detailed reason for the validation failure
        reason: String,
    },

    /// Template registration or rendering failed.
    #[error("template error in '{template}': {message}")]
    TemplateError {
        /// Name of the template
        template: String,
        /// Description of the failure
        message: String,
    },

    /// Filesystem error while writing the generated document.
    #[error("I/O error on {path}")]
    Io {
        /// Path that was being accessed
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Returns `true` if this is a transport or HTTP status error.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexmap_core::Error;
    ///
    /// let err = Error::HttpStatus {
    ///     url: "https://example.com/maps".to_string(),
    ///     status: 503,
    /// };
    /// assert!(err.is_connection_error());
    /// ```
    #[must_use]
    pub const fn is_connection_error(&self) -> bool {
        matches!(self, Self::ConnectionFailed { .. } | Self::HttpStatus { .. })
    }

    /// Returns `true` if this is a serialization error.
    #[must_use]
    pub const fn is_serialization_error(&self) -> bool {
        matches!(self, Self::SerializationError { .. })
    }

    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexmap_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "bad base url".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is a validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexmap_core::Error;
    ///
    /// let err = Error::ValidationError {
    ///     field: "location identifiers".to_string(),
    ///     reason: "duplicate 'TheCord' in Stonecradle".to_string(),
    /// };
    /// assert!(err.is_validation_error());
    /// ```
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }

    /// Returns `true` if this is a template error.
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

/// Result type alias used throughout the workspace.
///
/// # Examples
///
/// ```
/// use hexmap_core::{Error, Result};
///
/// fn parse_ids(raw: &str) -> Result<Vec<String>> {
///     Ok(serde_json::from_str(raw)?)
/// }
///
/// assert!(parse_ids(r#"["StonecradleHex"]"#).is_ok());
/// assert!(parse_ids("{").unwrap_err().is_serialization_error());
/// ```
pub type Result<T> = std::result::Result<T, Error>;
