//! Error types for the gridline detection library
//!
//! Detection itself is infallible: degenerate input (too few rulings,
//! zero-area primitives, empty text) is handled by omission, not by raising
//! errors. The only fallible surface is configuration — building a
//! [`DetectorConfig`](crate::DetectorConfig) with non-positive tolerances is
//! rejected so a tuning mistake fails fast instead of silently misdetecting.

use thiserror::Error;

/// Errors that can occur when using the gridline detection library.
#[derive(Error, Debug)]
pub enum DetectError {
    /// Invalid detector configuration.
    ///
    /// Raised by `DetectorConfigBuilder::build()` when a tolerance or
    /// threshold is not a positive finite number.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of what is invalid in the configuration
        reason: String,
    },
}

impl DetectError {
    /// Returns true if this error is a configuration error (user-fixable).
    #[inline]
    #[must_use = "this method returns a boolean, not modifying the error"]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. })
    }
}

/// Type alias for Result with [`DetectError`].
pub type Result<T> = std::result::Result<T, DetectError>;
