//! Error types for colour-core operations.
//!
//! Every colour value validates its channels when it is built. This module
//! holds the failures that can come out of that check and out of
//! name-based channel access.
//!
//! # Usage
//!
//! ```rust
//! use colour_core::{Error, Rgb};
//!
//! let err = Rgb::rgb(256.0, 0.0, 0.0).unwrap_err();
//! assert!(err.is_range_error());
//! assert!(err.to_string().contains("r = 256"));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::colour::Colour`] - Construction and channel lookup
//! - `colour-convert` - Wrapped as `ConvertError::Range`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by colour value construction and channel access.
///
/// # Categories
///
/// - **Range errors**: [`OutOfRange`](Error::OutOfRange)
/// - **Lookup errors**: [`UnknownChannel`](Error::UnknownChannel), [`MissingChannel`](Error::MissingChannel),
///   [`UnknownModel`](Error::UnknownModel)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A channel value lies outside its declared inclusive range.
    ///
    /// NaN never satisfies the range check and is reported here too.
    ///
    /// # Example
    ///
    /// ```rust
    /// use colour_core::Error;
    ///
    /// let err = Error::out_of_range("HSV", "h", 361.0, 0.0, 360.0);
    /// assert_eq!(
    ///     err.to_string(),
    ///     "HSV: h = 361 higher than 360 or less than 0"
    /// );
    /// ```
    #[error("{model}: {channel} = {value} higher than {max} or less than {min}")]
    OutOfRange {
        /// Model name (e.g. "RGB")
        model: &'static str,
        /// Channel that failed the check
        channel: &'static str,
        /// Offending value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },

    /// A channel name is not declared for the model.
    #[error("{model} has no channel '{channel}'")]
    UnknownChannel {
        /// Model name
        model: &'static str,
        /// Requested channel name
        channel: String,
    },

    /// A named construction did not supply a declared channel.
    #[error("{model}: missing value for channel '{channel}'")]
    MissingChannel {
        /// Model name
        model: &'static str,
        /// Channel with no value
        channel: &'static str,
    },

    /// A model name could not be parsed.
    #[error("unknown colour model '{0}' (expected RGB, CMYK or HSV)")]
    UnknownModel(String),
}

impl Error {
    /// Creates an [`Error::OutOfRange`] error.
    #[inline]
    pub fn out_of_range(
        model: &'static str,
        channel: &'static str,
        value: f64,
        min: f64,
        max: f64,
    ) -> Self {
        Self::OutOfRange {
            model,
            channel,
            value,
            min,
            max,
        }
    }

    /// Creates an [`Error::UnknownChannel`] error.
    #[inline]
    pub fn unknown_channel(model: &'static str, channel: impl Into<String>) -> Self {
        Self::UnknownChannel {
            model,
            channel: channel.into(),
        }
    }

    /// Creates an [`Error::MissingChannel`] error.
    #[inline]
    pub fn missing_channel(model: &'static str, channel: &'static str) -> Self {
        Self::MissingChannel { model, channel }
    }

    /// Returns `true` if this is a range violation.
    #[inline]
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Returns `true` if a channel name could not be resolved.
    #[inline]
    pub fn is_unknown_channel(&self) -> bool {
        matches!(self, Self::UnknownChannel { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = Error::out_of_range("RGB", "g", -1.0, 0.0, 255.0);
        let msg = err.to_string();
        assert!(msg.contains("RGB"));
        assert!(msg.contains("g = -1"));
        assert!(msg.contains("255"));
        assert!(err.is_range_error());
        assert!(!err.is_unknown_channel());
    }

    #[test]
    fn test_unknown_channel() {
        let err = Error::unknown_channel("CMYK", "z");
        assert_eq!(err.to_string(), "CMYK has no channel 'z'");
        assert!(err.is_unknown_channel());
        assert!(!err.is_range_error());
    }

    #[test]
    fn test_missing_channel() {
        let err = Error::missing_channel("HSV", "v");
        assert!(err.to_string().contains("'v'"));
    }
}
