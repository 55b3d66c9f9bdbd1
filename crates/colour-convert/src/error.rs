//! Error types for colour conversions.
//!
//! A conversion either returns a fully validated colour or one of these.

use colour_core::ModelId;
use thiserror::Error;

/// Conversion error.
///
/// - Result channels outside the target model's range
/// - Hue values outside every HSV sector
/// - Wrong number of channel values for a runtime-typed colour
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// The converted colour failed construction (usually a range error).
    #[error("colour error: {0}")]
    Colour(#[from] colour_core::Error),

    /// Hue does not fall into any 60 degree sector.
    ///
    /// Validated HSV values never hit this; a hue written through
    /// `Colour::set` can.
    #[error("invalid hue {hue} in HSV colour {colour}")]
    InvalidHue {
        /// Offending hue.
        hue: f64,
        /// Display string of the input colour.
        colour: String,
    },

    /// A runtime-typed colour was given the wrong number of values.
    #[error("{model} expects {expected} channel values, got {got}")]
    ChannelCount {
        /// Target model.
        model: ModelId,
        /// Channels the model declares.
        expected: usize,
        /// Values supplied.
        got: usize,
    },
}

impl ConvertError {
    /// Creates a [`ConvertError::InvalidHue`] error.
    #[inline]
    pub fn invalid_hue(hue: f64, colour: impl Into<String>) -> Self {
        Self::InvalidHue {
            hue,
            colour: colour.into(),
        }
    }

    /// Returns `true` if the result fell outside its model's range.
    #[inline]
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::Colour(e) if e.is_range_error())
    }
}

/// Result type for conversions.
pub type ConvertResult<T> = Result<T, ConvertError>;
