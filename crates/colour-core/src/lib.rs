//! # colour-core
//!
//! Range-checked colour value types.
//!
//! This crate provides the value objects used throughout colour-rs:
//!
//! - [`ColourModel`] - Trait and marker types carrying each model's channel table
//! - [`Colour`] - Generic bounded record, validated at construction
//! - [`Rgb`], [`Cmyk`], [`Hsv`] - The three concrete colour types
//! - [`ModelId`] - Runtime model identifier
//! - [`Error`] - Range and lookup errors
//!
//! ## Design
//!
//! All three models share one record type, `Colour<M, N>`. The marker `M`
//! fixes the channel order and the inclusive range of every channel, so
//! validation is written once:
//!
//! ```
//! use colour_core::prelude::*;
//!
//! let red = Rgb::rgb(255.0, 0.0, 0.0)?;
//! assert_eq!(red.get_all(), [255.0, 0.0, 0.0]);
//!
//! let err = Cmyk::cmyk(0.0, 0.0, 0.0, 101.0).unwrap_err();
//! assert!(err.is_range_error());
//! # Ok::<(), colour_core::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! colour-core (this crate)
//!    ^
//!    |
//!    +-- colour-convert (RGB/CMYK/HSV translation)
//!    +-- colour-cli (command-line front end)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize colours as `{channel: value}` maps; deserialisation
//!   is range-checked

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod colour;
pub mod error;
pub mod model;
#[cfg(feature = "serde")]
mod serde_impl;

pub use colour::{Cmyk, Colour, Hsv, Rgb};
pub use error::{Error, Result};
pub use model::{
    Channel, CmykModel, ColourModel, HsvModel, ModelId, RgbModel, CMYK_CHANNELS, HSV_CHANNELS,
    RGB_CHANNELS,
};

/// Prelude module for convenient imports.
///
/// ```
/// use colour_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::colour::{Cmyk, Colour, Hsv, Rgb};
    pub use crate::error::{Error, Result};
    pub use crate::model::{Channel, CmykModel, ColourModel, HsvModel, ModelId, RgbModel};
}
