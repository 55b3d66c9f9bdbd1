//! # colour-convert
//!
//! Conversions between RGB, CMYK and HSV colour values.
//!
//! The six translation functions are pure: they read one colour, build a
//! new one through the target type's validating constructor and never
//! touch shared state.
//!
//! | From \ To | RGB | CMYK | HSV |
//! |-----------|-----|------|-----|
//! | RGB | - | [`rgb_to_cmyk`] | [`rgb_to_hsv`] |
//! | CMYK | [`cmyk_to_rgb`] | - | [`cmyk_to_hsv`] |
//! | HSV | [`hsv_to_rgb`] | [`hsv_to_cmyk`] | - |
//!
//! # Quick Start
//!
//! ```rust
//! use colour_convert::{hsv_to_rgb, rgb_to_hsv};
//! use colour_core::{Hsv, Rgb};
//!
//! let red = Rgb::rgb(255.0, 0.0, 0.0)?;
//! let hsv = rgb_to_hsv(&red)?;
//! assert_eq!(hsv, Hsv::hsv(0.0, 1.0, 1.0)?);
//! assert_eq!(hsv_to_rgb(&hsv)?, red);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Dependencies
//!
//! - [`colour-core`] - Colour value types and range tables
//!
//! # Feature Flags
//!
//! - `serde` - Serialize [`AnyColour`] as `{"model": ..., "channels": {...}}`
//!
//! [`colour-core`]: colour_core

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod convert;
pub mod translate;

pub use convert::{AnyColour, ConvertTo};
pub use error::{ConvertError, ConvertResult};
pub use translate::{
    cmy_from_raw_channel, cmyk_to_hsv, cmyk_to_rgb, hsv_to_cmyk, hsv_to_rgb, rgb_to_cmyk,
    rgb_to_hsv,
};

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        cmyk_to_hsv, cmyk_to_rgb, hsv_to_cmyk, hsv_to_rgb, rgb_to_cmyk, rgb_to_hsv, AnyColour,
        ConvertError, ConvertResult, ConvertTo,
    };

    pub use colour_core::prelude::*;
}
