//! Generic conversion trait and a runtime-typed colour.
//!
//! # Traits
//!
//! - [`ConvertTo`] - Conversion from one colour type to another, picked by
//!   the target type
//!
//! # Types
//!
//! - [`AnyColour`] - One of [`Rgb`], [`Cmyk`] or [`Hsv`], for callers that
//!   only learn the model at runtime
//!
//! # Example
//!
//! ```rust
//! use colour_convert::ConvertTo;
//! use colour_core::{Hsv, Rgb};
//!
//! let red = Rgb::rgb(255.0, 0.0, 0.0)?;
//! let hsv: Hsv = red.convert()?;
//! assert_eq!(hsv.get_all(), [0.0, 1.0, 1.0]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;

use colour_core::{Cmyk, Hsv, ModelId, Rgb};

use crate::error::{ConvertError, ConvertResult};
use crate::translate;

/// Conversion into colour type `T`.
///
/// Implemented for every ordered pair of [`Rgb`], [`Cmyk`] and [`Hsv`],
/// including the identity.
pub trait ConvertTo<T> {
    /// Converts `self` into `T`.
    ///
    /// # Errors
    ///
    /// Whatever the underlying translation function returns.
    fn convert(&self) -> ConvertResult<T>;
}

macro_rules! impl_convert {
    ($from:ty => $to:ty, $f:path) => {
        impl ConvertTo<$to> for $from {
            #[inline]
            fn convert(&self) -> ConvertResult<$to> {
                $f(self)
            }
        }
    };
    ($ty:ty) => {
        impl ConvertTo<$ty> for $ty {
            #[inline]
            fn convert(&self) -> ConvertResult<$ty> {
                Ok(*self)
            }
        }
    };
}

impl_convert!(Rgb => Cmyk, translate::rgb_to_cmyk);
impl_convert!(Rgb => Hsv, translate::rgb_to_hsv);
impl_convert!(Cmyk => Rgb, translate::cmyk_to_rgb);
impl_convert!(Cmyk => Hsv, translate::cmyk_to_hsv);
impl_convert!(Hsv => Rgb, translate::hsv_to_rgb);
impl_convert!(Hsv => Cmyk, translate::hsv_to_cmyk);
impl_convert!(Rgb);
impl_convert!(Cmyk);
impl_convert!(Hsv);

/// A colour whose model is chosen at runtime.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "model", content = "channels")
)]
pub enum AnyColour {
    /// RGB value.
    #[cfg_attr(feature = "serde", serde(rename = "RGB"))]
    Rgb(Rgb),
    /// CMYK value.
    #[cfg_attr(feature = "serde", serde(rename = "CMYK"))]
    Cmyk(Cmyk),
    /// HSV value.
    #[cfg_attr(feature = "serde", serde(rename = "HSV"))]
    Hsv(Hsv),
}

impl AnyColour {
    /// Builds a colour of `model` from values in declared channel order.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::ChannelCount`] if `values` has the wrong length
    /// - [`ConvertError::Colour`] if a value is out of range
    ///
    /// # Example
    ///
    /// ```rust
    /// use colour_convert::AnyColour;
    /// use colour_core::ModelId;
    ///
    /// let c = AnyColour::from_values(ModelId::Cmyk, &[0.0, 0.0, 0.0, 50.0])?;
    /// assert_eq!(c.model(), ModelId::Cmyk);
    /// assert!(AnyColour::from_values(ModelId::Rgb, &[1.0, 2.0]).is_err());
    /// # Ok::<(), colour_convert::ConvertError>(())
    /// ```
    pub fn from_values(model: ModelId, values: &[f64]) -> ConvertResult<Self> {
        let count = || ConvertError::ChannelCount {
            model,
            expected: model.arity(),
            got: values.len(),
        };
        Ok(match model {
            ModelId::Rgb => Self::Rgb(Rgb::new(values.try_into().map_err(|_| count())?)?),
            ModelId::Cmyk => Self::Cmyk(Cmyk::new(values.try_into().map_err(|_| count())?)?),
            ModelId::Hsv => Self::Hsv(Hsv::new(values.try_into().map_err(|_| count())?)?),
        })
    }

    /// Model of the held colour.
    pub fn model(&self) -> ModelId {
        match self {
            Self::Rgb(c) => c.model(),
            Self::Cmyk(c) => c.model(),
            Self::Hsv(c) => c.model(),
        }
    }

    /// Channel values in declared order.
    pub fn values(&self) -> &[f64] {
        match self {
            Self::Rgb(c) => c.values(),
            Self::Cmyk(c) => c.values(),
            Self::Hsv(c) => c.values(),
        }
    }

    /// Same as [`Colour::to_display_string`](colour_core::Colour::to_display_string).
    pub fn to_display_string(&self) -> String {
        match self {
            Self::Rgb(c) => c.to_display_string(),
            Self::Cmyk(c) => c.to_display_string(),
            Self::Hsv(c) => c.to_display_string(),
        }
    }

    /// Converts into `target`. Converting to the held model is a copy.
    ///
    /// # Errors
    ///
    /// Whatever the underlying translation function returns.
    pub fn convert_to(&self, target: ModelId) -> ConvertResult<Self> {
        match (self, target) {
            (Self::Rgb(c), ModelId::Rgb) => Ok(Self::Rgb(c.convert()?)),
            (Self::Rgb(c), ModelId::Cmyk) => Ok(Self::Cmyk(c.convert()?)),
            (Self::Rgb(c), ModelId::Hsv) => Ok(Self::Hsv(c.convert()?)),
            (Self::Cmyk(c), ModelId::Rgb) => Ok(Self::Rgb(c.convert()?)),
            (Self::Cmyk(c), ModelId::Cmyk) => Ok(Self::Cmyk(c.convert()?)),
            (Self::Cmyk(c), ModelId::Hsv) => Ok(Self::Hsv(c.convert()?)),
            (Self::Hsv(c), ModelId::Rgb) => Ok(Self::Rgb(c.convert()?)),
            (Self::Hsv(c), ModelId::Cmyk) => Ok(Self::Cmyk(c.convert()?)),
            (Self::Hsv(c), ModelId::Hsv) => Ok(Self::Hsv(c.convert()?)),
        }
    }
}

impl fmt::Display for AnyColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(c) => fmt::Display::fmt(c, f),
            Self::Cmyk(c) => fmt::Display::fmt(c, f),
            Self::Hsv(c) => fmt::Display::fmt(c, f),
        }
    }
}

impl From<Rgb> for AnyColour {
    fn from(c: Rgb) -> Self {
        Self::Rgb(c)
    }
}

impl From<Cmyk> for AnyColour {
    fn from(c: Cmyk) -> Self {
        Self::Cmyk(c)
    }
}

impl From<Hsv> for AnyColour {
    fn from(c: Hsv) -> Self {
        Self::Hsv(c)
    }
}
