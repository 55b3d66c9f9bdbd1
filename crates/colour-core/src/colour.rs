//! Range-checked colour values.
//!
//! [`Colour`] is a single bounded record shared by every model. The model
//! marker supplies the channel order and ranges; the record stores the
//! values and checks them once, at construction.
//!
//! # Aliases
//!
//! - [`Rgb`] = `Colour<RgbModel, 3>`
//! - [`Cmyk`] = `Colour<CmykModel, 4>`
//! - [`Hsv`] = `Colour<HsvModel, 3>`
//!
//! # Example
//!
//! ```
//! use colour_core::{Hsv, Rgb};
//!
//! let rgb = Rgb::rgb(1.0, 2.0, 3.0)?;
//! assert_eq!(rgb.to_display_string(), "r=1 g=2 b=3 ");
//! assert_eq!(rgb.get("g")?, 2.0);
//!
//! assert!(Hsv::hsv(361.0, 0.0, 0.0).is_err());
//! # Ok::<(), colour_core::Error>(())
//! ```
//!
//! # Mutation
//!
//! [`Colour::set`] writes a channel without re-checking its range, so a
//! mutated value can leave its model's bounds. Call [`Colour::validate`]
//! to re-check.

use std::fmt;
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::model::{CmykModel, ColourModel, HsvModel, ModelId, RgbModel};

/// A colour value of model `M` with `N` channels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Colour<M: ColourModel<N>, const N: usize> {
    values: [f64; N],
    _model: PhantomData<M>,
}

/// RGB colour, channels 0-255.
pub type Rgb = Colour<RgbModel, 3>;

/// CMYK colour, channels 0-100.
pub type Cmyk = Colour<CmykModel, 4>;

/// HSV colour, hue 0-360, saturation and value 0-100.
pub type Hsv = Colour<HsvModel, 3>;

impl<M: ColourModel<N>, const N: usize> Colour<M, N> {
    /// Builds a colour from values in declared channel order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] for the first channel whose value is
    /// not within its inclusive range (NaN included).
    pub fn new(values: [f64; N]) -> Result<Self> {
        check_ranges::<M, N>(&values)?;
        trace!(model = M::NAME, values = ?values, "colour::new");
        Ok(Self {
            values,
            _model: PhantomData,
        })
    }

    /// Builds a colour from `(channel, value)` pairs.
    ///
    /// Pairs may come in any order. A repeated name keeps the last value.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownChannel`] if a name is not declared for the model
    /// - [`Error::MissingChannel`] if a declared channel has no value
    /// - [`Error::OutOfRange`] as for [`Colour::new`]
    pub fn from_named<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut slots: [Option<f64>; N] = [None; N];
        for (name, value) in pairs {
            let idx = M::index_of(name).ok_or_else(|| Error::unknown_channel(M::NAME, name))?;
            slots[idx] = Some(value);
        }

        let mut values = [0.0; N];
        for (i, ch) in M::CHANNELS.iter().enumerate() {
            values[i] = slots[i].ok_or_else(|| Error::missing_channel(M::NAME, ch.name))?;
        }
        Self::new(values)
    }

    /// Runtime identifier of this colour's model.
    #[inline]
    pub fn model(&self) -> ModelId {
        M::ID
    }

    /// Value of a named channel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChannel`] if `name` is not declared.
    pub fn get(&self, name: &str) -> Result<f64> {
        M::index_of(name)
            .map(|i| self.values[i])
            .ok_or_else(|| Error::unknown_channel(M::NAME, name))
    }

    /// All channel values in declared order.
    #[inline]
    pub fn get_all(&self) -> [f64; N] {
        self.values
    }

    /// Borrowed view of the channel values.
    #[inline]
    pub fn values(&self) -> &[f64; N] {
        &self.values
    }

    /// Overwrites a named channel. The range is NOT re-checked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChannel`] if `name` is not declared.
    pub fn set(&mut self, name: &str, value: f64) -> Result<()> {
        let idx = M::index_of(name).ok_or_else(|| Error::unknown_channel(M::NAME, name))?;
        self.values[idx] = value;
        Ok(())
    }

    /// Re-runs the construction range check on the current values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] for the first offending channel.
    pub fn validate(&self) -> Result<()> {
        check_ranges::<M, N>(&self.values)
    }

    /// Returns `true` if every channel is within range.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Diagnostic string: `"name=value "` per channel in declared order,
    /// trailing space included.
    pub fn to_display_string(&self) -> String {
        let mut out = String::new();
        for (ch, value) in M::CHANNELS.iter().zip(self.values.iter()) {
            out.push_str(&format!("{}={} ", ch.name, value));
        }
        out
    }
}

impl<M: ColourModel<N>, const N: usize> Default for Colour<M, N> {
    /// Every channel at its lower bound.
    fn default() -> Self {
        Self {
            values: M::CHANNELS.map(|c| c.min),
            _model: PhantomData,
        }
    }
}

impl<M: ColourModel<N>, const N: usize> fmt::Display for Colour<M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", M::NAME, self.to_display_string().trim_end())
    }
}

fn check_ranges<M: ColourModel<N>, const N: usize>(values: &[f64; N]) -> Result<()> {
    for (ch, &value) in M::CHANNELS.iter().zip(values.iter()) {
        if !ch.contains(value) {
            debug!(model = M::NAME, channel = ch.name, value, "channel out of range");
            return Err(Error::out_of_range(M::NAME, ch.name, value, ch.min, ch.max));
        }
    }
    Ok(())
}

impl Colour<RgbModel, 3> {
    /// Builds an RGB colour.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if a channel is outside 0-255.
    pub fn rgb(r: f64, g: f64, b: f64) -> Result<Self> {
        Self::new([r, g, b])
    }

    /// Red channel.
    #[inline]
    pub fn r(&self) -> f64 {
        self.values[0]
    }

    /// Green channel.
    #[inline]
    pub fn g(&self) -> f64 {
        self.values[1]
    }

    /// Blue channel.
    #[inline]
    pub fn b(&self) -> f64 {
        self.values[2]
    }
}

impl Colour<CmykModel, 4> {
    /// Builds a CMYK colour.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if a channel is outside 0-100.
    pub fn cmyk(c: f64, m: f64, y: f64, k: f64) -> Result<Self> {
        Self::new([c, m, y, k])
    }

    /// Cyan channel.
    #[inline]
    pub fn c(&self) -> f64 {
        self.values[0]
    }

    /// Magenta channel.
    #[inline]
    pub fn m(&self) -> f64 {
        self.values[1]
    }

    /// Yellow channel.
    #[inline]
    pub fn y(&self) -> f64 {
        self.values[2]
    }

    /// Key (black) channel.
    #[inline]
    pub fn k(&self) -> f64 {
        self.values[3]
    }
}

impl Colour<HsvModel, 3> {
    /// Builds an HSV colour.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if hue is outside 0-360 or saturation
    /// or value is outside 0-100.
    pub fn hsv(h: f64, s: f64, v: f64) -> Result<Self> {
        Self::new([h, s, v])
    }

    /// Hue in degrees.
    #[inline]
    pub fn h(&self) -> f64 {
        self.values[0]
    }

    /// Saturation.
    #[inline]
    pub fn s(&self) -> f64 {
        self.values[1]
    }

    /// Value.
    #[inline]
    pub fn v(&self) -> f64 {
        self.values[2]
    }
}
