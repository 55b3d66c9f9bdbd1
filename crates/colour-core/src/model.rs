//! Colour model definitions and their channel range tables.
//!
//! This module provides the [`ColourModel`] trait and the marker types for
//! the three supported models.
//!
//! # Design
//!
//! Models are zero-sized marker types that implement [`ColourModel`]. The
//! channel order and the inclusive range of every channel are associated
//! constants, so the tables are fixed at compile time and shared by every
//! value of that model.
//!
//! # Supported Models
//!
//! | Model | Channels | Ranges |
//! |-------|----------|--------|
//! | [`RgbModel`] | r, g, b | 0..=255 |
//! | [`CmykModel`] | c, m, y, k | 0..=100 |
//! | [`HsvModel`] | h, s, v | h: 0..=360, s/v: 0..=100 |
//!
//! # Usage
//!
//! ```
//! use colour_core::{ColourModel, HsvModel};
//!
//! assert_eq!(HsvModel::NAME, "HSV");
//! assert_eq!(HsvModel::CHANNELS[0].max, 360.0);
//! assert_eq!(HsvModel::index_of("v"), Some(2));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A named channel with its inclusive value range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Channel {
    /// Channel name, e.g. `"r"`.
    pub name: &'static str,
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
}

impl Channel {
    /// Creates a channel description.
    pub const fn new(name: &'static str, min: f64, max: f64) -> Self {
        Self { name, min, max }
    }

    /// Returns `true` if `min <= value <= max`. NaN is never contained.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Trait for colour model marker types.
///
/// `N` is the number of channels. Implementors declare the channels in the
/// order used by positional construction and by
/// [`Colour::get_all`](crate::Colour::get_all).
pub trait ColourModel<const N: usize>:
    Copy + Clone + Default + PartialEq + Send + Sync + fmt::Debug + 'static
{
    /// Human-readable model name, used in errors and display output.
    const NAME: &'static str;

    /// Runtime identifier of this model.
    const ID: ModelId;

    /// Channels in declared order with their ranges.
    const CHANNELS: [Channel; N];

    /// Position of a channel in declared order.
    fn index_of(name: &str) -> Option<usize> {
        Self::CHANNELS.iter().position(|c| c.name == name)
    }

    /// Looks up a channel by name.
    fn channel(name: &str) -> Option<Channel> {
        Self::CHANNELS.iter().find(|c| c.name == name).copied()
    }
}

/// RGB channel table.
pub const RGB_CHANNELS: [Channel; 3] = [
    Channel::new("r", 0.0, 255.0),
    Channel::new("g", 0.0, 255.0),
    Channel::new("b", 0.0, 255.0),
];

/// CMYK channel table.
pub const CMYK_CHANNELS: [Channel; 4] = [
    Channel::new("c", 0.0, 100.0),
    Channel::new("m", 0.0, 100.0),
    Channel::new("y", 0.0, 100.0),
    Channel::new("k", 0.0, 100.0),
];

/// HSV channel table.
pub const HSV_CHANNELS: [Channel; 3] = [
    Channel::new("h", 0.0, 360.0),
    Channel::new("s", 0.0, 100.0),
    Channel::new("v", 0.0, 100.0),
];

/// Additive red/green/blue model, channels 0-255.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RgbModel;

impl ColourModel<3> for RgbModel {
    const NAME: &'static str = "RGB";
    const ID: ModelId = ModelId::Rgb;
    const CHANNELS: [Channel; 3] = RGB_CHANNELS;
}

/// Subtractive cyan/magenta/yellow/key model, channels 0-100.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CmykModel;

impl ColourModel<4> for CmykModel {
    const NAME: &'static str = "CMYK";
    const ID: ModelId = ModelId::Cmyk;
    const CHANNELS: [Channel; 4] = CMYK_CHANNELS;
}

/// Cylindrical hue/saturation/value model.
///
/// Hue is in degrees (0-360); saturation and value accept 0-100.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct HsvModel;

impl ColourModel<3> for HsvModel {
    const NAME: &'static str = "HSV";
    const ID: ModelId = ModelId::Hsv;
    const CHANNELS: [Channel; 3] = HSV_CHANNELS;
}

/// Runtime identifier for a colour model.
///
/// Used where the model is only known at runtime, e.g. when parsing
/// command-line input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ModelId {
    /// [`RgbModel`]
    Rgb,
    /// [`CmykModel`]
    Cmyk,
    /// [`HsvModel`]
    Hsv,
}

impl ModelId {
    /// All models in a fixed order.
    pub const ALL: [ModelId; 3] = [ModelId::Rgb, ModelId::Cmyk, ModelId::Hsv];

    /// Model name as used by [`ColourModel::NAME`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Rgb => RgbModel::NAME,
            Self::Cmyk => CmykModel::NAME,
            Self::Hsv => HsvModel::NAME,
        }
    }

    /// Channel table of the model.
    pub fn channels(self) -> &'static [Channel] {
        match self {
            Self::Rgb => &RGB_CHANNELS,
            Self::Cmyk => &CMYK_CHANNELS,
            Self::Hsv => &HSV_CHANNELS,
        }
    }

    /// Number of channels.
    #[inline]
    pub fn arity(self) -> usize {
        self.channels().len()
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rgb" => Ok(Self::Rgb),
            "cmyk" => Ok(Self::Cmyk),
            "hsv" => Ok(Self::Hsv),
            _ => Err(Error::UnknownModel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_names() {
        assert_eq!(RgbModel::NAME, "RGB");
        assert_eq!(CmykModel::NAME, "CMYK");
        assert_eq!(HsvModel::NAME, "HSV");
    }

    #[test]
    fn test_range_tables() {
        for ch in RgbModel::CHANNELS {
            assert_eq!((ch.min, ch.max), (0.0, 255.0));
        }
        for ch in CmykModel::CHANNELS {
            assert_eq!((ch.min, ch.max), (0.0, 100.0));
        }
        assert_eq!(HsvModel::channel("h"), Some(Channel::new("h", 0.0, 360.0)));
        assert_eq!(HsvModel::channel("s"), Some(Channel::new("s", 0.0, 100.0)));
        assert_eq!(HsvModel::channel("v"), Some(Channel::new("v", 0.0, 100.0)));
    }

    #[test]
    fn test_channel_order() {
        let names: Vec<_> = CmykModel::CHANNELS.iter().map(|c| c.name).collect();
        assert_eq!(names, ["c", "m", "y", "k"]);
        assert_eq!(RgbModel::index_of("b"), Some(2));
        assert_eq!(RgbModel::index_of("x"), None);
    }

    #[test]
    fn test_channel_contains() {
        let ch = Channel::new("r", 0.0, 255.0);
        assert!(ch.contains(0.0));
        assert!(ch.contains(255.0));
        assert!(!ch.contains(-0.001));
        assert!(!ch.contains(255.5));
        assert!(!ch.contains(f64::NAN));
    }

    #[test]
    fn test_model_id_parse() {
        assert_eq!("rgb".parse::<ModelId>().unwrap(), ModelId::Rgb);
        assert_eq!("CMYK".parse::<ModelId>().unwrap(), ModelId::Cmyk);
        assert_eq!("Hsv".parse::<ModelId>().unwrap(), ModelId::Hsv);
        assert!(matches!("lab".parse::<ModelId>(), Err(Error::UnknownModel(_))));
    }

    #[test]
    fn test_model_id_tables_match_markers() {
        assert_eq!(ModelId::Rgb.channels(), &RgbModel::CHANNELS[..]);
        assert_eq!(ModelId::Cmyk.arity(), 4);
        assert_eq!(ModelId::Hsv.to_string(), "HSV");
        assert_eq!(HsvModel::ID, ModelId::Hsv);
    }
}
