//! Conversions between RGB, CMYK and HSV.
//!
//! Every function takes its input by reference, leaves it untouched and
//! builds the result through the validating constructor of the target
//! type. A result channel outside the target range is therefore reported
//! as [`ConvertError::Colour`] instead of producing an invalid value.
//!
//! # Scales
//!
//! | Model | Input/Output scale |
//! |-------|--------------------|
//! | RGB | 0-255 per channel |
//! | CMYK | 0-100 per channel |
//! | HSV | hue in degrees; `rgb_to_hsv` yields s and v as 0-1 fractions, `hsv_to_rgb` reads them the same way |
//!
//! # Formulas
//!
//! ```text
//! CMYK -> RGB:  R = 255 * (1 - C/100) * (1 - K/100)
//! HSV  -> RGB:  C = V*S, X = C * (1 - |(H/60 mod 2) - 1|), m = V - C
//!               (r0, g0, b0) picked by 60 degree sector, out = (x + m) * 255
//! RGB  -> HSV:  see rgb_to_hsv
//! ```
//!
//! `mod` is the floored modulus ([`f64::rem_euclid`]), never negative for a
//! positive divisor.

use colour_core::{Cmyk, Hsv, Rgb};
use tracing::trace;

use crate::error::{ConvertError, ConvertResult};

/// RGB to CMYK.
///
/// `k = min(100 - x/2.55)` over the three channels, then each of c, m, y
/// comes from [`cmy_from_raw_channel`]. That helper reads the raw 0-255
/// channel, so only near-black achromatic inputs such as `RGB(1, 1, 1)`
/// land inside CMYK's range; most inputs fail with a range error.
///
/// # Errors
///
/// [`ConvertError::Colour`] if a computed channel is outside 0-100.
///
/// # Example
///
/// ```rust
/// use colour_convert::rgb_to_cmyk;
/// use colour_core::Rgb;
///
/// let cmyk = rgb_to_cmyk(&Rgb::rgb(1.0, 1.0, 1.0)?)?;
/// assert!((cmyk.k() - 99.6078).abs() < 1e-4);
///
/// assert!(rgb_to_cmyk(&Rgb::rgb(255.0, 0.0, 0.0)?).unwrap_err().is_range_error());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn rgb_to_cmyk(rgb: &Rgb) -> ConvertResult<Cmyk> {
    trace!(input = %rgb, "convert::rgb_to_cmyk");
    let [r, g, b] = rgb.get_all();

    let k = black_candidate(r)
        .min(black_candidate(g))
        .min(black_candidate(b));

    let c = cmy_from_raw_channel(r, k);
    let m = cmy_from_raw_channel(g, k);
    let y = cmy_from_raw_channel(b, k);

    Ok(Cmyk::cmyk(c, m, y, k)?)
}

/// Key value a single 0-255 channel would need, on the 0-100 scale.
#[inline]
fn black_candidate(channel: f64) -> f64 {
    100.0 - channel / 2.55
}

/// One of c, m or y from a raw 0-255 channel and a 0-100 key.
///
/// The channel is NOT normalised to 0-1 before use. Replacing `channel`
/// with `channel / 255.0` (and `k` with `k / 100.0`) gives the textbook
/// formula.
#[inline]
pub fn cmy_from_raw_channel(channel: f64, k: f64) -> f64 {
    255.0 * (1.0 - channel) * (1.0 - k)
}

/// CMYK to RGB.
///
/// # Errors
///
/// [`ConvertError::Colour`] if a result channel leaves 0-255, which only
/// happens for CMYK values mutated out of range.
///
/// # Example
///
/// ```rust
/// use colour_convert::cmyk_to_rgb;
/// use colour_core::Cmyk;
///
/// let rgb = cmyk_to_rgb(&Cmyk::cmyk(0.0, 0.0, 0.0, 50.0)?)?;
/// assert_eq!(rgb.get_all(), [127.5, 127.5, 127.5]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn cmyk_to_rgb(cmyk: &Cmyk) -> ConvertResult<Rgb> {
    trace!(input = %cmyk, "convert::cmyk_to_rgb");
    let [c, m, y, k] = cmyk.get_all();

    let channel = |v: f64| 255.0 * (1.0 - v / 100.0) * (1.0 - k / 100.0);

    Ok(Rgb::rgb(channel(c), channel(m), channel(y))?)
}

/// HSV to RGB using the six-sector algorithm.
///
/// Sectors are half-open 60 degree intervals starting at 0; `h == 360`
/// maps to the first one.
///
/// # Errors
///
/// - [`ConvertError::InvalidHue`] if `h` is negative, above 360 or NaN
/// - [`ConvertError::Colour`] if a result channel leaves 0-255
///
/// # Example
///
/// ```rust
/// use colour_convert::hsv_to_rgb;
/// use colour_core::Hsv;
///
/// let rgb = hsv_to_rgb(&Hsv::hsv(120.0, 1.0, 1.0)?)?;
/// assert_eq!(rgb.get_all(), [0.0, 255.0, 0.0]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn hsv_to_rgb(hsv: &Hsv) -> ConvertResult<Rgb> {
    trace!(input = %hsv, "convert::hsv_to_rgb");
    let [h, s, v] = hsv.get_all();

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = v - c;

    let (r0, g0, b0) = if (0.0..60.0).contains(&h) || h == 360.0 {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, c)
    } else if (300.0..360.0).contains(&h) {
        (c, 0.0, x)
    } else {
        return Err(ConvertError::invalid_hue(h, hsv.to_display_string()));
    };

    let channel = |component: f64| (component + m) * 255.0;

    Ok(Rgb::rgb(channel(r0), channel(g0), channel(b0))?)
}

/// RGB to HSV.
///
/// ```text
/// r0, g0, b0 = r/255, g/255, b/255
/// delta = max - min
/// h = 0                               if delta == 0
///   = 60 * ((g0 - b0)/delta mod 6)    if max == r0
///   = 60 * ((b0 - r0)/delta + 2)      if max == g0
///   = 60 * ((r0 - g0)/delta + 4)      otherwise
/// s = 0 if max == 0 else delta/max
/// v = max
/// ```
///
/// When several channels share the maximum, red wins over green and green
/// over blue.
///
/// # Errors
///
/// [`ConvertError::Colour`] if the result fails HSV construction, which
/// only happens for RGB values mutated out of range.
///
/// # Example
///
/// ```rust
/// use colour_convert::rgb_to_hsv;
/// use colour_core::{Hsv, Rgb};
///
/// let hsv = rgb_to_hsv(&Rgb::rgb(255.0, 0.0, 0.0)?)?;
/// assert_eq!(hsv, Hsv::hsv(0.0, 1.0, 1.0)?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn rgb_to_hsv(rgb: &Rgb) -> ConvertResult<Hsv> {
    trace!(input = %rgb, "convert::rgb_to_hsv");
    let [r, g, b] = rgb.get_all();

    let r0 = r / 255.0;
    let g0 = g / 255.0;
    let b0 = b / 255.0;

    let cmax = r0.max(g0).max(b0);
    let cmin = r0.min(g0).min(b0);
    let delta = cmax - cmin;

    let h = if delta == 0.0 {
        0.0
    } else if cmax == r0 {
        60.0 * ((g0 - b0) / delta).rem_euclid(6.0)
    } else if cmax == g0 {
        60.0 * ((b0 - r0) / delta + 2.0)
    } else {
        60.0 * ((r0 - g0) / delta + 4.0)
    };

    let s = if cmax == 0.0 { 0.0 } else { delta / cmax };

    Ok(Hsv::hsv(h, s, cmax)?)
}

/// HSV to CMYK, via RGB.
///
/// # Errors
///
/// Any error of [`hsv_to_rgb`] or [`rgb_to_cmyk`].
pub fn hsv_to_cmyk(hsv: &Hsv) -> ConvertResult<Cmyk> {
    trace!(input = %hsv, "convert::hsv_to_cmyk");
    rgb_to_cmyk(&hsv_to_rgb(hsv)?)
}

/// CMYK to HSV, via RGB.
///
/// # Errors
///
/// Any error of [`cmyk_to_rgb`] or [`rgb_to_hsv`].
pub fn cmyk_to_hsv(cmyk: &Cmyk) -> ConvertResult<Hsv> {
    trace!(input = %cmyk, "convert::cmyk_to_hsv");
    rgb_to_hsv(&cmyk_to_rgb(cmyk)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn rgb(r: f64, g: f64, b: f64) -> Rgb {
        Rgb::rgb(r, g, b).unwrap()
    }

    fn hsv(h: f64, s: f64, v: f64) -> Hsv {
        Hsv::hsv(h, s, v).unwrap()
    }

    fn cmyk(c: f64, m: f64, y: f64, k: f64) -> Cmyk {
        Cmyk::cmyk(c, m, y, k).unwrap()
    }

    fn assert_rgb_close(a: &Rgb, b: &Rgb) {
        for (x, y) in a.get_all().iter().zip(b.get_all().iter()) {
            assert_abs_diff_eq!(*x, *y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_rgb_to_hsv_black() {
        assert_eq!(rgb_to_hsv(&rgb(0.0, 0.0, 0.0)).unwrap(), hsv(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_rgb_to_hsv_pure_red_exact() {
        assert_eq!(rgb_to_hsv(&rgb(255.0, 0.0, 0.0)).unwrap(), hsv(0.0, 1.0, 1.0));
    }

    #[test]
    fn test_rgb_to_hsv_primaries() {
        assert_eq!(rgb_to_hsv(&rgb(0.0, 255.0, 0.0)).unwrap(), hsv(120.0, 1.0, 1.0));
        assert_eq!(rgb_to_hsv(&rgb(0.0, 0.0, 255.0)).unwrap(), hsv(240.0, 1.0, 1.0));
        assert_eq!(rgb_to_hsv(&rgb(255.0, 255.0, 255.0)).unwrap(), hsv(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_rgb_to_hsv_ties() {
        // r == g: red branch
        assert_eq!(rgb_to_hsv(&rgb(255.0, 255.0, 0.0)).unwrap().h(), 60.0);
        // g == b: green branch
        assert_eq!(rgb_to_hsv(&rgb(0.0, 255.0, 255.0)).unwrap().h(), 180.0);
        // r == b: red branch, negative quotient wraps through mod 6
        assert_eq!(rgb_to_hsv(&rgb(255.0, 0.0, 255.0)).unwrap().h(), 300.0);
    }

    #[test]
    fn test_rgb_to_hsv_negative_hue_wraps() {
        let out = rgb_to_hsv(&rgb(255.0, 0.0, 127.5)).unwrap();
        assert_abs_diff_eq!(out.h(), 330.0, epsilon = 1e-9);
    }

    #[test]
    fn test_hsv_to_rgb_black() {
        assert_eq!(hsv_to_rgb(&hsv(0.0, 0.0, 0.0)).unwrap(), rgb(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_hsv_to_rgb_sectors() {
        let cases = [
            (0.0, [255.0, 0.0, 0.0]),
            (60.0, [255.0, 255.0, 0.0]),
            (120.0, [0.0, 255.0, 0.0]),
            (180.0, [0.0, 255.0, 255.0]),
            (240.0, [0.0, 0.0, 255.0]),
            (300.0, [255.0, 0.0, 255.0]),
            (360.0, [255.0, 0.0, 0.0]),
        ];
        for (h, expected) in cases {
            let out = hsv_to_rgb(&hsv(h, 1.0, 1.0)).unwrap();
            assert_eq!(out.get_all(), expected, "h = {h}");
        }
    }

    #[test]
    fn test_hsv_to_rgb_invalid_hue() {
        for bad in [-10.0, 400.0, f64::NAN] {
            let mut input = hsv(0.0, 1.0, 1.0);
            input.set("h", bad).unwrap();
            let err = hsv_to_rgb(&input).unwrap_err();
            assert!(matches!(err, ConvertError::InvalidHue { .. }), "h = {bad}");
        }
    }

    #[test]
    fn test_hsv_to_rgb_out_of_range_result() {
        // s and v on the 0-100 scale overflow RGB
        let err = hsv_to_rgb(&hsv(360.0, 100.0, 100.0)).unwrap_err();
        assert!(err.is_range_error());
    }

    #[test]
    fn test_cmyk_to_rgb() {
        assert_eq!(cmyk_to_rgb(&cmyk(0.0, 0.0, 0.0, 0.0)).unwrap(), rgb(255.0, 255.0, 255.0));
        assert_eq!(cmyk_to_rgb(&cmyk(0.0, 0.0, 0.0, 100.0)).unwrap(), rgb(0.0, 0.0, 0.0));
        assert_eq!(cmyk_to_rgb(&cmyk(0.0, 100.0, 100.0, 0.0)).unwrap(), rgb(255.0, 0.0, 0.0));
        assert_eq!(cmyk_to_rgb(&cmyk(50.0, 0.0, 100.0, 0.0)).unwrap(), rgb(127.5, 255.0, 0.0));
    }

    #[test]
    fn test_rgb_to_cmyk_near_black() {
        let out = rgb_to_cmyk(&rgb(1.0, 1.0, 1.0)).unwrap();
        assert_eq!(out.c(), 0.0);
        assert_eq!(out.m(), 0.0);
        assert_eq!(out.y(), 0.0);
        assert_abs_diff_eq!(out.k(), 100.0 - 1.0 / 2.55, epsilon = 1e-12);
    }

    #[test]
    fn test_rgb_to_cmyk_raw_channel_formula() {
        assert_eq!(cmy_from_raw_channel(1.0, 42.0), 0.0);
        assert_eq!(cmy_from_raw_channel(0.0, 0.0), 255.0);
        assert_eq!(cmy_from_raw_channel(2.0, 2.0), 255.0);
    }

    #[test]
    fn test_rgb_to_cmyk_out_of_range() {
        for input in [rgb(0.0, 0.0, 0.0), rgb(255.0, 0.0, 0.0), rgb(255.0, 255.0, 255.0)] {
            let err = rgb_to_cmyk(&input).unwrap_err();
            assert!(err.is_range_error(), "{input}");
        }
    }

    #[test]
    fn test_rgb_cmyk_roundtrip_where_defined() {
        let original = rgb(1.0, 1.0, 1.0);
        let back = cmyk_to_rgb(&rgb_to_cmyk(&original).unwrap()).unwrap();
        assert_rgb_close(&back, &original);
    }

    #[test]
    fn test_hsv_rgb_roundtrip() {
        for h in [0.0, 30.0, 90.0, 120.0, 150.0, 210.0, 240.0, 270.0, 330.0, 360.0] {
            for s in [0.0, 0.25, 0.5, 1.0] {
                for v in [0.0, 0.5, 1.0] {
                    let once = hsv_to_rgb(&hsv(h, s, v)).unwrap();
                    let twice = hsv_to_rgb(&rgb_to_hsv(&once).unwrap()).unwrap();
                    assert_rgb_close(&twice, &once);
                }
            }
        }
    }

    #[test]
    fn test_compositions() {
        for input in [hsv(0.0, 0.0, 0.0), hsv(90.0, 0.5, 1.0), hsv(10.0, 0.0, 1.0 / 255.0)] {
            let via_rgb = hsv_to_rgb(&input).and_then(|rgb| rgb_to_cmyk(&rgb));
            assert_eq!(hsv_to_cmyk(&input), via_rgb);
        }
        for input in [cmyk(0.0, 0.0, 0.0, 0.0), cmyk(20.0, 40.0, 60.0, 10.0)] {
            let via_rgb = cmyk_to_rgb(&input).and_then(|rgb| rgb_to_hsv(&rgb));
            assert_eq!(cmyk_to_hsv(&input), via_rgb);
        }
        assert_eq!(cmyk_to_hsv(&cmyk(0.0, 100.0, 100.0, 0.0)).unwrap(), hsv(0.0, 1.0, 1.0));
    }

    #[test]
    fn test_inputs_untouched() {
        let input = rgb(10.0, 20.0, 30.0);
        let copy = input;
        let _ = rgb_to_hsv(&input);
        let _ = rgb_to_cmyk(&input);
        assert_eq!(input, copy);
    }
}
