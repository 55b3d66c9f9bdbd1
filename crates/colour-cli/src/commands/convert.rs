//! Colour conversion command

use crate::ConvertArgs;
use anyhow::{Context, Result};
use colour_convert::AnyColour;
use colour_core::ModelId;
use tracing::{debug, info, trace};

pub fn run(args: ConvertArgs) -> Result<()> {
    trace!(from = %args.from, to = %args.to, values = ?args.values, "convert::run");

    let output = convert(args.from, &args.values, args.to)?;
    info!(input = ?args.values, output = %output, "Converted colour");

    println!("{}", super::render(&output, args.json)?);
    Ok(())
}

fn convert(from: ModelId, values: &[f64], to: ModelId) -> Result<AnyColour> {
    let input = super::parse_colour(from, values)?;
    debug!(input = %input, target = %to, "Converting");

    input
        .convert_to(to)
        .with_context(|| format!("Cannot convert {} to {}", input, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_rgb_to_hsv() {
        let out = convert(ModelId::Rgb, &[255.0, 0.0, 0.0], ModelId::Hsv).unwrap();
        assert_eq!(out.to_string(), "HSV(h=0 s=1 v=1)");
    }

    #[test]
    fn test_convert_cmyk_to_rgb() {
        let out = convert(ModelId::Cmyk, &[0.0, 0.0, 0.0, 50.0], ModelId::Rgb).unwrap();
        assert_eq!(out.values(), &[127.5, 127.5, 127.5]);
    }

    #[test]
    fn test_convert_reports_target_range_error() {
        let err = convert(ModelId::Rgb, &[255.0, 0.0, 0.0], ModelId::Cmyk).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("Cannot convert RGB(r=255 g=0 b=0) to CMYK"));
        assert!(msg.contains("higher than 100"));
    }

    #[test]
    fn test_convert_rejects_invalid_input() {
        let err = convert(ModelId::Hsv, &[361.0, 0.0, 0.0], ModelId::Rgb).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid HSV colour"));
    }
}
