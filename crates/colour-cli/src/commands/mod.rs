//! CLI command implementations

pub mod check;
pub mod convert;
pub mod models;

use anyhow::{Context, Result};
use colour_convert::AnyColour;
use colour_core::ModelId;

/// Builds a colour from command-line values.
pub fn parse_colour(model: ModelId, values: &[f64]) -> Result<AnyColour> {
    AnyColour::from_values(model, values)
        .with_context(|| format!("Invalid {} colour: {:?}", model, values))
}

/// Formats a colour for stdout.
pub fn render(colour: &AnyColour, json: bool) -> Result<String> {
    if json {
        serde_json::to_string(colour).context("Failed to serialize colour")
    } else {
        Ok(colour.to_string())
    }
}
