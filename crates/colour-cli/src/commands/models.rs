//! Model listing command

use anyhow::Result;
use colour_core::ModelId;

pub fn run() -> Result<()> {
    for model in ModelId::ALL {
        println!("{}", describe(model));
    }
    Ok(())
}

/// One line per model: name followed by each channel's inclusive range.
fn describe(model: ModelId) -> String {
    let channels: Vec<String> = model
        .channels()
        .iter()
        .map(|ch| format!("{} [{}, {}]", ch.name, ch.min, ch.max))
        .collect();
    format!("{:<5} {}", model.name(), channels.join("  "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        assert_eq!(
            describe(ModelId::Hsv),
            "HSV   h [0, 360]  s [0, 100]  v [0, 100]"
        );
        assert!(describe(ModelId::Cmyk).starts_with("CMYK  c [0, 100]"));
    }
}
