//! Integration tests for colour-rs crates.
//!
//! This crate contains end-to-end tests that exercise colour-core values
//! through the colour-convert translator and the serde layer.
