//! Config loader module
//!
//! Parse generator configuration from YAML/JSON files and flat options.
//!
//! # Overview
//!
//! The loader module provides:
//! - `GenerationOptions` - Flat options, `count` selects count mode
//! - YAML parsing with validation into a `GenerationConfig`

mod parser;
mod types;

pub use parser::{load_config, load_config_from_str};
pub use types::GenerationOptions;

#[cfg(test)]
mod tests;
