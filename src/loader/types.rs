//! Loader types
//!
//! Flat, declarative generation options as they appear in config files,
//! HTTP request bodies and CLI flags.

use crate::error::{Error, Result};
use crate::pagination::{Bias, CountConfig, DistanceMetric, GenerationConfig, RangeConfig};
use serde::{Deserialize, Serialize};

// ============================================================================
// Generation Options
// ============================================================================

/// Flat generation options
///
/// A present `count` selects count mode; otherwise range mode is used with
/// defaults for anything left out. Mixing fields of both modes is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct GenerationOptions {
    /// Range mode: window width (must be odd)
    #[serde(default, alias = "window_size", skip_serializing_if = "Option::is_none")]
    pub range: Option<u32>,
    /// Range mode: shrink the window near the edges
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncate: Option<bool>,
    /// Range mode: ellipsis rule
    #[serde(default, alias = "distanceFrom", skip_serializing_if = "Option::is_none")]
    pub distance_from: Option<DistanceMetric>,
    /// Count mode: exact number of entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Count mode: slot distribution bias
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bias: Option<Bias>,
}

impl GenerationOptions {
    /// Check if any range-only option is set
    fn has_range_fields(&self) -> bool {
        self.range.is_some() || self.truncate.is_some() || self.distance_from.is_some()
    }

    /// Resolve the options into a strategy configuration
    ///
    /// Only the shape is checked here; value checks (odd window, minimum
    /// count) happen in the generators.
    pub fn into_config(self) -> Result<GenerationConfig> {
        if let Some(count) = self.count {
            if self.has_range_fields() {
                return Err(Error::config(
                    "'count' cannot be combined with 'range', 'truncate' or 'distance_from'",
                ));
            }
            return Ok(GenerationConfig::Count(CountConfig {
                count,
                bias: self.bias.unwrap_or_default(),
            }));
        }

        if self.bias.is_some() {
            return Err(Error::config("'bias' requires 'count'"));
        }

        let defaults = RangeConfig::default();
        Ok(GenerationConfig::Range(RangeConfig {
            window_size: self.range.unwrap_or(defaults.window_size),
            truncate: self.truncate.unwrap_or(defaults.truncate),
            distance_from: self.distance_from.unwrap_or(defaults.distance_from),
        }))
    }
}

impl From<GenerationConfig> for GenerationOptions {
    fn from(config: GenerationConfig) -> Self {
        match config {
            GenerationConfig::Range(range) => Self {
                range: Some(range.window_size),
                truncate: Some(range.truncate),
                distance_from: Some(range.distance_from),
                ..Default::default()
            },
            GenerationConfig::Count(count) => Self {
                count: Some(count.count),
                bias: Some(count.bias),
                ..Default::default()
            },
        }
    }
}
