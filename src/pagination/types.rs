//! Pagination types and traits
//!
//! Defines the generator configurations and the trait shared by all
//! page-list strategies.

use crate::error::{Error, Result};
use crate::types::PageList;
use serde::{Deserialize, Serialize};

/// Default window width for range mode
pub const DEFAULT_WINDOW_SIZE: u32 = 3;

/// Default entry count for count mode when none is given
pub const DEFAULT_COUNT: u32 = 8;

/// Smallest count that still fits first, last, two ellipses and one page
pub const MIN_COUNT: u32 = 5;

// ============================================================================
// Range Mode
// ============================================================================

/// How range mode decides whether an ellipsis is needed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Measure the gap between the window edge and the first/last page
    #[default]
    Edge,
    /// Measure the gap between the current page and the first/last page
    Center,
}

/// Configuration for sliding-window generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct RangeConfig {
    /// Width of the window around the current page (must be odd)
    #[serde(alias = "range")]
    pub window_size: u32,
    /// Let the window shrink near the edges instead of sliding inward
    pub truncate: bool,
    /// Ellipsis rule
    #[serde(alias = "distanceFrom")]
    pub distance_from: DistanceMetric,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            truncate: false,
            distance_from: DistanceMetric::Edge,
        }
    }
}

impl RangeConfig {
    /// Create a range config with the given window size
    pub fn new(window_size: u32) -> Self {
        Self {
            window_size,
            ..Default::default()
        }
    }

    /// Shrink the window near the edges
    pub fn truncated(mut self) -> Self {
        self.truncate = true;
        self
    }

    /// Use the given ellipsis rule
    pub fn with_distance(mut self, distance_from: DistanceMetric) -> Self {
        self.distance_from = distance_from;
        self
    }

    /// Reject even window sizes
    pub fn validate(&self) -> Result<()> {
        if self.window_size % 2 == 0 {
            return Err(Error::invalid_value(
                "window_size",
                format!("window size must be odd (got {})", self.window_size),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Count Mode
// ============================================================================

/// Which side of the current page gets the larger share of slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bias {
    /// Favor pages before the current page
    Left,
    /// Favor pages after the current page
    #[default]
    Right,
}

/// Configuration for fixed-length generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct CountConfig {
    /// Exact number of entries to produce when pages overflow
    pub count: u32,
    /// Slot distribution bias
    pub bias: Bias,
}

impl Default for CountConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            bias: Bias::Right,
        }
    }
}

impl CountConfig {
    /// Create a count config with right bias
    pub fn new(count: u32) -> Self {
        Self {
            count,
            bias: Bias::Right,
        }
    }

    /// Use the given bias
    pub fn with_bias(mut self, bias: Bias) -> Self {
        self.bias = bias;
        self
    }

    /// Reject counts too small to hold both ellipses
    pub fn validate(&self) -> Result<()> {
        if self.count < MIN_COUNT {
            return Err(Error::invalid_value(
                "count",
                format!("count must be at least {MIN_COUNT} (got {})", self.count),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Generation Config
// ============================================================================

/// Generator selection, one variant per strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GenerationConfig {
    /// Sliding window around the current page
    Range(RangeConfig),
    /// Fixed number of entries
    Count(CountConfig),
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::Range(RangeConfig::default())
    }
}

impl From<RangeConfig> for GenerationConfig {
    fn from(config: RangeConfig) -> Self {
        Self::Range(config)
    }
}

impl From<CountConfig> for GenerationConfig {
    fn from(config: CountConfig) -> Self {
        Self::Count(config)
    }
}

impl GenerationConfig {
    /// Validate the selected strategy's configuration
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Range(config) => config.validate(),
            Self::Count(config) => config.validate(),
        }
    }

    /// Short mode name, used in logs and CLI output
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Range(_) => "range",
            Self::Count(_) => "count",
        }
    }
}

// ============================================================================
// Request
// ============================================================================

/// One generation call: where we are, how many pages exist, and how to lay them out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Page currently viewed (1-indexed)
    pub current_page: u32,
    /// Number of pages available
    pub total_pages: u32,
    /// Layout strategy
    #[serde(default)]
    pub config: GenerationConfig,
}

impl GenerationRequest {
    /// Create a request with the default range layout
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page,
            total_pages,
            config: GenerationConfig::default(),
        }
    }

    /// Use the given layout
    pub fn with_config(mut self, config: impl Into<GenerationConfig>) -> Self {
        self.config = config.into();
        self
    }
}

/// Core trait for page-list strategies
pub trait PageGenerator: Send + Sync {
    /// Build the page list for `current_page` out of `total_pages`
    fn generate(&self, current_page: u32, total_pages: u32) -> Result<PageList>;
}

/// Check that the current page lies inside `1..=total_pages`
///
/// With zero pages there is nothing to point at, so any current page is accepted.
pub fn check_position(current_page: u32, total_pages: u32) -> Result<()> {
    if total_pages == 0 {
        return Ok(());
    }
    if current_page == 0 || current_page > total_pages {
        return Err(Error::invalid_input(format!(
            "current page {current_page} is outside 1..={total_pages}"
        )));
    }
    Ok(())
}
