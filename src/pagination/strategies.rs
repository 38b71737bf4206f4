//! Page-list strategy implementations
//!
//! Each strategy handles a specific layout: a sliding window of fixed width,
//! or a fixed number of entries.

use super::types::{
    check_position, Bias, CountConfig, DistanceMetric, GenerationConfig, GenerationRequest,
    PageGenerator, RangeConfig,
};
use crate::error::Result;
use crate::loader::GenerationOptions;
use crate::types::{PageEntry, PageList};
use tracing::{debug, warn};

// ============================================================================
// Arithmetic Helpers
// ============================================================================

/// Absolute difference between two page positions
pub fn distance(a: i64, b: i64) -> i64 {
    (a - b).abs()
}

/// Pages on each side of the current page in a window of `window_size`
pub fn half_window(window_size: u32) -> u32 {
    window_size / 2
}

/// Bound `value` to `[lower, upper]`; the lower bound wins when they cross
///
/// Unlike `Ord::clamp` this never panics, which matters when there are fewer
/// pages than the window is wide.
pub fn clamp(value: i64, lower: i64, upper: i64) -> i64 {
    value.min(upper).max(lower)
}

// ============================================================================
// Range Mode
// ============================================================================

/// Sliding-window generation
///
/// Produces: first page, optional left ellipsis, the window's interior pages,
/// optional right ellipsis, last page.
/// With the defaults, page 5 of 10 renders as `1 … 4 5 6 … 10`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeGenerator {
    /// Window configuration
    pub config: RangeConfig,
}

impl RangeGenerator {
    /// Create a new range generator
    pub fn new(config: RangeConfig) -> Self {
        Self { config }
    }

    /// Inclusive window bounds, possibly extending past either end
    fn window(&self, current: i64, total: i64) -> (i64, i64) {
        let size = i64::from(self.config.window_size);
        let half = i64::from(half_window(self.config.window_size));

        if self.config.truncate {
            ((current - half).max(1), (current + half).min(total))
        } else {
            let start = clamp(current - half, 1, total - size + 1);
            (start, (start + size - 1).min(total))
        }
    }
}

impl PageGenerator for RangeGenerator {
    fn generate(&self, current_page: u32, total_pages: u32) -> Result<PageList> {
        self.config.validate()?;
        check_position(current_page, total_pages)?;

        if total_pages == 0 {
            return Ok(PageList::new());
        }

        let current = i64::from(current_page);
        let total = i64::from(total_pages);
        let half = i64::from(half_window(self.config.window_size));
        let (start, end) = self.window(current, total);

        let (needs_left, needs_right) = match self.config.distance_from {
            DistanceMetric::Edge => (distance(start, 1) > 1, distance(end, total) > 1),
            DistanceMetric::Center => (
                distance(current, 1) > half,
                distance(current, total) > half,
            ),
        };

        let capacity = self.config.window_size.min(total_pages) as usize + 4;
        let mut pages = PageList::with_capacity(capacity);
        pages.push_page(1);

        if needs_left {
            pages.push(PageEntry::LeftEllipsis);
        }

        // First and last page are emitted separately
        for page in start..=end {
            if page > 1 && page < total {
                pages.push_page(page as u32);
            }
        }

        if needs_right {
            pages.push(PageEntry::RightEllipsis);
        }

        if total_pages > 1 {
            pages.push_page(total_pages);
        }

        debug!(
            current_page,
            total_pages,
            start,
            end,
            entries = pages.len(),
            "Generated range page list"
        );

        Ok(pages)
    }
}

// ============================================================================
// Count Mode
// ============================================================================

/// Fixed-length generation
///
/// When the pages do not all fit, produces exactly `count` entries: first
/// page, last page, up to two ellipses, and a block of pages around the
/// current one. `Bias::Right` keeps more pages after the current page.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountGenerator {
    /// Count configuration
    pub config: CountConfig,
}

impl CountGenerator {
    /// Create a new count generator
    pub fn new(config: CountConfig) -> Self {
        Self { config }
    }

    /// Distance thresholds from the first and last page that call for an ellipsis
    fn thresholds(&self) -> (i64, i64) {
        let count = i64::from(self.config.count);
        let floor_half = count / 2;
        // ceil((count + 1) / 2)
        let ceil_half = (count + 2) / 2;

        match self.config.bias {
            Bias::Right => (floor_half, ceil_half),
            Bias::Left => (ceil_half, floor_half),
        }
    }
}

impl PageGenerator for CountGenerator {
    fn generate(&self, current_page: u32, total_pages: u32) -> Result<PageList> {
        self.config.validate()?;
        check_position(current_page, total_pages)?;

        if self.config.count >= total_pages {
            let mut pages = PageList::with_capacity(total_pages as usize);
            pages.extend_pages(1..=total_pages);
            debug!(current_page, total_pages, "All pages fit, no ellipsis needed");
            return Ok(pages);
        }

        let current = i64::from(current_page);
        let total = i64::from(total_pages);
        let (left_threshold, right_threshold) = self.thresholds();

        let needs_left = distance(current, 1) >= left_threshold;
        let needs_right = distance(current, total) >= right_threshold;

        // Interior slots left after first/last page and the ellipses
        let n =
            i64::from(self.config.count) - 2 - i64::from(needs_left) - i64::from(needs_right);

        let mut pages = PageList::with_capacity(self.config.count as usize);
        pages.push_page(1);

        match (needs_left, needs_right) {
            (true, true) => {
                pages.push(PageEntry::LeftEllipsis);
                let lean = match self.config.bias {
                    Bias::Right => n - 1,
                    Bias::Left => n,
                };
                let left = clamp(current - lean / 2, 2, total - n);
                let right = (left + n).min(total);
                pages.extend_pages(left as u32..right as u32);
                pages.push(PageEntry::RightEllipsis);
            }
            (true, false) => {
                pages.push(PageEntry::LeftEllipsis);
                pages.extend_pages((total - n) as u32..total_pages);
            }
            (false, true) => {
                pages.extend_pages(2..(n + 2) as u32);
                pages.push(PageEntry::RightEllipsis);
            }
            (false, false) => {
                // Only reachable when the thresholds leave no room, which the
                // position check rules out for count < total_pages.
                warn!(
                    current_page,
                    total_pages,
                    count = self.config.count,
                    "No ellipsis needed although pages overflow count; interior left empty"
                );
            }
        }

        pages.push_page(total_pages);

        debug!(
            current_page,
            total_pages,
            count = self.config.count,
            needs_left,
            needs_right,
            entries = pages.len(),
            "Generated count page list"
        );

        Ok(pages)
    }
}

// ============================================================================
// Dispatcher
// ============================================================================

impl GenerationConfig {
    /// Build the strategy selected by this config
    pub fn generator(&self) -> Box<dyn PageGenerator> {
        match *self {
            Self::Range(config) => Box::new(RangeGenerator::new(config)),
            Self::Count(config) => Box::new(CountGenerator::new(config)),
        }
    }
}

impl GenerationRequest {
    /// Run the configured strategy
    pub fn generate(&self) -> Result<PageList> {
        generate_pages(self.current_page, self.total_pages, &self.config)
    }
}

/// Build the page list for `current_page` out of `total_pages`
///
/// Configuration errors are reported before anything else is looked at.
///
/// # Examples
///
/// ```
/// use pagemark::pagination::{generate_pages, CountConfig, GenerationConfig};
///
/// let pages = generate_pages(5, 10, &GenerationConfig::default()).unwrap();
/// assert_eq!(pages.to_string(), "1 … 4 5 6 … 10");
///
/// let pages = generate_pages(3, 4, &CountConfig::new(7).into()).unwrap();
/// assert_eq!(pages.to_string(), "1 2 3 4");
/// ```
pub fn generate_pages(
    current_page: u32,
    total_pages: u32,
    config: &GenerationConfig,
) -> Result<PageList> {
    config.generator().generate(current_page, total_pages)
}

/// Build the page list from flat options
///
/// No options, or options without `count`, give range mode with defaults;
/// a `count` gives count mode.
pub fn generate_pages_with_options(
    current_page: u32,
    total_pages: u32,
    options: Option<&GenerationOptions>,
) -> Result<PageList> {
    let config = options
        .copied()
        .map(GenerationOptions::into_config)
        .transpose()?
        .unwrap_or_default();
    generate_pages(current_page, total_pages, &config)
}
