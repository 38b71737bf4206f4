//! Pagination module
//!
//! Supports: Range (sliding window), Count (fixed length)
//!
//! # Overview
//!
//! The pagination module turns a current page and a page total into the
//! compact list of markers a pagination control renders: page numbers with
//! `LeftEllipsis` / `RightEllipsis` standing in for skipped runs. Each
//! strategy implements `PageGenerator`; `GenerationConfig` picks one.

mod strategies;
mod types;

pub use strategies::{
    clamp, distance, generate_pages, generate_pages_with_options, half_window, CountGenerator,
    RangeGenerator,
};
pub use types::{
    check_position, Bias, CountConfig, DistanceMetric, GenerationConfig, GenerationRequest,
    PageGenerator, RangeConfig, DEFAULT_COUNT, DEFAULT_WINDOW_SIZE, MIN_COUNT,
};
