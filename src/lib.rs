//! # pagemark
//!
//! Compact page-marker lists for paginated UIs: page numbers plus ellipsis
//! placeholders, computed from the current page and the page total.
//!
//! ## Features
//!
//! - **Range Mode**: Fixed-width sliding window around the current page
//! - **Count Mode**: Exactly `count` entries with a left or right bias
//! - **Config Files**: YAML/JSON generator configuration
//! - **CLI and HTTP**: `pagemark pages` and a JSON endpoint in `serve` mode
//!
//! ## Quick Start
//!
//! ```rust
//! use pagemark::{generate_pages, CountConfig, GenerationConfig, PageEntry};
//!
//! let pages = generate_pages(5, 10, &GenerationConfig::default())?;
//! assert_eq!(pages.to_string(), "1 … 4 5 6 … 10");
//!
//! let pages = generate_pages(1, 10, &CountConfig::new(7).into())?;
//! assert_eq!(pages.entries()[5], PageEntry::RightEllipsis);
//! # Ok::<(), pagemark::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  generate_pages(current, total, &GenerationConfig)       │
//! └──────────────────────────────┬───────────────────────────┘
//!                                │
//!               ┌────────────────┴────────────────┐
//!               │                                 │
//!       ┌───────┴────────┐               ┌────────┴───────┐
//!       │ RangeGenerator │               │ CountGenerator │
//!       │ window, edge / │               │ count, left /  │
//!       │ center metric  │               │ right bias     │
//!       └───────┬────────┘               └────────┬───────┘
//!               └────────────────┬────────────────┘
//!                                │
//!                 PageList [1, left, 4, 5, 6, right, 10]
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Page-list value types
pub mod types;

/// Page-list generation strategies
pub mod pagination;

/// Configuration loading
pub mod loader;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::{PageEntry, PageList};

// Re-export commonly used types
pub use loader::{load_config, load_config_from_str, GenerationOptions};
pub use pagination::{
    generate_pages, generate_pages_with_options, Bias, CountConfig, DistanceMetric,
    GenerationConfig, GenerationRequest, PageGenerator, RangeConfig,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
