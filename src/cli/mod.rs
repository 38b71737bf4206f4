//! CLI module
//!
//! Command-line interface for generating page lists.
//!
//! # Commands
//!
//! - `pages` - Print the page list for one position
//! - `validate` - Check a generator configuration file
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{BiasArg, Cli, Commands, DistanceArg, OptionArgs, OutputFormat};
pub use runner::{resolve_config, Runner};
pub use server::{router, serve, ServerConfig, MAX_PAGE_SLOTS};
