//! CLI commands and argument parsing

use crate::loader::GenerationOptions;
use crate::pagination::{Bias, DistanceMetric};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Compute page-marker lists for pagination controls
#[derive(Parser, Debug)]
#[command(name = "pagemark")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the page list for one position
    Pages {
        /// Current page (1-indexed)
        #[arg(long)]
        current: u32,

        /// Total number of pages
        #[arg(long)]
        total: u32,

        /// Generator configuration file (YAML or JSON)
        #[arg(short = 'C', long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// Validate a generator configuration file
    Validate {
        /// Generator configuration file (YAML or JSON)
        #[arg(short = 'C', long)]
        config: PathBuf,
    },

    /// Start HTTP server mode
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Configuration used when a request carries no options
        #[arg(short = 'C', long)]
        config: Option<PathBuf>,
    },
}

/// Inline generation options
#[derive(clap::Args, Debug, Clone, Default)]
pub struct OptionArgs {
    /// Range mode: window width (odd)
    #[arg(long)]
    pub window: Option<u32>,

    /// Range mode: shrink the window near the edges
    #[arg(long)]
    pub truncate: bool,

    /// Range mode: ellipsis rule
    #[arg(long, value_enum)]
    pub distance_from: Option<DistanceArg>,

    /// Count mode: exact number of entries
    #[arg(long)]
    pub count: Option<u32>,

    /// Count mode: slot distribution bias
    #[arg(long, value_enum)]
    pub bias: Option<BiasArg>,
}

impl OptionArgs {
    /// Check if no option flag was given
    pub fn is_empty(&self) -> bool {
        self.window.is_none()
            && !self.truncate
            && self.distance_from.is_none()
            && self.count.is_none()
            && self.bias.is_none()
    }
}

impl From<&OptionArgs> for GenerationOptions {
    fn from(args: &OptionArgs) -> Self {
        Self {
            range: args.window,
            truncate: args.truncate.then_some(true),
            distance_from: args.distance_from.map(Into::into),
            count: args.count,
            bias: args.bias.map(Into::into),
        }
    }
}

/// Ellipsis rule flag value
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DistanceArg {
    /// Gap between window edge and first/last page
    Edge,
    /// Gap between current page and first/last page
    Center,
}

impl From<DistanceArg> for DistanceMetric {
    fn from(arg: DistanceArg) -> Self {
        match arg {
            DistanceArg::Edge => DistanceMetric::Edge,
            DistanceArg::Center => DistanceMetric::Center,
        }
    }
}

/// Bias flag value
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BiasArg {
    /// Favor pages before the current page
    Left,
    /// Favor pages after the current page
    Right,
}

impl From<BiasArg> for Bias {
    fn from(arg: BiasArg) -> Self {
        match arg {
            BiasArg::Left => Bias::Left,
            BiasArg::Right => Bias::Right,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
