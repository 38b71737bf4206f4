//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OptionArgs, OutputFormat};
use crate::error::{Error, Result, ResultExt};
use crate::loader::{load_config, GenerationOptions};
use crate::pagination::{generate_pages, GenerationConfig};
use crate::types::PageList;
use serde_json::json;
use std::path::Path;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Pages {
                current,
                total,
                config,
                options,
            } => {
                let output = self.pages(*current, *total, config.as_deref(), options)?;
                println!("{output}");
                Ok(())
            }
            Commands::Validate { config } => {
                let output = self.validate(config)?;
                println!("{output}");
                Ok(())
            }
            Commands::Serve { port, config } => {
                let default_config = match config {
                    Some(path) => load_config(path).with_context(|| {
                        format!("Failed to load server config '{}'", path.display())
                    })?,
                    None => GenerationConfig::default(),
                };
                let config = crate::cli::ServerConfig { default_config };
                crate::cli::serve(config, *port).await
            }
        }
    }

    /// Generate and render the page list
    pub fn pages(
        &self,
        current: u32,
        total: u32,
        config_path: Option<&Path>,
        options: &OptionArgs,
    ) -> Result<String> {
        let config = resolve_config(config_path, options)?;
        debug!(mode = config.mode(), current, total, "Generating pages");

        let pages = generate_pages(current, total, &config)?;
        self.render(current, total, &config, &pages)
    }

    /// Validate a config file and describe it
    pub fn validate(&self, path: &Path) -> Result<String> {
        let config = load_config(path)?;
        match self.cli.format {
            OutputFormat::Json => Ok(serde_json::to_string(&json!({
                "valid": true,
                "config": config,
            }))?),
            OutputFormat::Pretty => Ok(format!(
                "✓ {} is valid ({} mode)",
                path.display(),
                config.mode()
            )),
        }
    }

    fn render(
        &self,
        current: u32,
        total: u32,
        config: &GenerationConfig,
        pages: &PageList,
    ) -> Result<String> {
        match self.cli.format {
            OutputFormat::Json => Ok(serde_json::to_string(&json!({
                "current_page": current,
                "total_pages": total,
                "mode": config.mode(),
                "pages": pages,
            }))?),
            OutputFormat::Pretty => Ok(pages.to_string()),
        }
    }
}

/// Pick the config file or the inline flags; both at once is an error
pub fn resolve_config(
    config_path: Option<&Path>,
    options: &OptionArgs,
) -> Result<GenerationConfig> {
    match config_path {
        Some(_) if !options.is_empty() => Err(Error::config(
            "Use either --config or inline generation flags, not both",
        )),
        Some(path) => load_config(path),
        None => GenerationOptions::from(options).into_config(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::{Bias, CountConfig, RangeConfig};
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn runner(args: &[&str]) -> Runner {
        Runner::new(Cli::try_parse_from(args).unwrap())
    }

    fn run_pages(args: &[&str]) -> Result<String> {
        let runner = runner(args);
        match &runner.cli.command {
            Commands::Pages {
                current,
                total,
                config,
                options,
            } => runner.pages(*current, *total, config.as_deref(), options),
            other => panic!("Expected Pages, got {other:?}"),
        }
    }

    #[test]
    fn test_pages_json_output() {
        let output = run_pages(&["pagemark", "pages", "--current", "5", "--total", "10"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["mode"], "range");
        assert_eq!(value["pages"], json!([1, "left", 4, 5, 6, "right", 10]));
    }

    #[test]
    fn test_pages_pretty_output() {
        let output = run_pages(&[
            "pagemark", "pages", "--current", "1", "--total", "10", "--count", "7", "-f",
            "pretty",
        ])
        .unwrap();
        assert_eq!(output, "1 2 3 4 5 … 10");
    }

    #[test]
    fn test_pages_range_flags() {
        let output = run_pages(&[
            "pagemark",
            "pages",
            "--current",
            "5",
            "--total",
            "10",
            "--window",
            "5",
            "--truncate",
            "--format",
            "pretty",
        ])
        .unwrap();
        assert_eq!(output, "1 … 3 4 5 6 7 … 10");
    }

    #[test]
    fn test_pages_even_window_fails() {
        let err = run_pages(&[
            "pagemark", "pages", "--current", "5", "--total", "10", "--window", "4",
        ])
        .unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_pages_current_out_of_range_fails() {
        let err = run_pages(&["pagemark", "pages", "--current", "11", "--total", "10"]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn test_resolve_config_from_flags() {
        let options = OptionArgs {
            count: Some(9),
            bias: Some(crate::cli::commands::BiasArg::Left),
            ..Default::default()
        };
        let config = resolve_config(None, &options).unwrap();
        assert_eq!(
            config,
            GenerationConfig::Count(CountConfig::new(9).with_bias(Bias::Left))
        );

        let config = resolve_config(None, &OptionArgs::default()).unwrap();
        assert_eq!(config, GenerationConfig::Range(RangeConfig::default()));
    }

    #[test]
    fn test_resolve_config_rejects_file_and_flags() {
        let options = OptionArgs {
            window: Some(5),
            ..Default::default()
        };
        let result = resolve_config(Some(Path::new("pagemark.yaml")), &options);
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_pages_from_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mode: count\ncount: 7").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let output = run_pages(&[
            "pagemark", "pages", "--current", "5", "--total", "10", "-C", &path, "-f", "pretty",
        ])
        .unwrap();
        assert_eq!(output, "1 … 4 5 6 … 10");
    }

    #[test]
    fn test_validate_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mode: range\nwindow_size: 5").unwrap();

        let runner = runner(&["pagemark", "validate", "-C", "unused.yaml"]);
        let output = runner.validate(file.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["valid"], true);
        assert_eq!(value["config"]["mode"], "range");
        assert_eq!(value["config"]["window_size"], 5);
    }

    #[test]
    fn test_validate_rejects_bad_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "count: 3").unwrap();

        let runner = runner(&["pagemark", "validate", "-C", "unused.yaml"]);
        assert!(runner.validate(file.path()).is_err());
    }

    #[test]
    fn test_validate_rejects_fields_of_other_mode() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mode: range\ncount: 3\nbias: left").unwrap();

        let runner = runner(&["pagemark", "validate", "-C", "unused.yaml"]);
        let err = runner.validate(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
