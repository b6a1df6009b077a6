//! cli
//!
//! Command-line interface layer for propmap.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Initialise logging
//! - Resolve configuration and delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Name translation lives in [`crate::core::mapper`];
//! handlers only pick a mapper, call it, and render the result.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::core::config::{Config, OutputFormat};
use crate::core::mapper::MapperKind;
use crate::ui::output::{self, Verbosity};

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "PROPMAP_LOG";

/// Execution context shared by all command handlers.
#[derive(Debug, Clone)]
pub struct Context {
    /// Working directory override
    pub cwd: Option<PathBuf>,
    /// Output verbosity
    pub verbosity: Verbosity,
    /// `--json` was given
    pub json: bool,
    /// `--mapper` override
    pub mapper: Option<MapperKind>,
}

impl Context {
    /// The directory commands run in.
    pub fn dir(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(cwd) => Ok(cwd.clone()),
            None => std::env::current_dir().context("Failed to determine current directory"),
        }
    }

    /// Load configuration for the working directory, reporting warnings.
    pub fn load_config(&self) -> Result<Config> {
        let dir = self.dir()?;
        let loaded = Config::load(Some(&dir)).context("Failed to load config")?;
        for warning in &loaded.warnings {
            output::warn(
                format!("{} ({})", warning.message, warning.path.display()),
                self.verbosity,
            );
        }
        Ok(loaded.config)
    }

    /// The mapper kind: `--mapper` wins over configuration.
    pub fn mapper_kind(&self, config: &Config) -> MapperKind {
        self.mapper.unwrap_or_else(|| config.mapper())
    }

    /// The output format: `--json` wins over configuration.
    pub fn format(&self, config: &Config) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            config.format()
        }
    }
}

/// Initialise the `tracing` subscriber.
///
/// `PROPMAP_LOG` takes precedence over the level implied by the flags.
pub fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()));
    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);
    init_logging(verbosity);

    let ctx = Context {
        cwd: cli.cwd.clone(),
        verbosity,
        json: cli.json,
        mapper: cli.mapper,
    };
    debug!(?ctx, "starting");

    commands::dispatch(cli.command, &ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{GlobalConfig, ProjectConfig};

    fn context() -> Context {
        Context {
            cwd: None,
            verbosity: Verbosity::Quiet,
            json: false,
            mapper: None,
        }
    }

    #[test]
    fn flags_override_config() {
        let loaded = Config::load_with_global(None, None).unwrap();
        let mut config = loaded.config;
        config.global = GlobalConfig {
            mapper: Some(MapperKind::Default),
            format: None,
        };
        config.project = Some(ProjectConfig {
            format: Some(OutputFormat::Text),
            ..Default::default()
        });

        let ctx = context();
        assert_eq!(ctx.mapper_kind(&config), MapperKind::Default);
        assert_eq!(ctx.format(&config), OutputFormat::Text);

        let ctx = Context {
            json: true,
            mapper: Some(MapperKind::SystemEnvironment),
            ..context()
        };
        assert_eq!(ctx.mapper_kind(&config), MapperKind::SystemEnvironment);
        assert_eq!(ctx.format(&config), OutputFormat::Json);
    }

    #[test]
    fn dir_prefers_cwd_override() {
        let ctx = Context {
            cwd: Some(PathBuf::from("/tmp/project")),
            ..context()
        };
        assert_eq!(ctx.dir().unwrap(), PathBuf::from("/tmp/project"));
    }
}
