//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! propmap has two configuration scopes:
//! - **Global**: User-level settings
//! - **Project**: Directory-level overrides
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Project config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$PROPMAP_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/propmap/config.toml`
//! 3. `~/.propmap/config.toml` (canonical write location)
//!
//! # Project Config Locations
//!
//! Searched in order:
//! 1. `.propmap.toml` (canonical)
//! 2. `propmap.toml` (compatibility, warns)
//!
//! # Example
//!
//! ```no_run
//! use propmap::core::config::Config;
//! use std::path::Path;
//!
//! let result = Config::load(Some(Path::new("/path/to/project"))).unwrap();
//! let config = result.config;
//!
//! println!("Mapper: {}", config.mapper());
//! println!("Format: {}", config.format().as_str());
//! ```

pub mod schema;

pub use schema::{GlobalConfig, OutputFormat, ProjectConfig, ScanConfig};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::core::mapper::MapperKind;

/// Canonical project config file name.
pub const PROJECT_CONFIG_FILE: &str = ".propmap.toml";

/// Deprecated project config file name.
const PROJECT_CONFIG_COMPAT_FILE: &str = "propmap.toml";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence rules: project config overrides global config.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Project configuration (if found)
    pub project: Option<ProjectConfig>,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
    /// Path to the project config file (if loaded)
    project_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `project_dir` is provided, also loads project config from it.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed.
    /// Missing config files are not an error (defaults are used).
    pub fn load(project_dir: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        Self::load_with_global(Self::find_global(), project_dir)
    }

    /// Load configuration using an explicit global config file.
    pub fn load_with_global(
        global_file: Option<PathBuf>,
        project_dir: Option<&Path>,
    ) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        let global = match &global_file {
            Some(path) => {
                debug!(path = %path.display(), "loading global config");
                Self::read_config::<GlobalConfig>(path)?
            }
            None => GlobalConfig::default(),
        };

        let (project, project_path) = match project_dir {
            Some(dir) => Self::load_project(dir, &mut warnings)?,
            None => (None, None),
        };

        if let Some(ref p) = project {
            p.validate()?;
        }

        Ok(ConfigLoadResult {
            config: Config {
                global,
                project,
                global_path: global_file,
                project_path,
            },
            warnings,
        })
    }

    /// Find the global config file in standard locations.
    fn find_global() -> Option<PathBuf> {
        // 1. Check $PROPMAP_CONFIG
        if let Ok(path) = std::env::var("PROPMAP_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
            debug!(path = %path.display(), "PROPMAP_CONFIG points to a missing file");
        }

        // 2. Check $XDG_CONFIG_HOME/propmap/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("propmap/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.propmap/config.toml
        dirs::home_dir()
            .map(|home| home.join(".propmap/config.toml"))
            .filter(|path| path.exists())
    }

    /// Load project configuration from standard locations.
    fn load_project(
        dir: &Path,
        warnings: &mut Vec<ConfigWarning>,
    ) -> Result<(Option<ProjectConfig>, Option<PathBuf>), ConfigError> {
        let canonical = Self::project_config_path(dir);
        if canonical.exists() {
            debug!(path = %canonical.display(), "loading project config");
            let config = Self::read_config(&canonical)?;
            return Ok((Some(config), Some(canonical)));
        }

        let compat = dir.join(PROJECT_CONFIG_COMPAT_FILE);
        if compat.exists() {
            warnings.push(ConfigWarning {
                message: format!(
                    "Using deprecated config location. Please rename to '{}'",
                    canonical.display()
                ),
                path: compat.clone(),
            });
            let config = Self::read_config(&compat)?;
            return Ok((Some(config), Some(compat)));
        }

        Ok((None, None))
    }

    /// Read and parse a config file.
    fn read_config<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical path for project config in `dir`.
    pub fn project_config_path(dir: &Path) -> PathBuf {
        dir.join(PROJECT_CONFIG_FILE)
    }

    /// Write project config atomically.
    ///
    /// Writes to a temp file in the same directory, then renames it into place.
    pub fn write_project(dir: &Path, config: &ProjectConfig) -> Result<PathBuf, ConfigError> {
        config.validate()?;
        let path = Self::project_config_path(dir);
        Self::write_config_atomic(&path, config)?;
        Ok(path)
    }

    /// Write a config file atomically.
    fn write_config_atomic<T: serde::Serialize>(
        path: &Path,
        config: &T,
    ) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        debug!(path = %path.display(), "wrote config");
        Ok(())
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Get the mapping strategy.
    ///
    /// Defaults to `system-environment` if not configured.
    pub fn mapper(&self) -> MapperKind {
        self.project
            .as_ref()
            .and_then(|p| p.mapper)
            .or(self.global.mapper)
            .unwrap_or_default()
    }

    /// Get the output format.
    ///
    /// Defaults to `text` if not configured.
    pub fn format(&self) -> OutputFormat {
        self.project
            .as_ref()
            .and_then(|p| p.format)
            .or(self.global.format)
            .unwrap_or_default()
    }

    /// Get the default scan prefix.
    ///
    /// Returns `None` if not configured.
    pub fn scan_prefix(&self) -> Option<&str> {
        self.project
            .as_ref()
            .and_then(|p| p.scan.as_ref())
            .and_then(|s| s.prefix.as_deref())
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded project config file.
    pub fn project_config_loaded_from(&self) -> Option<&Path> {
        self.project_path.as_deref()
    }
}
