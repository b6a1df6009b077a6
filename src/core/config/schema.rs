//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$PROPMAP_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/propmap/config.toml`
//! 3. `~/.propmap/config.toml` (canonical write location)
//!
//! # Project Config
//!
//! Located at `.propmap.toml` in the project directory (canonical).
//!
//! # Validation
//!
//! Config values are validated after parsing (e.g., the scan prefix must be
//! a valid canonical property name).

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::mapper::MapperKind;
use crate::core::name::PropertyName;

/// How command results are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One item per line.
    #[default]
    Text,
    /// JSON documents.
    Json,
}

impl OutputFormat {
    /// The lowercase name of this format.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidValue(format!(
                "invalid format '{}', must be one of: text, json",
                other
            ))),
        }
    }
}

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// mapper = "system-environment"
/// format = "text"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Default mapping strategy
    pub mapper: Option<MapperKind>,

    /// Default output format
    pub format: Option<OutputFormat>,
}

/// Project configuration.
///
/// # Example
///
/// ```toml
/// mapper = "default"
/// format = "json"
///
/// [scan]
/// prefix = "server"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Mapping strategy override
    pub mapper: Option<MapperKind>,

    /// Output format override
    pub format: Option<OutputFormat>,

    /// Scan command defaults
    pub scan: Option<ScanConfig>,
}

impl ProjectConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(scan) = &self.scan {
            scan.validate()?;
        }
        Ok(())
    }
}

/// Scan command defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Only list variables under this canonical name
    pub prefix: Option<String>,
}

impl ScanConfig {
    /// Validate the scan configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(prefix) = &self.prefix {
            PropertyName::of(prefix)
                .map_err(|e| ConfigError::InvalidValue(format!("invalid scan prefix: {}", e)))?;
        }
        Ok(())
    }
}
