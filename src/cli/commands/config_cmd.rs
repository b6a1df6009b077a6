//! config command - Get, set, or list configuration values

use crate::cli::Context;
use crate::core::config::{Config, OutputFormat, ProjectConfig, ScanConfig};
use crate::core::mapper::MapperKind;
use crate::core::name::PropertyName;
use crate::ui::output;
use anyhow::{anyhow, bail, Context as _, Result};

/// Configuration keys understood by `get` and `set`.
pub const KEYS: &[&str] = &["mapper", "format", "scan.prefix"];

/// Effective value of `key`, or `None` when unset.
fn value_of(config: &Config, key: &str) -> Result<Option<String>> {
    let value = match key {
        "mapper" => Some(config.mapper().to_string()),
        "format" => Some(config.format().as_str().to_string()),
        "scan.prefix" => config.scan_prefix().map(str::to_string),
        _ => bail!(
            "Unknown configuration key: {} (expected one of: {})",
            key,
            KEYS.join(", ")
        ),
    };
    Ok(value)
}

/// Apply `key = value` to a project config.
fn apply(config: &mut ProjectConfig, key: &str, value: &str) -> Result<()> {
    match key {
        "mapper" => {
            let kind = value.parse::<MapperKind>().map_err(|e| anyhow!(e))?;
            config.mapper = Some(kind);
        }
        "format" => {
            config.format = Some(value.parse::<OutputFormat>()?);
        }
        "scan.prefix" => {
            PropertyName::of(value).context("Invalid scan prefix")?;
            config
                .scan
                .get_or_insert_with(ScanConfig::default)
                .prefix = Some(value.to_string());
        }
        _ => bail!(
            "Unknown configuration key: {} (expected one of: {})",
            key,
            KEYS.join(", ")
        ),
    }
    Ok(())
}

/// Get a configuration value.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let config = ctx.load_config()?;
    if let Some(value) = value_of(&config, key)? {
        output::result(value);
    }
    Ok(())
}

/// Set a configuration value in the project config.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let dir = ctx.dir()?;
    let mut project = ctx.load_config()?.project.unwrap_or_default();

    apply(&mut project, key, value)?;

    let path = Config::write_project(&dir, &project).context("Failed to write config")?;
    output::print(
        format!("Set {} = {} in {}", key, value, path.display()),
        ctx.verbosity,
    );
    Ok(())
}

/// List all configuration values.
pub fn list(ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;

    if let Some(path) = config.global_config_loaded_from() {
        output::print(format!("# global: {}", path.display()), ctx.verbosity);
    }
    if let Some(path) = config.project_config_loaded_from() {
        output::print(format!("# project: {}", path.display()), ctx.verbosity);
    }

    for key in KEYS {
        let value = value_of(&config, key)?.unwrap_or_else(|| "(not set)".to_string());
        output::result(format!("{} = {}", key, value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_known_keys() {
        let mut config = ProjectConfig::default();
        apply(&mut config, "mapper", "default").unwrap();
        apply(&mut config, "format", "json").unwrap();
        apply(&mut config, "scan.prefix", "servers[0]").unwrap();

        assert_eq!(config.mapper, Some(MapperKind::Default));
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert_eq!(
            config.scan.and_then(|s| s.prefix),
            Some("servers[0]".to_string())
        );
    }

    #[test]
    fn apply_rejects_bad_values() {
        let mut config = ProjectConfig::default();
        assert!(apply(&mut config, "mapper", "env").is_err());
        assert!(apply(&mut config, "format", "yaml").is_err());
        assert!(apply(&mut config, "scan.prefix", "Server").is_err());
        assert!(apply(&mut config, "trunk", "main").is_err());
        assert_eq!(config, ProjectConfig::default());
    }

    #[test]
    fn value_of_defaults() {
        let config = Config::default();
        assert_eq!(
            value_of(&config, "mapper").unwrap(),
            Some("system-environment".to_string())
        );
        assert_eq!(value_of(&config, "format").unwrap(), Some("text".to_string()));
        assert_eq!(value_of(&config, "scan.prefix").unwrap(), None);
        assert!(value_of(&config, "nope").is_err());
    }
}
