//! lookup command - Resolve a property from the process environment

use crate::cli::Context;
use crate::core::config::OutputFormat;
use crate::core::mapper::MapperKind;
use crate::core::name::PropertyName;
use crate::ui::output;
use anyhow::{bail, Result};
use serde::Serialize;
use tracing::debug;

/// A property value found under one of its source names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    /// The source name that held the value.
    pub source_name: String,
    /// The property that was looked up.
    pub name: PropertyName,
    /// The raw value.
    pub value: String,
}

/// Find the first candidate source name for `name` that `get` has a value for.
///
/// Candidates are tried in mapper order, then in each mapper's preference
/// order.
pub fn find_value<F>(kind: MapperKind, name: &PropertyName, get: F) -> Option<LookupResult>
where
    F: Fn(&str) -> Option<String>,
{
    kind.mappers()
        .iter()
        .flat_map(|mapper| mapper.map_name(name))
        .find_map(|mapping| {
            debug!(source_name = %mapping.source_name, "trying source name");
            get(&mapping.source_name).map(|value| LookupResult {
                source_name: mapping.source_name,
                name: mapping.name,
                value,
            })
        })
}

/// Print the environment variable holding `name`.
pub fn lookup(ctx: &Context, name: &PropertyName) -> Result<()> {
    let config = ctx.load_config()?;
    let kind = ctx.mapper_kind(&config);

    let Some(found) = find_value(kind, name, |key| std::env::var(key).ok()) else {
        let tried: Vec<String> = kind
            .mappers()
            .iter()
            .flat_map(|mapper| mapper.map_name(name))
            .map(|mapping| mapping.source_name)
            .collect();
        bail!("'{}' is not set (tried {})", name, tried.join(", "));
    };

    match ctx.format(&config) {
        OutputFormat::Json => output::result(output::to_json(&found)?),
        OutputFormat::Text => output::result(format!("{}={}", found.source_name, found.value)),
    }
    Ok(())
}
