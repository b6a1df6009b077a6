//! scan command - List environment variables as property names

use crate::cli::Context;
use crate::core::config::OutputFormat;
use crate::core::mapper::MapperKind;
use crate::core::name::PropertyName;
use crate::ui::output;
use anyhow::{Context as _, Result};
use serde::Serialize;
use tracing::debug;

/// A source entry interpreted as a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanEntry {
    /// The canonical property name.
    pub name: PropertyName,
    /// The source name it was read from.
    pub source_name: String,
    /// The raw value.
    pub value: String,
}

/// Interpret `vars` with the mapper for `kind`, keeping entries equal to or
/// under `prefix`. Keys the mapper cannot interpret are skipped.
///
/// Entries are sorted by property name, then source name.
pub fn scan_entries<I>(kind: MapperKind, prefix: Option<&PropertyName>, vars: I) -> Vec<ScanEntry>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mapper = kind.mapper();
    let mut entries: Vec<ScanEntry> = vars
        .into_iter()
        .flat_map(|(key, value)| {
            mapper
                .map_source(&key)
                .into_iter()
                .map(move |mapping| ScanEntry {
                    name: mapping.name,
                    source_name: mapping.source_name,
                    value: value.clone(),
                })
        })
        .filter(|entry| match prefix {
            None => true,
            Some(prefix) => *prefix == entry.name || mapper.is_ancestor_of(prefix, &entry.name),
        })
        .collect();
    entries.sort_by_cached_key(|entry| (entry.name.to_string(), entry.source_name.clone()));
    entries
}

/// List environment variables that map to properties under `prefix`.
///
/// Without a prefix argument the configured `scan.prefix` is used.
pub fn scan(ctx: &Context, prefix: Option<PropertyName>) -> Result<()> {
    let config = ctx.load_config()?;
    let kind = ctx.mapper_kind(&config);
    let prefix = match prefix {
        Some(prefix) => Some(prefix),
        None => config
            .scan_prefix()
            .map(PropertyName::of)
            .transpose()
            .context("Invalid scan prefix in config")?,
    };

    let vars = std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)));
    let entries = scan_entries(kind, prefix.as_ref(), vars);
    debug!(mapper = %kind, count = entries.len(), "scanned environment");

    match ctx.format(&config) {
        OutputFormat::Json => output::result(output::to_json(&entries)?),
        OutputFormat::Text => {
            if entries.is_empty() {
                output::print("No matching environment variables", ctx.verbosity);
            }
            for entry in &entries {
                output::result(format!(
                    "{}={} ({})",
                    entry.name, entry.value, entry.source_name
                ));
            }
        }
    }
    Ok(())
}
