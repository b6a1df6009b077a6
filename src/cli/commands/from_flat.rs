//! from-flat command - Show the property name for a source name

use crate::cli::Context;
use crate::core::config::OutputFormat;
use crate::ui::output;
use anyhow::{bail, Result};
use tracing::debug;

/// Print the canonical name `flat` represents.
///
/// Fails when the mapper cannot interpret `flat`.
pub fn from_flat(ctx: &Context, flat: &str) -> Result<()> {
    let config = ctx.load_config()?;
    let kind = ctx.mapper_kind(&config);
    let mappings = kind.mapper().map_source(flat);
    debug!(flat, mapper = %kind, count = mappings.len(), "mapped source name");

    if mappings.is_empty() {
        bail!("No property name for '{}' using the {} mapper", flat, kind);
    }

    match ctx.format(&config) {
        OutputFormat::Json => output::result(output::to_json(&mappings)?),
        OutputFormat::Text => {
            for mapping in &mappings {
                output::result(&mapping.name);
            }
        }
    }
    Ok(())
}
