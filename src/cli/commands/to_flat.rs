//! to-flat command - Show the source names for a property name

use crate::cli::Context;
use crate::core::config::OutputFormat;
use crate::core::name::PropertyName;
use crate::ui::output;
use anyhow::Result;
use tracing::debug;

/// Print every source name `name` maps to, most preferred first.
pub fn to_flat(ctx: &Context, name: &PropertyName) -> Result<()> {
    let config = ctx.load_config()?;
    let kind = ctx.mapper_kind(&config);
    let mappings = kind.mapper().map_name(name);
    debug!(%name, mapper = %kind, count = mappings.len(), "mapped property name");

    match ctx.format(&config) {
        OutputFormat::Json => output::result(output::to_json(&mappings)?),
        OutputFormat::Text => {
            for mapping in &mappings {
                output::result(&mapping.source_name);
            }
        }
    }
    Ok(())
}
