//! ancestor command - Check whether one property name contains another

use crate::cli::Context;
use crate::core::config::OutputFormat;
use crate::core::mapper::MapperKind;
use crate::core::name::PropertyName;
use crate::ui::output;
use anyhow::{anyhow, Result};
use serde_json::json;
use tracing::debug;

/// Interpret `candidate` as a canonical name, falling back to the mapper's
/// reading of it as a source name.
pub fn resolve_candidate(kind: MapperKind, candidate: &str) -> Option<PropertyName> {
    PropertyName::of(candidate).ok().or_else(|| {
        kind.mapper()
            .map_source(candidate)
            .into_iter()
            .next()
            .map(|mapping| mapping.name)
    })
}

/// Print whether `name` is an ancestor of `candidate`.
pub fn ancestor(ctx: &Context, name: &PropertyName, candidate: &str) -> Result<()> {
    let config = ctx.load_config()?;
    let kind = ctx.mapper_kind(&config);
    let candidate_name = resolve_candidate(kind, candidate).ok_or_else(|| {
        anyhow!(
            "'{}' is not a property name and the {} mapper cannot interpret it",
            candidate,
            kind
        )
    })?;

    let is_ancestor = kind.mapper().is_ancestor_of(name, &candidate_name);
    debug!(%name, candidate = %candidate_name, mapper = %kind, is_ancestor, "checked ancestry");

    match ctx.format(&config) {
        OutputFormat::Json => output::result(output::to_json(&json!({
            "name": name,
            "candidate": candidate_name,
            "ancestor": is_ancestor,
        }))?),
        OutputFormat::Text => output::result(is_ancestor),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_candidate_is_used_as_is() {
        let name = resolve_candidate(MapperKind::SystemEnvironment, "server.port").unwrap();
        assert_eq!(name.to_string(), "server.port");
    }

    #[test]
    fn flat_candidate_is_mapped() {
        let name =
            resolve_candidate(MapperKind::SystemEnvironment, "SERVER_COMMAND_LINE_ARGS").unwrap();
        assert_eq!(name.to_string(), "server.command.line.args");

        let parent = PropertyName::of("server.command-line").unwrap();
        assert!(MapperKind::SystemEnvironment
            .mapper()
            .is_ancestor_of(&parent, &name));
        assert!(!MapperKind::Default.mapper().is_ancestor_of(&parent, &name));
    }

    #[test]
    fn uninterpretable_candidate() {
        assert!(resolve_candidate(MapperKind::SystemEnvironment, "A.B_C").is_none());
        assert!(resolve_candidate(MapperKind::Default, "Foo[0").is_none());
    }
}
