//! core::mapper::system_env
//!
//! Mapper for environment-variable style names.
//!
//! # Conventions
//!
//! Names are mapped by upper-casing elements and joining them with `_`, so
//! `server.port` becomes `SERVER_PORT`. Numeric elements become indexes in
//! the reverse direction: `HOSTS_0_NAME` is `hosts[0].name`.
//!
//! Two flat forms exist for names with dashes:
//! - **modern**: dashes are folded out (`server.command-line-args` is
//!   `SERVER_COMMANDLINEARGS`)
//! - **legacy**: dashes become separators (`SERVER_COMMAND_LINE_ARGS`)
//!
//! The modern form is always preferred. Reading only produces the modern
//! interpretation since dash information cannot be recovered from an
//! environment variable, but ancestor checks still accept legacy structure.

use std::borrow::Cow;

use super::PropertyMapper;
use crate::core::mapping::PropertyMapping;
use crate::core::name::{is_number, Form, PropertyName};

/// The shared [`SystemEnvironmentPropertyMapper`].
pub static SYSTEM_ENVIRONMENT: SystemEnvironmentPropertyMapper = SystemEnvironmentPropertyMapper;

/// Maps between [`PropertyName`]s and environment-variable names.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironmentPropertyMapper;

impl SystemEnvironmentPropertyMapper {
    /// Modern flat form: upper-cased uniform elements joined with `_`.
    fn convert_name(name: &PropertyName) -> String {
        (0..name.number_of_elements())
            .map(|i| name.element(i, Form::Uniform).to_ascii_uppercase())
            .collect::<Vec<_>>()
            .join("_")
    }

    /// Legacy form: original elements with dashes replaced by `join`.
    fn convert_legacy_name(name: &PropertyName, join: char, uppercase: bool) -> String {
        let separator = join.to_string();
        (0..name.number_of_elements())
            .map(|i| {
                let converted = name.element(i, Form::Original).replace('-', &separator);
                if uppercase {
                    converted.to_ascii_uppercase()
                } else {
                    converted
                }
            })
            .collect::<Vec<_>>()
            .join(&separator)
    }

    fn is_legacy_ancestor_of(name: &PropertyName, candidate: &PropertyName) -> bool {
        PropertyName::of(&Self::convert_legacy_name(name, '.', false))
            .is_ok_and(|legacy| legacy.is_ancestor_of(candidate))
    }
}

/// Lower-case an element and turn all-digit elements into indexes.
fn process_element_value(value: &str) -> Cow<'_, str> {
    let lower = value.to_ascii_lowercase();
    if is_number(&lower) {
        Cow::Owned(format!("[{lower}]"))
    } else {
        Cow::Owned(lower)
    }
}

impl PropertyMapper for SystemEnvironmentPropertyMapper {
    fn map_name(&self, name: &PropertyName) -> Vec<PropertyMapping> {
        let modern = Self::convert_name(name);
        let legacy = Self::convert_legacy_name(name, '_', true);
        if modern == legacy {
            return vec![PropertyMapping::new(modern, name.clone())];
        }
        vec![
            PropertyMapping::new(modern, name.clone()),
            PropertyMapping::new(legacy, name.clone()),
        ]
    }

    fn map_source(&self, source_name: &str) -> Vec<PropertyMapping> {
        match PropertyName::adapt_with(source_name, '_', process_element_value) {
            Ok(name) if !name.is_empty() => vec![PropertyMapping::new(source_name, name)],
            _ => Vec::new(),
        }
    }

    fn is_ancestor_of(&self, name: &PropertyName, candidate: &PropertyName) -> bool {
        name.is_ancestor_of(candidate) || Self::is_legacy_ancestor_of(name, candidate)
    }
}
