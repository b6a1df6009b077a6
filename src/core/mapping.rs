//! core::mapping
//!
//! A single pairing between a property source name and a property name.

use serde::Serialize;

use crate::core::name::PropertyName;

/// Maps a name used by a property source (for example `SERVER_PORT`) to the
/// canonical [`PropertyName`] it represents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyMapping {
    /// The name as the property source knows it.
    pub source_name: String,
    /// The canonical name.
    pub name: PropertyName,
}

impl PropertyMapping {
    /// Create a new mapping.
    pub fn new(source_name: impl Into<String>, name: PropertyName) -> Self {
        Self {
            source_name: source_name.into(),
            name,
        }
    }

    /// Whether this mapping applies to `name`.
    pub fn is_applicable(&self, name: &PropertyName) -> bool {
        self.name == *name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applicable_uses_name_equality() {
        let mapping = PropertyMapping::new(
            "SERVER_COMMAND_LINE_ARGS",
            PropertyName::of("server.command-line-args").unwrap(),
        );
        assert!(mapping.is_applicable(&PropertyName::of("server.commandlineargs").unwrap()));
        assert!(!mapping.is_applicable(&PropertyName::of("server").unwrap()));
    }

    #[test]
    fn serializes_name_as_string() {
        let mapping = PropertyMapping::new("SERVER_PORT", PropertyName::of("server.port").unwrap());
        let json = serde_json::to_value(&mapping).unwrap();
        assert_eq!(json["source_name"], "SERVER_PORT");
        assert_eq!(json["name"], "server.port");
    }
}
