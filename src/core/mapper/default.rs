//! core::mapper::default
//!
//! Mapper for sources that already use dotted property names.

use super::PropertyMapper;
use crate::core::mapping::PropertyMapping;
use crate::core::name::PropertyName;

/// The shared [`DefaultPropertyMapper`].
pub static DEFAULT: DefaultPropertyMapper = DefaultPropertyMapper;

/// Maps names one-to-one: `server.port` in the source is `server.port` in the
/// canonical form. Source names are adapted leniently, so `Server.Port` is
/// accepted as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPropertyMapper;

impl PropertyMapper for DefaultPropertyMapper {
    fn map_name(&self, name: &PropertyName) -> Vec<PropertyMapping> {
        vec![PropertyMapping::new(name.to_string(), name.clone())]
    }

    fn map_source(&self, source_name: &str) -> Vec<PropertyMapping> {
        match PropertyName::adapt(source_name, '.') {
            Ok(name) if !name.is_empty() => vec![PropertyMapping::new(source_name, name)],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_name_uses_display_form() {
        let name = PropertyName::of("servers[0].host").unwrap();
        let mappings = DEFAULT.map_name(&name);
        assert_eq!(mappings, vec![PropertyMapping::new("servers[0].host", name)]);
    }

    #[test]
    fn map_source_adapts_leniently() {
        let mappings = DEFAULT.map_source("Server.Port");
        assert_eq!(mappings.len(), 1);
        assert_eq!(mappings[0].source_name, "Server.Port");
        assert_eq!(mappings[0].name, PropertyName::of("server.port").unwrap());
    }

    #[test]
    fn map_source_without_mapping() {
        assert!(DEFAULT.map_source("").is_empty());
        assert!(DEFAULT.map_source("...").is_empty());
        assert!(DEFAULT.map_source("foo[0").is_empty());
        assert!(DEFAULT.map_source("$").is_empty());
    }

    #[test]
    fn map_source_drops_segments_without_valid_characters() {
        let mappings = DEFAULT.map_source("foo.$.bar");
        assert_eq!(mappings.len(), 1);
        assert_eq!(mappings[0].name.to_string(), "foo.bar");
    }

    #[test]
    fn ancestor_uses_name_structure() {
        let server = PropertyName::of("server").unwrap();
        let port = PropertyName::of("server.port").unwrap();
        assert!(DEFAULT.is_ancestor_of(&server, &port));
        assert!(!DEFAULT.is_ancestor_of(&port, &server));
    }
}
