//! Property-based tests for property names and mappers.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use proptest::prelude::*;

use propmap::core::mapper::{PropertyMapper, DEFAULT, SYSTEM_ENVIRONMENT};
use propmap::core::name::{Form, PropertyName};

/// A piece of a canonical name.
#[derive(Debug, Clone)]
enum Part {
    Named(String),
    Index(String),
}

/// Strategy for uniform named elements (never all digits).
fn uniform_element() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,8}"
}

/// Strategy for dashed named elements.
fn dashed_element() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,4}(-[a-z0-9]{1,4}){1,2}"
}

/// Strategy for numeric index content.
fn index_element() -> impl Strategy<Value = String> {
    "[0-9]{1,3}"
}

fn render(first: &str, rest: &[Part]) -> String {
    let mut name = first.to_string();
    for part in rest {
        match part {
            Part::Named(value) => {
                name.push('.');
                name.push_str(value);
            }
            Part::Index(value) => {
                name.push('[');
                name.push_str(value);
                name.push(']');
            }
        }
    }
    name
}

/// Names made only of uniform named elements.
fn plain_name() -> impl Strategy<Value = String> {
    prop::collection::vec(uniform_element(), 1..6).prop_map(|parts| parts.join("."))
}

/// Any canonical name: named first element, then named, dashed or indexed parts.
fn canonical_name() -> impl Strategy<Value = String> {
    let part = prop_oneof![
        uniform_element().prop_map(Part::Named),
        dashed_element().prop_map(Part::Named),
        index_element().prop_map(Part::Index),
    ];
    (
        prop_oneof![uniform_element(), dashed_element()],
        prop::collection::vec(part, 0..5),
    )
        .prop_map(|(first, rest)| render(&first, &rest))
}

/// Canonical names containing at least one dashed element.
fn dashed_name() -> impl Strategy<Value = String> {
    (canonical_name(), dashed_element(), canonical_name())
        .prop_map(|(before, dashed, after)| format!("{}.{}.{}", before, dashed, after))
}

proptest! {
    /// Names without dashes or indexes have a single flat form.
    #[test]
    fn plain_names_map_to_one_flat_name(raw in plain_name()) {
        let name = PropertyName::of(&raw).unwrap();
        let mappings = SYSTEM_ENVIRONMENT.map_name(&name);
        prop_assert_eq!(mappings.len(), 1);
        prop_assert_eq!(&mappings[0].source_name, &raw.to_ascii_uppercase().replace('.', "_"));
        prop_assert_eq!(&mappings[0].name, &name);
    }

    /// Dashed names have distinct modern and legacy forms, modern first.
    #[test]
    fn dashed_names_map_to_modern_then_legacy(raw in dashed_name()) {
        let name = PropertyName::of(&raw).unwrap();
        let mappings = SYSTEM_ENVIRONMENT.map_name(&name);
        prop_assert_eq!(mappings.len(), 2);
        prop_assert_ne!(&mappings[0].source_name, &mappings[1].source_name);
        prop_assert!(!mappings[0].source_name.contains('-'));
        prop_assert!(mappings[1].source_name.len() > mappings[0].source_name.len());
    }

    /// The modern flat form maps back to an equal name.
    #[test]
    fn modern_form_round_trips(raw in canonical_name()) {
        let name = PropertyName::of(&raw).unwrap();
        let flat = SYSTEM_ENVIRONMENT.map_name(&name).remove(0).source_name;
        let back = SYSTEM_ENVIRONMENT.map_source(&flat);
        prop_assert_eq!(back.len(), 1);
        prop_assert_eq!(&back[0].name, &name);
        for i in 0..name.number_of_elements() {
            prop_assert_eq!(back[0].name.element(i, Form::Uniform), name.element(i, Form::Uniform));
            prop_assert_eq!(back[0].name.is_indexed(i), name.is_indexed(i));
        }
    }

    /// Mapping arbitrary source names never panics and only yields names
    /// whose display form parses back to the same name.
    #[test]
    fn map_source_is_total(source in any::<String>()) {
        for mapper in [&SYSTEM_ENVIRONMENT as &dyn PropertyMapper, &DEFAULT] {
            let mappings = mapper.map_source(&source);
            prop_assert!(mappings.len() <= 1);
            if let Some(mapping) = mappings.first() {
                prop_assert_eq!(&mapping.source_name, &source);
                prop_assert!(!mapping.name.is_empty());
                if !source.contains(['[', ']']) {
                    let display = mapping.name.to_string();
                    let reparsed = PropertyName::of(&display);
                    prop_assert!(reparsed.is_ok(), "{:?} displays as invalid {:?}", source, display);
                    prop_assert_eq!(reparsed.unwrap(), mapping.name.clone());
                }
            }
        }
    }

    /// Flat names built from punctuation-heavy segments never leak empty
    /// elements.
    #[test]
    fn map_source_never_yields_empty_elements(
        segments in prop::collection::vec("[A-Z0-9$%-]{0,4}", 1..5)
    ) {
        let source = segments.join("_");
        for mapping in SYSTEM_ENVIRONMENT.map_source(&source) {
            for i in 0..mapping.name.number_of_elements() {
                prop_assert!(!mapping.name.element(i, Form::Dashed).is_empty());
            }
            let flat = SYSTEM_ENVIRONMENT.map_name(&mapping.name).remove(0).source_name;
            prop_assert!(!flat.starts_with('_') && !flat.ends_with('_'));
            prop_assert!(!flat.contains("__"));
        }
    }

    /// A name is never its own ancestor.
    #[test]
    fn ancestor_is_irreflexive(raw in canonical_name()) {
        let name = PropertyName::of(&raw).unwrap();
        prop_assert!(!name.is_ancestor_of(&name));
        prop_assert!(!DEFAULT.is_ancestor_of(&name, &name));
    }

    /// Shorter prefixes are ancestors of longer ones, transitively.
    #[test]
    fn ancestor_is_transitive_over_prefixes(raw in canonical_name()) {
        let name = PropertyName::of(&raw).unwrap();
        let n = name.number_of_elements();
        for a in 0..n {
            for b in (a + 1)..=n {
                let (pa, pb) = (name.chop(a), name.chop(b));
                prop_assert!(pa.is_ancestor_of(&pb));
                prop_assert!(SYSTEM_ENVIRONMENT.is_ancestor_of(&pa, &pb));
                prop_assert!(!pb.is_ancestor_of(&pa));
                if b < n {
                    prop_assert!(pb.is_ancestor_of(&name));
                    prop_assert!(pa.is_ancestor_of(&name));
                }
            }
        }
    }

    /// Display output parses back to the same name.
    #[test]
    fn display_round_trips(raw in canonical_name()) {
        let name = PropertyName::of(&raw).unwrap();
        prop_assert_eq!(name.to_string(), raw);
        prop_assert_eq!(PropertyName::of(&name.to_string()).unwrap(), name);
    }

    /// Any valid name round-trips through serde.
    #[test]
    fn name_serde_roundtrip(raw in canonical_name()) {
        let name = PropertyName::of(&raw).unwrap();
        let json = serde_json::to_string(&name).unwrap();
        let parsed: PropertyName = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(name, parsed);
    }
}

#[test]
fn documented_scenarios() {
    let port = PropertyName::of("server.port").unwrap();
    assert_eq!(SYSTEM_ENVIRONMENT.map_name(&port)[0].source_name, "SERVER_PORT");
    assert_eq!(SYSTEM_ENVIRONMENT.map_source("SERVER_PORT")[0].name, port);

    let hosts = SYSTEM_ENVIRONMENT.map_source("SERVERS_0_HOST");
    assert_eq!(hosts[0].name.to_string(), "servers[0].host");

    let server = PropertyName::of("server").unwrap();
    assert!(SYSTEM_ENVIRONMENT.is_ancestor_of(&server, &port));
    assert!(!SYSTEM_ENVIRONMENT.is_ancestor_of(&port, &server));
}
