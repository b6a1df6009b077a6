//! core::mapper
//!
//! Strategies that translate between property source names and canonical
//! [`PropertyName`]s.
//!
//! # Strategies
//!
//! - [`DefaultPropertyMapper`] - sources that already use dotted names
//! - [`SystemEnvironmentPropertyMapper`] - environment-variable style names
//!   such as `SERVER_PORT`
//!
//! A [`MapperKind`] selects the strategy for a kind of source. Every mapper
//! is a stateless singleton that can be shared freely across threads.
//!
//! # Example
//!
//! ```
//! use propmap::core::mapper::{MapperKind, PropertyMapper};
//! use propmap::core::name::PropertyName;
//!
//! let mapper = MapperKind::SystemEnvironment.mapper();
//! let name = PropertyName::of("server.port").unwrap();
//!
//! let mappings = mapper.map_name(&name);
//! assert_eq!(mappings[0].source_name, "SERVER_PORT");
//!
//! let mappings = mapper.map_source("SERVER_PORT");
//! assert_eq!(mappings[0].name, name);
//! ```

mod default;
mod system_env;

pub use default::{DefaultPropertyMapper, DEFAULT};
pub use system_env::{SystemEnvironmentPropertyMapper, SYSTEM_ENVIRONMENT};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::mapping::PropertyMapping;
use crate::core::name::PropertyName;

/// Name of the property source that holds the process environment.
pub const SYSTEM_ENVIRONMENT_SOURCE: &str = "systemEnvironment";

/// Translates names between a property source convention and
/// [`PropertyName`].
pub trait PropertyMapper: Send + Sync + fmt::Debug {
    /// Source names that may hold a value for `name`, most preferred first.
    fn map_name(&self, name: &PropertyName) -> Vec<PropertyMapping>;

    /// The canonical name(s) a source name represents. Source names that
    /// cannot be interpreted yield no mappings.
    fn map_source(&self, source_name: &str) -> Vec<PropertyMapping>;

    /// Whether `name` is an ancestor of `candidate` under this convention.
    fn is_ancestor_of(&self, name: &PropertyName, candidate: &PropertyName) -> bool {
        name.is_ancestor_of(candidate)
    }
}

/// The mapping strategy used for a kind of property source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MapperKind {
    /// Dotted names, mapped as-is.
    Default,
    /// Environment-variable names.
    #[default]
    SystemEnvironment,
}

impl MapperKind {
    /// All kinds, in declaration order.
    pub const ALL: [MapperKind; 2] = [MapperKind::Default, MapperKind::SystemEnvironment];

    /// Select the kind for a property source by its name.
    ///
    /// The process environment is conventionally registered as
    /// `systemEnvironment`, optionally with a qualifying prefix.
    pub fn for_source_name(source_name: &str) -> Self {
        let suffix = format!("-{SYSTEM_ENVIRONMENT_SOURCE}");
        if source_name == SYSTEM_ENVIRONMENT_SOURCE || source_name.ends_with(&suffix) {
            MapperKind::SystemEnvironment
        } else {
            MapperKind::Default
        }
    }

    /// The singleton mapper for this kind.
    pub fn mapper(self) -> &'static dyn PropertyMapper {
        match self {
            MapperKind::Default => &DEFAULT,
            MapperKind::SystemEnvironment => &SYSTEM_ENVIRONMENT,
        }
    }

    /// Mappers to consult, in order, for a source of this kind.
    ///
    /// Environment sources may also hold dotted keys, so they are tried with
    /// the default mapper first.
    pub fn mappers(self) -> &'static [&'static dyn PropertyMapper] {
        static DEFAULT_ONLY: [&dyn PropertyMapper; 1] = [&DEFAULT];
        static ENVIRONMENT: [&dyn PropertyMapper; 2] = [&DEFAULT, &SYSTEM_ENVIRONMENT];
        match self {
            MapperKind::Default => &DEFAULT_ONLY,
            MapperKind::SystemEnvironment => &ENVIRONMENT,
        }
    }

    /// The kebab-case name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            MapperKind::Default => "default",
            MapperKind::SystemEnvironment => "system-environment",
        }
    }
}

impl fmt::Display for MapperKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MapperKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MapperKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown mapper '{}', must be one of: {}",
                    s,
                    MapperKind::ALL.map(MapperKind::as_str).join(", ")
                )
            })
    }
}
