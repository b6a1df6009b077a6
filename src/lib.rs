//! propmap - Configuration property name mapping
//!
//! propmap translates between two naming conventions for the same
//! configuration value: hierarchical property names such as `server.port` or
//! `servers[0].host`, and flat environment-variable names such as
//! `SERVER_PORT` or `SERVERS_0_HOST`.
//!
//! # Architecture
//!
//! - [`core`] - Property names, mappings, mappers, and configuration
//! - [`cli`] - Command-line interface layer
//! - [`ui`] - Output formatting
//!
//! # Example
//!
//! ```
//! use propmap::core::mapper::{PropertyMapper, SYSTEM_ENVIRONMENT};
//! use propmap::core::name::PropertyName;
//!
//! let name = PropertyName::of("server.command-line-args").unwrap();
//! let flat: Vec<_> = SYSTEM_ENVIRONMENT
//!     .map_name(&name)
//!     .into_iter()
//!     .map(|m| m.source_name)
//!     .collect();
//! assert_eq!(flat, ["SERVER_COMMANDLINEARGS", "SERVER_COMMAND_LINE_ARGS"]);
//!
//! let parent = PropertyName::of("server.command-line").unwrap();
//! let mappings = SYSTEM_ENVIRONMENT.map_source("SERVER_COMMAND_LINE_ARGS");
//! assert!(SYSTEM_ENVIRONMENT.is_ancestor_of(&parent, &mappings[0].name));
//! ```

pub mod cli;
pub mod core;
pub mod ui;
