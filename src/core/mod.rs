//! core
//!
//! Core domain types and name mapping for propmap.
//!
//! # Modules
//!
//! - [`name`] - Hierarchical property names (`server.port`, `hosts[0].name`)
//! - [`mapping`] - Pairing of a source name with a property name
//! - [`mapper`] - Strategies translating between naming conventions
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Names are validated at construction and immutable afterwards
//! - Mappers are stateless and never fail; unmappable input yields no mapping
//! - All mapping is deterministic

pub mod config;
pub mod mapper;
pub mod mapping;
pub mod name;
