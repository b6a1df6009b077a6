//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! All command output goes through this module so quiet mode and JSON
//! rendering behave the same everywhere. Diagnostics use `tracing` instead.

pub mod output;
