//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Loads configuration and resolves the mapper
//! 2. Calls the mapper
//! 3. Formats and displays output
//!
//! Environment access is kept at the edge: the lookup and scan helpers take
//! the variables as arguments so they can be tested without touching the
//! process environment.

mod ancestor;
mod completion;
mod config_cmd;
mod from_flat;
mod lookup;
mod scan;
mod to_flat;

// Re-export command functions for testing and direct invocation
pub use ancestor::{ancestor, resolve_candidate};
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use from_flat::from_flat;
pub use lookup::{find_value, lookup, LookupResult};
pub use scan::{scan, scan_entries, ScanEntry};
pub use to_flat::to_flat;

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::ToFlat { name } => to_flat(ctx, &name),
        Command::FromFlat { flat } => from_flat(ctx, &flat),
        Command::Ancestor { name, candidate } => ancestor(ctx, &name, &candidate),
        Command::Lookup { name } => lookup(ctx, &name),
        Command::Scan { prefix } => scan(ctx, prefix),
        Command::Config { action } => match action.unwrap_or(ConfigAction::List) {
            ConfigAction::Get { key } => config_get(ctx, &key),
            ConfigAction::Set { key, value } => config_set(ctx, &key, &value),
            ConfigAction::List => config_list(ctx),
        },
        Command::Completion { shell } => completion(shell),
    }
}
