//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--json`: Machine-readable output
//! - `--mapper <kind>`: Mapping strategy override

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::mapper::MapperKind;
use crate::core::name::PropertyName;

/// propmap - Map configuration property names to and from environment variables
#[derive(Parser, Debug)]
#[command(name = "propmap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if propmap was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Mapping strategy: default or system-environment
    #[arg(long, global = true, value_name = "KIND")]
    pub mapper: Option<MapperKind>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the source names a property name maps to
    #[command(
        name = "to-flat",
        long_about = "Show the source names a canonical property name maps to.\n\n\
            Names are listed in order of preference. With the system-environment \
            mapper a dashed name has two forms: the modern form folds dashes out, \
            the legacy form turns them into separators.",
        after_help = "\
EXAMPLES:
    propmap to-flat server.port
        SERVER_PORT

    propmap to-flat server.command-line-args
        SERVER_COMMANDLINEARGS
        SERVER_COMMAND_LINE_ARGS

    propmap to-flat 'servers[0].host'
        SERVERS_0_HOST"
    )]
    ToFlat {
        /// Canonical property name (e.g. server.port)
        name: PropertyName,
    },

    /// Show the property name a source name represents
    #[command(
        name = "from-flat",
        after_help = "\
EXAMPLES:
    propmap from-flat SERVER_PORT
        server.port

    propmap from-flat SERVERS_0_HOST
        servers[0].host"
    )]
    FromFlat {
        /// Source name (e.g. SERVER_PORT)
        flat: String,
    },

    /// Check whether one property name is an ancestor of another
    #[command(
        name = "ancestor",
        long_about = "Check whether NAME is an ancestor of CANDIDATE.\n\n\
            CANDIDATE may be a canonical name or a source name such as an \
            environment variable; source names are mapped first. Prints true \
            or false."
    )]
    Ancestor {
        /// Canonical property name
        name: PropertyName,

        /// Canonical or source name
        candidate: String,
    },

    /// Look up a property in the process environment
    #[command(
        name = "lookup",
        after_help = "\
EXAMPLES:
    SERVER_PORT=8080 propmap lookup server.port
        SERVER_PORT=8080"
    )]
    Lookup {
        /// Canonical property name
        name: PropertyName,
    },

    /// List environment variables as property names
    #[command(name = "scan")]
    Scan {
        /// Only list properties at or under this name
        #[arg(long)]
        prefix: Option<PropertyName>,
    },

    /// Get, set, or list configuration values
    #[command(
        name = "config",
        after_help = "\
KEYS:
    mapper         default | system-environment
    format         text | json
    scan.prefix    canonical property name"
    )]
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value in the project config
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "propmap",
            "to-flat",
            "server.port",
            "--json",
            "--mapper",
            "default",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.mapper, Some(MapperKind::Default));
        match cli.command {
            Command::ToFlat { name } => assert_eq!(name.to_string(), "server.port"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_invalid_property_name() {
        assert!(Cli::try_parse_from(["propmap", "to-flat", "Server.Port"]).is_err());
    }

    #[test]
    fn rejects_unknown_mapper() {
        assert!(Cli::try_parse_from(["propmap", "--mapper", "env", "scan"]).is_err());
    }
}
