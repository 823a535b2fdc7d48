//! Subcommands.

use clap::Subcommand;

/// Available commands. With no command, `summary` runs.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print a hardware summary
    Summary,

    /// Print recommended compiler optimization flags
    Flags {
        /// Print the flags for every known CPU family
        #[arg(long)]
        all: bool,
    },
}
