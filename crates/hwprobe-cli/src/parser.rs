//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Report CPU facts for package builds.
#[derive(Parser, Debug)]
#[command(name = "hwprobe")]
#[command(about = "Report host CPU type, family, cores and optimization flags")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Emit JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_command_defaults_to_none() {
        let cli = Cli::parse_from(["hwprobe"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(!cli.json);
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from(["hwprobe", "flags", "--all", "--json", "-v"]);
        assert!(cli.verbose);
        assert!(cli.json);
        assert_eq!(cli.command, Some(Commands::Flags { all: true }));
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["hwprobe", "benchmark"]).is_err());
    }
}
