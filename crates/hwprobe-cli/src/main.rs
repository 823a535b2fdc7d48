//! CLI entry point - the composition root.
//!
//! Wiring happens in `bootstrap`; command dispatch routes to handlers.

use std::process::ExitCode;

use clap::Parser;

use hwprobe_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers, init_logging};

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_env()?;
    let ctx = bootstrap(&config)?;

    match cli.command.clone().unwrap_or(Commands::Summary) {
        Commands::Summary => handlers::summary::execute(ctx.hardware(), cli.json)?,
        Commands::Flags { all } => handlers::flags::execute(ctx.hardware(), all, cli.json)?,
    }

    Ok(())
}

fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}
