//! CLI bootstrap - the composition root.
//!
//! This module is the only place where the query adapters and the CPU
//! provider are wired together. Handlers receive the finished `CliContext`.

use hwprobe_core::{Hardware, ProbeSettings, validate_settings};
use hwprobe_runtime::detect_hardware;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Query tool locations.
    pub settings: ProbeSettings,
}

impl CliConfig {
    /// Read and validate settings from the environment.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_settings(ProbeSettings::from_env())
    }

    pub fn from_settings(settings: ProbeSettings) -> Result<Self, CliError> {
        validate_settings(&settings)?;
        Ok(Self { settings })
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    pub hardware: Hardware,
}

impl CliContext {
    pub const fn hardware(&self) -> &Hardware {
        &self.hardware
    }
}

/// Bootstrap the CLI application.
///
/// Fails when the host platform is unsupported. No query tool runs here;
/// properties are resolved when a handler first reads them.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let hardware = detect_hardware(&config.settings)?;
    debug!(platform = %hardware.platform(), "bootstrap complete");
    Ok(CliContext { hardware })
}

/// Install the global tracing subscriber, writing to stderr.
///
/// `--verbose` forces `debug`; otherwise `RUST_LOG` is honored with a
/// default of `warn`.
pub fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok(); // Ignore error if already initialized
}
