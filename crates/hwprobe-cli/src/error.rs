//! CLI-specific error types and mappings.
//!
//! Maps core errors to exit codes and user-facing messages.

use hwprobe_core::{HardwareError, SettingsError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The host OS has no CPU provider.
    #[error("{0}")]
    UnsupportedPlatform(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error while writing output.
    #[error("IO error: {0}")]
    Io(String),

    /// Output could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits:
    /// - 1: General error
    /// - 69: Service unavailable (unsupported platform)
    /// - 74: IO error
    /// - 78: Configuration error
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::UnsupportedPlatform(_) => 69, // EX_UNAVAILABLE
            Self::Config(_) => 78,              // EX_CONFIG
            Self::Io(_) => 74,                  // EX_IOERR
            Self::Serialization(_) => 1,
        }
    }
}

impl From<HardwareError> for CliError {
    fn from(err: HardwareError) -> Self {
        match err {
            HardwareError::UnsupportedPlatform { .. } => Self::UnsupportedPlatform(err.to_string()),
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
