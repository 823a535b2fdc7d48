//! Host platform detection.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Errors raised while setting up hardware probing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HardwareError {
    /// The host OS has no CPU provider.
    #[error("The system `{os}' is not supported.")]
    UnsupportedPlatform { os: String },
}

/// Result type for hardware setup.
pub type HardwareResult<T> = Result<T, HardwareError>;

/// Operating systems with a CPU provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    MacOs,
    Linux,
}

impl Platform {
    /// Detect the platform this binary was built for.
    pub fn detect() -> HardwareResult<Self> {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Classify an OS name as reported by `std::env::consts::OS` or `uname`.
    pub fn from_os_name(os: &str) -> HardwareResult<Self> {
        match os.trim().to_ascii_lowercase().as_str() {
            "macos" | "darwin" => Ok(Self::MacOs),
            "linux" => Ok(Self::Linux),
            _ => {
                warn!(os, "No CPU provider for this operating system");
                Err(HardwareError::UnsupportedPlatform { os: os.to_string() })
            }
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MacOs => "macos",
            Self::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
