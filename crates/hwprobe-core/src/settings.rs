//! Probe settings and validation.
//!
//! Settings only locate the kernel query tools. All fields are optional so
//! that environment overrides can be partial.

use serde::{Deserialize, Serialize};

/// Default location of `sysctl` on macOS.
pub const DEFAULT_SYSCTL_PATH: &str = "/usr/sbin/sysctl";

/// Default `getconf`, resolved through `PATH`.
pub const DEFAULT_GETCONF_PATH: &str = "getconf";

/// Default `uname`, resolved through `PATH`.
pub const DEFAULT_UNAME_PATH: &str = "uname";

/// Environment variable overriding [`DEFAULT_SYSCTL_PATH`].
pub const ENV_SYSCTL: &str = "HWPROBE_SYSCTL";
/// Environment variable overriding [`DEFAULT_GETCONF_PATH`].
pub const ENV_GETCONF: &str = "HWPROBE_GETCONF";
/// Environment variable overriding [`DEFAULT_UNAME_PATH`].
pub const ENV_UNAME: &str = "HWPROBE_UNAME";

/// Locations of the kernel query tools.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProbeSettings {
    /// Path to `sysctl` (macOS).
    pub sysctl_path: Option<String>,

    /// Path to `getconf` (Linux).
    pub getconf_path: Option<String>,

    /// Path to `uname` (Linux).
    pub uname_path: Option<String>,
}

impl ProbeSettings {
    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through an arbitrary lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            sysctl_path: lookup(ENV_SYSCTL),
            getconf_path: lookup(ENV_GETCONF),
            uname_path: lookup(ENV_UNAME),
        }
    }

    pub fn effective_sysctl_path(&self) -> &str {
        self.sysctl_path.as_deref().unwrap_or(DEFAULT_SYSCTL_PATH)
    }

    pub fn effective_getconf_path(&self) -> &str {
        self.getconf_path.as_deref().unwrap_or(DEFAULT_GETCONF_PATH)
    }

    pub fn effective_uname_path(&self) -> &str {
        self.uname_path.as_deref().unwrap_or(DEFAULT_UNAME_PATH)
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("{0} must not be empty")]
    EmptyPath(&'static str),
}

/// Validate settings, rejecting overrides that cannot name a program.
pub fn validate_settings(settings: &ProbeSettings) -> Result<(), SettingsError> {
    let fields = [
        (ENV_SYSCTL, &settings.sysctl_path),
        (ENV_GETCONF, &settings.getconf_path),
        (ENV_UNAME, &settings.uname_path),
    ];
    for (name, value) in fields {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(SettingsError::EmptyPath(name));
        }
    }
    Ok(())
}
