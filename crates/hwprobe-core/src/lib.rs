#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod platform;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    CpuFamily, CpuSummary, CpuType, ParseSymbolError, SimdFeatures, WordWidth, cores_as_words,
    optimization_flags,
};
pub use platform::{HardwareError, HardwareResult, Platform};
pub use ports::{CpuInfoPort, KernelQueryError, KernelQueryPort, KernelQueryResult};
pub use services::{Hardware, LinuxCpus, MacCpus};
pub use settings::{
    DEFAULT_GETCONF_PATH, DEFAULT_SYSCTL_PATH, DEFAULT_UNAME_PATH, ProbeSettings, SettingsError,
    validate_settings,
};

#[cfg(test)]
use serde_json as _;
