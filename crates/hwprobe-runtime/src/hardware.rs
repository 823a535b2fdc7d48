//! Composition helper: platform + query adapter + provider.

use std::sync::Arc;

use hwprobe_core::{Hardware, HardwareResult, KernelQueryPort, Platform, ProbeSettings};
use tracing::debug;

use crate::query::{LinuxQuery, SysctlQuery};

/// Build the query adapter for `platform` from `settings`.
pub fn query_for(platform: Platform, settings: &ProbeSettings) -> Arc<dyn KernelQueryPort> {
    match platform {
        Platform::MacOs => Arc::new(SysctlQuery::new(settings.effective_sysctl_path())),
        Platform::Linux => Arc::new(LinuxQuery::new(
            settings.effective_getconf_path(),
            settings.effective_uname_path(),
        )),
    }
}

/// Detect the host platform and return its `Hardware`.
///
/// Fails only when the host OS is unsupported. No query runs until a
/// property is first read.
pub fn detect_hardware(settings: &ProbeSettings) -> HardwareResult<Hardware> {
    let platform = Platform::detect()?;
    debug!(%platform, "selected CPU provider");
    Ok(Hardware::new(platform, query_for(platform, settings)))
}
