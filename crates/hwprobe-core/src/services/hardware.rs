//! `Hardware` facade.
//!
//! Selects the CPU provider for the host platform once and layers the
//! user-facing formatting on top of it.

use std::fmt;
use std::sync::Arc;

use super::linux_cpus::LinuxCpus;
use super::mac_cpus::MacCpus;
use crate::domain::{CpuSummary, cores_as_words};
use crate::platform::{HardwareResult, Platform};
use crate::ports::{CpuInfoPort, KernelQueryPort};

/// Information about the hardware hwprobe is running on.
///
/// # Example
///
/// ```ignore
/// use hwprobe_core::{Hardware, Platform};
///
/// let hardware = Hardware::new(Platform::MacOs, query);
/// println!("CPU: {hardware}"); // "CPU: dual-core 64-bit penryn"
/// ```
pub struct Hardware {
    platform: Platform,
    cpu: Box<dyn CpuInfoPort>,
}

impl Hardware {
    /// Build the provider for `platform` on top of `query`.
    pub fn new(platform: Platform, query: Arc<dyn KernelQueryPort>) -> Self {
        let cpu: Box<dyn CpuInfoPort> = match platform {
            Platform::MacOs => Box::new(MacCpus::new(query)),
            Platform::Linux => Box::new(LinuxCpus::new(query)),
        };
        Self { platform, cpu }
    }

    /// Build the provider for the host platform.
    ///
    /// Fails with [`crate::HardwareError::UnsupportedPlatform`] on any OS
    /// other than macOS and Linux.
    pub fn detect(query: Arc<dyn KernelQueryPort>) -> HardwareResult<Self> {
        Ok(Self::new(Platform::detect()?, query))
    }

    /// Wrap an existing provider.
    pub fn with_provider(platform: Platform, cpu: Box<dyn CpuInfoPort>) -> Self {
        Self { platform, cpu }
    }

    pub const fn platform(&self) -> Platform {
        self.platform
    }

    pub fn cpu(&self) -> &dyn CpuInfoPort {
        self.cpu.as_ref()
    }

    /// The core count as an English word ("single", "dual", "quad") or a
    /// numeral.
    pub fn cores_as_words(&self) -> String {
        cores_as_words(self.cpu.cores())
    }

    /// Recommended compiler flags for the resolved family, if any.
    pub fn optimization_flag(&self) -> Option<String> {
        let family = self.cpu.family()?;
        self.cpu.optimization_flags().remove(&family)
    }

    pub fn summary(&self) -> CpuSummary {
        CpuSummary {
            platform: self.platform.to_string(),
            cpu_type: self.cpu.cpu_type(),
            family: self.cpu.family(),
            cores: self.cpu.cores(),
            cores_as_words: self.cores_as_words(),
            bits: self.cpu.bits(),
            features: self.cpu.simd_features(),
            optimization_flags: self.optimization_flag(),
        }
    }
}

impl fmt::Display for Hardware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-core {}-bit ", self.cores_as_words(), self.cpu.bits())?;
        match self.cpu.family() {
            Some(family) => write!(f, "{family}"),
            None => write!(f, "{}", self.cpu.cpu_type()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CpuFamily, CpuType, SimdFeatures, WordWidth};
    use crate::ports::{KernelQueryError, KernelQueryResult};
    use mockall::mock;

    mock! {
        Query {}
        impl KernelQueryPort for Query {
            fn query(&self, property: &str) -> KernelQueryResult<String>;
        }
    }

    fn penryn_mac() -> Hardware {
        let mut query = MockQuery::new();
        query.expect_query().returning(|property| match property {
            "hw.cputype" => Ok("7".to_string()),
            "hw.cpufamily" => Ok("2028621756".to_string()),
            "hw.ncpu" => Ok("2".to_string()),
            "hw.cpu64bit_capable" => Ok("1".to_string()),
            other => Err(KernelQueryError::EmptyOutput {
                property: other.to_string(),
            }),
        });
        Hardware::new(Platform::MacOs, Arc::new(query))
    }

    #[test]
    fn test_display_matches_config_line() {
        assert_eq!(penryn_mac().to_string(), "dual-core 64-bit penryn");
    }

    #[test]
    fn test_optimization_flag_for_family() {
        assert_eq!(
            penryn_mac().optimization_flag().as_deref(),
            Some("-march=core2 -msse4.1")
        );
    }

    #[test]
    fn test_summary() {
        let summary = penryn_mac().summary();
        assert_eq!(summary.platform, "macos");
        assert_eq!(summary.cpu_type, CpuType::Intel);
        assert_eq!(summary.family, Some(CpuFamily::Penryn));
        assert_eq!(summary.cores, 2);
        assert_eq!(summary.cores_as_words, "dual");
        assert_eq!(summary.bits, WordWidth::Bits64);
        assert_eq!(summary.features, SimdFeatures::SSE3 | SimdFeatures::SSE4);
    }

    #[test]
    fn test_linux_selects_linux_provider() {
        let mut query = MockQuery::new();
        query.expect_query().returning(|property| match property {
            "machine" => Ok("x86_64".to_string()),
            "_NPROCESSORS_ONLN" => Ok("12".to_string()),
            _ => Ok("64".to_string()),
        });
        let hardware = Hardware::new(Platform::Linux, Arc::new(query));

        assert_eq!(hardware.platform(), Platform::Linux);
        assert_eq!(hardware.to_string(), "12-core 64-bit unknown");
        assert_eq!(hardware.optimization_flag(), None);
    }

    #[test]
    fn test_unresolved_family_displays_type() {
        let mut query = MockQuery::new();
        query.expect_query().returning(|property| {
            Err(KernelQueryError::Spawn {
                program: "/usr/sbin/sysctl".to_string(),
                reason: format!("not found while reading {property}"),
            })
        });
        let hardware = Hardware::new(Platform::MacOs, Arc::new(query));

        assert_eq!(hardware.to_string(), "single-core 64-bit unknown");
        assert_eq!(hardware.summary().family, None);
    }
}
