//! Linux CPU provider backed by `uname -m` and `getconf`.
//!
//! Linux has no equivalent of the Mach family codes through these tools,
//! so a recognized CPU type always resolves to `CpuFamily::Unknown`.

use std::sync::Arc;

use tracing::debug;

use super::cache::CpuCache;
use crate::domain::{CpuFamily, CpuType, WordWidth, cpu_type_from_machine};
use crate::ports::{CpuInfoPort, KernelQueryPort};

/// Pseudo-property answered by `uname -m`.
pub const MACHINE: &str = "machine";
pub const GETCONF_NPROCESSORS_ONLN: &str = "_NPROCESSORS_ONLN";
pub const GETCONF_LONG_BIT: &str = "LONG_BIT";

/// CPU information for Linux hosts.
pub struct LinuxCpus {
    query: Arc<dyn KernelQueryPort>,
    cache: CpuCache,
}

impl LinuxCpus {
    pub fn new(query: Arc<dyn KernelQueryPort>) -> Self {
        Self {
            query,
            cache: CpuCache::new(),
        }
    }

    fn read(&self, property: &str) -> Option<String> {
        self.query
            .query(property)
            .inspect_err(|e| debug!(property, error = %e, "query failed, using default"))
            .ok()
    }

    fn read_int(&self, property: &str) -> Option<i64> {
        self.query
            .query_int(property)
            .inspect_err(|e| debug!(property, error = %e, "query failed, using default"))
            .ok()
    }
}

impl CpuInfoPort for LinuxCpus {
    fn cpu_type(&self) -> CpuType {
        self.cache.cpu_type(|| {
            self.read(MACHINE)
                .map_or(CpuType::Unknown, |machine| cpu_type_from_machine(&machine))
        })
    }

    fn family(&self) -> Option<CpuFamily> {
        self.cache.family(|| match self.cpu_type() {
            CpuType::Intel | CpuType::Ppc => Some(CpuFamily::Unknown),
            CpuType::Unknown => None,
        })
    }

    fn cores(&self) -> u32 {
        self.cache.cores(|| {
            self.read_int(GETCONF_NPROCESSORS_ONLN)
                .and_then(|n| u32::try_from(n).ok())
                .filter(|&n| n > 0)
                .unwrap_or(1)
        })
    }

    fn bits(&self) -> WordWidth {
        self.cache.bits(|| {
            self.read_int(GETCONF_LONG_BIT)
                .and_then(WordWidth::from_bits)
                .unwrap_or_default()
        })
    }

    fn is_altivec_capable(&self) -> bool {
        self.cpu_type() == CpuType::Ppc && self.family() != Some(CpuFamily::G3)
    }

    fn is_sse3_capable(&self) -> bool {
        self.cpu_type() == CpuType::Intel
    }

    fn is_sse4_capable(&self) -> bool {
        self.cpu_type() == CpuType::Intel
            && !matches!(
                self.family(),
                Some(CpuFamily::Core | CpuFamily::Core2)
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{KernelQueryError, KernelQueryResult};
    use mockall::mock;

    mock! {
        Tools {}
        impl KernelQueryPort for Tools {
            fn query(&self, property: &str) -> KernelQueryResult<String>;
        }
    }

    fn linux_with(machine: &'static str, cores: &'static str, bits: &'static str) -> LinuxCpus {
        let mut tools = MockTools::new();
        tools.expect_query().returning(move |property| {
            let value = match property {
                MACHINE => machine,
                GETCONF_NPROCESSORS_ONLN => cores,
                GETCONF_LONG_BIT => bits,
                _ => "",
            };
            if value.is_empty() {
                Err(KernelQueryError::EmptyOutput {
                    property: property.to_string(),
                })
            } else {
                Ok(value.to_string())
            }
        });
        LinuxCpus::new(Arc::new(tools))
    }

    #[test]
    fn test_x86_64_host() {
        let cpu = linux_with("x86_64", "16", "64");
        assert_eq!(cpu.cpu_type(), CpuType::Intel);
        assert_eq!(cpu.family(), Some(CpuFamily::Unknown));
        assert_eq!(cpu.cores(), 16);
        assert_eq!(cpu.bits(), WordWidth::Bits64);
        assert!(cpu.is_sse3_capable());
        assert!(cpu.is_sse4_capable());
        assert!(!cpu.is_altivec_capable());
    }

    #[test]
    fn test_ppc_host() {
        let cpu = linux_with("ppc64le", "4", "64");
        assert_eq!(cpu.cpu_type(), CpuType::Ppc);
        assert!(cpu.is_altivec_capable());
        assert!(!cpu.is_sse3_capable());
    }

    #[test]
    fn test_unrecognized_machine() {
        let cpu = linux_with("aarch64", "8", "64");
        assert_eq!(cpu.cpu_type(), CpuType::Unknown);
        assert_eq!(cpu.family(), None);
        assert!(cpu.simd_features().is_empty());
    }

    #[test]
    fn test_32_bit_userland() {
        let cpu = linux_with("i686", "2", "32");
        assert_eq!(cpu.bits(), WordWidth::Bits32);
    }

    #[test]
    fn test_failed_tools_fall_back_to_defaults() {
        let cpu = linux_with("", "", "");
        assert_eq!(cpu.cpu_type(), CpuType::Unknown);
        assert_eq!(cpu.cores(), 1);
        assert_eq!(cpu.bits(), WordWidth::Bits64);
    }

    #[test]
    fn test_odd_long_bit_defaults_to_64() {
        let cpu = linux_with("x86_64", "2", "48");
        assert_eq!(cpu.bits(), WordWidth::Bits64);
    }
}
