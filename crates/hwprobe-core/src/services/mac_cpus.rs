//! macOS CPU provider backed by `sysctl`.
//!
//! Property codes are decoded with the tables in [`crate::domain`], which
//! follow `<mach/machine.h>`.

use std::sync::Arc;

use tracing::debug;

use super::cache::CpuCache;
use crate::domain::{
    CpuFamily, CpuType, WordWidth, cpu_type_from_code, intel_family_from_code,
    ppc_family_from_subtype,
};
use crate::ports::{CpuInfoPort, KernelQueryPort};

pub const SYSCTL_CPU_TYPE: &str = "hw.cputype";
pub const SYSCTL_CPU_FAMILY: &str = "hw.cpufamily";
pub const SYSCTL_CPU_SUBTYPE: &str = "hw.cpusubtype";
pub const SYSCTL_NCPU: &str = "hw.ncpu";
pub const SYSCTL_CPU64BIT_CAPABLE: &str = "hw.cpu64bit_capable";

/// CPU information for macOS hosts.
pub struct MacCpus {
    query: Arc<dyn KernelQueryPort>,
    cache: CpuCache,
}

impl MacCpus {
    pub fn new(query: Arc<dyn KernelQueryPort>) -> Self {
        Self {
            query,
            cache: CpuCache::new(),
        }
    }

    /// Integer sysctl value, or `None` if the query failed in any way.
    fn sysctl_int(&self, property: &str) -> Option<i64> {
        match self.query.query_int(property) {
            Ok(value) => {
                debug!(property, value, "sysctl query");
                Some(value)
            }
            Err(e) => {
                debug!(property, error = %e, "sysctl query failed, using default");
                None
            }
        }
    }

    /// Boolean sysctl value: `Some(true)` for 1, `Some(false)` for 0,
    /// `None` for failure or any other output.
    fn sysctl_bool(&self, property: &str) -> Option<bool> {
        match self.sysctl_int(property)? {
            1 => Some(true),
            0 => Some(false),
            other => {
                debug!(property, other, "sysctl boolean out of range");
                None
            }
        }
    }
}

impl CpuInfoPort for MacCpus {
    fn cpu_type(&self) -> CpuType {
        self.cache.cpu_type(|| {
            self.sysctl_int(SYSCTL_CPU_TYPE)
                .map_or(CpuType::Unknown, cpu_type_from_code)
        })
    }

    fn family(&self) -> Option<CpuFamily> {
        self.cache.family(|| match self.cpu_type() {
            CpuType::Intel => Some(
                self.sysctl_int(SYSCTL_CPU_FAMILY)
                    .map_or(CpuFamily::Unknown, intel_family_from_code),
            ),
            CpuType::Ppc => Some(
                self.sysctl_int(SYSCTL_CPU_SUBTYPE)
                    .map_or(CpuFamily::Unknown, ppc_family_from_subtype),
            ),
            CpuType::Unknown => None,
        })
    }

    fn cores(&self) -> u32 {
        self.cache.cores(|| {
            self.sysctl_int(SYSCTL_NCPU)
                .and_then(|n| u32::try_from(n).ok())
                .filter(|&n| n > 0)
                .unwrap_or(1)
        })
    }

    fn bits(&self) -> WordWidth {
        self.cache.bits(|| match self.sysctl_bool(SYSCTL_CPU64BIT_CAPABLE) {
            Some(false) => WordWidth::Bits32,
            Some(true) | None => WordWidth::Bits64,
        })
    }

    fn is_altivec_capable(&self) -> bool {
        self.cpu_type() == CpuType::Ppc && self.family() != Some(CpuFamily::G3)
    }

    // Every Intel Mac shipped with SSE3, so the type alone decides.
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
