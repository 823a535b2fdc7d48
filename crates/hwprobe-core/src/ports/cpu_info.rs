//! CPU capability-set port.
//!
//! One implementation exists per supported operating system. The facade in
//! [`crate::services::Hardware`] picks the implementation once, from
//! [`crate::Platform`], and never switches afterwards.

use std::collections::BTreeMap;

use crate::domain::{CpuFamily, CpuType, SimdFeatures, WordWidth, optimization_flags};

/// Per-platform CPU information provider.
///
/// Every accessor is memoized by the implementation: the first call may run
/// the kernel query tool, later calls return the cached value even if the
/// hardware would now report something different. Accessors never fail;
/// query failures resolve to the documented defaults.
pub trait CpuInfoPort: Send + Sync {
    /// CPU vendor/architecture class. Defaults to [`CpuType::Unknown`].
    fn cpu_type(&self) -> CpuType;

    /// Microarchitecture family.
    ///
    /// `Some(CpuFamily::Unknown)` for a recognized type whose family code is
    /// not in the table; `None` when the type itself is unknown.
    fn family(&self) -> Option<CpuFamily>;

    /// Logical core count, at least 1.
    fn cores(&self) -> u32;

    /// Word width. Defaults to 64-bit.
    fn bits(&self) -> WordWidth;

    /// `AltiVec`: PowerPC G4 and newer.
    fn is_altivec_capable(&self) -> bool;

    /// SSE3.
    fn is_sse3_capable(&self) -> bool;

    /// SSE4: Intel newer than Core 2.
    fn is_sse4_capable(&self) -> bool;

    /// Recommended compiler flags keyed by family.
    ///
    /// Returns a fresh copy of the shared table.
    fn optimization_flags(&self) -> BTreeMap<CpuFamily, String> {
        optimization_flags()
    }

    fn is_32_bit(&self) -> bool {
        self.bits() == WordWidth::Bits32
    }

    fn is_64_bit(&self) -> bool {
        self.bits() == WordWidth::Bits64
    }

    /// All SIMD predicates folded into one flag set.
    fn simd_features(&self) -> SimdFeatures {
        let mut features = SimdFeatures::empty();
        features.set(SimdFeatures::ALTIVEC, self.is_altivec_capable());
        features.set(SimdFeatures::SSE3, self.is_sse3_capable());
        features.set(SimdFeatures::SSE4, self.is_sse4_capable());
        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed implementation for exercising the provided methods.
    struct FixedCpu {
        bits: WordWidth,
        altivec: bool,
        sse3: bool,
        sse4: bool,
    }

    impl CpuInfoPort for FixedCpu {
        fn cpu_type(&self) -> CpuType {
            CpuType::Unknown
        }

        fn family(&self) -> Option<CpuFamily> {
            None
        }

        fn cores(&self) -> u32 {
            1
        }

        fn bits(&self) -> WordWidth {
            self.bits
        }

        fn is_altivec_capable(&self) -> bool {
            self.altivec
        }

        fn is_sse3_capable(&self) -> bool {
            self.sse3
        }

        fn is_sse4_capable(&self) -> bool {
            self.sse4
        }
    }

    #[test]
    fn test_word_width_predicates() {
        let cpu = FixedCpu {
            bits: WordWidth::Bits32,
            altivec: false,
            sse3: false,
            sse4: false,
        };
        assert!(cpu.is_32_bit());
        assert!(!cpu.is_64_bit());
    }

    #[test]
    fn test_simd_features_mirror_predicates() {
        let cpu = FixedCpu {
            bits: WordWidth::Bits64,
            altivec: false,
            sse3: true,
            sse4: true,
        };
        assert_eq!(
            cpu.simd_features(),
            SimdFeatures::SSE3 | SimdFeatures::SSE4
        );
    }

    #[test]
    fn test_default_optimization_flags_are_the_shared_table() {
        let cpu = FixedCpu {
            bits: WordWidth::Bits64,
            altivec: true,
            sse3: false,
            sse4: false,
        };
        assert_eq!(cpu.optimization_flags(), optimization_flags());
        assert_eq!(cpu.simd_features(), SimdFeatures::ALTIVEC);
    }
}
