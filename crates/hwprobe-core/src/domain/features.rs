//! SIMD instruction set flags.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// SIMD extensions derived from the resolved CPU type and family.
    ///
    /// These are static derivations from the family tables, not the result
    /// of executing feature-detection instructions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[repr(transparent)]
    pub struct SimdFeatures: u32 {
        /// PowerPC G4 and newer.
        const ALTIVEC = 0b0000_0001;
        /// Every supported Intel CPU.
        const SSE3    = 0b0000_0010;
        /// Intel CPUs newer than Core 2.
        const SSE4    = 0b0000_0100;
    }
}

impl SimdFeatures {
    const NAMES: [(Self, &'static str); 3] = [
        (Self::ALTIVEC, "altivec"),
        (Self::SSE3, "sse3"),
        (Self::SSE4, "sse4"),
    ];

    /// Lowercase names of the set flags, in bit order.
    pub fn names(self) -> Vec<&'static str> {
        Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl Serialize for SimdFeatures {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SimdFeatures {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}
