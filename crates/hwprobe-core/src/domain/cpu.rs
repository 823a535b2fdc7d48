//! CPU classification enums.
//!
//! Symbol names (`intel`, `core2`, `g4e`, ...) are the canonical lowercase
//! form used for display, serialization and parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a symbol name does not match any variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} symbol: {value}")]
pub struct ParseSymbolError {
    /// Which enum was being parsed (e.g. "cpu type").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Top-level CPU vendor/architecture class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CpuType {
    Intel,
    Ppc,
    /// The kernel reported a type code outside the supported set.
    Unknown,
}

impl CpuType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Intel => "intel",
            Self::Ppc => "ppc",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CpuType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CpuType {
    type Err = ParseSymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "intel" => Ok(Self::Intel),
            "ppc" => Ok(Self::Ppc),
            "unknown" => Ok(Self::Unknown),
            other => Err(ParseSymbolError {
                kind: "cpu type",
                value: other.to_string(),
            }),
        }
    }
}

/// CPU microarchitecture family.
///
/// Intel and PowerPC families live in separate code spaces; a family is
/// only meaningful together with the [`CpuType`] it was resolved under.
/// Declaration order is the ordering used for the optimization flag table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CpuFamily {
    /// Yonah: Core Solo/Duo.
    Core,
    /// Merom: Core 2 Duo.
    Core2,
    Penryn,
    Nehalem,
    Arrandale,
    SandyBridge,
    IvyBridge,
    /// PowerPC 750.
    G3,
    /// PowerPC 7400.
    G4,
    /// PowerPC 7450.
    G4e,
    /// PowerPC 970.
    G5,
    /// Recognized CPU type, unrecognized family code.
    Unknown,
}

impl CpuFamily {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Core,
        Self::Core2,
        Self::Penryn,
        Self::Nehalem,
        Self::Arrandale,
        Self::SandyBridge,
        Self::IvyBridge,
        Self::G3,
        Self::G4,
        Self::G4e,
        Self::G5,
        Self::Unknown,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Core2 => "core2",
            Self::Penryn => "penryn",
            Self::Nehalem => "nehalem",
            Self::Arrandale => "arrandale",
            Self::SandyBridge => "sandybridge",
            Self::IvyBridge => "ivybridge",
            Self::G3 => "g3",
            Self::G4 => "g4",
            Self::G4e => "g4e",
            Self::G5 => "g5",
            Self::Unknown => "unknown",
        }
    }

    /// Whether this family belongs to the Intel code space.
    pub const fn is_intel(self) -> bool {
        matches!(
            self,
            Self::Core
                | Self::Core2
                | Self::Penryn
                | Self::Nehalem
                | Self::Arrandale
                | Self::SandyBridge
                | Self::IvyBridge
        )
    }

    /// Whether this family belongs to the PowerPC code space.
    pub const fn is_ppc(self) -> bool {
        matches!(self, Self::G3 | Self::G4 | Self::G4e | Self::G5)
    }
}

impl fmt::Display for CpuFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CpuFamily {
    type Err = ParseSymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|family| family.as_str() == s)
            .ok_or_else(|| ParseSymbolError {
                kind: "cpu family",
                value: s.to_string(),
            })
    }
}

/// Addressing width of the CPU/OS combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WordWidth {
    Bits32,
    #[default]
    Bits64,
}

impl WordWidth {
    pub const fn as_u32(self) -> u32 {
        match self {
            Self::Bits32 => 32,
            Self::Bits64 => 64,
        }
    }

    /// Map a bit count onto a width. Only 32 and 64 are accepted.
    pub const fn from_bits(bits: i64) -> Option<Self> {
        match bits {
            32 => Some(Self::Bits32),
            64 => Some(Self::Bits64),
            _ => None,
        }
    }
}

impl fmt::Display for WordWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

impl Serialize for WordWidth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_u32().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WordWidth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Self::from_bits(i64::from(bits))
            .ok_or_else(|| serde::de::Error::custom(format!("invalid word width: {bits}")))
    }
}
