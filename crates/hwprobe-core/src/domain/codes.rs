//! Kernel code tables.
//!
//! Constants come from `<mach/machine.h>`. The Linux machine names are the
//! `uname -m` strings for the architectures we classify.

use std::collections::BTreeMap;

use super::cpu::{CpuFamily, CpuType};

/// `CPU_TYPE_X86`
pub const CPU_TYPE_X86: i64 = 7;
/// `CPU_TYPE_POWERPC`
pub const CPU_TYPE_POWERPC: i64 = 18;

pub const CPUFAMILY_INTEL_YONAH: u32 = 0x73d6_7300;
pub const CPUFAMILY_INTEL_MEROM: u32 = 0x426f_69ef;
pub const CPUFAMILY_INTEL_PENRYN: u32 = 0x78ea_4fbc;
pub const CPUFAMILY_INTEL_NEHALEM: u32 = 0x6b5a_4cd2;
pub const CPUFAMILY_INTEL_ARRANDALE: u32 = 0x573b_5eec;
pub const CPUFAMILY_INTEL_SANDYBRIDGE: u32 = 0x5490_b78c;
pub const CPUFAMILY_INTEL_IVYBRIDGE: u32 = 0x1f65_e835;

pub const CPU_SUBTYPE_POWERPC_750: i64 = 9;
pub const CPU_SUBTYPE_POWERPC_7400: i64 = 10;
pub const CPU_SUBTYPE_POWERPC_7450: i64 = 11;
pub const CPU_SUBTYPE_POWERPC_970: i64 = 100;

const OPTIMIZATION_FLAGS: [(CpuFamily, &str); 7] = [
    (CpuFamily::Penryn, "-march=core2 -msse4.1"),
    (CpuFamily::Core2, "-march=core2"),
    (CpuFamily::Core, "-march=prescott"),
    (CpuFamily::G3, "-mcpu=750"),
    (CpuFamily::G4, "-mcpu=7400"),
    (CpuFamily::G4e, "-mcpu=7450"),
    (CpuFamily::G5, "-mcpu=970"),
];

/// Map `hw.cputype` onto a [`CpuType`].
pub const fn cpu_type_from_code(code: i64) -> CpuType {
    match code {
        CPU_TYPE_X86 => CpuType::Intel,
        CPU_TYPE_POWERPC => CpuType::Ppc,
        _ => CpuType::Unknown,
    }
}

/// Map `hw.cpufamily` onto an Intel [`CpuFamily`].
///
/// Codes outside the 32-bit range are unknown.
pub fn intel_family_from_code(code: i64) -> CpuFamily {
    let Some(code) = family_bits(code) else {
        return CpuFamily::Unknown;
    };
    match code {
        CPUFAMILY_INTEL_YONAH => CpuFamily::Core,
        CPUFAMILY_INTEL_MEROM => CpuFamily::Core2,
        CPUFAMILY_INTEL_PENRYN => CpuFamily::Penryn,
        CPUFAMILY_INTEL_NEHALEM => CpuFamily::Nehalem,
        CPUFAMILY_INTEL_ARRANDALE => CpuFamily::Arrandale,
        CPUFAMILY_INTEL_SANDYBRIDGE => CpuFamily::SandyBridge,
        CPUFAMILY_INTEL_IVYBRIDGE => CpuFamily::IvyBridge,
        _ => CpuFamily::Unknown,
    }
}

/// sysctl may print the family as a signed 32-bit value, which is
/// reinterpreted as unsigned.
#[allow(clippy::cast_sign_loss)]
fn family_bits(code: i64) -> Option<u32> {
    u32::try_from(code)
        .ok()
        .or_else(|| i32::try_from(code).ok().map(|signed| signed as u32))
}

/// Map `hw.cpusubtype` onto a PowerPC [`CpuFamily`].
pub const fn ppc_family_from_subtype(subtype: i64) -> CpuFamily {
    match subtype {
        CPU_SUBTYPE_POWERPC_750 => CpuFamily::G3,
        CPU_SUBTYPE_POWERPC_7400 => CpuFamily::G4,
        CPU_SUBTYPE_POWERPC_7450 => CpuFamily::G4e,
        CPU_SUBTYPE_POWERPC_970 => CpuFamily::G5,
        _ => CpuFamily::Unknown,
    }
}

/// Classify a `uname -m` machine name.
pub fn cpu_type_from_machine(machine: &str) -> CpuType {
    match machine.trim() {
        "x86_64" | "amd64" | "i386" | "i486" | "i586" | "i686" => CpuType::Intel,
        m if m.starts_with("ppc") || m.starts_with("powerpc") => CpuType::Ppc,
        _ => CpuType::Unknown,
    }
}

/// Recommended compiler flags per family.
///
/// Returns a fresh map on every call; callers may mutate it freely.
pub fn optimization_flags() -> BTreeMap<CpuFamily, String> {
    OPTIMIZATION_FLAGS
        .iter()
        .map(|(family, flags)| (*family, (*flags).to_string()))
        .collect()
}
