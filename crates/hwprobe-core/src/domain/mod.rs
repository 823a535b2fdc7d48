//! CPU domain types.
//!
//! Pure value types and the fixed tables that map kernel codes onto them.
//! Querying the kernel is the job of [`crate::ports::KernelQueryPort`].

mod codes;
mod cpu;
mod features;
mod summary;

pub use codes::{
    CPU_TYPE_POWERPC, CPU_TYPE_X86, CPUFAMILY_INTEL_ARRANDALE, CPUFAMILY_INTEL_IVYBRIDGE,
    CPUFAMILY_INTEL_MEROM, CPUFAMILY_INTEL_NEHALEM, CPUFAMILY_INTEL_PENRYN,
    CPUFAMILY_INTEL_SANDYBRIDGE, CPUFAMILY_INTEL_YONAH, CPU_SUBTYPE_POWERPC_750,
    CPU_SUBTYPE_POWERPC_970, CPU_SUBTYPE_POWERPC_7400, CPU_SUBTYPE_POWERPC_7450,
    cpu_type_from_code, cpu_type_from_machine, intel_family_from_code, optimization_flags,
    ppc_family_from_subtype,
};
pub use cpu::{CpuFamily, CpuType, ParseSymbolError, WordWidth};
pub use features::SimdFeatures;
pub use summary::{CpuSummary, cores_as_words};
