//! Port definitions (trait abstractions) for external systems.
//!
//! # Design Rules
//!
//! - No `std::process` types in any signature
//! - `KernelQueryPort` is the only seam that touches the operating system
//! - `CpuInfoPort` is the per-OS capability set selected once at startup

pub mod cpu_info;
pub mod kernel_query;

pub use cpu_info::CpuInfoPort;
pub use kernel_query::{KernelQueryError, KernelQueryPort, KernelQueryResult};
