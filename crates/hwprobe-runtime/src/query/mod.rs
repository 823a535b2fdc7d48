//! `KernelQueryPort` implementations backed by child processes.

mod command;
mod linux;
mod sysctl;

pub use linux::LinuxQuery;
pub use sysctl::SysctlQuery;
