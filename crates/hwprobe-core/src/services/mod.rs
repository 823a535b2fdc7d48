//! CPU providers and the `Hardware` facade.

mod cache;
mod hardware;
mod linux_cpus;
mod mac_cpus;

pub use cache::CpuCache;
pub use hardware::Hardware;
pub use linux_cpus::{GETCONF_LONG_BIT, GETCONF_NPROCESSORS_ONLN, LinuxCpus, MACHINE};
pub use mac_cpus::{
    MacCpus, SYSCTL_CPU_FAMILY, SYSCTL_CPU_SUBTYPE, SYSCTL_CPU_TYPE, SYSCTL_CPU64BIT_CAPABLE,
    SYSCTL_NCPU,
};
