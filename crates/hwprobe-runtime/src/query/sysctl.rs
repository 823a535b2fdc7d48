//! macOS `sysctl` adapter.

use hwprobe_core::{DEFAULT_SYSCTL_PATH, KernelQueryPort, KernelQueryResult};

use super::command::first_line;

/// Reads kernel state with `sysctl -n <property>`.
#[derive(Debug, Clone)]
pub struct SysctlQuery {
    program: String,
}

impl SysctlQuery {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for SysctlQuery {
    fn default() -> Self {
        Self::new(DEFAULT_SYSCTL_PATH)
    }
}

impl KernelQueryPort for SysctlQuery {
    fn query(&self, property: &str) -> KernelQueryResult<String> {
        first_line(&self.program, &["-n", property], property)
    }
}
