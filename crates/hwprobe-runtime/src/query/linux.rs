//! Linux `uname`/`getconf` adapter.

use hwprobe_core::services::MACHINE;
use hwprobe_core::{DEFAULT_GETCONF_PATH, DEFAULT_UNAME_PATH, KernelQueryPort, KernelQueryResult};

use super::command::first_line;

/// Reads kernel state with `uname -m` and `getconf <property>`.
///
/// The `machine` property is answered by `uname`; every other property is
/// passed to `getconf` as a system variable name.
#[derive(Debug, Clone)]
pub struct LinuxQuery {
    getconf: String,
    uname: String,
}

impl LinuxQuery {
    pub fn new(getconf: impl Into<String>, uname: impl Into<String>) -> Self {
        Self {
            getconf: getconf.into(),
            uname: uname.into(),
        }
    }
}

impl Default for LinuxQuery {
    fn default() -> Self {
        Self::new(DEFAULT_GETCONF_PATH, DEFAULT_UNAME_PATH)
    }
}

impl KernelQueryPort for LinuxQuery {
    fn query(&self, property: &str) -> KernelQueryResult<String> {
        if property == MACHINE {
            first_line(&self.uname, &["-m"], property)
        } else {
            first_line(&self.getconf, &[property], property)
        }
    }
}
