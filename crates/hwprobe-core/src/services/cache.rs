//! Per-provider memoization cache.

use std::sync::OnceLock;

use crate::domain::{CpuFamily, CpuType, WordWidth};

/// Resolved CPU properties.
///
/// An empty `OnceLock` is the "not yet resolved" state. Each field is set
/// at most once, so concurrent first access runs the resolver once and every
/// later read sees the same value.
#[derive(Debug, Default)]
pub struct CpuCache {
    cpu_type: OnceLock<CpuType>,
    family: OnceLock<Option<CpuFamily>>,
    cores: OnceLock<u32>,
    bits: OnceLock<WordWidth>,
}

impl CpuCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cpu_type(&self, resolve: impl FnOnce() -> CpuType) -> CpuType {
        *self.cpu_type.get_or_init(resolve)
    }

    pub fn family(&self, resolve: impl FnOnce() -> Option<CpuFamily>) -> Option<CpuFamily> {
        *self.family.get_or_init(resolve)
    }

    pub fn cores(&self, resolve: impl FnOnce() -> u32) -> u32 {
        *self.cores.get_or_init(resolve)
    }

    pub fn bits(&self, resolve: impl FnOnce() -> WordWidth) -> WordWidth {
        *self.bits.get_or_init(resolve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_resolver_runs_once() {
        let cache = CpuCache::new();
        let calls = Cell::new(0);

        let first = cache.cores(|| {
            calls.set(calls.get() + 1);
            4
        });
        let second = cache.cores(|| {
            calls.set(calls.get() + 1);
            8
        });

        assert_eq!(first, 4);
        assert_eq!(second, 4);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_unresolved_family_is_cached() {
        let cache = CpuCache::new();
        assert_eq!(cache.family(|| None), None);
        assert_eq!(cache.family(|| Some(CpuFamily::G5)), None);
    }
}
