//! Human- and machine-readable hardware summaries.

use serde::{Deserialize, Serialize};

use super::cpu::{CpuFamily, CpuType, WordWidth};
use super::features::SimdFeatures;

/// Format a core count as an English word for user-facing output.
///
/// 1, 2 and 4 become "single", "dual" and "quad"; any other count is
/// rendered as its decimal numeral.
pub fn cores_as_words(count: u32) -> String {
    match count {
        1 => "single".to_string(),
        2 => "dual".to_string(),
        4 => "quad".to_string(),
        n => n.to_string(),
    }
}

/// Snapshot of every resolved CPU property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuSummary {
    /// Host platform name (`macos` or `linux`).
    pub platform: String,
    #[serde(rename = "type")]
    pub cpu_type: CpuType,
    /// `None` when the CPU type is outside the supported set.
    pub family: Option<CpuFamily>,
    pub cores: u32,
    pub cores_as_words: String,
    pub bits: WordWidth,
    pub features: SimdFeatures,
    /// Recommended compiler flags for `family`, if the table has an entry.
    pub optimization_flags: Option<String>,
}
