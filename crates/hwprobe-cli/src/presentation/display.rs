//! Text rendering for hardware summaries and flag tables.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use hwprobe_core::{CpuFamily, Hardware};

// ANSI color codes
const BOLD: &str = "\x1b[1m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Render the multi-line summary printed by `hwprobe summary`.
pub fn render_summary(hardware: &Hardware) -> String {
    let cpu = hardware.cpu();
    let mut out = String::new();

    let _ = writeln!(out, "{BOLD}CPU:{RESET} {hardware}");
    let _ = writeln!(out, "{BOLD}Type:{RESET} {}", cpu.cpu_type());

    let features = cpu.simd_features().names();
    if features.is_empty() {
        let _ = writeln!(out, "{BOLD}SIMD:{RESET} {YELLOW}none{RESET}");
    } else {
        let _ = writeln!(out, "{BOLD}SIMD:{RESET} {}", features.join(", "));
    }

    match hardware.optimization_flag() {
        Some(flags) => {
            let _ = writeln!(out, "{BOLD}Optimization flags:{RESET} {flags}");
        }
        None => {
            let _ = writeln!(
                out,
                "{BOLD}Optimization flags:{RESET} {YELLOW}none for this CPU{RESET}"
            );
        }
    }

    out
}

/// Render the family/flags table printed by `hwprobe flags --all`.
pub fn render_flag_table(flags: &BTreeMap<CpuFamily, String>) -> String {
    let width = flags
        .keys()
        .map(|family| family.as_str().len())
        .max()
        .unwrap_or(0);

    flags.iter().fold(String::new(), |mut out, (family, flags)| {
        let _ = writeln!(out, "{:<width$}  {flags}", family.as_str());
        out
    })
}
