//! End-to-end tests for the process-backed providers.
//!
//! Query tools are replaced with standard Unix utilities through
//! `ProbeSettings`, so the results do not depend on the host CPU.

#![cfg(unix)]

use hwprobe_core::{CpuType, Hardware, Platform, ProbeSettings, WordWidth};
use hwprobe_runtime::{detect_hardware, query_for};

fn settings_all(program: &str) -> ProbeSettings {
    ProbeSettings {
        sysctl_path: Some(program.to_string()),
        getconf_path: Some(program.to_string()),
        uname_path: Some(program.to_string()),
    }
}

#[test]
fn failing_sysctl_falls_back_to_defaults() {
    let settings = settings_all("false");
    let hardware = Hardware::new(Platform::MacOs, query_for(Platform::MacOs, &settings));

    assert_eq!(hardware.cpu().cores(), 1);
    assert_eq!(hardware.cpu().bits(), WordWidth::Bits64);
    assert_eq!(hardware.cpu().cpu_type(), CpuType::Unknown);
    assert_eq!(hardware.cpu().family(), None);
    assert_eq!(hardware.to_string(), "single-core 64-bit unknown");
}

#[test]
fn missing_tools_fall_back_to_defaults() {
    let settings = settings_all("/nonexistent/hwprobe-tool");
    let hardware = Hardware::new(Platform::Linux, query_for(Platform::Linux, &settings));

    assert_eq!(hardware.cpu().cores(), 1);
    assert_eq!(hardware.cpu().bits(), WordWidth::Bits64);
    assert_eq!(hardware.cpu().cpu_type(), CpuType::Unknown);
}

#[test]
fn unparseable_sysctl_output_falls_back_to_defaults() {
    // `echo -n hw.ncpu` prints the property name, which is not a number.
    let settings = settings_all("echo");
    let hardware = Hardware::new(Platform::MacOs, query_for(Platform::MacOs, &settings));

    assert_eq!(hardware.cpu().cores(), 1);
    assert_eq!(hardware.cores_as_words(), "single");
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
#[test]
fn detect_hardware_on_host() {
    let hardware = detect_hardware(&ProbeSettings::default()).unwrap();
    let summary = hardware.summary();

    assert!(summary.cores >= 1);
    assert_eq!(summary.platform, hardware.platform().to_string());
    if summary.cpu_type == CpuType::Unknown {
        assert_eq!(summary.family, None);
    } else {
        assert!(summary.family.is_some());
    }
}
