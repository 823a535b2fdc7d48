//! Integration tests for CLI parsing and rendering against real adapters.

use clap::Parser;
use hwprobe_cli::presentation::{render_flag_table, render_summary};
use hwprobe_cli::{Cli, CliConfig, Commands};
use hwprobe_core::{Hardware, Platform, ProbeSettings};
use hwprobe_runtime::query_for;

#[test]
fn summary_is_the_default_command() {
    let cli = Cli::parse_from(["hwprobe", "--json"]);
    assert!(cli.json);
    assert_eq!(cli.command.unwrap_or(Commands::Summary), Commands::Summary);
}

#[test]
fn config_accepts_overrides() {
    let settings = ProbeSettings {
        sysctl_path: Some("/opt/local/sbin/sysctl".to_string()),
        ..ProbeSettings::default()
    };
    let config = CliConfig::from_settings(settings).unwrap();
    assert_eq!(
        config.settings.effective_sysctl_path(),
        "/opt/local/sbin/sysctl"
    );
}

#[cfg(unix)]
#[test]
fn summary_for_broken_query_tool_shows_defaults() {
    let settings = ProbeSettings {
        sysctl_path: Some("false".to_string()),
        ..ProbeSettings::default()
    };
    let hardware = Hardware::new(Platform::MacOs, query_for(Platform::MacOs, &settings));
    let text = render_summary(&hardware);

    assert!(text.contains("single-core 64-bit unknown"));
    assert!(text.contains("none for this CPU"));
}

#[test]
fn flag_table_lists_every_family_with_flags() {
    let settings = ProbeSettings::default();
    let hardware = Hardware::new(Platform::Linux, query_for(Platform::Linux, &settings));
    let table = render_flag_table(&hardware.cpu().optimization_flags());

    for family in ["core", "core2", "penryn", "g3", "g4", "g4e", "g5"] {
        assert!(
            table.lines().any(|line| line.split_whitespace().next() == Some(family)),
            "{family} missing from table"
        );
    }
}
