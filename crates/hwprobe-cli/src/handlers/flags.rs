//! Flags command handler.

use hwprobe_core::Hardware;
use serde_json::{Value, json};

use crate::error::CliError;
use crate::presentation::render_flag_table;

/// Execute the flags command.
///
/// Without `all`, prints the flags for this CPU's family (nothing when the
/// family has no table entry). With `all`, prints the whole table.
pub fn execute(hardware: &Hardware, all: bool, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(&flags_json(hardware, all))?);
    } else if all {
        print!("{}", render_flag_table(&hardware.cpu().optimization_flags()));
    } else if let Some(flags) = hardware.optimization_flag() {
        println!("{flags}");
    }
    Ok(())
}

fn flags_json(hardware: &Hardware, all: bool) -> Value {
    if all {
        json!(hardware.cpu().optimization_flags())
    } else {
        json!({
            "family": hardware.cpu().family(),
            "flags": hardware.optimization_flag(),
        })
    }
}
