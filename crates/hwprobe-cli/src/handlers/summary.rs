//! Summary command handler.

use hwprobe_core::Hardware;

use crate::error::CliError;
use crate::presentation::render_summary;

/// Execute the summary command.
///
/// Prints every resolved CPU property, as text or as a JSON `CpuSummary`.
pub fn execute(hardware: &Hardware, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(&hardware.summary())?);
    } else {
        print!("{}", render_summary(hardware));
    }
    Ok(())
}
