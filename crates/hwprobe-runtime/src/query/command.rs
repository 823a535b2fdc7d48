//! Run a query tool and capture the first line of its output.

use std::process::{Command, Stdio};

use hwprobe_core::{KernelQueryError, KernelQueryResult};
use tracing::debug;

/// Run `program args...` and return the first non-empty stdout line, trimmed.
///
/// `property` is only used to label errors.
pub(super) fn first_line(
    program: &str,
    args: &[&str],
    property: &str,
) -> KernelQueryResult<String> {
    debug!(program, ?args, "running kernel query");

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .map_err(|e| KernelQueryError::Spawn {
            program: program.to_string(),
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(KernelQueryError::NonZeroExit {
            property: property.to_string(),
            code: output.status.code(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
        .ok_or_else(|| KernelQueryError::EmptyOutput {
            property: property.to_string(),
        })
}
