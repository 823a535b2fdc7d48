//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: every value shown here is already
//! resolved by `hwprobe-core`.

mod display;

pub use display::{render_flag_table, render_summary};
