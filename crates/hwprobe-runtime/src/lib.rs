#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod hardware;
pub mod query;

pub use hardware::{detect_hardware, query_for};
pub use query::{LinuxQuery, SysctlQuery};
