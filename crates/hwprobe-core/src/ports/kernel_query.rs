//! Kernel query port.
//!
//! Abstracts the platform kernel-state tool (`sysctl`, `getconf`, `uname`)
//! behind a single "property name in, one line of text out" call, so that
//! providers can be tested without spawning processes.

use thiserror::Error;

/// Errors that can occur while querying a kernel property.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelQueryError {
    /// The query tool could not be started (missing binary, permissions).
    #[error("Failed to run {program}: {reason}")]
    Spawn { program: String, reason: String },

    /// The query tool ran but reported failure.
    #[error("Query for {property} exited with status {code:?}")]
    NonZeroExit {
        property: String,
        code: Option<i32>,
    },

    /// The query tool succeeded but printed nothing.
    #[error("Query for {property} produced no output")]
    EmptyOutput { property: String },

    /// The output could not be interpreted as the expected type.
    #[error("Query for {property} returned unparseable output: {output:?}")]
    Unparseable { property: String, output: String },
}

/// Result type for kernel query operations.
pub type KernelQueryResult<T> = Result<T, KernelQueryError>;

/// Port for reading a single kernel property.
///
/// Implementations run the platform tool once per call and return the
/// first line of its standard output, trimmed. Caching is the caller's job.
pub trait KernelQueryPort: Send + Sync {
    /// Read `property` as text.
    fn query(&self, property: &str) -> KernelQueryResult<String>;

    /// Read `property` as a decimal integer.
    fn query_int(&self, property: &str) -> KernelQueryResult<i64> {
        let output = self.query(property)?;
        output
            .trim()
            .parse::<i64>()
            .map_err(|_| KernelQueryError::Unparseable {
                property: property.to_string(),
                output,
            })
    }
}
