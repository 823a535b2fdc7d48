//! Command handlers. Each handler receives the composed `Hardware`.

pub mod flags;
pub mod summary;
