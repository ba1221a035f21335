//! Utility modules shared across the crate
//!
//! - `logging`: standardized log lines for render passes and degraded input
//! - `test`: fixtures and helpers for unit and integration tests

pub mod logging;
pub mod test;
