//! Test utilities
//!
//! Sample application data and helpers for building render contexts in
//! tests.

pub mod fixtures;
pub mod helpers;

// Re-export commonly used functions for convenience
pub use fixtures::{sample_arealdisponering, sample_eiendommer, sample_utfall_svar};
pub use helpers::{props, resources_covering, test_config};
