//! Logging utilities
//!
//! This module provides the standardized log lines emitted while rendering.

pub mod log;

// Re-export commonly used functions for convenience
pub use self::log::{
    log_missing_resources, log_render_complete, log_render_failure, log_render_start,
    log_shape_violation,
};
