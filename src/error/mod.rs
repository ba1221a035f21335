//! Error handling for view-model construction.
//!
//! Absent input is data, not an error: transformers and resolvers degrade to
//! absent values. The variants below cover the few shape violations that must
//! fail loudly and the I/O performed around the core.

pub mod util;

use std::io;

/// Specialized error type for view-model construction
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// A list was expected but the raw value had another shape
    #[error("Expected an array for '{field}', found {found}")]
    ExpectedArray {
        /// Field or path that was read
        field: String,
        /// JSON type that was found instead
        found: &'static str,
    },
    /// No component is registered under the given tag name
    #[error("Unknown component: {0}")]
    UnknownComponent(String),
    /// Host props could not be adapted
    #[error("Invalid props: {0}")]
    InvalidProps(String),
    /// A text-resource document could not be read
    #[error("Invalid text resources: {0}")]
    InvalidTextResources(String),
    /// Error (de)serializing JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for view-model operations
pub type Result<T> = std::result::Result<T, ViewError>;
