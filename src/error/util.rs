//! Utility functions for error handling
//!
//! This module provides helpers that attach context to the file reads done
//! around the core (text-resource documents, configuration, props).

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Result, ViewError};

/// Safely read a file to string with rich error information
///
/// # Arguments
/// * `path` - The path to the file to read
/// * `purpose` - Why the file is being read (for error context)
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    if !path.is_file() {
        return Err(ViewError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("File not found: {} (needed for {purpose})", path.display()),
        )));
    }

    fs::read_to_string(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => "Permission denied - check file permissions",
            io::ErrorKind::InvalidData => "File contains invalid UTF-8 data - cannot read as text",
            _ => "Failed to read file content",
        };
        ViewError::Io(io::Error::new(
            e.kind(),
            format!("{context}: {} (needed for {purpose})", path.display()),
        ))
    })
}

/// Read and parse a JSON document from disk
pub fn read_json_file(path: &Path, purpose: &str) -> Result<serde_json::Value> {
    let content = safe_read_to_string(path, purpose)?;
    Ok(serde_json::from_str(&content)?)
}
