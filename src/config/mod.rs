//! Configuration for view-model rendering.

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::error::util::safe_read_to_string;

/// Configuration shared by every component orchestrator
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewConfig {
    /// Whether to cross-check resolved bindings against the loaded resources.
    /// When disabled the views carry `validationMessages: false`.
    pub validate_resources: bool,
    /// Log every missing resource key at warn level
    pub log_missing_resources: bool,
    /// Separator between formatted address lines
    pub address_line_separator: String,
    /// Separator between formatted phone numbers
    pub phone_separator: String,
    /// `chrono` format pattern for displayed dates
    pub date_format: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            validate_resources: true,
            log_missing_resources: true,
            address_line_separator: "\n".to_string(),
            phone_separator: "\n".to_string(),
            date_format: "%d.%m.%Y".to_string(),
        }
    }
}

impl ViewConfig {
    /// Parse a configuration document; missing keys keep their defaults
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a configuration document from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = safe_read_to_string(path, "view configuration")?;
        Self::from_json_str(&content)
    }
}
