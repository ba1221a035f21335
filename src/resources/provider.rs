//! Text-resource provider boundary
//!
//! The loaded text resources are an external, read-only collaborator. They
//! are passed explicitly to every lookup and validation instead of being read
//! from ambient state.

use std::collections::HashMap;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::error::util::safe_read_to_string;
use crate::error::{Result, ViewError};

/// Lookup of localized texts by resource key
pub trait TextResourceProvider {
    /// The text for a key, if loaded
    fn text(&self, key: &str) -> Option<&str>;

    /// Whether a key is loaded
    fn contains(&self, key: &str) -> bool {
        self.text(key).is_some()
    }
}

/// One entry of a host text-resource document
#[derive(Debug, Clone, Deserialize)]
struct TextResourceEntry {
    id: String,
    value: String,
}

/// The two document shapes hosts deliver
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TextResourceDocument {
    Document {
        #[serde(default)]
        language: Option<String>,
        resources: Vec<TextResourceEntry>,
    },
    Entries(Vec<TextResourceEntry>),
}

/// Text resources loaded from a host document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextResources {
    language: Option<String>,
    texts: FxHashMap<String, String>,
}

impl TextResources {
    /// Create an empty resource set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a text-resource document.
    ///
    /// Accepts `{"language": "nb", "resources": [{"id", "value"}]}` or a bare
    /// array of `{"id", "value"}` entries. Later duplicates win.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let document: TextResourceDocument = serde_json::from_str(content)
            .map_err(|e| ViewError::InvalidTextResources(e.to_string()))?;
        let (language, entries) = match document {
            TextResourceDocument::Document {
                language,
                resources,
            } => (language, resources),
            TextResourceDocument::Entries(entries) => (None, entries),
        };
        let texts = entries
            .into_iter()
            .map(|entry| (entry.id, entry.value))
            .collect();
        Ok(Self { language, texts })
    }

    /// Load a text-resource document from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = safe_read_to_string(path, "text resources")?;
        let resources = Self::from_json_str(&content)?;
        log::info!(
            "Loaded {} text resources from {}",
            resources.len(),
            path.display()
        );
        Ok(resources)
    }

    /// Add or replace a text
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.texts.insert(key.into(), text.into());
    }

    /// Language of the document, if declared
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Number of loaded texts
    #[must_use]
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Whether no text is loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

impl TextResourceProvider for TextResources {
    fn text(&self, key: &str) -> Option<&str> {
        self.texts.get(key).map(String::as_str)
    }
}

impl TextResourceProvider for HashMap<String, String> {
    fn text(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TextResources {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            language: None,
            texts: iter
                .into_iter()
                .map(|(key, text)| (key.into(), text.into()))
                .collect(),
        }
    }
}
