//! Resolved resource bindings

use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;

use crate::resources::keys::SubKey;

/// Resource keys for one logical field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceBinding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_field_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub true_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub false_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_text: Option<String>,
}

impl ResourceBinding {
    /// Get the key stored for a sub-key
    #[must_use]
    pub fn get(&self, sub_key: SubKey) -> Option<&str> {
        match sub_key {
            SubKey::Title => self.title.as_deref(),
            SubKey::EmptyFieldText => self.empty_field_text.as_deref(),
            SubKey::TrueText => self.true_text.as_deref(),
            SubKey::FalseText => self.false_text.as_deref(),
            SubKey::DefaultText => self.default_text.as_deref(),
        }
    }

    /// Set or clear the key stored for a sub-key
    pub fn set(&mut self, sub_key: SubKey, key: Option<String>) {
        let slot = match sub_key {
            SubKey::Title => &mut self.title,
            SubKey::EmptyFieldText => &mut self.empty_field_text,
            SubKey::TrueText => &mut self.true_text,
            SubKey::FalseText => &mut self.false_text,
            SubKey::DefaultText => &mut self.default_text,
        };
        *slot = key;
    }

    /// All keys present in this binding, in sub-key order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        SubKey::ALL
            .into_iter()
            .filter_map(move |sub_key| self.get(sub_key))
    }

    /// The key describing a boolean answer: true, false or unanswered
    #[must_use]
    pub fn boolean_text_key(&self, value: Option<bool>) -> Option<&str> {
        match value {
            Some(true) => self.get(SubKey::TrueText),
            Some(false) => self.get(SubKey::FalseText),
            None => self.get(SubKey::DefaultText),
        }
    }
}

/// Mapping from logical field name to its resource keys, in resolution order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResourceBindings {
    entries: IndexMap<String, ResourceBinding>,
}

impl ResourceBindings {
    /// Create an empty binding map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) the binding for a field
    pub fn insert(&mut self, field: impl Into<String>, binding: ResourceBinding) {
        self.entries.insert(field.into(), binding);
    }

    /// Get the binding for a field
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&ResourceBinding> {
        self.entries.get(field)
    }

    /// Get a single key of a field's binding
    #[must_use]
    pub fn key(&self, field: &str, sub_key: SubKey) -> Option<&str> {
        self.get(field).and_then(|binding| binding.get(sub_key))
    }

    /// Iterate over `(field, binding)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResourceBinding)> {
        self.entries
            .iter()
            .map(|(field, binding)| (field.as_str(), binding))
    }

    /// Every distinct resource key referenced, in binding order
    #[must_use]
    pub fn resource_keys(&self) -> Vec<&str> {
        self.entries
            .values()
            .flat_map(ResourceBinding::keys)
            .unique()
            .collect()
    }

    /// Number of fields bound
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no field is bound
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, ResourceBinding)> for ResourceBindings {
    fn from_iter<I: IntoIterator<Item = (String, ResourceBinding)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding(title: &str) -> ResourceBinding {
        ResourceBinding {
            title: Some(title.to_string()),
            empty_field_text: Some("resource.emptyFieldText.default".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_resource_keys_are_unique_and_ordered() {
        let bindings: ResourceBindings = [
            ("a".to_string(), binding("resource.a.title")),
            ("b".to_string(), binding("resource.b.title")),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            bindings.resource_keys(),
            vec![
                "resource.a.title",
                "resource.emptyFieldText.default",
                "resource.b.title"
            ]
        );
    }

    #[test]
    fn test_boolean_text_key() {
        let binding = ResourceBinding {
            true_text: Some("ja".to_string()),
            false_text: Some("nei".to_string()),
            ..Default::default()
        };
        assert_eq!(binding.boolean_text_key(Some(true)), Some("ja"));
        assert_eq!(binding.boolean_text_key(Some(false)), Some("nei"));
        assert_eq!(binding.boolean_text_key(None), None);
    }

    #[test]
    fn test_serialization_omits_absent_keys() {
        let json = serde_json::to_value(binding("resource.a.title")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "resource.a.title",
                "emptyFieldText": "resource.emptyFieldText.default"
            })
        );
    }
}
