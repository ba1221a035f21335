//! Caller-supplied binding overrides
//!
//! The host passes a partial override tree shaped like the resolved map:
//! `{ "<field>": { "title": "<key>", "emptyFieldText": "<key>", ... } }`.
//! Only non-empty strings count as overrides; anything else falls back to
//! the default key for that single sub-key.

use serde::Deserialize;
use serde_json::Value;

use crate::resources::keys::SubKey;

/// Partial override tree for a component's resource bindings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct BindingOverrides(Value);

impl BindingOverrides {
    /// Wrap a raw override tree
    #[must_use]
    pub fn new(tree: Value) -> Self {
        Self(tree)
    }

    /// The override for one sub-key of a field, if it is a non-empty string
    #[must_use]
    pub fn get(&self, field: &str, sub_key: SubKey) -> Option<&str> {
        self.0
            .get(field)
            .and_then(|binding| binding.get(sub_key.as_str()))
            .and_then(non_empty_str)
    }

    /// The override for one sub-key of the component's own (group) binding.
    ///
    /// Looked up under the group name first, then at the top of the tree,
    /// where generic components receive e.g. `{"title": "<key>"}`.
    #[must_use]
    pub fn get_group(&self, group: &str, sub_key: SubKey) -> Option<&str> {
        self.get(group, sub_key).or_else(|| {
            self.0
                .get(sub_key.as_str())
                .and_then(non_empty_str)
        })
    }

    /// The raw sub-tree for a field, for passing overrides down to a child
    #[must_use]
    pub fn subtree(&self, field: &str) -> Option<&Value> {
        self.0.get(field).filter(|value| value.is_object())
    }

    /// The raw tree
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for BindingOverrides {
    fn from(tree: Value) -> Self {
        Self(tree)
    }
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_non_empty_strings_override() {
        let overrides = BindingOverrides::new(json!({
            "funksjon": {"title": "X", "emptyFieldText": "", "trueText": 5}
        }));
        assert_eq!(overrides.get("funksjon", SubKey::Title), Some("X"));
        assert_eq!(overrides.get("funksjon", SubKey::EmptyFieldText), None);
        assert_eq!(overrides.get("funksjon", SubKey::TrueText), None);
        assert_eq!(overrides.get("annet", SubKey::Title), None);
    }

    #[test]
    fn test_group_falls_back_to_top_level() {
        let overrides = BindingOverrides::new(json!({"title": "top.title"}));
        assert_eq!(overrides.get_group("adkomst", SubKey::Title), Some("top.title"));

        let overrides = BindingOverrides::new(json!({
            "title": "top.title",
            "adkomst": {"title": "group.title"}
        }));
        assert_eq!(overrides.get_group("adkomst", SubKey::Title), Some("group.title"));
    }

    #[test]
    fn test_non_object_tree_has_no_overrides() {
        let overrides = BindingOverrides::new(json!("tull"));
        assert_eq!(overrides.get("title", SubKey::Title), None);
        assert_eq!(overrides.get_group("x", SubKey::Title), None);
    }
}
