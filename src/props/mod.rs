//! Boundary adapter for host props
//!
//! Hosts hand components a loosely typed object, or DOM attributes where
//! every value is a string. This module normalises both into [`Props`] once,
//! so the core never sees string booleans or JSON-in-strings.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::util::read_json_file;
use crate::error::{Result, ViewError};
use crate::resources::BindingOverrides;

/// Values the caller already resolved upstream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceValueOverrides {
    /// A display title resolved by the caller
    pub title: Option<String>,
}

/// Normalised component props
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Props {
    /// The raw record (or scalar) bound to the component
    #[serde(default, alias = "formdata", alias = "data")]
    pub form_data: Value,
    /// Partial override tree for resource bindings
    #[serde(default, alias = "resourcebindings")]
    pub resource_bindings: BindingOverrides,
    #[serde(
        default,
        alias = "resourcevalues",
        deserialize_with = "deserialize_resource_values"
    )]
    pub resource_values: ResourceValueOverrides,
    #[serde(default, alias = "hidetitle", deserialize_with = "deserialize_flag")]
    pub hide_title: bool,
    #[serde(default, alias = "hideifempty", deserialize_with = "deserialize_flag")]
    pub hide_if_empty: bool,
    /// Which kind of party a party component renders
    #[serde(default, alias = "parttype", deserialize_with = "deserialize_text")]
    pub part_type: Option<String>,
    /// Every other attribute, untouched
    #[serde(flatten)]
    pub attributes: IndexMap<String, Value>,
}

/// Attributes that carry JSON text when they arrive from the DOM
const JSON_ATTRIBUTES: &[&str] = &["formdata", "data", "resourcebindings", "resourcevalues"];

impl Props {
    /// Adapt a host props object. `null` yields default props.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(_) => {
                serde_json::from_value(value).map_err(|e| ViewError::InvalidProps(e.to_string()))
            }
            other => Err(ViewError::InvalidProps(format!(
                "expected an object, found {}",
                crate::record::json_type_name(&other)
            ))),
        }
    }

    /// Parse and adapt a host props document
    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(content)?)
    }

    /// Load and adapt a props document from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_value(read_json_file(path, "component props")?)
    }

    /// Adapt DOM-style string attributes.
    ///
    /// `formdata`, `resourcebindings` and `resourcevalues` carry JSON text;
    /// an empty attribute is treated as absent.
    pub fn from_attributes<I, K, V>(attributes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut object = Map::new();
        for (name, text) in attributes {
            let name: String = name.into();
            let text: String = text.into();
            let normalised = name.to_lowercase().replace('-', "");
            if JSON_ATTRIBUTES.contains(&normalised.as_str()) {
                if text.trim().is_empty() {
                    continue;
                }
                let value = serde_json::from_str(&text).map_err(|e| {
                    ViewError::InvalidProps(format!("attribute '{name}' is not valid JSON: {e}"))
                })?;
                object.insert(normalised, value);
            } else {
                object.insert(name, Value::String(text));
            }
        }
        Self::from_value(Value::Object(object))
    }

    /// The bound raw value, if present
    #[must_use]
    pub fn form_data(&self) -> Option<&Value> {
        Some(&self.form_data).filter(|value| !value.is_null())
    }

    /// An attribute passed through untouched, as text
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).and_then(Value::as_str)
    }

    /// Props for a child component rendering part of this one's data.
    ///
    /// The child sees the override sub-tree stored under `field` as its own
    /// override tree, shares the empty-state gate, receives `form_data`, and
    /// gets `title` as an upstream-resolved title.
    #[must_use]
    pub fn child(&self, field: &str, form_data: Value, title: Option<String>) -> Self {
        let overrides = self
            .resource_bindings
            .subtree(field)
            .cloned()
            .unwrap_or(Value::Null);
        Self {
            form_data,
            resource_bindings: BindingOverrides::new(overrides),
            resource_values: ResourceValueOverrides { title },
            hide_title: false,
            hide_if_empty: self.hide_if_empty,
            part_type: None,
            attributes: IndexMap::new(),
        }
    }
}

/// Whether a host flag is set: boolean `true` or the string `"true"`
#[must_use]
pub fn parse_flag(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::String(text) => text == "true",
        _ => false,
    }
}

fn deserialize_flag<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(parse_flag(&value))
}

fn deserialize_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .filter(|text| !text.is_empty())
        .map(str::to_string))
}

fn deserialize_resource_values<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<ResourceValueOverrides, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let title = value
        .get("title")
        .and_then(Value::as_str)
        .filter(|title| !title.is_empty())
        .map(str::to_string);
    Ok(ResourceValueOverrides { title })
}
