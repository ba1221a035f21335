//! Raw record access
//!
//! A raw record is the untyped JSON submitted by an applicant. This module
//! provides the tolerant accessors the domain transformers are built from:
//! absent or `null` input always produces absent output, nested objects are
//! only constructed when the raw sub-object is truthy, and an absent list
//! (`None`) is kept distinct from an empty one (`Some(vec![])`).

pub mod group;
pub mod scalar;

pub use group::{group_by_code, group_by_discriminator};
pub use scalar::{Lenient, Scalar};
pub use serde_json::Value;

use crate::error::{Result, ViewError};
use crate::resources::ResourceBindings;
use crate::utils::logging::log_shape_violation;

/// A typed projection of a raw record.
///
/// Usually derived with `#[derive(FromRecord)]`. Construction never fails:
/// a `null` or non-object input yields an object with every field absent.
pub trait FromRecord: Sized {
    /// Raw keys read by this transformer, in declaration order
    const FIELDS: &'static [&'static str];

    /// Project a raw record. `bindings` carries the component's resolved
    /// resource bindings for transformers whose items render through them.
    fn from_record(raw: &Value, bindings: Option<&ResourceBindings>) -> Self;

    /// Whether at least one field of this object has a value
    fn has_any_value(&self) -> bool;

    /// Construct only when the raw value is truthy
    fn from_optional(raw: Option<&Value>, bindings: Option<&ResourceBindings>) -> Option<Self> {
        raw.filter(|value| is_truthy(value))
            .map(|value| Self::from_record(value, bindings))
    }
}

/// Truthiness of a raw value, as used for nested-object construction
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Name of a JSON value's type, for diagnostics
#[must_use]
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read a field, treating `null` as absent
#[must_use]
pub fn field<'a>(raw: &'a Value, key: &str) -> Option<&'a Value> {
    raw.get(key).filter(|value| !value.is_null())
}

/// Follow a path of keys, treating `null` anywhere on the way as absent
#[must_use]
pub fn path<'a>(raw: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .try_fold(raw, |current, key| field(current, key))
}

/// Copy a scalar field, coercing it to the requested type where possible
#[must_use]
pub fn scalar<T: Scalar>(raw: &Value, key: &str) -> Option<T> {
    field(raw, key).and_then(|value| {
        let coerced = T::from_json(value);
        if coerced.is_none() {
            log::debug!(
                "Dropping field '{key}': cannot read {} as {}",
                json_type_name(value),
                T::TYPE_NAME
            );
        }
        coerced
    })
}

/// Construct a nested transformer when the raw sub-object is truthy
#[must_use]
pub fn nested<T: FromRecord>(
    raw: &Value,
    key: &str,
    bindings: Option<&ResourceBindings>,
) -> Option<T> {
    T::from_optional(field(raw, key), bindings)
}

/// Map a raw list field through an item transformer.
///
/// An absent field stays absent and an empty list stays empty. A value that
/// is not an array is logged and treated as absent.
#[must_use]
pub fn list<T: FromRecord>(
    raw: &Value,
    key: &str,
    bindings: Option<&ResourceBindings>,
) -> Option<Vec<T>> {
    let value = field(raw, key)?;
    match value.as_array() {
        Some(items) => Some(transform_items(items, bindings)),
        None => {
            log_shape_violation(key, json_type_name(value));
            None
        }
    }
}

/// Like [`list`], but a non-array value is an error.
pub fn try_list<T: FromRecord>(
    raw: &Value,
    key: &str,
    bindings: Option<&ResourceBindings>,
) -> Result<Option<Vec<T>>> {
    field(raw, key)
        .map(|value| try_list_from_value(value, key, bindings))
        .transpose()
}

/// Map a raw array through an item transformer; non-arrays are an error.
pub fn try_list_from_value<T: FromRecord>(
    value: &Value,
    field_name: &str,
    bindings: Option<&ResourceBindings>,
) -> Result<Vec<T>> {
    value
        .as_array()
        .map(|items| transform_items(items, bindings))
        .ok_or_else(|| ViewError::ExpectedArray {
            field: field_name.to_string(),
            found: json_type_name(value),
        })
}

/// Map a raw array through an item transformer; absent or non-array input
/// yields no list.
#[must_use]
pub fn list_from_value<T: FromRecord>(
    value: Option<&Value>,
    bindings: Option<&ResourceBindings>,
) -> Option<Vec<T>> {
    let value = value.filter(|value| !value.is_null())?;
    match value.as_array() {
        Some(items) => Some(transform_items(items, bindings)),
        None => {
            log_shape_violation("formData", json_type_name(value));
            None
        }
    }
}

fn transform_items<T: FromRecord>(items: &[Value], bindings: Option<&ResourceBindings>) -> Vec<T> {
    items
        .iter()
        .map(|item| T::from_record(item, bindings))
        .collect()
}
