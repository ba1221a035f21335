//! Value-presence predicate
//!
//! `has_value` is the single arbiter of "empty" throughout the crate. Every
//! emptiness decision delegates here instead of re-implementing truthiness.

use indexmap::IndexMap;
use serde_json::Value;

/// Whether a raw JSON value carries meaningful content.
///
/// `null`, `""`, `[]` and `{}` are empty. `0` and `false` are present.
#[must_use]
pub fn has_value(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}

/// Presence check for typed values.
///
/// Implemented for scalars, options, lists and (through the `FromRecord`
/// derive) every domain object, where an object is present iff at least one
/// of its fields is.
///
/// The typed rule is stricter than [`has_value`]: a raw
/// `{"kodeverdi": null}` is present, while the `Kode` read from it is empty.
/// Components decide emptiness on typed data, so keys without values never
/// make a view non-empty.
pub trait HasValue {
    /// Whether this value carries meaningful content
    fn has_value(&self) -> bool;
}

impl HasValue for Value {
    fn has_value(&self) -> bool {
        has_value(self)
    }
}

impl HasValue for String {
    fn has_value(&self) -> bool {
        !self.is_empty()
    }
}

impl HasValue for str {
    fn has_value(&self) -> bool {
        !self.is_empty()
    }
}

impl HasValue for bool {
    fn has_value(&self) -> bool {
        true
    }
}

impl HasValue for f64 {
    fn has_value(&self) -> bool {
        true
    }
}

impl HasValue for i64 {
    fn has_value(&self) -> bool {
        true
    }
}

impl<T: HasValue> HasValue for Option<T> {
    fn has_value(&self) -> bool {
        self.as_ref().is_some_and(HasValue::has_value)
    }
}

impl<T: HasValue + ?Sized> HasValue for &T {
    fn has_value(&self) -> bool {
        (**self).has_value()
    }
}

impl<T> HasValue for Vec<T> {
    fn has_value(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> HasValue for [T] {
    fn has_value(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V, S> HasValue for IndexMap<K, V, S> {
    fn has_value(&self) -> bool {
        !self.is_empty()
    }
}

/// Look up several paths into a raw value; true if any of them has a value.
///
/// Used for compound emptiness rules where a container counts as non-empty
/// once any one of its named parts is present.
#[must_use]
pub fn any_path_has_value(value: &Value, paths: &[&[&str]]) -> bool {
    paths.iter().any(|path| {
        path.iter()
            .try_fold(value, |current, key| current.get(*key))
            .is_some_and(has_value)
    })
}
