//! Scalar coercion for raw fields
//!
//! Scalars are copied 1:1 where the raw type matches. Simple mismatches that
//! arrive from forms (numbers as strings, booleans as `"true"`) are coerced.
//! Fields typed [`Lenient<T>`] keep any other raw value as it arrived, so a
//! submitted answer never disappears from the view.

use serde::Serialize;
use serde_json::Value;

use crate::presence::{HasValue, has_value};
use crate::record::json_type_name;

/// A scalar type that can be read from a raw JSON value
pub trait Scalar: Sized {
    /// Name used in diagnostics
    const TYPE_NAME: &'static str;

    /// Read the value, or `None` when it cannot be represented
    fn from_json(value: &Value) -> Option<Self>;
}

impl Scalar for String {
    const TYPE_NAME: &'static str = "string";

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl Scalar for f64 {
    const TYPE_NAME: &'static str = "number";

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => parse_decimal(s),
            _ => None,
        }
    }
}

impl Scalar for i64 {
    const TYPE_NAME: &'static str = "integer";

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.is_finite())
                    .map(|f| f as i64)
            }),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl Scalar for bool {
    const TYPE_NAME: &'static str = "boolean";

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::String(s) => match s.trim() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

impl Scalar for Value {
    const TYPE_NAME: &'static str = "value";

    fn from_json(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

/// A typed scalar, or the raw value when it could not be coerced
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Lenient<T> {
    Typed(T),
    Raw(Value),
}

impl<T> Lenient<T> {
    /// The coerced value, if coercion succeeded
    pub fn typed(&self) -> Option<&T> {
        match self {
            Self::Typed(value) => Some(value),
            Self::Raw(_) => None,
        }
    }
}

impl<T> From<T> for Lenient<T> {
    fn from(value: T) -> Self {
        Self::Typed(value)
    }
}

impl<T: Scalar> Scalar for Lenient<T> {
    const TYPE_NAME: &'static str = T::TYPE_NAME;

    fn from_json(value: &Value) -> Option<Self> {
        Some(T::from_json(value).map(Self::Typed).unwrap_or_else(|| {
            log::debug!(
                "Keeping raw {} where {} was expected",
                json_type_name(value),
                T::TYPE_NAME
            );
            Self::Raw(value.clone())
        }))
    }
}

impl<T: HasValue> HasValue for Lenient<T> {
    fn has_value(&self) -> bool {
        match self {
            Self::Typed(value) => value.has_value(),
            Self::Raw(value) => has_value(value),
        }
    }
}

/// Parse a decimal number, accepting the Norwegian decimal comma
fn parse_decimal(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse()
        .ok()
        .or_else(|| trimmed.replace(',', ".").parse().ok())
}
