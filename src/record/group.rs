//! Grouping transformers
//!
//! Buckets a raw list by a discriminator path (typically a code value such as
//! `utfallType.kodeverdi`). Items whose discriminator is absent or empty are
//! skipped. Bucket order follows the first time each key is seen, and items
//! keep their encounter order inside a bucket.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{Result, ViewError};
use crate::presence::has_value;
use crate::record::{FromRecord, Scalar, json_type_name, path};
use crate::resources::ResourceBindings;

/// Group already-validated raw items by the scalar found at `discriminator`
#[must_use]
pub fn group_by_discriminator<T: FromRecord>(
    items: &[Value],
    discriminator: &[&str],
    bindings: Option<&ResourceBindings>,
) -> IndexMap<String, Vec<T>> {
    let mut groups: IndexMap<String, Vec<T>> = IndexMap::new();
    for item in items {
        let Some(key) = path(item, discriminator)
            .filter(|value| has_value(value))
            .and_then(String::from_json)
        else {
            continue;
        };
        groups
            .entry(key)
            .or_default()
            .push(T::from_record(item, bindings));
    }
    groups
}

/// Group a raw list of coded items.
///
/// `null` is treated as an empty list. Any other non-array input is a shape
/// violation and fails with [`ViewError::ExpectedArray`].
pub fn group_by_code<T: FromRecord>(
    raw: &Value,
    discriminator: &[&str],
    bindings: Option<&ResourceBindings>,
) -> Result<IndexMap<String, Vec<T>>> {
    match raw {
        Value::Null => Ok(IndexMap::new()),
        Value::Array(items) => Ok(group_by_discriminator(items, discriminator, bindings)),
        other => Err(ViewError::ExpectedArray {
            field: discriminator.join("."),
            found: json_type_name(other),
        }),
    }
}
