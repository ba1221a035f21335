//! Test helper functions
//!
//! This module provides utilities for building render inputs in tests.

use serde_json::Value;

use crate::config::ViewConfig;
use crate::props::Props;
use crate::resources::{ResourceBindings, TextResources};

/// Props from a JSON object; panics on anything else
#[must_use]
pub fn props(value: Value) -> Props {
    match Props::from_value(value) {
        Ok(props) => props,
        Err(error) => panic!("invalid test props: {error}"),
    }
}

/// A resource set holding a text for every key referenced by `bindings`.
///
/// Each text is the key itself, so lookups are easy to assert on.
#[must_use]
pub fn resources_covering(bindings: &ResourceBindings) -> TextResources {
    bindings
        .resource_keys()
        .into_iter()
        .map(|key| (key, key))
        .collect()
}

/// Default test configuration with resource logging switched off
#[must_use]
pub fn test_config() -> ViewConfig {
    ViewConfig {
        log_missing_resources: false,
        ..Default::default()
    }
}
