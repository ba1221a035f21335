//! Logging utilities
//!
//! This module provides standardized logging functions for render passes.

/// Log the start of a render pass with consistent format
///
/// # Arguments
/// * `component` - Tag name of the component being rendered
pub fn log_render_start(component: &str) {
    log::debug!("Rendering {component}");
}

/// Log a finished render pass with consistent format
///
/// # Arguments
/// * `component` - Tag name of the rendered component
/// * `is_empty` - Whether the empty state was selected
/// * `missing` - Number of unresolved resource keys
pub fn log_render_complete(component: &str, is_empty: bool, missing: usize) {
    log::debug!(
        "Rendered {component} ({}, {missing} missing text resources)",
        if is_empty { "empty" } else { "with content" }
    );
}

/// Log the resource keys a component could not resolve
///
/// # Arguments
/// * `component` - Tag name of the component
/// * `keys` - The missing resource keys
pub fn log_missing_resources(component: &str, keys: &[String]) {
    if keys.is_empty() {
        return;
    }
    log::warn!(
        "{component}: {} missing text resources: {}",
        keys.len(),
        keys.join(", ")
    );
}

/// Log a list field that did not hold a list
///
/// # Arguments
/// * `field` - Raw key of the field
/// * `found` - JSON type actually found
pub fn log_shape_violation(field: &str, found: &str) {
    log::warn!("Expected an array in '{field}', found {found}; treating it as absent");
}

/// Log a transformer failure that was turned into an empty view
///
/// # Arguments
/// * `component` - Tag name of the component
/// * `error` - The failure
pub fn log_render_failure(component: &str, error: &dyn std::fmt::Display) {
    log::warn!("{component}: {error}; rendering the empty state");
}
