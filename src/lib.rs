//! A Rust library for turning building-permit ("byggesak") form data into
//! render-ready view models.
//!
//! Raw JSON submitted by an applicant is projected into typed domain objects,
//! checked for emptiness, merged with localized text-resource bindings and
//! handed to presentation widgets as a [`ComponentView`].

// Lets the `FromRecord` derive refer to this crate by name from inside it.
extern crate self as byggesak_view;

pub mod components;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod presence;
pub mod props;
pub mod record;
pub mod resources;
pub mod utils;
pub mod view;

// Re-export the most common types for easier use
// Core types
pub use config::ViewConfig;
pub use error::{Result, ViewError};
pub use props::Props;
pub use view::{ComponentView, RenderContext, ResourceValues, ViewData};

// Transformation
pub use presence::{HasValue, has_value};
pub use record::{FromRecord, Lenient, group_by_code};

// Resource bindings
pub use resources::{
    BindingSpec, FieldSpec, ResourceBinding, ResourceBindings, TextResourceProvider,
    TextResources, ValidationMessages, get_resource_bindings, has_missing_text_resources,
    has_validation_messages,
};

// Orchestration
pub use components::{COMPONENT_NAMES, Component, render_component};

/// Derive macro generating a tolerant raw-record transformer
pub use byggesak_view_macros::FromRecord;

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json::Value;
}
