//! Resource bindings
//!
//! A component's resource bindings map each logical field name to the
//! resource keys used to look up its localized texts. This module contains
//! the binding types, the default-key naming scheme, the resolver that merges
//! caller overrides with the defaults, the text-resource provider boundary and
//! the validation reporter that lists unresolved keys.

pub mod binding;
pub mod keys;
pub mod overrides;
pub mod provider;
pub mod resolver;
pub mod spec;
pub mod validation;

// Re-export commonly used types
pub use binding::{ResourceBinding, ResourceBindings};
pub use keys::{
    DEFAULT_DEFAULT_TEXT, DEFAULT_EMPTY_FIELD_TEXT, DEFAULT_FALSE_TEXT, DEFAULT_TRUE_TEXT, SubKey,
    resource_key,
};
pub use overrides::BindingOverrides;
pub use provider::{TextResourceProvider, TextResources};
pub use resolver::{BindingResolver, get_resource_bindings};
pub use spec::{BindingSpec, FieldKind, FieldSpec, TitleSource};
pub use validation::{ValidationMessages, has_missing_text_resources, has_validation_messages};
