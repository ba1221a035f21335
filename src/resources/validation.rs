//! Validation reporter
//!
//! Cross-checks a resolved binding map against the loaded text resources.
//! Missing localization is reported, never raised.

use serde::{Serialize, Serializer};

use crate::resources::binding::ResourceBindings;
use crate::resources::provider::TextResourceProvider;

/// Outcome of the resource check exposed on every view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationMessages {
    /// Validation is switched off; serialized as `false`
    Disabled,
    /// Keys referenced by the bindings but not loaded
    Missing(Vec<String>),
}

impl ValidationMessages {
    /// The missing keys, empty when disabled
    #[must_use]
    pub fn keys(&self) -> &[String] {
        match self {
            Self::Disabled => &[],
            Self::Missing(keys) => keys,
        }
    }
}

impl Serialize for ValidationMessages {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Disabled => serializer.serialize_bool(false),
            Self::Missing(keys) => keys.serialize(serializer),
        }
    }
}

/// List the resource keys in `bindings` that `resources` does not contain.
///
/// Without a provider (no host resource store loaded yet) the resource set is
/// taken to be empty and every key is reported.
#[must_use]
pub fn has_missing_text_resources(
    resources: Option<&dyn TextResourceProvider>,
    bindings: &ResourceBindings,
) -> Vec<String> {
    bindings
        .resource_keys()
        .into_iter()
        .filter(|key| !resources.is_some_and(|resources| resources.contains(key)))
        .map(str::to_string)
        .collect()
}

/// Whether there is anything to report
#[must_use]
pub fn has_validation_messages(messages: &ValidationMessages) -> bool {
    !messages.keys().is_empty()
}
