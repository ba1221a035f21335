//! Render-ready view models
//!
//! A [`ComponentView`] is the complete output of one render pass: the
//! emptiness decision, the validation report, the resolved bindings and the
//! values shown to the presentation layer.

use serde::Serialize;

use crate::config::ViewConfig;
use crate::presence::HasValue;
use crate::resources::{
    ResourceBindings, SubKey, TextResourceProvider, ValidationMessages,
    has_missing_text_resources,
};

/// The `data` slot of [`ResourceValues`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ViewData<T> {
    /// The transformed value, shown as is
    Content(T),
    /// The looked-up empty-state text; absent when the key was omitted or
    /// could not be resolved
    EmptyText(Option<String>),
}

impl<T> ViewData<T> {
    /// Whether the slot holds nothing at all
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::EmptyText(None))
    }

    /// The content, if the content branch was selected
    #[must_use]
    pub fn content(&self) -> Option<&T> {
        match self {
            Self::Content(content) => Some(content),
            Self::EmptyText(_) => None,
        }
    }

    /// The empty-state text, if the empty branch was selected
    #[must_use]
    pub fn empty_text(&self) -> Option<&str> {
        match self {
            Self::Content(_) => None,
            Self::EmptyText(text) => text.as_deref(),
        }
    }
}

/// Values handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceValues<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "ViewData::is_absent")]
    pub data: ViewData<T>,
}

/// Output of one component render pass
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentView<T> {
    pub is_empty: bool,
    pub validation_messages: ValidationMessages,
    pub has_validation_messages: bool,
    pub resource_bindings: ResourceBindings,
    pub resource_values: ResourceValues<T>,
}

impl<T> ComponentView<T> {
    /// The content, when the view is not empty
    #[must_use]
    pub fn content(&self) -> Option<&T> {
        self.resource_values.data.content()
    }

    /// The resolved title
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.resource_values.title.as_deref()
    }
}

impl<T> HasValue for ComponentView<T> {
    fn has_value(&self) -> bool {
        !self.is_empty
    }
}

/// Select what `data` shows: the value when it has content, otherwise the
/// empty-state text.
#[must_use]
pub fn decide<T>(data: Option<T>, has_content: bool, empty_text: Option<String>) -> ViewData<T> {
    match data.filter(|_| has_content) {
        Some(data) => ViewData::Content(data),
        None => ViewData::EmptyText(empty_text),
    }
}

/// Everything a render pass reads besides the props
#[derive(Clone)]
pub struct RenderContext<'a> {
    /// Loaded text resources; `None` until the host has loaded them
    pub resources: Option<&'a dyn TextResourceProvider>,
    pub config: ViewConfig,
}

impl<'a> RenderContext<'a> {
    /// Render against a loaded resource set with the default configuration
    #[must_use]
    pub fn new(resources: &'a dyn TextResourceProvider) -> Self {
        Self {
            resources: Some(resources),
            config: ViewConfig::default(),
        }
    }

    /// Render with no resource set available. Every lookup is absent and
    /// every bound key is reported missing.
    #[must_use]
    pub fn without_resources() -> Self {
        Self {
            resources: None,
            config: ViewConfig::default(),
        }
    }

    /// Replace the configuration
    #[must_use]
    pub fn with_config(mut self, config: ViewConfig) -> Self {
        self.config = config;
        self
    }

    /// Look up a resource key
    #[must_use]
    pub fn text(&self, key: Option<&str>) -> Option<String> {
        let key = key?;
        self.resources?.text(key).map(str::to_string)
    }

    /// Look up one sub-key of a field's binding
    #[must_use]
    pub fn binding_text(
        &self,
        bindings: &ResourceBindings,
        field: &str,
        sub_key: SubKey,
    ) -> Option<String> {
        self.text(bindings.key(field, sub_key))
    }

    /// Check the bindings against the loaded resources
    #[must_use]
    pub fn validation_messages(&self, bindings: &ResourceBindings) -> ValidationMessages {
        if self.config.validate_resources {
            ValidationMessages::Missing(has_missing_text_resources(self.resources, bindings))
        } else {
            ValidationMessages::Disabled
        }
    }
}

impl Default for RenderContext<'_> {
    fn default() -> Self {
        Self::without_resources()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{ResourceBinding, TextResources};
    use serde_json::json;

    #[test]
    fn test_decide() {
        assert_eq!(decide(Some(1), true, None), ViewData::Content(1));
        assert_eq!(
            decide(Some(1), false, Some("Ikke oppgitt".to_string())),
            ViewData::EmptyText(Some("Ikke oppgitt".to_string()))
        );
        assert_eq!(decide::<i32>(None, true, None), ViewData::EmptyText(None));
    }

    #[test]
    fn test_resource_values_serialization() {
        let content = ResourceValues {
            title: Some("Adresse".to_string()),
            data: ViewData::Content("Storgata 1"),
        };
        assert_eq!(
            serde_json::to_value(content).unwrap(),
            json!({"title": "Adresse", "data": "Storgata 1"})
        );

        let empty: ResourceValues<String> = ResourceValues {
            title: None,
            data: ViewData::EmptyText(None),
        };
        assert_eq!(serde_json::to_value(empty).unwrap(), json!({}));
    }

    #[test]
    fn test_lookups_in_degraded_mode() {
        let ctx = RenderContext::without_resources();
        assert_eq!(ctx.text(Some("resource.emptyFieldText.default")), None);

        let mut bindings = ResourceBindings::new();
        bindings.insert(
            "data",
            ResourceBinding {
                empty_field_text: Some("resource.emptyFieldText.default".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(
            ctx.validation_messages(&bindings),
            ValidationMessages::Missing(vec!["resource.emptyFieldText.default".to_string()])
        );
    }

    #[test]
    fn test_lookups_with_resources() {
        let resources: TextResources = [("resource.emptyFieldText.default", "Ikke oppgitt")]
            .into_iter()
            .collect();
        let ctx = RenderContext::new(&resources);
        assert_eq!(
            ctx.text(Some("resource.emptyFieldText.default")).as_deref(),
            Some("Ikke oppgitt")
        );
        assert_eq!(ctx.text(None), None);

        let ctx = ctx.with_config(ViewConfig {
            validate_resources: false,
            ..Default::default()
        });
        assert_eq!(
            ctx.validation_messages(&ResourceBindings::new()),
            ValidationMessages::Disabled
        );
    }
}
