//! Resource-binding resolution
//!
//! For every declared key the caller's override wins when it is a non-empty
//! string; otherwise the default key is used. Precedence is decided per
//! sub-key, so a partial override never erases its sibling keys.
//!
//! Two independent gates act on the component's own (group) entry only:
//! `hideTitle` omits the title key and `hideIfEmpty` omits the empty-state
//! key. Components with an upstream title also omit the title key when the
//! caller already resolved one.

use crate::props::Props;
use crate::resources::binding::{ResourceBinding, ResourceBindings};
use crate::resources::keys::{SubKey, resource_key};
use crate::resources::overrides::BindingOverrides;
use crate::resources::spec::{BindingSpec, FieldKind, FieldSpec, TitleSource};

/// Resolve a component's bindings from its props
#[must_use]
pub fn get_resource_bindings(spec: &BindingSpec, props: &Props) -> ResourceBindings {
    BindingResolver::from_props(props).resolve(spec)
}

/// Merges caller overrides with default keys
#[derive(Debug, Clone)]
pub struct BindingResolver<'a> {
    overrides: &'a BindingOverrides,
    hide_title: bool,
    hide_if_empty: bool,
    upstream_title: bool,
}

impl<'a> BindingResolver<'a> {
    /// Create a resolver with explicit gates
    #[must_use]
    pub fn new(overrides: &'a BindingOverrides, hide_title: bool, hide_if_empty: bool) -> Self {
        Self {
            overrides,
            hide_title,
            hide_if_empty,
            upstream_title: false,
        }
    }

    /// Create a resolver from normalised props
    #[must_use]
    pub fn from_props(props: &'a Props) -> Self {
        Self {
            overrides: &props.resource_bindings,
            hide_title: props.hide_title,
            hide_if_empty: props.hide_if_empty,
            upstream_title: props.resource_values.title.is_some(),
        }
    }

    /// Resolve every binding declared by `spec`
    #[must_use]
    pub fn resolve(&self, spec: &BindingSpec) -> ResourceBindings {
        let mut bindings = ResourceBindings::new();
        bindings.insert(spec.group, self.group_binding(spec));
        for field in spec.fields {
            bindings.insert(field.name, self.field_binding(spec.domain, field));
        }
        bindings
    }

    fn group_binding(&self, spec: &BindingSpec) -> ResourceBinding {
        let mut binding = ResourceBinding::default();

        let title_supplied_upstream =
            spec.title_source == TitleSource::Upstream && self.upstream_title;
        if !self.hide_title && !title_supplied_upstream {
            let default = spec
                .domain
                .map(|domain| resource_key(domain, None, SubKey::Title));
            binding.title = self.group_key(spec.group, SubKey::Title, default);
        }

        if !self.hide_if_empty {
            let default = match spec.domain {
                Some(domain) if spec.domain_empty_text => {
                    resource_key(domain, None, SubKey::EmptyFieldText)
                }
                _ => sentinel(SubKey::EmptyFieldText),
            };
            binding.empty_field_text =
                self.group_key(spec.group, SubKey::EmptyFieldText, Some(default));
        }

        if spec.boolean_group {
            for sub_key in [SubKey::TrueText, SubKey::FalseText, SubKey::DefaultText] {
                binding.set(
                    sub_key,
                    self.group_key(spec.group, sub_key, Some(sentinel(sub_key))),
                );
            }
        }

        binding
    }

    fn field_binding(&self, domain: Option<&str>, field: &FieldSpec) -> ResourceBinding {
        let mut binding = ResourceBinding {
            title: self.field_key(
                field.name,
                SubKey::Title,
                domain.map(|domain| resource_key(domain, Some(field.name), SubKey::Title)),
            ),
            empty_field_text: self.field_key(
                field.name,
                SubKey::EmptyFieldText,
                Some(sentinel(SubKey::EmptyFieldText)),
            ),
            ..Default::default()
        };

        if let FieldKind::Boolean { domain_texts } = field.kind {
            for sub_key in [SubKey::TrueText, SubKey::FalseText, SubKey::DefaultText] {
                let default = match domain {
                    Some(domain) if domain_texts => resource_key(domain, Some(field.name), sub_key),
                    _ => sentinel(sub_key),
                };
                binding.set(sub_key, self.field_key(field.name, sub_key, Some(default)));
            }
        }

        binding
    }

    fn field_key(&self, field: &str, sub_key: SubKey, default: Option<String>) -> Option<String> {
        self.overrides
            .get(field, sub_key)
            .map(str::to_string)
            .or(default)
    }

    fn group_key(&self, group: &str, sub_key: SubKey, default: Option<String>) -> Option<String> {
        self.overrides
            .get_group(group, sub_key)
            .map(str::to_string)
            .or(default)
    }
}

fn sentinel(sub_key: SubKey) -> String {
    sub_key.sentinel().unwrap_or_default().to_string()
}
