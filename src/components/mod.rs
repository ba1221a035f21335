//! Component orchestrators
//!
//! Every component composes the same four capabilities into one render pass:
//! resolve its resource bindings, transform the form data, decide emptiness
//! and report missing text resources. [`Component::render`] runs them in that
//! fixed order; implementors only describe what differs.

pub mod field;
pub mod group;
pub mod header;
pub mod list;
pub mod registry;
pub mod summation;

use serde::Serialize;

use crate::presence::HasValue;
use crate::props::Props;
use crate::resources::{
    BindingSpec, ResourceBindings, SubKey, ValidationMessages, get_resource_bindings,
    has_validation_messages,
};
use crate::utils::logging::{log_missing_resources, log_render_complete, log_render_start};
use crate::view::{ComponentView, RenderContext, ResourceValues, decide};

// Re-export commonly used items
pub use registry::{COMPONENT_NAMES, render_component};

/// The capability interface of a component orchestrator
pub trait Component {
    /// The transformed value shown in the content branch
    type Data: Serialize + HasValue;

    /// Tag name the host registers the component under
    fn name(&self) -> &'static str;

    /// Declared bindings for these props
    fn binding_spec(&self, props: &Props) -> BindingSpec;

    /// Resolve the binding map: caller override, else default key
    fn resource_bindings(&self, props: &Props) -> ResourceBindings {
        get_resource_bindings(&self.binding_spec(props), props)
    }

    /// Transform the bound form data. Never fails; absent or malformed input
    /// yields `None`.
    fn value_from_form_data(
        &self,
        props: &Props,
        bindings: &ResourceBindings,
        ctx: &RenderContext<'_>,
    ) -> Option<Self::Data>;

    /// Whether the transformed value is worth showing
    fn has_content(&self, data: Option<&Self::Data>) -> bool {
        data.has_value()
    }

    /// Report the bound keys missing from the loaded resources
    fn validation_messages(
        &self,
        bindings: &ResourceBindings,
        ctx: &RenderContext<'_>,
    ) -> ValidationMessages {
        ctx.validation_messages(bindings)
    }

    /// Run one render pass
    fn render(&self, props: &Props, ctx: &RenderContext<'_>) -> ComponentView<Self::Data> {
        let name = self.name();
        log_render_start(name);
        let group = self.binding_spec(props).group;

        let resource_bindings = self.resource_bindings(props);
        let data = self.value_from_form_data(props, &resource_bindings, ctx);
        let is_empty = !self.has_content(data.as_ref());

        let validation_messages = self.validation_messages(&resource_bindings, ctx);
        let has_validation_messages = has_validation_messages(&validation_messages);
        if ctx.config.log_missing_resources {
            log_missing_resources(name, validation_messages.keys());
        }

        let title = if props.hide_title {
            None
        } else {
            props
                .resource_values
                .title
                .clone()
                .or_else(|| ctx.binding_text(&resource_bindings, group, SubKey::Title))
        };
        let empty_text = if is_empty {
            ctx.binding_text(&resource_bindings, group, SubKey::EmptyFieldText)
        } else {
            None
        };
        let data = decide(data, !is_empty, empty_text);

        log_render_complete(name, is_empty, validation_messages.keys().len());
        ComponentView {
            is_empty,
            validation_messages,
            has_validation_messages,
            resource_bindings,
            resource_values: ResourceValues { title, data },
        }
    }
}
