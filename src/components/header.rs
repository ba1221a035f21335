//! Header text

use crate::components::Component;
use crate::props::Props;
use crate::resources::{BindingSpec, ResourceBindings, SubKey};
use crate::view::RenderContext;

const HEADER_SPEC: BindingSpec = BindingSpec::generic("header");

/// A heading whose only content is its title
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderText;

impl Component for HeaderText {
    type Data = String;

    fn name(&self) -> &'static str {
        "custom-header-text"
    }

    fn binding_spec(&self, _props: &Props) -> BindingSpec {
        HEADER_SPEC
    }

    fn value_from_form_data(
        &self,
        props: &Props,
        bindings: &ResourceBindings,
        ctx: &RenderContext<'_>,
    ) -> Option<String> {
        props
            .resource_values
            .title
            .clone()
            .or_else(|| ctx.binding_text(bindings, HEADER_SPEC.group, SubKey::Title))
    }
}
