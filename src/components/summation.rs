//! Area summary ("arealdisponering")
//!
//! The summary renders three sub-groups from the same raw object: site area,
//! built area and degree of utilisation. Each sub-group is a component of its
//! own, titled from the summary's binding for it. The summary has content as
//! soon as any one sub-total key of the raw object has a value.

use serde::Serialize;
use serde_json::Value;

use crate::components::Component;
use crate::components::group::RecordGroup;
use crate::models::{Bebyggelse, GradAvUtnytting, Tomteareal};
use crate::presence::{HasValue, any_path_has_value};
use crate::props::Props;
use crate::resources::{BindingSpec, FieldSpec, ResourceBindings, SubKey};
use crate::view::{ComponentView, RenderContext};

const DOMAIN: &str = "rammebetingelser.arealdisponering";

const SUMMATION_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("tomtearealet"),
    FieldSpec::text("bebyggelsen"),
    FieldSpec::text("gradAvUtnytting"),
];

const SUMMATION_SPEC: BindingSpec =
    BindingSpec::new("arealdisponering", DOMAIN, SUMMATION_FIELDS).with_domain_empty_text();

const TOMTEAREALET_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("tomtearealByggeomraade"),
    FieldSpec::text("tomtearealSomTrekkesFra"),
    FieldSpec::text("tomtearealSomLeggesTil"),
    FieldSpec::text("tomtearealBeregnet"),
];

const BEBYGGELSEN_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("arealBebyggelseEksisterende"),
    FieldSpec::text("arealBebyggelseSomSkalRives"),
    FieldSpec::text("arealBebyggelseNytt"),
    FieldSpec::text("parkeringsarealTerreng"),
    FieldSpec::text("arealSumByggesak"),
];

const GRAD_AV_UTNYTTING_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("beregnetMaksByggeareal"),
    FieldSpec::text("beregnetGradAvUtnytting"),
];

pub const TOMTEAREALET: RecordGroup<Tomteareal> = RecordGroup::new(
    "custom-group-tomtearealet",
    BindingSpec::new(
        "tomtearealet",
        "rammebetingelser.arealdisponering.tomtearealet",
        TOMTEAREALET_FIELDS,
    )
    .with_upstream_title(),
);

pub const BEBYGGELSEN: RecordGroup<Bebyggelse> = RecordGroup::new(
    "custom-group-bebyggelsen",
    BindingSpec::new(
        "bebyggelsen",
        "rammebetingelser.arealdisponering.bebyggelsen",
        BEBYGGELSEN_FIELDS,
    )
    .with_upstream_title(),
);

pub const GRAD_AV_UTNYTTING: RecordGroup<GradAvUtnytting> = RecordGroup::new(
    "custom-group-grad-av-utnytting",
    BindingSpec::new(
        "gradAvUtnytting",
        "rammebetingelser.arealdisponering.gradAvUtnytting",
        GRAD_AV_UTNYTTING_FIELDS,
    )
    .with_upstream_title(),
);

/// The three rendered sub-groups
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArealdisponeringSummary {
    pub tomtearealet: ComponentView<Tomteareal>,
    pub bebyggelsen: ComponentView<Bebyggelse>,
    pub grad_av_utnytting: ComponentView<GradAvUtnytting>,
}

impl HasValue for ArealdisponeringSummary {
    fn has_value(&self) -> bool {
        self.tomtearealet.has_value()
            || self.bebyggelsen.has_value()
            || self.grad_av_utnytting.has_value()
    }
}

/// Whether any sub-group's key has a value in the raw object
fn has_sub_total(raw: &Value) -> bool {
    let paths: Vec<&[&str]> = [TOMTEAREALET_FIELDS, BEBYGGELSEN_FIELDS, GRAD_AV_UTNYTTING_FIELDS]
        .into_iter()
        .flatten()
        .map(|field| std::slice::from_ref(&field.name))
        .collect();
    any_path_has_value(raw, &paths)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SummationArealdisponering;

impl SummationArealdisponering {
    fn render_part<C: Component>(
        part: &C,
        props: &Props,
        bindings: &ResourceBindings,
        ctx: &RenderContext<'_>,
    ) -> ComponentView<C::Data> {
        let field = part.binding_spec(props).group;
        let title = ctx.binding_text(bindings, field, SubKey::Title);
        part.render(&props.child(field, props.form_data.clone(), title), ctx)
    }
}

impl Component for SummationArealdisponering {
    type Data = ArealdisponeringSummary;

    fn name(&self) -> &'static str {
        "custom-summation-arealdisponering"
    }

    fn binding_spec(&self, _props: &Props) -> BindingSpec {
        SUMMATION_SPEC
    }

    fn value_from_form_data(
        &self,
        props: &Props,
        bindings: &ResourceBindings,
        ctx: &RenderContext<'_>,
    ) -> Option<ArealdisponeringSummary> {
        if !has_sub_total(props.form_data()?) {
            return None;
        }
        Some(ArealdisponeringSummary {
            tomtearealet: Self::render_part(&TOMTEAREALET, props, bindings, ctx),
            bebyggelsen: Self::render_part(&BEBYGGELSEN, props, bindings, ctx),
            grad_av_utnytting: Self::render_part(&GRAD_AV_UTNYTTING, props, bindings, ctx),
        })
    }
}
