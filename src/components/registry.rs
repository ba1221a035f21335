//! Component lookup by tag name
//!
//! The host registers each component under a custom-element tag name. This
//! module maps those names to the orchestrators and renders them to JSON.

use serde_json::Value;

use crate::components::Component;
use crate::components::field::{
    FieldAdresse, FieldBooleanText, FieldDato, FieldData, FieldKode, FieldKommunensSaksnummer,
    FieldTelefonnummer,
};
use crate::components::group::{
    ADKOMST, ARBEIDSPLASSER, AVLOEP, BRUK, GENERELLE_VILKAAR, KONTAKTPERSON, KRAV_TIL_BYGGEGRUNN,
    LOEFTEINNRETNINGER, PLAN, PartGroup, SIGNATUR, VANNFORSYNING, VARSLING,
};
use crate::components::header::HeaderText;
use crate::components::list::{
    ANSVARSOMRAADE_LIST, BEROERTE_PARTER_TABLE, DISPENSASJON_LIST, EIENDOM_TABLE,
    TiltakstypeList, UtfallSvarGroupList, VEDLEGG_LIST,
};
use crate::components::summation::SummationArealdisponering;
use crate::error::{Result, ViewError};
use crate::props::Props;
use crate::view::RenderContext;

/// Every registered tag name
pub const COMPONENT_NAMES: &[&str] = &[
    "custom-field-data",
    "custom-field-boolean-text",
    "custom-field-adresse",
    "custom-field-telefonnummer",
    "custom-field-kommunens-saksnummer",
    "custom-field-kode",
    "custom-field-dato",
    "custom-group-part",
    "custom-group-kontaktperson",
    "custom-summation-arealdisponering",
    "custom-group-adkomst",
    "custom-group-vannforsyning",
    "custom-group-avloep",
    "custom-group-plan",
    "custom-group-generelle-vilkaar",
    "custom-group-loefteinnretninger",
    "custom-group-krav-til-byggegrunn",
    "custom-group-arbeidsplasser",
    "custom-group-varsling",
    "custom-group-signatur",
    "custom-group-bruk",
    "custom-table-eiendom",
    "custom-grouplist-ansvarsomraade",
    "custom-list-dispensasjon",
    "custom-grouplist-utfall-svar",
    "custom-list-vedlegg",
    "custom-table-beroerte-parter",
    "custom-list-tiltakstype",
    "custom-header-text",
];

/// Render the component registered under `name` as a JSON view
pub fn render_component(name: &str, props: &Props, ctx: &RenderContext<'_>) -> Result<Value> {
    match name {
        "custom-field-data" => to_value(&FieldData, props, ctx),
        "custom-field-boolean-text" => to_value(&FieldBooleanText, props, ctx),
        "custom-field-adresse" => to_value(&FieldAdresse, props, ctx),
        "custom-field-telefonnummer" => to_value(&FieldTelefonnummer, props, ctx),
        "custom-field-kommunens-saksnummer" => to_value(&FieldKommunensSaksnummer, props, ctx),
        "custom-field-kode" => to_value(&FieldKode, props, ctx),
        "custom-field-dato" => to_value(&FieldDato, props, ctx),
        "custom-group-part" => to_value(&PartGroup, props, ctx),
        "custom-group-kontaktperson" => to_value(&KONTAKTPERSON, props, ctx),
        "custom-summation-arealdisponering" => to_value(&SummationArealdisponering, props, ctx),
        "custom-group-adkomst" => to_value(&ADKOMST, props, ctx),
        "custom-group-vannforsyning" => to_value(&VANNFORSYNING, props, ctx),
        "custom-group-avloep" => to_value(&AVLOEP, props, ctx),
        "custom-group-plan" => to_value(&PLAN, props, ctx),
        "custom-group-generelle-vilkaar" => to_value(&GENERELLE_VILKAAR, props, ctx),
        "custom-group-loefteinnretninger" => to_value(&LOEFTEINNRETNINGER, props, ctx),
        "custom-group-krav-til-byggegrunn" => to_value(&KRAV_TIL_BYGGEGRUNN, props, ctx),
        "custom-group-arbeidsplasser" => to_value(&ARBEIDSPLASSER, props, ctx),
        "custom-group-varsling" => to_value(&VARSLING, props, ctx),
        "custom-group-signatur" => to_value(&SIGNATUR, props, ctx),
        "custom-group-bruk" => to_value(&BRUK, props, ctx),
        "custom-table-eiendom" => to_value(&EIENDOM_TABLE, props, ctx),
        "custom-grouplist-ansvarsomraade" => to_value(&ANSVARSOMRAADE_LIST, props, ctx),
        "custom-list-dispensasjon" => to_value(&DISPENSASJON_LIST, props, ctx),
        "custom-grouplist-utfall-svar" => to_value(&UtfallSvarGroupList, props, ctx),
        "custom-list-vedlegg" => to_value(&VEDLEGG_LIST, props, ctx),
        "custom-table-beroerte-parter" => to_value(&BEROERTE_PARTER_TABLE, props, ctx),
        "custom-list-tiltakstype" => to_value(&TiltakstypeList, props, ctx),
        "custom-header-text" => to_value(&HeaderText, props, ctx),
        _ => Err(ViewError::UnknownComponent(name.to_string())),
    }
}

fn to_value<C: Component>(component: &C, props: &Props, ctx: &RenderContext<'_>) -> Result<Value> {
    Ok(serde_json::to_value(component.render(props, ctx))?)
}
