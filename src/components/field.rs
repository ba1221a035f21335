//! Single-value field components
//!
//! Field components are generic: they carry no domain path, so their title
//! is only bound when the caller overrides it. Most of them format a small
//! domain object into one display string.

use serde_json::Value;

use crate::components::Component;
use crate::format::{
    format_address, format_date, format_kode, format_kommunens_saksnummer, format_phone_numbers,
};
use crate::models::{EiendommensAdresse, Kode, KommunensSaksnummer, Kontaktperson};
use crate::props::Props;
use crate::record::{FromRecord, Scalar};
use crate::resources::{BindingSpec, ResourceBindings};
use crate::view::RenderContext;

const DATA_SPEC: BindingSpec = BindingSpec::generic("data");
const BOOLEAN_TEXT_SPEC: BindingSpec = BindingSpec::generic("data").with_boolean_texts();
const ADRESSE_SPEC: BindingSpec = BindingSpec::generic("adresse");
const TELEFONNUMMER_SPEC: BindingSpec = BindingSpec::generic("telefonnummer");
const KOMMUNENS_SAKSNUMMER_SPEC: BindingSpec = BindingSpec::generic("kommunensSaksnummer");
const KODE_SPEC: BindingSpec = BindingSpec::generic("kode");
const DATO_SPEC: BindingSpec = BindingSpec::generic("dato");

/// Shows the bound value as is
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldData;

impl Component for FieldData {
    type Data = Value;

    fn name(&self) -> &'static str {
        "custom-field-data"
    }

    fn binding_spec(&self, _props: &Props) -> BindingSpec {
        DATA_SPEC
    }

    fn value_from_form_data(
        &self,
        props: &Props,
        _bindings: &ResourceBindings,
        _ctx: &RenderContext<'_>,
    ) -> Option<Value> {
        props.form_data().cloned()
    }
}

/// Shows the text describing a boolean answer
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldBooleanText;

impl Component for FieldBooleanText {
    type Data = String;

    fn name(&self) -> &'static str {
        "custom-field-boolean-text"
    }

    fn binding_spec(&self, _props: &Props) -> BindingSpec {
        BOOLEAN_TEXT_SPEC
    }

    fn value_from_form_data(
        &self,
        props: &Props,
        bindings: &ResourceBindings,
        ctx: &RenderContext<'_>,
    ) -> Option<String> {
        let answer = props.form_data().and_then(bool::from_json);
        let key = bindings.get(BOOLEAN_TEXT_SPEC.group)?.boolean_text_key(answer);
        match ctx.resources {
            Some(_) => ctx.text(key),
            // No resources loaded: an answered question still shows its answer
            None => answer.map(|answer| answer.to_string()),
        }
    }
}

/// Shows a postal address as lines
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldAdresse;

impl Component for FieldAdresse {
    type Data = String;

    fn name(&self) -> &'static str {
        "custom-field-adresse"
    }

    fn binding_spec(&self, _props: &Props) -> BindingSpec {
        ADRESSE_SPEC
    }

    fn value_from_form_data(
        &self,
        props: &Props,
        _bindings: &ResourceBindings,
        ctx: &RenderContext<'_>,
    ) -> Option<String> {
        EiendommensAdresse::from_optional(props.form_data(), None)
            .map(|adresse| format_address(&adresse, &ctx.config.address_line_separator))
    }
}

/// Shows the phone and mobile numbers of a party
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldTelefonnummer;

impl Component for FieldTelefonnummer {
    type Data = String;

    fn name(&self) -> &'static str {
        "custom-field-telefonnummer"
    }

    fn binding_spec(&self, _props: &Props) -> BindingSpec {
        TELEFONNUMMER_SPEC
    }

    fn value_from_form_data(
        &self,
        props: &Props,
        _bindings: &ResourceBindings,
        ctx: &RenderContext<'_>,
    ) -> Option<String> {
        Kontaktperson::from_optional(props.form_data(), None).map(|numbers| {
            format_phone_numbers(
                &[
                    numbers.telefonnummer.as_deref(),
                    numbers.mobilnummer.as_deref(),
                ],
                &ctx.config.phone_separator,
            )
        })
    }
}

/// Shows the municipality's case number
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldKommunensSaksnummer;

impl Component for FieldKommunensSaksnummer {
    type Data = String;

    fn name(&self) -> &'static str {
        "custom-field-kommunens-saksnummer"
    }

    fn binding_spec(&self, _props: &Props) -> BindingSpec {
        KOMMUNENS_SAKSNUMMER_SPEC
    }

    fn value_from_form_data(
        &self,
        props: &Props,
        _bindings: &ResourceBindings,
        _ctx: &RenderContext<'_>,
    ) -> Option<String> {
        KommunensSaksnummer::from_optional(props.form_data(), None).map(|saksnummer| {
            format_kommunens_saksnummer(
                saksnummer.saksaar.as_deref(),
                saksnummer.sakssekvensnummer.as_deref(),
            )
        })
    }
}

/// Shows the description of a code
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldKode;

impl Component for FieldKode {
    type Data = String;

    fn name(&self) -> &'static str {
        "custom-field-kode"
    }

    fn binding_spec(&self, _props: &Props) -> BindingSpec {
        KODE_SPEC
    }

    fn value_from_form_data(
        &self,
        props: &Props,
        _bindings: &ResourceBindings,
        _ctx: &RenderContext<'_>,
    ) -> Option<String> {
        Kode::from_optional(props.form_data(), None).and_then(|kode| format_kode(&kode))
    }
}

/// Shows a date in the configured display format
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldDato;

impl Component for FieldDato {
    type Data = String;

    fn name(&self) -> &'static str {
        "custom-field-dato"
    }

    fn binding_spec(&self, _props: &Props) -> BindingSpec {
        DATO_SPEC
    }

    fn value_from_form_data(
        &self,
        props: &Props,
        _bindings: &ResourceBindings,
        ctx: &RenderContext<'_>,
    ) -> Option<String> {
        props
            .form_data()
            .and_then(String::from_json)
            .map(|raw| format_date(&raw, &ctx.config.date_format))
    }
}
