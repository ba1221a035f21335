//! List components
//!
//! Lists map the bound array through an item transformer. The row
//! transformer receives the resolved bindings, so rows can refer to the
//! component's own resource keys. A list that is absent or holds no rows is
//! empty.

use indexmap::IndexMap;
use serde_json::Value;

use crate::components::Component;
use crate::error::Result;
use crate::format::format_kode;
use crate::models::{AnsvarsomraadeRow, BeroertPart, Dispensasjon, Eiendom, Kode, UtfallSvar, Vedlegg};
use crate::props::Props;
use crate::record::{FromRecord, group_by_code, list_from_value};
use crate::resources::{BindingSpec, FieldSpec, ResourceBindings};
use crate::utils::logging::log_render_failure;
use crate::view::RenderContext;

/// A list rendering rows of type `T`
#[derive(Debug, Clone)]
pub struct RecordList<T> {
    name: &'static str,
    spec: BindingSpec,
    row_filter: Option<fn(&T) -> bool>,
}

impl<T> RecordList<T> {
    #[must_use]
    pub const fn new(name: &'static str, spec: BindingSpec) -> Self {
        Self {
            name,
            spec,
            row_filter: None,
        }
    }

    /// Keep only the rows accepted by `filter`
    #[must_use]
    pub const fn with_row_filter(mut self, filter: fn(&T) -> bool) -> Self {
        self.row_filter = Some(filter);
        self
    }
}

impl<T: FromRecord + serde::Serialize> Component for RecordList<T> {
    type Data = Vec<T>;

    fn name(&self) -> &'static str {
        self.name
    }

    fn binding_spec(&self, _props: &Props) -> BindingSpec {
        self.spec
    }

    fn value_from_form_data(
        &self,
        props: &Props,
        bindings: &ResourceBindings,
        _ctx: &RenderContext<'_>,
    ) -> Option<Vec<T>> {
        let rows = list_from_value(props.form_data(), Some(bindings))?;
        Some(match self.row_filter {
            Some(filter) => rows.into_iter().filter(|row| filter(row)).collect(),
            None => rows,
        })
    }
}

const EIENDOM_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("adresse"),
    FieldSpec::text("gaardsnummer"),
    FieldSpec::text("bruksnummer"),
    FieldSpec::text("festenummer"),
    FieldSpec::text("seksjonsnummer"),
    FieldSpec::text("bygningsnummer"),
    FieldSpec::text("bolignummer"),
    FieldSpec::text("kommunenavn"),
];

/// Properties of the building site; rows with neither address nor
/// identification are dropped
pub const EIENDOM_TABLE: RecordList<Eiendom> = RecordList::new(
    "custom-table-eiendom",
    BindingSpec::new("eiendomByggested", "eiendomByggested", EIENDOM_FIELDS),
)
.with_row_filter(Eiendom::has_row_content);

const ANSVARSOMRAADE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("funksjon"),
    FieldSpec::text("beskrivelseAvAnsvarsomraade"),
    FieldSpec::text("tiltaksklasse"),
    FieldSpec::boolean("samsvarKontrollVedRammetillatelse"),
    FieldSpec::boolean("samsvarKontrollVedIgangsettingstillatelse"),
    FieldSpec::boolean("samsvarKontrollVedMidlertidigBrukstillatelse"),
    FieldSpec::boolean("samsvarKontrollVedFerdigattest"),
];

pub const ANSVARSOMRAADE_LIST: RecordList<AnsvarsomraadeRow> = RecordList::new(
    "custom-grouplist-ansvarsomraade",
    BindingSpec::new(
        "ansvarsomraader",
        "ansvarsrett.ansvarsomraader",
        ANSVARSOMRAADE_FIELDS,
    ),
);

const DISPENSASJON_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("dispensasjonstype"),
    FieldSpec::text("beskrivelse"),
    FieldSpec::text("begrunnelse"),
];

pub const DISPENSASJON_LIST: RecordList<Dispensasjon> = RecordList::new(
    "custom-list-dispensasjon",
    BindingSpec::new("dispensasjon", "dispensasjon", DISPENSASJON_FIELDS),
);

const VEDLEGG_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("vedleggstype"),
    FieldSpec::text("filnavn"),
    FieldSpec::text("versjonsnummer"),
    FieldSpec::text("versjonsdato"),
];

pub const VEDLEGG_LIST: RecordList<Vedlegg> = RecordList::new(
    "custom-list-vedlegg",
    BindingSpec::new("vedlegg", "vedlegg", VEDLEGG_FIELDS),
);

const BEROERTE_PARTER_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("navn"),
    FieldSpec::text("partstype"),
    FieldSpec::text("organisasjonsnummer"),
    FieldSpec::text("adresse"),
    FieldSpec::text("gjelderEiendom"),
    FieldSpec::boolean("erVarslet"),
];

pub const BEROERTE_PARTER_TABLE: RecordList<BeroertPart> = RecordList::new(
    "custom-table-beroerte-parter",
    BindingSpec::new("beroerteParter", "beroerteParter", BEROERTE_PARTER_FIELDS),
);

const UTFALL_SVAR_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("tittel"),
    FieldSpec::text("beskrivelse"),
    FieldSpec::text("tema"),
    FieldSpec::text("kommentar"),
    FieldSpec::text("vedleggsliste"),
    FieldSpec::boolean("erUtfallBesvaresSenere"),
];

const UTFALL_SVAR_SPEC: BindingSpec =
    BindingSpec::new("utfallSvar", "utfallSvar", UTFALL_SVAR_FIELDS);

/// Outcome answers grouped by outcome type code
#[derive(Debug, Clone, Copy, Default)]
pub struct UtfallSvarGroupList;

impl UtfallSvarGroupList {
    /// Group the bound answers by `utfallType.kodeverdi`.
    ///
    /// Fails when the bound value is neither absent nor an array.
    pub fn group_answers(
        form_data: &Value,
        bindings: Option<&ResourceBindings>,
    ) -> Result<IndexMap<String, Vec<UtfallSvar>>> {
        group_by_code(form_data, &["utfallType", "kodeverdi"], bindings)
    }
}

impl Component for UtfallSvarGroupList {
    type Data = IndexMap<String, Vec<UtfallSvar>>;

    fn name(&self) -> &'static str {
        "custom-grouplist-utfall-svar"
    }

    fn binding_spec(&self, _props: &Props) -> BindingSpec {
        UTFALL_SVAR_SPEC
    }

    fn value_from_form_data(
        &self,
        props: &Props,
        bindings: &ResourceBindings,
        _ctx: &RenderContext<'_>,
    ) -> Option<Self::Data> {
        Self::group_answers(&props.form_data, Some(bindings))
            .map_err(|error| log_render_failure(self.name(), &error))
            .ok()
    }
}

const TILTAKSTYPE_SPEC: BindingSpec =
    BindingSpec::new("tiltakstyper", "beskrivelseAvTiltak.type", &[]);

/// The measure types applied for, shown by description
#[derive(Debug, Clone, Copy, Default)]
pub struct TiltakstypeList;

impl Component for TiltakstypeList {
    type Data = Vec<String>;

    fn name(&self) -> &'static str {
        "custom-list-tiltakstype"
    }

    fn binding_spec(&self, _props: &Props) -> BindingSpec {
        TILTAKSTYPE_SPEC
    }

    fn value_from_form_data(
        &self,
        props: &Props,
        _bindings: &ResourceBindings,
        _ctx: &RenderContext<'_>,
    ) -> Option<Vec<String>> {
        let codes = list_from_value::<Kode>(props.form_data(), None)?;
        Some(codes.iter().filter_map(format_kode).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::SubKey;
    use crate::view::ViewData;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn props(value: Value) -> Props {
        Props::from_value(value).unwrap()
    }

    #[test]
    fn test_absent_and_empty_lists_are_empty() {
        let ctx = RenderContext::without_resources();
        let absent = DISPENSASJON_LIST.render(&Props::default(), &ctx);
        assert!(absent.is_empty);

        let empty = DISPENSASJON_LIST.render(&props(json!({"formData": []})), &ctx);
        assert!(empty.is_empty);
        assert_eq!(
            empty.resource_values.data,
            ViewData::EmptyText(None),
            "no resources are loaded, so the empty text is unresolved"
        );
    }

    #[test]
    fn test_non_array_degrades_to_empty() {
        let ctx = RenderContext::without_resources();
        let view = VEDLEGG_LIST.render(&props(json!({"formData": {"filnavn": "a.pdf"}})), &ctx);
        assert!(view.is_empty);
    }

    #[test]
    fn test_eiendom_rows_without_content_are_dropped() {
        let ctx = RenderContext::without_resources();
        let view = EIENDOM_TABLE.render(
            &props(json!({"formData": [
                {"bygningsnummer": "123"},
                {"eiendomsidentifikasjon": {"gaardsnummer": "12", "bruksnummer": "3"}}
            ]})),
            &ctx,
        );
        assert!(!view.is_empty);
        assert_eq!(view.content().map(Vec::len), Some(1));

        let view = EIENDOM_TABLE.render(
            &props(json!({"formData": [{"bygningsnummer": "123"}, {"adresse": {}}]})),
            &ctx,
        );
        assert!(view.is_empty);
    }

    #[test]
    fn test_ansvarsomraade_rows_use_bindings() {
        let ctx = RenderContext::without_resources();
        let view = ANSVARSOMRAADE_LIST.render(
            &props(json!({
                "formData": [{
                    "funksjon": {"kodeverdi": "PRO", "kodebeskrivelse": "Ansvarlig prosjekterende"},
                    "samsvarKontrollVedRammetillatelse": true,
                    "samsvarKontrollVedFerdigattest": false
                }],
                "resourceBindings": {"samsvarKontrollVedRammetillatelse": {"trueText": "egen.ja"}}
            })),
            &ctx,
        );
        let rows = view.content().unwrap();
        assert_eq!(rows[0].funksjon.as_deref(), Some("Ansvarlig prosjekterende"));
        assert_eq!(rows[0].samsvar_kontroll_ved_rammetillatelse.as_deref(), Some("egen.ja"));
        assert_eq!(
            rows[0].samsvar_kontroll_ved_ferdigattest.as_deref(),
            Some("resource.falseText.default")
        );
        assert_eq!(
            rows[0].samsvar_kontroll_ved_igangsettingstillatelse.as_deref(),
            Some("resource.defaultText.default")
        );
    }

    #[test]
    fn test_utfall_svar_grouped_by_type() {
        let ctx = RenderContext::without_resources();
        let view = UtfallSvarGroupList.render(
            &props(json!({"formData": [
                {"utfallType": {"kodeverdi": "MANGEL"}, "tittel": "a"},
                {"utfallType": {"kodeverdi": "SVAR"}, "tittel": "b"},
                {"utfallType": {"kodeverdi": "MANGEL"}, "tittel": "c"},
                {"tittel": "uten type"}
            ]})),
            &ctx,
        );
        let groups = view.content().unwrap();
        assert_eq!(groups.keys().collect::<Vec<_>>(), ["MANGEL", "SVAR"]);
        let titles: Vec<_> = groups["MANGEL"]
            .iter()
            .filter_map(|svar| svar.tittel.as_deref())
            .collect();
        assert_eq!(titles, ["a", "c"]);
    }

    #[test]
    fn test_utfall_svar_shape_violation() {
        let error = UtfallSvarGroupList::group_answers(&json!({"utfallType": {}}), None);
        assert!(error.is_err());

        // The view still renders, in the empty state
        let ctx = RenderContext::without_resources();
        let view = UtfallSvarGroupList.render(&props(json!({"formData": "tekst"})), &ctx);
        assert!(view.is_empty);
        assert_eq!(
            view.resource_bindings.key("utfallSvar", SubKey::EmptyFieldText),
            Some("resource.emptyFieldText.default")
        );
    }

    #[test]
    fn test_tiltakstyper_by_description() {
        let ctx = RenderContext::without_resources();
        let view = TiltakstypeList.render(
            &props(json!({"formData": [
                {"kodeverdi": "nyttbyggboligformal", "kodebeskrivelse": "Nytt bygg - boligformål"},
                {"kodeverdi": "rivinghelebygg"},
                {"kodeverdi": ""}
            ]})),
            &ctx,
        );
        assert_eq!(
            view.content(),
            Some(&vec![
                "Nytt bygg - boligformål".to_string(),
                "rivinghelebygg".to_string()
            ])
        );
    }
}
