//! Responsibility rights and areas
//!
//! [`AnsvarsomraadeRow`] is the binding-aware projection used for list
//! rendering: its boolean answers are resolved to the resource key describing
//! the answer, using the component's resolved bindings.

use serde_json::Value;

use crate::FromRecord;
use crate::format::format_kode;
use crate::models::kode::Kode;
use crate::models::part::Foretak;
use crate::record::{Lenient, nested, scalar};
use crate::resources::ResourceBindings;

/// One area of responsibility declared by a company
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Ansvarsomraade {
    pub funksjon: Option<Kode>,
    pub beskrivelse_av_ansvarsomraade: Option<String>,
    pub tiltaksklasse: Option<Kode>,
    pub samsvar_kontroll_ved_rammetillatelse: Option<Lenient<bool>>,
    pub samsvar_kontroll_ved_igangsettingstillatelse: Option<Lenient<bool>>,
    pub samsvar_kontroll_ved_midlertidig_brukstillatelse: Option<Lenient<bool>>,
    pub samsvar_kontroll_ved_ferdigattest: Option<Lenient<bool>>,
    pub dato_erklaering_signert: Option<String>,
}

/// Declarations made by the responsible company
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Erklaeringer {
    pub erklaering_ansvarlig_prosjekterende: Option<Lenient<bool>>,
    pub erklaering_ansvarlig_utfoerende: Option<Lenient<bool>>,
    pub erklaering_ansvarlig_kontrollerende: Option<Lenient<bool>>,
}

/// A declaration of responsibility right
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Ansvarsrett {
    pub foretak: Option<Foretak>,
    pub ansvarsomraader: Option<Vec<Ansvarsomraade>>,
    pub erklaeringer: Option<Erklaeringer>,
}

/// One line of the project's implementation plan ("gjennomføringsplan")
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct PlanlagtAnsvarsomraade {
    pub funksjon: Option<Kode>,
    pub ansvarsomraade: Option<String>,
    pub tiltaksklasse: Option<Kode>,
    pub foretak: Option<Foretak>,
    pub ansvarsomraade_status: Option<Kode>,
    pub samsvar_kontroll_planlagt_ved_rammetillatelse: Option<Lenient<bool>>,
    pub samsvar_kontroll_planlagt_ved_igangsettingstillatelse: Option<Lenient<bool>>,
    pub samsvar_kontroll_planlagt_ved_midlertidig_brukstillatelse: Option<Lenient<bool>>,
    pub samsvar_kontroll_planlagt_ved_ferdigattest: Option<Lenient<bool>>,
    pub dato_ansvarsrett_erklaert: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Gjennomfoeringsplan {
    pub versjon: Option<String>,
    pub gjennomfoeringsplan: Option<Vec<PlanlagtAnsvarsomraade>>,
}

/// Render row for one area of responsibility
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct AnsvarsomraadeRow {
    #[record(with = "funksjon_text")]
    pub funksjon: Option<String>,
    pub beskrivelse_av_ansvarsomraade: Option<String>,
    #[record(with = "tiltaksklasse_text")]
    pub tiltaksklasse: Option<String>,
    #[record(with = "samsvar_rammetillatelse")]
    pub samsvar_kontroll_ved_rammetillatelse: Option<String>,
    #[record(with = "samsvar_igangsettingstillatelse")]
    pub samsvar_kontroll_ved_igangsettingstillatelse: Option<String>,
    #[record(with = "samsvar_midlertidig_brukstillatelse")]
    pub samsvar_kontroll_ved_midlertidig_brukstillatelse: Option<String>,
    #[record(with = "samsvar_ferdigattest")]
    pub samsvar_kontroll_ved_ferdigattest: Option<String>,
}

fn kode_text(raw: &Value, key: &str) -> Option<String> {
    nested::<Kode>(raw, key, None).and_then(|kode| format_kode(&kode))
}

fn funksjon_text(raw: &Value, _bindings: Option<&ResourceBindings>) -> Option<String> {
    kode_text(raw, "funksjon")
}

fn tiltaksklasse_text(raw: &Value, _bindings: Option<&ResourceBindings>) -> Option<String> {
    kode_text(raw, "tiltaksklasse")
}

/// The resource key describing a boolean answer, taken from the field's
/// binding; an unanswered field maps to its default text
fn answer_key(raw: &Value, bindings: Option<&ResourceBindings>, field: &str) -> Option<String> {
    let answer = scalar::<bool>(raw, field);
    bindings?
        .get(field)?
        .boolean_text_key(answer)
        .map(str::to_string)
}

fn samsvar_rammetillatelse(raw: &Value, bindings: Option<&ResourceBindings>) -> Option<String> {
    answer_key(raw, bindings, "samsvarKontrollVedRammetillatelse")
}

fn samsvar_igangsettingstillatelse(
    raw: &Value,
    bindings: Option<&ResourceBindings>,
) -> Option<String> {
    answer_key(raw, bindings, "samsvarKontrollVedIgangsettingstillatelse")
}

fn samsvar_midlertidig_brukstillatelse(
    raw: &Value,
    bindings: Option<&ResourceBindings>,
) -> Option<String> {
    answer_key(raw, bindings, "samsvarKontrollVedMidlertidigBrukstillatelse")
}

fn samsvar_ferdigattest(raw: &Value, bindings: Option<&ResourceBindings>) -> Option<String> {
    answer_key(raw, bindings, "samsvarKontrollVedFerdigattest")
}
