//! Description of the building project

use crate::FromRecord;
use crate::models::kode::Kode;
use crate::record::Lenient;

/// Intended use of the building
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Bruk {
    pub anleggstype: Option<Kode>,
    pub naeringsgruppe: Option<Kode>,
    pub bygningstype: Option<Kode>,
    pub tiltaksformaal: Option<Vec<Kode>>,
    pub beskriv_planlagt_formaal: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct BeskrivelseAvTiltak {
    pub bruk: Option<Bruk>,
    /// The kinds of work applied for
    #[record(rename = "type")]
    pub tiltakstyper: Option<Vec<Kode>>,
    pub foelgebrev: Option<String>,
    pub bygningsopplysninger: Option<Bygningsopplysninger>,
}

/// Heating distribution and energy sources
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Energiforsyning {
    pub varmefordeling: Option<Vec<Kode>>,
    pub energiforsyning: Option<Vec<Kode>>,
    pub relevant: Option<Lenient<bool>>,
}

/// Area figures for one storey
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Etasje {
    pub etasjeplan: Option<Kode>,
    pub etasjenummer: Option<Lenient<i64>>,
    pub antall_bruksenheter_bolig: Option<Lenient<i64>>,
    pub antall_bruksenheter_annet: Option<Lenient<i64>>,
    pub bruksareal_til_bolig: Option<Lenient<f64>>,
    pub bruksareal_til_annet: Option<Lenient<f64>>,
    pub bruksareal_totalt: Option<Lenient<f64>>,
    pub bruttoareal_totalt: Option<Lenient<f64>>,
}

/// A dwelling or other unit in the building
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Bruksenhet {
    pub bruksenhetsnummer: Option<String>,
    pub bruksenhetstype: Option<Kode>,
    pub bruksareal: Option<Lenient<f64>>,
    pub antall_rom: Option<Lenient<i64>>,
    pub antall_bad: Option<Lenient<i64>>,
    pub antall_wc: Option<Lenient<i64>>,
    pub kjoekkentilgang: Option<Kode>,
}

/// Technical facts about the building applied for
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Bygningsopplysninger {
    pub etasjer: Option<Vec<Etasje>>,
    pub bruksenheter: Option<Vec<Bruksenhet>>,
    pub energiforsyning: Option<Energiforsyning>,
    pub har_heis: Option<Lenient<bool>>,
}
