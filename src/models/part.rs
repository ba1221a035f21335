//! Parties to the application

use crate::FromRecord;
use crate::models::adresse::Adresse;
use crate::models::eiendom::Eiendom;
use crate::models::kode::Kode;
use crate::record::Lenient;

/// Contact person of a party
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Kontaktperson {
    pub navn: Option<String>,
    pub telefonnummer: Option<String>,
    pub mobilnummer: Option<String>,
    pub epost: Option<String>,
}

/// A party such as the applicant (tiltakshaver) or the responsible
/// applicant (ansvarlig søker)
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Part {
    pub partstype: Option<Kode>,
    pub navn: Option<String>,
    pub organisasjonsnummer: Option<String>,
    pub adresse: Option<Adresse>,
    pub telefonnummer: Option<String>,
    pub mobilnummer: Option<String>,
    pub epost: Option<String>,
    pub kontaktperson: Option<Kontaktperson>,
}

/// A company taking responsibility in the project
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Foretak {
    pub partstype: Option<Kode>,
    pub navn: Option<String>,
    pub organisasjonsnummer: Option<String>,
    pub adresse: Option<Adresse>,
    pub telefonnummer: Option<String>,
    pub mobilnummer: Option<String>,
    pub epost: Option<String>,
    pub kontaktperson: Option<Kontaktperson>,
    pub har_sentral_godkjenning: Option<Lenient<bool>>,
}

/// A neighbour or other affected party notified about the application
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct BeroertPart {
    pub partstype: Option<Kode>,
    pub navn: Option<String>,
    pub organisasjonsnummer: Option<String>,
    pub adresse: Option<Adresse>,
    pub gjelder_eiendom: Option<Eiendom>,
    pub er_varslet: Option<Lenient<bool>>,
}
