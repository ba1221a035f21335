//! Checklist outcomes and the applicant's answers

use crate::FromRecord;
use crate::models::kode::Kode;
use crate::models::vedlegg::Vedlegg;
use crate::record::Lenient;

/// The checklist point an outcome was triggered by
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Sjekkpunkt {
    pub sjekkpunkt_id: Option<String>,
    pub sjekkpunkt_eier: Option<String>,
}

/// An answer to a checklist outcome, grouped by outcome type when rendered
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct UtfallSvar {
    pub utfall_id: Option<String>,
    pub utfall_type: Option<Kode>,
    pub utloest_fra_sjekkpunkt: Option<Sjekkpunkt>,
    pub tema: Option<Kode>,
    pub tittel: Option<String>,
    pub beskrivelse: Option<String>,
    pub er_utfall_besvares_senere: Option<Lenient<bool>>,
    pub er_utfall_besvart: Option<Lenient<bool>>,
    pub kommentar: Option<String>,
    pub vedleggsliste: Option<Vec<Vedlegg>>,
}
