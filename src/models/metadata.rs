//! Submission metadata

use crate::FromRecord;
use crate::models::kode::Kode;
use crate::record::Lenient;

/// The municipality's case number, year and sequence number
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct KommunensSaksnummer {
    pub saksaar: Option<String>,
    pub sakssekvensnummer: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Metadata {
    pub fra_sluttbrukersystem: Option<String>,
    pub ftb_id: Option<String>,
    pub prosjektnavn: Option<String>,
    pub prosjektnr: Option<String>,
    pub foretrukket_spraak: Option<Kode>,
    pub hovedinnsendingsnummer: Option<String>,
    pub klart_for_signering_fra_sluttbrukersystem: Option<Lenient<bool>>,
}
