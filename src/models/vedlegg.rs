//! Attachments

use crate::FromRecord;
use crate::models::kode::Kode;

#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Vedlegg {
    pub vedleggstype: Option<Kode>,
    pub filnavn: Option<String>,
    pub versjonsnummer: Option<String>,
    pub versjonsdato: Option<String>,
}
