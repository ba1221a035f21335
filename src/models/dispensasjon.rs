//! Exemptions applied for

use crate::FromRecord;
use crate::models::kode::Kode;

/// An application for exemption from a plan or regulation
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Dispensasjon {
    pub dispensasjonstype: Option<Kode>,
    pub beskrivelse: Option<String>,
    pub begrunnelse: Option<String>,
}
