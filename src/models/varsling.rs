//! Neighbour notification

use crate::FromRecord;
use crate::record::Lenient;

#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Varsling {
    pub fritatt_fra_nabovarsling: Option<Lenient<bool>>,
    pub foreligger_merknader: Option<Lenient<bool>>,
    pub antall_merknader: Option<Lenient<i64>>,
    pub vurdering_av_merknader: Option<String>,
    pub soeknadens_hjemmeside: Option<String>,
    pub soeknad_sees_kontaktperson: Option<String>,
}
