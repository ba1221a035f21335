//! Workplaces affected by the project

use crate::FromRecord;
use crate::record::Lenient;

#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Arbeidsplasser {
    pub framtidige: Option<Lenient<bool>>,
    pub faste: Option<Lenient<bool>>,
    pub midlertidige: Option<Lenient<bool>>,
    pub antall_ansatte: Option<Lenient<i64>>,
    pub eksisterende: Option<Lenient<bool>>,
    pub utleie_bygg: Option<Lenient<bool>>,
    pub antall_virksomheter: Option<Lenient<i64>>,
    pub beskrivelse: Option<String>,
}
