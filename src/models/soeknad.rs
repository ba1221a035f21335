//! A complete application document
//!
//! [`Soeknad`] reads a whole submission at once. Components render one
//! section each, so this root is mostly used by hosts that want to hand out
//! sub-objects of an already parsed application.

use crate::FromRecord;
use crate::models::ansvarsrett::{Ansvarsrett, Gjennomfoeringsplan};
use crate::models::arbeidsplasser::Arbeidsplasser;
use crate::models::dispensasjon::Dispensasjon;
use crate::models::eiendom::Eiendom;
use crate::models::metadata::{KommunensSaksnummer, Metadata};
use crate::models::part::{BeroertPart, Part};
use crate::models::rammebetingelser::Rammebetingelser;
use crate::models::signatur::Signatur;
use crate::models::tiltak::BeskrivelseAvTiltak;
use crate::models::utfall::UtfallSvar;
use crate::models::varsling::Varsling;
use crate::models::vedlegg::Vedlegg;

#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Soeknad {
    pub metadata: Option<Metadata>,
    pub kommunens_saksnummer: Option<KommunensSaksnummer>,
    pub eiendom_byggested: Option<Vec<Eiendom>>,
    pub tiltakshaver: Option<Part>,
    pub ansvarlig_soeker: Option<Part>,
    pub beskrivelse_av_tiltak: Option<BeskrivelseAvTiltak>,
    pub rammebetingelser: Option<Rammebetingelser>,
    pub dispensasjon: Option<Vec<Dispensasjon>>,
    pub varsling: Option<Varsling>,
    pub arbeidsplasser: Option<Arbeidsplasser>,
    pub ansvarsrett: Option<Ansvarsrett>,
    pub gjennomfoeringsplan: Option<Gjennomfoeringsplan>,
    pub beroerte_parter: Option<Vec<BeroertPart>>,
    pub utfall_besvarelse: Option<Vec<UtfallSvar>>,
    pub vedlegg: Option<Vec<Vedlegg>>,
    pub signatur: Option<Signatur>,
}
