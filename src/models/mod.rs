//! Domain transformers for building-permit applications
//!
//! Each type is a typed, optional-field projection of one concept in the
//! application data. Types are derived with `FromRecord`, so every field is
//! copied from the camelCase raw key, nested objects are only built when the
//! raw sub-object is present, and an absent list stays distinct from an
//! empty one.

pub mod adresse;
pub mod ansvarsrett;
pub mod arbeidsplasser;
pub mod dispensasjon;
pub mod eiendom;
pub mod kode;
pub mod metadata;
pub mod part;
pub mod rammebetingelser;
pub mod signatur;
pub mod soeknad;
pub mod tiltak;
pub mod utfall;
pub mod varsling;
pub mod vedlegg;

// Re-export commonly used types
pub use adresse::{Adresse, EiendommensAdresse};
pub use ansvarsrett::{
    Ansvarsomraade, AnsvarsomraadeRow, Ansvarsrett, Erklaeringer, Gjennomfoeringsplan,
    PlanlagtAnsvarsomraade,
};
pub use arbeidsplasser::Arbeidsplasser;
pub use dispensasjon::Dispensasjon;
pub use eiendom::{Eiendom, Eiendomsidentifikasjon};
pub use kode::Kode;
pub use metadata::{KommunensSaksnummer, Metadata};
pub use part::{BeroertPart, Foretak, Kontaktperson, Part};
pub use rammebetingelser::{
    Adkomst, AnnenPlan, Arealdisponering, Avloep, Bebyggelse, GenerelleVilkaar, GjeldendePlan,
    GradAvUtnytting, KravTilByggegrunn, Kulturminner, Loefteinnretninger, Plan, Plassering,
    Rammebetingelser, Tomteareal, Vannforsyning,
};
pub use signatur::Signatur;
pub use soeknad::Soeknad;
pub use tiltak::{
    BeskrivelseAvTiltak, Bruk, Bruksenhet, Bygningsopplysninger, Energiforsyning, Etasje,
};
pub use utfall::{Sjekkpunkt, UtfallSvar};
pub use varsling::Varsling;
pub use vedlegg::Vedlegg;
