//! Properties the application concerns

use crate::FromRecord;
use crate::models::adresse::EiendommensAdresse;
use crate::presence::HasValue;

/// Cadastral identification of a property
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Eiendomsidentifikasjon {
    pub kommunenummer: Option<String>,
    pub gaardsnummer: Option<String>,
    pub bruksnummer: Option<String>,
    pub festenummer: Option<String>,
    pub seksjonsnummer: Option<String>,
}

/// A property ("eiendom/byggested")
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Eiendom {
    pub eiendomsidentifikasjon: Option<Eiendomsidentifikasjon>,
    pub adresse: Option<EiendommensAdresse>,
    pub bygningsnummer: Option<String>,
    pub bolignummer: Option<String>,
    /// Serialized as `null` when absent
    #[record(keep_null)]
    pub kommunenavn: Option<String>,
}

impl Eiendom {
    /// Whether the property can be shown as a table row: it needs an address
    /// or an identification with content
    #[must_use]
    pub fn has_row_content(&self) -> bool {
        self.adresse.has_value() || self.eiendomsidentifikasjon.has_value()
    }
}
