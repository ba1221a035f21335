//! Postal and property addresses

use crate::FromRecord;
use crate::format::PostalAddress;

/// A postal address of a party
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Adresse {
    pub adresselinje1: Option<String>,
    pub adresselinje2: Option<String>,
    pub adresselinje3: Option<String>,
    pub postnr: Option<String>,
    pub poststed: Option<String>,
    pub landkode: Option<String>,
}

/// The address of a property, which may be given as street parts
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct EiendommensAdresse {
    pub adresselinje1: Option<String>,
    pub adresselinje2: Option<String>,
    pub adresselinje3: Option<String>,
    pub postnr: Option<String>,
    pub poststed: Option<String>,
    pub landkode: Option<String>,
    pub gatenavn: Option<String>,
    pub husnr: Option<String>,
    pub bokstav: Option<String>,
}

impl PostalAddress for Adresse {
    fn address_lines(&self) -> [Option<&str>; 3] {
        [
            self.adresselinje1.as_deref(),
            self.adresselinje2.as_deref(),
            self.adresselinje3.as_deref(),
        ]
    }

    fn postnr(&self) -> Option<&str> {
        self.postnr.as_deref()
    }

    fn poststed(&self) -> Option<&str> {
        self.poststed.as_deref()
    }
}

impl PostalAddress for EiendommensAdresse {
    fn address_lines(&self) -> [Option<&str>; 3] {
        [
            self.adresselinje1.as_deref(),
            self.adresselinje2.as_deref(),
            self.adresselinje3.as_deref(),
        ]
    }

    fn street(&self) -> Option<String> {
        let gatenavn = self.gatenavn.as_deref().filter(|name| !name.is_empty())?;
        let number = [self.husnr.as_deref(), self.bokstav.as_deref()]
            .into_iter()
            .flatten()
            .collect::<String>();
        Some(if number.is_empty() {
            gatenavn.to_string()
        } else {
            format!("{gatenavn} {number}")
        })
    }

    fn postnr(&self) -> Option<&str> {
        self.postnr.as_deref()
    }

    fn poststed(&self) -> Option<&str> {
        self.poststed.as_deref()
    }
}
