//! Sample application data
//!
//! Raw records shaped like the data an applicant submits, for use in tests.

use serde_json::{Value, json};

/// Properties of a building site: one with an address, one identified by
/// cadastral numbers only and one with neither
#[must_use]
pub fn sample_eiendommer() -> Value {
    json!([
        {
            "adresse": {
                "adresselinje1": "Storgata 1",
                "postnr": "3800",
                "poststed": "Bø i Telemark"
            },
            "eiendomsidentifikasjon": {
                "kommunenummer": "3817",
                "gaardsnummer": "12",
                "bruksnummer": "7"
            },
            "bygningsnummer": "80466985",
            "kommunenavn": "Midt-Telemark"
        },
        {
            "eiendomsidentifikasjon": {
                "kommunenummer": "3817",
                "gaardsnummer": "12",
                "bruksnummer": "8",
                "festenummer": "0",
                "seksjonsnummer": "0"
            }
        },
        {
            "bolignummer": "H0101"
        }
    ])
}

/// Outcome answers of two outcome types, one without a type
#[must_use]
pub fn sample_utfall_svar() -> Value {
    json!([
        {
            "utfallId": "1",
            "utfallType": {"kodeverdi": "MNG", "kodebeskrivelse": "Mangel"},
            "tittel": "Mangler situasjonsplan",
            "erUtfallBesvart": true,
            "vedleggsliste": [{"filnavn": "situasjonsplan.pdf"}]
        },
        {
            "utfallId": "2",
            "utfallType": {"kodeverdi": "SVV", "kodebeskrivelse": "Svar på varsel"},
            "tittel": "Merknad fra nabo",
            "erUtfallBesvaresSenere": true
        },
        {
            "utfallId": "3",
            "utfallType": {"kodeverdi": "MNG", "kodebeskrivelse": "Mangel"},
            "tittel": "Mangler fasadetegning",
            "vedleggsliste": []
        },
        {
            "utfallId": "4",
            "tittel": "Uten utfallstype"
        }
    ])
}

/// Area summary with built area only
#[must_use]
pub fn sample_arealdisponering() -> Value {
    json!({
        "arealBebyggelseEksisterende": 140.5,
        "arealBebyggelseNytt": 32,
        "arealSumByggesak": 172.5,
        "parkeringsarealTerreng": 0
    })
}
