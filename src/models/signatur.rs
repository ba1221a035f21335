//! Signature of the submission

use crate::FromRecord;

#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Signatur {
    pub signaturdato: Option<String>,
    pub signert_av: Option<String>,
    pub signert_paa_vegne_av: Option<String>,
}
