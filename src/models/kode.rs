//! Code-list values

use crate::FromRecord;

/// A value from a code list, e.g. a party type or a road type
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Kode {
    pub kodeverdi: Option<String>,
    pub kodebeskrivelse: Option<String>,
}

impl Kode {
    /// The code value, when it is not empty
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.kodeverdi.as_deref().filter(|code| !code.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presence::HasValue;
    use crate::record::FromRecord;
    use serde_json::json;

    #[test]
    fn test_copy_scalars() {
        let kode = Kode::from_record(
            &json!({"kodeverdi": "RA", "kodebeskrivelse": "Rammetillatelse", "annet": 1}),
            None,
        );
        assert_eq!(kode.code(), Some("RA"));
        assert_eq!(kode.kodebeskrivelse.as_deref(), Some("Rammetillatelse"));
        assert_eq!(Kode::FIELDS, &["kodeverdi", "kodebeskrivelse"]);
    }

    #[test]
    fn test_presence() {
        assert!(!Kode::default().has_value());
        assert!(!Kode::from_record(&json!({"kodeverdi": ""}), None).has_value());
        assert!(Kode::from_record(&json!({"kodeverdi": "0"}), None).has_value());
    }

    #[test]
    fn test_serialization_skips_absent_fields() {
        let kode = Kode::from_record(&json!({"kodeverdi": "A"}), None);
        assert_eq!(serde_json::to_value(kode).unwrap(), json!({"kodeverdi": "A"}));
    }
}
