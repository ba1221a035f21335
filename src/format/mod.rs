//! Text formatters used by the field components
//!
//! Formatters turn domain objects into the single display string a field
//! shows. Absent parts are skipped; when nothing is present the result is an
//! empty string, which the emptiness decision then treats as empty.

use std::fmt::Write;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::Kode;
use crate::presence::HasValue;

/// An address that can be printed as postal lines
pub trait PostalAddress {
    /// Free-form address lines, in order
    fn address_lines(&self) -> [Option<&str>; 3];

    /// Street name, house number and letter, for addresses given in parts
    fn street(&self) -> Option<String> {
        None
    }

    fn postnr(&self) -> Option<&str>;

    fn poststed(&self) -> Option<&str>;
}

/// Format an address as lines followed by `"<postnr> <poststed>"`.
///
/// The street parts stand in for the first line when it is absent.
#[must_use]
pub fn format_address(address: &impl PostalAddress, separator: &str) -> String {
    let [first, second, third] = address.address_lines();
    let first = first
        .filter(|line| line.has_value())
        .map(str::to_string)
        .or_else(|| address.street());

    let postal = join_present([address.postnr(), address.poststed()], " ");
    let postal = Some(postal).filter(|line| !line.is_empty());

    [first.as_deref(), second, third, postal.as_deref()]
        .into_iter()
        .flatten()
        .filter(|line| line.has_value())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Join the phone numbers that are present
#[must_use]
pub fn format_phone_numbers(numbers: &[Option<&str>], separator: &str) -> String {
    join_present(numbers.iter().copied(), separator)
}

/// Format a date for display.
///
/// Accepts RFC 3339 date-times, naive date-times and plain `YYYY-MM-DD`
/// dates. Anything else, or an invalid `pattern`, returns `raw` unchanged.
#[must_use]
pub fn format_date(raw: &str, pattern: &str) -> String {
    let trimmed = raw.trim();
    let date = DateTime::parse_from_rfc3339(trimmed)
        .map(|date_time| date_time.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f").map(|d| d.date()))
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"));

    let Ok(date) = date else {
        log::debug!("Leaving unparseable date '{raw}' as is");
        return raw.to_string();
    };

    let mut formatted = String::new();
    if write!(formatted, "{}", date.format(pattern)).is_err() {
        log::warn!("Invalid date format pattern '{pattern}'");
        return raw.to_string();
    }
    formatted
}

/// Format the municipality's case number as `"<year>/<sequence>"`
#[must_use]
pub fn format_kommunens_saksnummer(saksaar: Option<&str>, sakssekvensnummer: Option<&str>) -> String {
    join_present([saksaar, sakssekvensnummer], "/")
}

/// The description of a code, falling back to the code value
#[must_use]
pub fn format_kode(kode: &Kode) -> Option<String> {
    [kode.kodebeskrivelse.as_deref(), kode.kodeverdi.as_deref()]
        .into_iter()
        .flatten()
        .find(|text| text.has_value())
        .map(str::to_string)
}

fn join_present<'a>(parts: impl IntoIterator<Item = Option<&'a str>>, separator: &str) -> String {
    parts
        .into_iter()
        .flatten()
        .filter(|part| part.has_value())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Adresse, EiendommensAdresse};
    use crate::record::FromRecord;
    use serde_json::json;

    #[test]
    fn test_format_address() {
        let full = Adresse::from_record(
            &json!({"adresselinje1": "Storgata 1", "postnr": "0150", "poststed": "Oslo"}),
            None,
        );
        assert_eq!(format_address(&full, "\n"), "Storgata 1\n0150 Oslo");

        let postal_only = Adresse::from_record(&json!({"postnr": "0150", "poststed": "Oslo"}), None);
        assert_eq!(format_address(&postal_only, "\n"), "0150 Oslo");

        assert_eq!(format_address(&Adresse::default(), "\n"), "");
    }

    #[test]
    fn test_format_address_from_street_parts() {
        let adresse = EiendommensAdresse::from_record(
            &json!({"gatenavn": "Storgata", "husnr": "1", "bokstav": "B", "postnr": "0150"}),
            None,
        );
        assert_eq!(format_address(&adresse, ", "), "Storgata 1B, 0150");

        let with_line = EiendommensAdresse::from_record(
            &json!({"adresselinje1": "Storgata 1", "gatenavn": "Annen gate"}),
            None,
        );
        assert_eq!(format_address(&with_line, "\n"), "Storgata 1");
    }

    #[test]
    fn test_format_phone_numbers() {
        assert_eq!(
            format_phone_numbers(&[Some("12345678"), Some("")], "\n"),
            "12345678"
        );
        assert_eq!(
            format_phone_numbers(&[Some("12345678"), Some("87654321")], "\n"),
            "12345678\n87654321"
        );
        assert_eq!(format_phone_numbers(&[None, None], "\n"), "");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-01", "%d.%m.%Y"), "01.03.2024");
        assert_eq!(format_date("2024-03-01T10:15:00+01:00", "%d.%m.%Y"), "01.03.2024");
        assert_eq!(format_date("2024-03-01T10:15:00", "%d.%m.%Y"), "01.03.2024");
        assert_eq!(format_date("snart", "%d.%m.%Y"), "snart");
    }

    #[test]
    fn test_format_kommunens_saksnummer() {
        assert_eq!(format_kommunens_saksnummer(Some("2024"), Some("123")), "2024/123");
        assert_eq!(format_kommunens_saksnummer(None, Some("123")), "123");
        assert_eq!(format_kommunens_saksnummer(None, None), "");
    }

    #[test]
    fn test_format_kode() {
        let kode = Kode {
            kodeverdi: Some("RA".to_string()),
            kodebeskrivelse: Some("Rammetillatelse".to_string()),
        };
        assert_eq!(format_kode(&kode).as_deref(), Some("Rammetillatelse"));
        let kode = Kode {
            kodeverdi: Some("RA".to_string()),
            kodebeskrivelse: Some(String::new()),
        };
        assert_eq!(format_kode(&kode).as_deref(), Some("RA"));
        assert_eq!(format_kode(&Kode::default()), None);
    }
}
