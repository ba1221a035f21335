//! Tests for the FromRecord derive macro helpers
//!
//! The derive itself is exercised by the domain models of the main crate;
//! these tests cover type inspection and key naming.

use syn::{Type, parse_quote};

use crate::utils::{Extraction, camel_case, extraction_for, option_inner_type};

#[test]
fn test_camel_case_keys() {
    assert_eq!(camel_case("postnr"), "postnr");
    assert_eq!(camel_case("kommunens_saksnummer"), "kommunensSaksnummer");
    assert_eq!(camel_case("er_tiltaket_i_samsvar_med_plan"), "erTiltaketISamsvarMedPlan");
    assert_eq!(camel_case("r#type"), "type");
    assert_eq!(camel_case("_intern"), "intern");
}

#[test]
fn test_option_detection() {
    let optional: Type = parse_quote!(Option<String>);
    let qualified: Type = parse_quote!(std::option::Option<Kode>);
    let required: Type = parse_quote!(String);

    let string: Type = parse_quote!(String);
    let inner: Type = parse_quote!(Kode);
    assert_eq!(option_inner_type(&optional), Some(&string));
    assert_eq!(option_inner_type(&qualified), Some(&inner));
    assert_eq!(option_inner_type(&required), None);
}

#[test]
fn test_extraction_by_type() {
    let cases: [(Type, Extraction); 7] = [
        (parse_quote!(String), Extraction::Scalar),
        (parse_quote!(f64), Extraction::Scalar),
        (parse_quote!(bool), Extraction::Scalar),
        (parse_quote!(serde_json::Value), Extraction::Scalar),
        (parse_quote!(Lenient<i64>), Extraction::Scalar),
        (parse_quote!(Vec<Ansvarsomraade>), Extraction::List),
        (parse_quote!(Adresse), Extraction::Nested),
    ];
    for (ty, expected) in cases {
        assert_eq!(extraction_for(&ty), expected);
    }
}
