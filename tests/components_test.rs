//! End-to-end render passes through the component orchestrators

use byggesak_view::components::Component;
use byggesak_view::components::field::{FieldAdresse, FieldTelefonnummer};
use byggesak_view::components::group::KONTAKTPERSON;
use byggesak_view::components::list::{EIENDOM_TABLE, UtfallSvarGroupList};
use byggesak_view::components::summation::SummationArealdisponering;
use byggesak_view::presence::any_path_has_value;
use byggesak_view::utils::test::{
    props, resources_covering, sample_arealdisponering, sample_eiendommer, sample_utfall_svar,
    test_config,
};
use byggesak_view::{RenderContext, ValidationMessages, ViewConfig, ViewData};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_address_field() {
    let ctx = RenderContext::without_resources().with_config(test_config());

    let view = FieldAdresse.render(
        &props(json!({"formData": {"adresselinje1": "Storgata 1", "postnr": "0150", "poststed": "Oslo"}})),
        &ctx,
    );
    assert!(!view.is_empty);
    assert_eq!(view.content().map(String::as_str), Some("Storgata 1\n0150 Oslo"));

    let view = FieldAdresse.render(&props(json!({"formData": {"postnr": "0150", "poststed": "Oslo"}})), &ctx);
    assert_eq!(view.content().map(String::as_str), Some("0150 Oslo"));

    let view = FieldAdresse.render(&props(json!({"formData": null})), &ctx);
    assert!(view.is_empty);
}

#[test]
fn test_configured_separators() {
    let config = ViewConfig {
        address_line_separator: ", ".to_string(),
        phone_separator: " / ".to_string(),
        ..test_config()
    };
    let ctx = RenderContext::without_resources().with_config(config);

    let view = FieldAdresse.render(
        &props(json!({"formData": {"adresselinje1": "Storgata 1", "postnr": "0150", "poststed": "Oslo"}})),
        &ctx,
    );
    assert_eq!(view.content().map(String::as_str), Some("Storgata 1, 0150 Oslo"));

    let view = FieldTelefonnummer.render(
        &props(json!({"formData": {"telefonnummer": "22 00 00 00", "mobilnummer": "900 00 000"}})),
        &ctx,
    );
    assert_eq!(view.content().map(String::as_str), Some("22 00 00 00 / 900 00 000"));
}

#[test]
fn test_validation_can_be_disabled() {
    let config = ViewConfig {
        validate_resources: false,
        ..test_config()
    };
    let ctx = RenderContext::without_resources().with_config(config);
    let view = KONTAKTPERSON.render(&props(json!({"formData": {"navn": "Kari"}})), &ctx);
    assert_eq!(view.validation_messages, ValidationMessages::Disabled);
    assert!(!view.has_validation_messages);

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["validationMessages"], json!(false));
}

#[test]
fn test_group_output_contract() {
    let bindings = KONTAKTPERSON.resource_bindings(&props(json!({})));
    let resources = resources_covering(&bindings);
    let ctx = RenderContext::new(&resources).with_config(test_config());

    let view = KONTAKTPERSON.render(
        &props(json!({"formData": {"navn": "Kari Nordmann", "epost": ""}})),
        &ctx,
    );
    assert_eq!(
        serde_json::to_value(&view).unwrap(),
        json!({
            "isEmpty": false,
            "validationMessages": [],
            "hasValidationMessages": false,
            "resourceBindings": {
                "kontaktperson": {
                    "title": "resource.kontaktperson.title",
                    "emptyFieldText": "resource.emptyFieldText.default"
                },
                "navn": {
                    "title": "resource.kontaktperson.navn.title",
                    "emptyFieldText": "resource.emptyFieldText.default"
                },
                "telefonnummer": {
                    "title": "resource.kontaktperson.telefonnummer.title",
                    "emptyFieldText": "resource.emptyFieldText.default"
                },
                "mobilnummer": {
                    "title": "resource.kontaktperson.mobilnummer.title",
                    "emptyFieldText": "resource.emptyFieldText.default"
                },
                "epost": {
                    "title": "resource.kontaktperson.epost.title",
                    "emptyFieldText": "resource.emptyFieldText.default"
                }
            },
            "resourceValues": {
                "title": "resource.kontaktperson.title",
                "data": {"navn": "Kari Nordmann", "epost": ""}
            }
        })
    );
}

#[test]
fn test_hidden_empty_state_has_no_data() {
    let ctx = RenderContext::without_resources().with_config(test_config());
    let view = KONTAKTPERSON.render(&props(json!({"hideIfEmpty": "true"})), &ctx);
    assert!(view.is_empty);
    assert_eq!(view.resource_values.data, ViewData::EmptyText(None));

    let json = serde_json::to_value(&view).unwrap();
    assert!(json["resourceValues"].get("data").is_none());
}

#[test]
fn test_summation_compound_emptiness() {
    let ctx = RenderContext::without_resources().with_config(test_config());
    let view = SummationArealdisponering.render(
        &props(json!({"formData": sample_arealdisponering()})),
        &ctx,
    );
    assert!(!view.is_empty);

    let json = serde_json::to_value(&view).unwrap();
    let summary = &json["resourceValues"]["data"];
    let sub_total_paths: &[&[&str]] = &[
        &["tomtearealet", "resourceValues", "data"],
        &["bebyggelsen", "resourceValues", "data"],
        &["gradAvUtnytting", "resourceValues", "data"],
    ];
    assert!(any_path_has_value(summary, sub_total_paths));
    assert_eq!(summary["tomtearealet"]["isEmpty"], json!(true));
    assert_eq!(summary["bebyggelsen"]["resourceValues"]["data"]["arealBebyggelseNytt"], json!(32.0));
}

#[test]
fn test_property_table_filters_rows() {
    let ctx = RenderContext::without_resources().with_config(test_config());
    let view = EIENDOM_TABLE.render(&props(json!({"formData": sample_eiendommer()})), &ctx);
    let rows = view.content().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].kommunenavn.as_deref(), Some("Midt-Telemark"));

    let json = serde_json::to_value(&view).unwrap();
    // Absent municipality names are kept as null
    assert_eq!(json["resourceValues"]["data"][1]["kommunenavn"], json!(null));
}

#[test]
fn test_outcome_answers_render_grouped() {
    let ctx = RenderContext::without_resources().with_config(test_config());
    let view = UtfallSvarGroupList.render(&props(json!({"formData": sample_utfall_svar()})), &ctx);
    let groups = view.content().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups["MNG"].len(), 2);
}
