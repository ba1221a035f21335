//! Tests for resource-binding resolution and validation

use byggesak_view::components::Component;
use byggesak_view::components::group::{AVLOEP, PartGroup};
use byggesak_view::resources::SubKey;
use byggesak_view::utils::test::{props, resources_covering};
use byggesak_view::{RenderContext, ValidationMessages, has_missing_text_resources};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_override_wins_per_sub_key() {
    let bindings = AVLOEP.resource_bindings(&props(json!({
        "resourceBindings": {
            "avloep": {"title": "egen.avloep.tittel", "emptyFieldText": ""},
            "utslippstillatelse": {"falseText": "egen.nei"}
        }
    })));

    assert_eq!(bindings.key("avloep", SubKey::Title), Some("egen.avloep.tittel"));
    // An empty override falls back to the default
    assert_eq!(
        bindings.key("avloep", SubKey::EmptyFieldText),
        Some("resource.rammebetingelser.avloep.emptyFieldText")
    );
    assert_eq!(bindings.key("utslippstillatelse", SubKey::FalseText), Some("egen.nei"));
    assert_eq!(
        bindings.key("utslippstillatelse", SubKey::TrueText),
        Some("resource.trueText.default")
    );
    assert_eq!(
        bindings.key("utslippstillatelse", SubKey::Title),
        Some("resource.rammebetingelser.avloep.utslippstillatelse.title")
    );
}

#[test]
fn test_gates_accept_string_flags() {
    for hide_title in [json!(true), json!("true")] {
        let bindings = AVLOEP.resource_bindings(&props(json!({"hideTitle": hide_title})));
        assert_eq!(bindings.key("avloep", SubKey::Title), None);
        assert!(bindings.key("avloep", SubKey::EmptyFieldText).is_some());
    }
    for shown in [json!(false), json!("false"), json!("TRUE"), json!(1)] {
        let bindings = AVLOEP.resource_bindings(&props(json!({"hideTitle": shown})));
        assert!(bindings.key("avloep", SubKey::Title).is_some());
    }

    let bindings = AVLOEP.resource_bindings(&props(json!({"hideTitle": "true", "hideIfEmpty": "true"})));
    assert_eq!(bindings.key("avloep", SubKey::Title), None);
    assert_eq!(bindings.key("avloep", SubKey::EmptyFieldText), None);
}

#[test]
fn test_degraded_mode_reports_every_key() {
    let props = props(json!({"partType": "tiltakshaver"}));
    let bindings = PartGroup.resource_bindings(&props);
    let missing = has_missing_text_resources(None, &bindings);
    assert_eq!(missing.len(), bindings.resource_keys().len());
    assert!(missing.contains(&"resource.tiltakshaver.title".to_string()));

    let view = PartGroup.render(&props, &RenderContext::without_resources());
    assert!(view.has_validation_messages);
}

#[test]
fn test_fully_covered_bindings_report_nothing() {
    let props = props(json!({"partType": "fakturamottaker"}));
    let resources = resources_covering(&PartGroup.resource_bindings(&props));
    let view = PartGroup.render(&props, &RenderContext::new(&resources));
    assert_eq!(view.validation_messages, ValidationMessages::Missing(vec![]));
    assert!(!view.has_validation_messages);
    assert_eq!(view.title(), Some("resource.fakturamottaker.title"));
}

#[test]
fn test_resolution_is_idempotent() {
    let props = props(json!({
        "resourceBindings": {"tilknytningstype": {"title": "egen.tittel"}},
        "hideIfEmpty": true
    }));
    let first = AVLOEP.resource_bindings(&props);
    let second = AVLOEP.resource_bindings(&props);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}
