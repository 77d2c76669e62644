use card_mail::{
    card_mail::RenderError,
    domain::{NotificationField, OrderNotificationRecord, RecordError},
};
use claims::assert_err;

use crate::helpers::{example_record, spawn_renderer};

fn assert_missing(result: Result<String, RenderError>, field: NotificationField) {
    match result {
        Err(RenderError::InvalidRecord(RecordError::MissingField(missing))) => {
            assert_eq!(missing, field)
        }
        other => panic!("expected missing `{field}`, got {other:?}"),
    }
}

#[test]
fn each_missing_field_fails_the_render() {
    let renderer = spawn_renderer();

    for field in [
        NotificationField::Name,
        NotificationField::Card,
        NotificationField::WebUrl,
        NotificationField::WebName,
    ] {
        let mut record = example_record();
        match field {
            NotificationField::Name => record.name = None,
            NotificationField::Card => record.card = None,
            NotificationField::WebUrl => record.web_url = None,
            NotificationField::WebName => record.web_name = None,
        }

        assert_missing(renderer.render(record), field);
    }
}

#[test]
fn keys_absent_from_a_json_map_fail_the_render() {
    let renderer = spawn_renderer();
    let test_cases = vec![
        (
            serde_json::json!({"name": "P", "web_url": "https://shop.example", "web_name": "S"}),
            NotificationField::Card,
        ),
        (
            serde_json::json!({"card": "C", "web_url": "https://shop.example", "web_name": "S"}),
            NotificationField::Name,
        ),
        (
            serde_json::json!({"name": "P", "card": "C", "web_name": "S"}),
            NotificationField::WebUrl,
        ),
        (
            serde_json::json!({"name": "P", "card": "C", "web_url": "https://shop.example"}),
            NotificationField::WebName,
        ),
    ];

    for (body, field) in test_cases {
        let record: OrderNotificationRecord = serde_json::from_value(body).unwrap();
        assert_missing(renderer.render(record), field);
    }
}

#[test]
fn empty_values_are_treated_as_missing() {
    let renderer = spawn_renderer();
    let mut record = example_record();
    record.web_name = Some(String::new());

    assert_missing(renderer.render(record), NotificationField::WebName);
}

#[test]
fn a_non_http_shop_url_is_rejected() {
    let renderer = spawn_renderer();
    let mut record = example_record();
    record.web_url = Some("javascript:alert(1)".into());

    let result = renderer.render(record);

    assert!(matches!(
        result,
        Err(RenderError::InvalidRecord(RecordError::InvalidField {
            field: NotificationField::WebUrl,
            ..
        }))
    ));
}

#[test]
fn text_rendering_reports_missing_fields_too() {
    let renderer = spawn_renderer();
    let mut record = example_record();
    record.card = None;

    assert_err!(renderer.render_text(record));
}

#[test]
fn error_debug_output_describes_the_field() {
    let renderer = spawn_renderer();
    let mut record = example_record();
    record.card = None;

    let err = renderer.render(record).unwrap_err();

    assert!(format!("{err:?}").contains("`card`"));
    assert_eq!(err.to_string(), "Missing required field `card`.");
}
