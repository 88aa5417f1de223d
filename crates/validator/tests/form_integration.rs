//! End-to-end flow: schema, field evaluation, form aggregation.

use form_validator::prelude::*;
use serde_json::json;

fn contact_schema() -> FormSchema {
    FormSchema::from_json(json!({
        "name": "contact",
        "fields": {
            "fullName": ["required", "name"],
            "email": ["required", "email"],
            "stay": [{"min": 1}, {"max": 14}],
            "dates": ["required"]
        }
    }))
    .unwrap()
}

#[test]
fn untouched_form_is_submittable() {
    let schema = contact_schema();
    let mut model = FormModel::new();
    schema.register(&mut model);
    assert!(is_form_valid(&model, "contact").unwrap());
}

#[test]
fn one_bad_field_blocks_submission() {
    let schema = contact_schema();
    let mut model = FormModel::new();
    schema.register(&mut model);

    let form = model.form_mut("contact").unwrap();
    schema
        .validate_field(form, "fullName", &"Grace Hopper".into())
        .unwrap();
    schema
        .validate_field(form, "email", &"grace@navy.mil".into())
        .unwrap();
    let stay = schema.validate_field(form, "stay", &21.into()).unwrap();
    assert!(!stay.valid);

    assert!(!is_form_valid(&model, "contact").unwrap());
    assert_eq!(
        model
            .form("contact")
            .unwrap()
            .invalid_fields()
            .collect::<Vec<_>>(),
        ["stay"]
    );
}

#[test]
fn date_range_fields() {
    let schema = contact_schema();
    let mut form = schema.new_entry();

    let open = InputValue::from_json(&json!({"startDate": "2024-05-01", "endDate": ""}));
    assert!(!schema.validate_field(&mut form, "dates", &open).unwrap().valid);

    let closed =
        InputValue::from_json(&json!({"startDate": "2024-05-01", "endDate": "2024-05-03"}));
    assert!(schema.validate_field(&mut form, "dates", &closed).unwrap().valid);
    assert!(form.is_valid());
}

#[test]
fn model_round_trips_with_summaries() {
    let schema = contact_schema();
    let mut model = FormModel::new();
    schema.register(&mut model);
    let form = model.form_mut("contact").unwrap();
    schema.validate_field(form, "email", &"nope".into()).unwrap();

    let json = serde_json::to_value(&model).unwrap();
    assert_eq!(
        json["contact"]["fields"]["email"],
        json!({"valid": false, "summary": {"required": true, "email": false}})
    );
    assert_eq!(json["contact"]["fields"]["stay"], json!({"valid": null}));

    let back: FormModel = serde_json::from_value(json).unwrap();
    assert_eq!(back, model);
    assert!(!validate_form(&back, "contact").unwrap());
}

#[test]
fn unknown_form_is_an_error() {
    let err = is_form_valid(&FormModel::new(), "contact").unwrap_err();
    assert_eq!(err.code(), "FORM_NOT_FOUND");
}
