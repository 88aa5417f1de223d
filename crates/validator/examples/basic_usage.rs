//! Basic usage example for form-validator
//!
//! Run with `RUST_LOG=form_validator=trace` to see each rule evaluation.

use form_validator::prelude::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // A single field scored against a rule list
    let rules = parse_rules(&json!(["required", {"min": 3}, {"max": 12}, "alphaNumeric"]))?;
    for input in ["alice42", "al", "", "bob!"] {
        let result = evaluate(&input.into(), &rules)?;
        println!("{input:?}: valid={} summary={:?}", result.valid, result.summary);
    }

    // A whole form driven by a schema
    let schema = FormSchema::from_json(json!({
        "name": "signup",
        "fields": {
            "email": ["required", "email"],
            "fullName": ["required", "name"]
        }
    }))?
    .with_inline("email", "notReserved", |value| {
        value.as_text().is_some_and(|text| !text.ends_with("@example.invalid"))
    });

    let mut model = FormModel::new();
    schema.register(&mut model);
    println!("untouched form submittable: {}", is_form_valid(&model, "signup")?);

    let form = model.form_mut("signup")?;
    schema.validate_field(form, "email", &"ada@example.invalid".into())?;
    schema.validate_field(form, "fullName", &"Ada Lovelace".into())?;

    let form = model.form("signup")?;
    println!(
        "submittable: {} (invalid: {:?})",
        is_form_valid(&model, "signup")?,
        form.invalid_fields().collect::<Vec<_>>()
    );

    Ok(())
}
