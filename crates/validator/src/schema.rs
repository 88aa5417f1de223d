//! Declarative per-field rule configuration.
//!
//! A schema names a form and lists the rules of each field, usually
//! loaded from JSON:
//!
//! ```rust
//! use form_validator::schema::FormSchema;
//!
//! let schema = FormSchema::from_json_str(r#"{
//!     "name": "signup",
//!     "fields": {
//!         "email": ["required", "email"],
//!         "nickname": [{"min": 3}, {"max": 20}]
//!     }
//! }"#).unwrap();
//!
//! let mut form = schema.new_entry();
//! let result = schema.validate_field(&mut form, "email", &"a@b.com".into()).unwrap();
//! assert!(result.valid);
//! assert!(form.is_valid());
//! ```

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::evaluator::{ValidationResult, evaluate};
use crate::form::{FieldEntry, FormEntry, FormModel};
use crate::foundation::{Error, InputValue, Result};
use crate::rules::{RuleSpec, json::parse_rules};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSchema {
    name: String,
    #[serde(default)]
    fields: IndexMap<String, Value>,
}

/// Rule lists for the fields of one form.
#[derive(Debug, Clone)]
pub struct FormSchema {
    name: String,
    fields: IndexMap<String, Vec<RuleSpec>>,
}

impl FormSchema {
    /// Creates a schema without fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Loads a schema from a JSON value.
    ///
    /// # Errors
    ///
    /// [`Error::Schema`] for a malformed document, and the rule list
    /// errors of [`parse_rules`].
    pub fn from_json(value: Value) -> Result<Self> {
        let raw: RawSchema = serde_json::from_value(value)?;
        let mut schema = Self::new(raw.name);
        for (field, rules) in raw.fields {
            let rules = parse_rules(&rules)?;
            schema.fields.insert(field, rules);
        }
        Ok(schema)
    }

    /// Loads a schema from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::from_json(serde_json::from_str(text)?)
    }

    /// Sets the rules of a field, replacing any previous list.
    pub fn with_field(mut self, field: impl Into<String>, rules: Vec<RuleSpec>) -> Self {
        self.fields.insert(field.into(), rules);
        self
    }

    /// Appends an inline predicate to a field's rules, adding the field if
    /// needed.
    pub fn with_inline<F>(
        mut self,
        field: impl Into<String>,
        name: impl Into<String>,
        predicate: F,
    ) -> Self
    where
        F: Fn(&InputValue) -> bool + Send + Sync + 'static,
    {
        self.fields
            .entry(field.into())
            .or_default()
            .push(RuleSpec::inline(name, predicate));
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rules of a field, if the schema declares it.
    #[must_use]
    pub fn rules(&self, field: &str) -> Option<&[RuleSpec]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Declared field names, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// A form entry with every declared field pending.
    #[must_use]
    pub fn new_entry(&self) -> FormEntry {
        self.field_names()
            .fold(FormEntry::new(), |form, field| form.with_field(field, FieldEntry::pending()))
    }

    /// Adds a fresh entry for this form to a model, replacing any previous
    /// one.
    pub fn register(&self, model: &mut FormModel) {
        model.insert(self.name.clone(), self.new_entry());
    }

    /// Evaluates a field's rules, records the result on `form` and
    /// returns it.
    ///
    /// # Errors
    ///
    /// [`Error::FieldNotFound`] for a field the schema does not declare,
    /// and any evaluation error.
    pub fn validate_field(
        &self,
        form: &mut FormEntry,
        field: &str,
        value: &InputValue,
    ) -> Result<ValidationResult> {
        let rules = self.rules(field).ok_or_else(|| Error::FieldNotFound {
            form: self.name.clone(),
            field: field.to_owned(),
        })?;

        let result = evaluate(value, rules)?;
        form.fields
            .entry(field.to_owned())
            .or_default()
            .record(&result);
        Ok(result)
    }
}
