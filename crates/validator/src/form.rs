//! Form-level aggregation of field validity.
//!
//! A field is tri-state: `None` until it has been validated, then
//! `Some(true)` or `Some(false)`. A form is valid unless one of its fields
//! is explicitly `Some(false)`, so untouched fields never block it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::evaluator::{ValidationResult, ValidationSummary};
use crate::foundation::{Error, Result};

/// Validity state of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldEntry {
    pub valid: Option<bool>,
    #[serde(default, skip_serializing_if = "ValidationSummary::is_empty")]
    pub summary: ValidationSummary,
}

impl FieldEntry {
    /// A field that has not been validated yet.
    #[must_use]
    pub fn pending() -> Self {
        Self::default()
    }

    /// A field with a known verdict and no summary.
    #[must_use]
    pub fn with_validity(valid: bool) -> Self {
        Self {
            valid: Some(valid),
            summary: ValidationSummary::new(),
        }
    }

    /// Stores an evaluation result on the field.
    pub fn record(&mut self, result: &ValidationResult) {
        self.valid = Some(result.valid);
        self.summary = result.summary.clone();
    }

    /// Returns the field to the not-yet-validated state.
    pub fn reset(&mut self) {
        *self = Self::pending();
    }

    /// `true` only for an explicit failure.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        self.valid == Some(false)
    }
}

impl From<ValidationResult> for FieldEntry {
    fn from(result: ValidationResult) -> Self {
        Self {
            valid: Some(result.valid),
            summary: result.summary,
        }
    }
}

/// The fields of one form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormEntry {
    #[serde(default)]
    pub fields: IndexMap<String, FieldEntry>,
}

impl FormEntry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a field.
    pub fn with_field(mut self, name: impl Into<String>, field: FieldEntry) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    /// `false` as soon as one field is explicitly invalid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.fields.values().any(FieldEntry::is_invalid)
    }

    /// Names of the explicitly invalid fields, in field order.
    pub fn invalid_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|(_, field)| field.is_invalid())
            .map(|(name, _)| name.as_str())
    }
}

/// Forms by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormModel {
    forms: IndexMap<String, FormEntry>,
}

impl FormModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a form.
    pub fn insert(&mut self, name: impl Into<String>, form: FormEntry) {
        self.forms.insert(name.into(), form);
    }

    /// Adds or replaces a form, builder style.
    pub fn with_form(mut self, name: impl Into<String>, form: FormEntry) -> Self {
        self.insert(name, form);
        self
    }

    /// Looks up a form.
    pub fn form(&self, name: &str) -> Result<&FormEntry> {
        self.forms.get(name).ok_or_else(|| Error::FormNotFound {
            name: name.to_owned(),
        })
    }

    /// Looks up a form for updating its fields.
    pub fn form_mut(&mut self, name: &str) -> Result<&mut FormEntry> {
        self.forms.get_mut(name).ok_or_else(|| Error::FormNotFound {
            name: name.to_owned(),
        })
    }

    /// Looks up one field of one form.
    pub fn field(&self, form: &str, field: &str) -> Result<&FieldEntry> {
        self.form(form)?
            .fields
            .get(field)
            .ok_or_else(|| Error::FieldNotFound {
                form: form.to_owned(),
                field: field.to_owned(),
            })
    }

    /// See [`is_form_valid`].
    pub fn is_valid(&self, form: &str) -> Result<bool> {
        is_form_valid(self, form)
    }
}

/// Decides whether the named form may be submitted.
///
/// Returns `false` at the first field whose validity is `Some(false)`;
/// fields that are `Some(true)` or still `None` pass.
///
/// # Errors
///
/// [`Error::FormNotFound`] when the model has no such form. A missing
/// form is a caller bug, never a silent `false`.
pub fn is_form_valid(model: &FormModel, form_name: &str) -> Result<bool> {
    let form = model.form(form_name)?;

    for (name, field) in &form.fields {
        if field.is_invalid() {
            tracing::debug!(form = form_name, field = %name, "form blocked by invalid field");
            return Ok(false);
        }
    }
    Ok(true)
}

/// Alias for [`is_form_valid`] under the name form orchestrators use.
pub fn validate_form(model: &FormModel, form_name: &str) -> Result<bool> {
    is_form_valid(model, form_name)
}
