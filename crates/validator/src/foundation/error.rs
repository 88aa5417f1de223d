//! Error type for configuration and lookup mistakes.
//!
//! A value that fails a rule is never an error: the rule returns `false`
//! and the evaluator records it in the summary. The variants below cover
//! mistakes in the rule lists, schemas and form models handed to the
//! library, which callers are expected to fix rather than display.

/// Error type for rule resolution, evaluation and form lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A rule spec names a rule that is not registered.
    #[error("unknown validation rule `{name}`")]
    UnknownRule { name: String },

    /// A `max`/`min` limit could not be normalised to a number.
    #[error("invalid limit for rule `{rule}`: `{limit}` is not a number")]
    InvalidLimit { rule: String, limit: String },

    /// A `pattern` rule source is not a valid regular expression.
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A declarative rule list is not a JSON array.
    #[error("invalid rule list: {reason}")]
    InvalidRuleList { reason: String },

    /// The form model has no entry with the given name.
    #[error("form not found: `{name}`")]
    FormNotFound { name: String },

    /// The form entry (or schema) has no field with the given name.
    #[error("field `{field}` not found in form `{form}`")]
    FieldNotFound { form: String, field: String },

    /// A form schema could not be deserialised.
    #[error("invalid form schema: {reason}")]
    Schema { reason: String },
}

impl Error {
    /// Broad error category for grouping in logs.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::UnknownRule { .. } | Self::InvalidLimit { .. } | Self::InvalidPattern { .. } => {
                "rule"
            }
            Self::InvalidRuleList { .. } | Self::Schema { .. } => "config",
            Self::FormNotFound { .. } | Self::FieldNotFound { .. } => "lookup",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::UnknownRule { .. } => "RULE_UNKNOWN",
            Self::InvalidLimit { .. } => "RULE_INVALID_LIMIT",
            Self::InvalidPattern { .. } => "RULE_INVALID_PATTERN",
            Self::InvalidRuleList { .. } => "CONFIG_INVALID_RULES",
            Self::Schema { .. } => "CONFIG_INVALID_SCHEMA",
            Self::FormNotFound { .. } => "FORM_NOT_FOUND",
            Self::FieldNotFound { .. } => "FIELD_NOT_FOUND",
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Schema {
            reason: error.to_string(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
