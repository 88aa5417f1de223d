//! # form-validator
//!
//! Declarative validation for input components: a fixed registry of
//! named rules, an evaluator that scores a value against an ordered rule
//! list, and an aggregator that decides whether a form can be submitted.
//!
//! ## Quick Start
//!
//! ```rust
//! use form_validator::prelude::*;
//!
//! let rules = parse_rules(&serde_json::json!(["required", {"max": 8}, "alphaNumeric"])).unwrap();
//!
//! let result = evaluate(&"alice42".into(), &rules).unwrap();
//! assert!(result.valid);
//!
//! let result = evaluate(&"".into(), &rules).unwrap();
//! assert!(!result.valid);
//! assert_eq!(result.summary.len(), 1); // stopped at `required`
//! ```
//!
//! ## Built-in Rules
//!
//! `required`, `email`, `max`, `min`, `equals`, `number`, `pattern`,
//! `alpha`, `alphaNumeric` and `name`; see [`rules::RuleName`]. Anything
//! else is expressed as an inline predicate with [`rules::RuleSpec::inline`].
//!
//! ## Errors
//!
//! Values that do not fit a rule fail it. Mistakes in the configuration
//! (unknown rule names, bad limits, bad patterns, missing forms) are
//! returned as [`Error`].

pub mod evaluator;
pub mod form;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rules;
pub mod schema;
pub mod validators;

pub use evaluator::{ValidationResult, ValidationSummary, evaluate, validate_input};
pub use form::{FieldEntry, FormEntry, FormModel, is_form_valid, validate_form};
pub use foundation::{Error, InputValue, Result};
pub use rules::{Rule, RuleName, RuleSpec};
pub use schema::FormSchema;
