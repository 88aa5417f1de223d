//! Common imports for working with rule lists and forms.
//!
//! ```rust
//! use form_validator::prelude::*;
//! ```

pub use crate::evaluator::{ValidationResult, ValidationSummary, evaluate, validate_input};
pub use crate::form::{FieldEntry, FormEntry, FormModel, is_form_valid, validate_form};
pub use crate::foundation::{Check, DateBound, DateRange, Error, InlineRule, InputValue};
pub use crate::rules::json::{parse_rules, parse_rules_str};
pub use crate::rules::{Rule, RuleName, RuleSpec};
pub use crate::schema::FormSchema;
pub use crate::validators::Limit;
