//! Scores one value against an ordered rule list.
//!
//! Rules run in list order and evaluation stops at the first failing
//! rule. The summary therefore holds every rule up to and including the
//! first failure, and nothing after it: callers must not expect a
//! complete summary when `valid` is `false`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::foundation::{Check, InputValue, Result};
use crate::rules::RuleSpec;

/// Per-rule outcomes in evaluation order.
///
/// Recording a key twice overwrites the earlier outcome in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationSummary(IndexMap<String, bool>);

impl ValidationSummary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an outcome under `key`.
    pub fn record(&mut self, key: impl Into<String>, passed: bool) {
        self.0.insert(key.into(), passed);
    }

    /// Outcome recorded for `key`, if the rule ran.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<bool> {
        self.0.get(key).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates outcomes in recording order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(key, passed)| (key.as_str(), *passed))
    }

    /// Rule keys in recording order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// The first failing rule in recording order.
    #[must_use]
    pub fn first_failure(&self) -> Option<&str> {
        self.iter().find(|(_, passed)| !passed).map(|(key, _)| key)
    }

    /// `true` when no recorded rule failed (including the empty summary).
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.first_failure().is_none()
    }
}

impl<'a> IntoIterator for &'a ValidationSummary {
    type Item = (&'a String, &'a bool);
    type IntoIter = indexmap::map::Iter<'a, String, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The verdict of one evaluation together with its summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub summary: ValidationSummary,
}

impl ValidationResult {
    /// The result for an empty rule list.
    #[must_use]
    pub fn passed() -> Self {
        Self {
            valid: true,
            summary: ValidationSummary::new(),
        }
    }
}

/// Evaluates `value` against `rules`.
///
/// An empty list is valid with an empty summary. Otherwise each rule is
/// run in order and recorded under [`RuleSpec::key`]; the first `false`
/// stops evaluation.
///
/// # Errors
///
/// Configuration mistakes in a rule that is reached propagate: an
/// uncompilable `pattern` source or a non-numeric `max`/`min` limit.
///
/// # Examples
///
/// ```rust
/// use form_validator::evaluator::evaluate;
/// use form_validator::rules::RuleSpec;
///
/// let rules = [
///     RuleSpec::named("required").unwrap(),
///     RuleSpec::with_limit("max", 3).unwrap(),
///     RuleSpec::named("alpha").unwrap(),
/// ];
/// let result = evaluate(&"hello".into(), &rules).unwrap();
/// assert!(!result.valid);
/// assert_eq!(result.summary.keys().collect::<Vec<_>>(), ["required", "max"]);
/// ```
pub fn evaluate(value: &InputValue, rules: &[RuleSpec]) -> Result<ValidationResult> {
    let mut summary = ValidationSummary::new();

    for (position, spec) in rules.iter().enumerate() {
        let passed = spec.check(value)?;
        tracing::trace!(rule = spec.key(), passed, "rule evaluated");
        summary.record(spec.key(), passed);

        if !passed {
            tracing::debug!(
                rule = spec.key(),
                evaluated = position + 1,
                total = rules.len(),
                "validation short-circuited"
            );
            return Ok(ValidationResult {
                valid: false,
                summary,
            });
        }
    }

    Ok(ValidationResult {
        valid: summary.all_passed(),
        summary,
    })
}

/// Alias for [`evaluate`] under the name input components use.
pub fn validate_input(value: &InputValue, rules: &[RuleSpec]) -> Result<ValidationResult> {
    evaluate(value, rules)
}
