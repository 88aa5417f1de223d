//! Core traits for the rule system.

use std::fmt;
use std::sync::Arc;

use crate::foundation::{Error, InputValue};

// ============================================================================
// CORE CHECK TRAIT
// ============================================================================

/// The trait every built-in rule implements.
///
/// A check answers whether a value passes. `Ok(false)` is an ordinary
/// failed validation; `Err` is reserved for configuration mistakes such
/// as a pattern source that does not compile.
///
/// # Examples
///
/// ```rust
/// use form_validator::foundation::{Check, Error, InputValue};
///
/// struct NonBlank;
///
/// impl Check for NonBlank {
///     fn check(&self, value: &InputValue) -> Result<bool, Error> {
///         Ok(value.as_text().is_some_and(|text| !text.trim().is_empty()))
///     }
/// }
///
/// assert!(NonBlank.check(&"hi".into()).unwrap());
/// assert!(!NonBlank.check(&"  ".into()).unwrap());
/// ```
pub trait Check {
    /// Checks the value.
    fn check(&self, value: &InputValue) -> Result<bool, Error>;
}

// ============================================================================
// INLINE RULES
// ============================================================================

type Predicate = dyn Fn(&InputValue) -> bool + Send + Sync;

/// A caller-supplied predicate recorded under its own name.
///
/// Inline rules never error; whatever the predicate returns is recorded.
#[derive(Clone)]
pub struct InlineRule {
    name: String,
    predicate: Arc<Predicate>,
}

impl InlineRule {
    /// Wraps a predicate under the given summary key.
    pub fn new<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&InputValue) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// The key the outcome is recorded under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Check for InlineRule {
    fn check(&self, value: &InputValue) -> Result<bool, Error> {
        Ok((self.predicate)(value))
    }
}

impl fmt::Debug for InlineRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InlineRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_rule_calls_predicate() {
        let rule = InlineRule::new("is_x", |value: &InputValue| {
            matches!(value, InputValue::Text(text) if text == "x")
        });
        assert_eq!(rule.name(), "is_x");
        assert!(rule.check(&"x".into()).unwrap());
        assert!(!rule.check(&"y".into()).unwrap());
    }

    #[test]
    fn inline_rule_debug_hides_predicate() {
        let rule = InlineRule::new("always", |_: &InputValue| true);
        assert_eq!(format!("{rule:?}"), "InlineRule { name: \"always\", .. }");
    }
}
