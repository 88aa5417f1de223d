//! The rule registry and rule specifications.
//!
//! [`RuleName`] is the closed set of registered rules. [`Rule`] is a
//! resolved rule carrying its own parameter type, and [`RuleSpec`] is one
//! entry of a caller's rule list: a bare name, a name with a limit, or an
//! inline predicate.
//!
//! ```rust
//! use form_validator::rules::{RuleName, RuleSpec};
//!
//! let rules = vec![
//!     RuleSpec::from(RuleName::Required),
//!     RuleSpec::with_limit("max", 20).unwrap(),
//!     RuleSpec::inline("noAdmin", |value| value.as_text().is_some_and(|t| t != "admin")),
//! ];
//! assert_eq!(rules[1].key(), "max");
//! assert_eq!(rules[2].key(), "noAdmin");
//! ```

pub mod json;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::{Check, Error, InlineRule, InputValue, Result};
use crate::validators::{
    Alpha, AlphaNumeric, Email, Equals, Limit, MatchesPattern, Max, Min, Numeric, PersonName,
    Required,
};

// ============================================================================
// RULE NAMES
// ============================================================================

/// The names of the registered rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleName {
    Required,
    Email,
    Max,
    Min,
    Equals,
    Number,
    Pattern,
    Alpha,
    AlphaNumeric,
    Name,
}

impl RuleName {
    /// Every registered rule, in registry order.
    pub const ALL: [RuleName; 10] = [
        Self::Required,
        Self::Email,
        Self::Max,
        Self::Min,
        Self::Equals,
        Self::Number,
        Self::Pattern,
        Self::Alpha,
        Self::AlphaNumeric,
        Self::Name,
    ];

    /// The name used in rule lists and summaries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Email => "email",
            Self::Max => "max",
            Self::Min => "min",
            Self::Equals => "equals",
            Self::Number => "number",
            Self::Pattern => "pattern",
            Self::Alpha => "alpha",
            Self::AlphaNumeric => "alphaNumeric",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleName {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|rule| rule.as_str() == name)
            .ok_or_else(|| Error::UnknownRule {
                name: name.to_owned(),
            })
    }
}

// ============================================================================
// RESOLVED RULES
// ============================================================================

/// A registered rule together with its parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Required(Required),
    Email(Email),
    Max(Max),
    Min(Min),
    Equals(Equals),
    Number(Numeric),
    Pattern(MatchesPattern),
    Alpha(Alpha),
    AlphaNumeric(AlphaNumeric),
    Name(PersonName),
}

impl Rule {
    /// Resolves a registered rule, applying its default when no limit is
    /// given.
    ///
    /// Defaults: `max`/`min` use `0`, `equals` uses the empty text and
    /// `pattern` the empty source. Limits passed to rules that take none
    /// are ignored.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLimit`] when a `max`/`min` limit is not numeric.
    pub fn resolve(name: RuleName, limit: Option<&Limit>) -> Result<Self> {
        let rule = match name {
            RuleName::Required => Self::Required(Required),
            RuleName::Email => Self::Email(Email),
            RuleName::Max => Self::Max(Max::new(numeric_limit(name, limit)?)),
            RuleName::Min => Self::Min(Min::new(numeric_limit(name, limit)?)),
            RuleName::Equals => Self::Equals(Equals::new(limit.cloned().unwrap_or_default())),
            RuleName::Number => Self::Number(Numeric),
            RuleName::Pattern => {
                Self::Pattern(MatchesPattern::new(limit.map(Limit::to_text).unwrap_or_default()))
            }
            RuleName::Alpha => Self::Alpha(Alpha),
            RuleName::AlphaNumeric => Self::AlphaNumeric(AlphaNumeric),
            RuleName::Name => Self::Name(PersonName),
        };
        Ok(rule)
    }

    /// The registered name of this rule.
    #[must_use]
    pub fn name(&self) -> RuleName {
        match self {
            Self::Required(_) => RuleName::Required,
            Self::Email(_) => RuleName::Email,
            Self::Max(_) => RuleName::Max,
            Self::Min(_) => RuleName::Min,
            Self::Equals(_) => RuleName::Equals,
            Self::Number(_) => RuleName::Number,
            Self::Pattern(_) => RuleName::Pattern,
            Self::Alpha(_) => RuleName::Alpha,
            Self::AlphaNumeric(_) => RuleName::AlphaNumeric,
            Self::Name(_) => RuleName::Name,
        }
    }
}

fn numeric_limit(name: RuleName, limit: Option<&Limit>) -> Result<f64> {
    match limit {
        None => Ok(0.0),
        Some(limit) => limit.to_number().ok_or_else(|| Error::InvalidLimit {
            rule: name.to_string(),
            limit: limit.to_text(),
        }),
    }
}

impl Check for Rule {
    fn check(&self, value: &InputValue) -> Result<bool> {
        match self {
            Self::Required(rule) => rule.check(value),
            Self::Email(rule) => rule.check(value),
            Self::Max(rule) => rule.check(value),
            Self::Min(rule) => rule.check(value),
            Self::Equals(rule) => rule.check(value),
            Self::Number(rule) => rule.check(value),
            Self::Pattern(rule) => rule.check(value),
            Self::Alpha(rule) => rule.check(value),
            Self::AlphaNumeric(rule) => rule.check(value),
            Self::Name(rule) => rule.check(value),
        }
    }
}

// ============================================================================
// RULE SPECS
// ============================================================================

/// One entry of a rule list.
#[derive(Debug, Clone)]
pub enum RuleSpec {
    /// A registered rule with its default limit.
    Named(RuleName),
    /// A registered rule with an explicit limit.
    NamedWithLimit(RuleName, Limit),
    /// A caller-supplied predicate.
    Inline(InlineRule),
}

impl RuleSpec {
    /// Parses a registered rule name.
    pub fn named(name: &str) -> Result<Self> {
        Ok(Self::Named(name.parse()?))
    }

    /// Parses a registered rule name and attaches a limit.
    pub fn with_limit(name: &str, limit: impl Into<Limit>) -> Result<Self> {
        Ok(Self::NamedWithLimit(name.parse()?, limit.into()))
    }

    /// Wraps a predicate recorded under `name`.
    pub fn inline<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&InputValue) -> bool + Send + Sync + 'static,
    {
        Self::Inline(InlineRule::new(name, predicate))
    }

    /// The summary key this spec's outcome is recorded under.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Named(name) | Self::NamedWithLimit(name, _) => name.as_str(),
            Self::Inline(rule) => rule.name(),
        }
    }
}

impl From<RuleName> for RuleSpec {
    fn from(name: RuleName) -> Self {
        Self::Named(name)
    }
}

impl From<InlineRule> for RuleSpec {
    fn from(rule: InlineRule) -> Self {
        Self::Inline(rule)
    }
}

impl Check for RuleSpec {
    fn check(&self, value: &InputValue) -> Result<bool> {
        match self {
            Self::Named(name) => Rule::resolve(*name, None)?.check(value),
            Self::NamedWithLimit(name, limit) => Rule::resolve(*name, Some(limit))?.check(value),
            Self::Inline(rule) => rule.check(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for name in RuleName::ALL {
            assert_eq!(name.as_str().parse::<RuleName>().unwrap(), name);
        }
    }

    #[test]
    fn unknown_name() {
        let err = "phone".parse::<RuleName>().unwrap_err();
        assert_eq!(
            err,
            Error::UnknownRule {
                name: "phone".into()
            }
        );
        assert!(RuleSpec::named("alphanumeric").is_err());
    }

    #[test]
    fn serde_uses_camel_case() {
        assert_eq!(
            serde_json::to_string(&RuleName::AlphaNumeric).unwrap(),
            "\"alphaNumeric\""
        );
    }

    #[test]
    fn resolve_defaults() {
        assert_eq!(
            Rule::resolve(RuleName::Max, None).unwrap(),
            Rule::Max(Max::new(0.0))
        );
        assert_eq!(
            Rule::resolve(RuleName::Equals, None).unwrap(),
            Rule::Equals(Equals::new(Limit::Text(String::new())))
        );
        assert_eq!(
            Rule::resolve(RuleName::Pattern, Some(&Limit::Number(5.0))).unwrap(),
            Rule::Pattern(MatchesPattern::new("5"))
        );
    }

    #[test]
    fn resolve_normalises_text_limits() {
        let rule = Rule::resolve(RuleName::Min, Some(&Limit::from("3"))).unwrap();
        assert_eq!(rule, Rule::Min(Min::new(3.0)));

        let err = Rule::resolve(RuleName::Max, Some(&Limit::from("lots"))).unwrap_err();
        assert_eq!(err.code(), "RULE_INVALID_LIMIT");
    }

    #[test]
    fn resolved_name_matches() {
        for name in RuleName::ALL {
            assert_eq!(Rule::resolve(name, None).unwrap().name(), name);
        }
    }

    #[test]
    fn spec_checks() {
        let spec = RuleSpec::with_limit("max", 3).unwrap();
        assert!(!spec.check(&"hello".into()).unwrap());

        let spec = RuleSpec::inline("myRule", |v| matches!(v, InputValue::Text(t) if t == "x"));
        assert_eq!(spec.key(), "myRule");
        assert!(spec.check(&"x".into()).unwrap());
    }

    #[test]
    fn conversions_into_specs() {
        let spec = RuleSpec::from(RuleName::Alpha);
        assert_eq!(spec.key(), "alpha");
        assert!(!spec.check(&"a1".into()).unwrap());

        let spec: RuleSpec = InlineRule::new("notBlank", |v: &InputValue| !v.is_undefined()).into();
        assert_eq!(spec.key(), "notBlank");
        assert!(spec.check(&7.into()).unwrap());
        assert!(!spec.check(&InputValue::Undefined).unwrap());
    }
}
