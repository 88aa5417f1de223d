//! Text content rules backed by regular expressions.
//!
//! The fixed expressions are compiled once with `regex`. `pattern` compiles
//! the caller's source with `fancy_regex` on every check, so look-around
//! and backreferences work and a bad source surfaces as an error from the
//! evaluation that uses it.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Check, Error, InputValue};

// Unanchored on purpose: a value passes when any part of it is an address.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r##"(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*"##,
        r#"|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")"#,
        r"@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?",
        r"|\[(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}",
        r"(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?",
        r"|[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])",
    ))
    .expect("email pattern is valid")
});

static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z\x{00C0}-\x{02AB}'´`]+\.?\s?(?:[a-zA-Z\x{00C0}-\x{02AB}'´`]+\.?\s?)+$",
    )
    .expect("name pattern is valid")
});

fn text_matches(regex: &Regex, value: &InputValue) -> bool {
    value.as_text().is_some_and(|text| regex.is_match(&text))
}

// ============================================================================
// EMAIL
// ============================================================================

crate::assertion! {
    /// Passes when the text contains an RFC 5322 style address.
    ///
    /// Quoted local parts and bracketed IPv4 literal domains are accepted;
    /// the match is case-sensitive and lower-case only.
    pub Email;
    rule(value) { text_matches(&EMAIL_REGEX, value) }
    fn email();
}

// ============================================================================
// PERSON NAME
// ============================================================================

crate::assertion! {
    /// Passes for a human name: runs of letters (Latin-extended and
    /// apostrophe variants included), each optionally followed by a
    /// period and one whitespace, at least two runs in total.
    pub PersonName;
    rule(value) { text_matches(&NAME_REGEX, value) }
    fn person_name();
}

// ============================================================================
// PATTERN
// ============================================================================

/// Passes when the text matches a caller-supplied regex source.
///
/// The empty text always fails. The source is compiled without flags on
/// each check by a backtracking engine, so look-ahead, look-behind and
/// backreferences are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct MatchesPattern {
    pub source: String,
}

impl MatchesPattern {
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    fn invalid(&self, error: &fancy_regex::Error) -> Error {
        Error::InvalidPattern {
            pattern: self.source.clone(),
            reason: error.to_string(),
        }
    }
}

impl Check for MatchesPattern {
    fn check(&self, value: &InputValue) -> Result<bool, Error> {
        let regex = fancy_regex::Regex::new(&self.source).map_err(|e| self.invalid(&e))?;

        if matches!(value, InputValue::Text(text) if text.is_empty()) {
            return Ok(false);
        }
        match value.as_text() {
            Some(text) => regex.is_match(&text).map_err(|e| self.invalid(&e)),
            None => Ok(false),
        }
    }
}

/// Creates a [`MatchesPattern`] rule.
#[must_use]
pub fn matches_pattern(source: impl Into<String>) -> MatchesPattern {
    MatchesPattern::new(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(rule: &impl Check, value: impl Into<InputValue>) -> bool {
        rule.check(&value.into()).unwrap()
    }

    #[test]
    fn email_addresses() {
        assert!(check(&email(), "a@b.com"));
        assert!(check(&email(), "first.last+tag@mail.example.org"));
        assert!(check(&email(), "\"john.doe\"@example.com"));
        assert!(check(&email(), "admin@[192.168.0.1]"));
        assert!(!check(&email(), "not-an-email"));
        assert!(!check(&email(), "user@"));
        assert!(!check(&email(), "@example.com"));
    }

    #[test]
    fn email_is_unanchored_and_case_sensitive() {
        assert!(check(&email(), "contact: a@b.com"));
        assert!(!check(&email(), "USER@EXAMPLE.COM"));
    }

    #[test]
    fn email_needs_text() {
        assert!(!email().check(&InputValue::Undefined).unwrap());
    }

    #[test]
    fn person_names() {
        assert!(check(&person_name(), "John Smith"));
        assert!(check(&person_name(), "J. R. Tolkien"));
        assert!(check(&person_name(), "José Ñúñez"));
        assert!(check(&person_name(), "O'Brien"));
        assert!(!check(&person_name(), "J"));
        assert!(!check(&person_name(), "John3"));
        assert!(!check(&person_name(), "John  Smith"));
    }

    #[test]
    fn pattern_matches() {
        let digits = matches_pattern("^[0-9]+$");
        assert!(check(&digits, "123"));
        assert!(!check(&digits, "12a"));
        assert!(check(&digits, 42));
    }

    #[test]
    fn pattern_rejects_empty_text() {
        assert!(!check(&matches_pattern("^[0-9]+$"), ""));
        assert!(!check(&matches_pattern(""), ""));
        assert!(check(&matches_pattern(""), "anything"));
    }

    #[test]
    fn pattern_supports_look_ahead() {
        let password = matches_pattern(r"^(?=.*\d).{8,}$");
        assert!(check(&password, "password1"));
        assert!(!check(&password, "password"));
        assert!(!check(&password, "pass1"));
    }

    #[test]
    fn pattern_supports_backreferences() {
        let doubled = matches_pattern(r"^(\w)\1$");
        assert!(check(&doubled, "aa"));
        assert!(!check(&doubled, "ab"));
    }

    #[test]
    fn pattern_source_errors() {
        let err = matches_pattern("(").check(&"x".into()).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { ref pattern, .. } if pattern == "("));

        let err = matches_pattern(r"(?=x").check(&"x".into()).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }));
    }
}
