//! Bound and equality rules.
//!
//! `max`/`min` compare text by length and numbers or dates by value. An
//! empty text passes both bounds so that optional inputs are left to
//! `required`.

use serde::{Deserialize, Serialize};

use crate::foundation::InputValue;
use crate::foundation::value::number_text;

/// A rule parameter as written in a rule list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Limit {
    Number(f64),
    Text(String),
}

impl Limit {
    /// Normalises the limit to a number; text is parsed after trimming.
    #[must_use]
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }

    /// Renders the limit as text; numbers use their decimal form.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Number(number) => number_text(*number),
            Self::Text(text) => text.clone(),
        }
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<f64> for Limit {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for Limit {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<&str> for Limit {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Limit {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

fn text_len(text: &str) -> f64 {
    text.chars().count() as f64
}

crate::assertion! {
    /// Upper bound: text length or numeric/date value must not exceed `limit`.
    #[derive(Copy, PartialEq)]
    pub Max { limit: f64 };
    rule(self, value) {
        match value {
            InputValue::Text(text) => text.is_empty() || text_len(text) <= self.limit,
            InputValue::Undefined => false,
            other => other.as_ordinal().is_some_and(|n| n <= self.limit),
        }
    }
    fn max(limit: f64);
}

crate::assertion! {
    /// Lower bound: text length or numeric/date value must reach `limit`.
    #[derive(Copy, PartialEq)]
    pub Min { limit: f64 };
    rule(self, value) {
        match value {
            InputValue::Text(text) => text.is_empty() || text_len(text) >= self.limit,
            InputValue::Undefined => false,
            other => other.as_ordinal().is_some_and(|n| n >= self.limit),
        }
    }
    fn min(limit: f64);
}

crate::assertion! {
    /// Strict equality with the expected limit; text never equals a number.
    #[derive(PartialEq)]
    pub Equals { expected: Limit };
    rule(self, value) {
        match (value, &self.expected) {
            (InputValue::Text(text), Limit::Text(expected)) => text == expected,
            (InputValue::Number(number), Limit::Number(expected)) => number == expected,
            _ => false,
        }
    }
    fn equals(expected: Limit);
}
