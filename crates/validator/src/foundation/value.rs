//! Values handed to the rules by input components.
//!
//! Each rule pattern-matches on [`InputValue`] instead of probing the
//! shape of the value at runtime. Shape mismatches (a length rule on a
//! date range, a text pattern on an undefined value) make the rule fail
//! rather than error.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A value produced by an input, select, autocomplete or date picker.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputValue {
    /// The input has no value yet.
    #[default]
    Undefined,
    /// Free text, including the empty string.
    Text(String),
    /// A numeric value.
    Number(f64),
    /// A single picked date.
    Date(DateTime<Utc>),
    /// A picked date range.
    Range(DateRange),
}

impl InputValue {
    /// Returns the textual form checked by the pattern rules.
    ///
    /// Text is returned as is. Numbers use the shortest round-trip digits
    /// laid out the way browsers print them: plain decimal for magnitudes
    /// in `[1e-6, 1e21)`, exponent notation (`1e+21`, `1e-7`) outside it,
    /// and `0` for negative zero. Dates, ranges and undefined values have
    /// no textual form.
    #[must_use]
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Text(text) => Some(Cow::Borrowed(text)),
            Self::Number(number) => Some(Cow::Owned(number_text(*number))),
            Self::Undefined | Self::Date(_) | Self::Range(_) => None,
        }
    }

    /// Returns the value compared against numeric limits.
    ///
    /// Dates compare by their epoch milliseconds. Ranges have no ordering.
    #[must_use]
    pub fn as_ordinal(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Date(date) => Some(date.timestamp_millis() as f64),
            Self::Undefined | Self::Text(_) | Self::Range(_) => None,
        }
    }

    /// Returns `true` for [`InputValue::Undefined`].
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Maps a JSON value coming from a component or a fixture.
    ///
    /// Strings become text, numbers become numbers and `null` is
    /// undefined. An object with a `startDate` or `endDate` key becomes a
    /// range; every other shape is undefined.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text.clone()),
            Value::Number(number) => number.as_f64().map_or(Self::Undefined, Self::Number),
            Value::Object(map) if map.contains_key("startDate") || map.contains_key("endDate") => {
                Self::Range(DateRange {
                    start_date: map.get("startDate").and_then(DateBound::from_json),
                    end_date: map.get("endDate").and_then(DateBound::from_json),
                })
            }
            _ => Self::Undefined,
        }
    }
}

/// Renders a number the way a browser's `String(number)` does.
pub(crate) fn number_text(number: f64) -> String {
    if number.is_nan() {
        return "NaN".to_owned();
    }
    if number.is_infinite() {
        let text = if number > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_owned();
    }
    if number == 0.0 {
        return "0".to_owned();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.25e-7`.
    let scientific = format!("{:e}", number.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let count = digits.len() as i32;
    let point = exponent.parse::<i32>().unwrap_or(0) + 1;

    let body = if count <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - count) as usize))
    } else if 0 < point && point <= 21 {
        let (whole, fraction) = digits.split_at(point as usize);
        format!("{whole}.{fraction}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
    } else {
        let sign = if point > 0 { '+' } else { '-' };
        let magnitude = (point - 1).unsigned_abs();
        match digits.split_at(1) {
            (lead, "") => format!("{lead}e{sign}{magnitude}"),
            (lead, rest) => format!("{lead}.{rest}e{sign}{magnitude}"),
        }
    };

    if number < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}

impl From<&str> for InputValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for InputValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for InputValue {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for InputValue {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<DateTime<Utc>> for InputValue {
    fn from(date: DateTime<Utc>) -> Self {
        Self::Date(date)
    }
}

impl From<DateRange> for InputValue {
    fn from(range: DateRange) -> Self {
        Self::Range(range)
    }
}

impl<T: Into<InputValue>> From<Option<T>> for InputValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

/// A start/end pair picked in a range date picker.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateBound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateBound>,
}

impl DateRange {
    /// Creates a range from two bounds.
    pub fn new(start_date: impl Into<DateBound>, end_date: impl Into<DateBound>) -> Self {
        Self {
            start_date: Some(start_date.into()),
            end_date: Some(end_date.into()),
        }
    }

    /// Returns `true` when both bounds are present and non-empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let present = |bound: &Option<DateBound>| bound.as_ref().is_some_and(DateBound::is_present);
        present(&self.start_date) && present(&self.end_date)
    }
}

/// One bound of a [`DateRange`], either typed text or a picked date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateBound {
    Date(DateTime<Utc>),
    Text(String),
}

impl DateBound {
    /// Returns `false` only for empty text.
    #[must_use]
    pub fn is_present(&self) -> bool {
        match self {
            Self::Date(_) => true,
            Self::Text(text) => !text.is_empty(),
        }
    }

    fn from_json(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}

impl From<&str> for DateBound {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for DateBound {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<DateTime<Utc>> for DateBound {
    fn from(date: DateTime<Utc>) -> Self {
        Self::Date(date)
    }
}
