//! Presence rule.

use crate::foundation::InputValue;

crate::assertion! {
    /// Passes for non-empty text and for a date range whose both bounds
    /// are filled in.
    ///
    /// Numbers, single dates and undefined values never satisfy it.
    pub Required;
    rule(value) {
        match value {
            InputValue::Text(text) => !text.is_empty(),
            InputValue::Range(range) => range.is_complete(),
            InputValue::Undefined | InputValue::Number(_) | InputValue::Date(_) => false,
        }
    }
    fn required();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Check, DateRange};
    use chrono::Utc;

    #[test]
    fn text() {
        assert!(required().check(&"a".into()).unwrap());
        assert!(!required().check(&"".into()).unwrap());
    }

    #[test]
    fn range() {
        let full = DateRange::new("2020-01-01", "2020-01-02");
        assert!(required().check(&full.into()).unwrap());

        let half = DateRange::new("", "x");
        assert!(!required().check(&half.into()).unwrap());

        let open = DateRange {
            start_date: Some("2020-01-01".into()),
            end_date: None,
        };
        assert!(!required().check(&open.into()).unwrap());
    }

    #[test]
    fn other_shapes_fail() {
        assert!(!required().check(&InputValue::Undefined).unwrap());
        assert!(!required().check(&0.into()).unwrap());
        assert!(!required().check(&Utc::now().into()).unwrap());
    }
}
