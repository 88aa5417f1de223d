//! Character class rules.

use crate::foundation::InputValue;

fn all_chars(value: &InputValue, accept: fn(char) -> bool) -> bool {
    value
        .as_text()
        .is_some_and(|text| !text.is_empty() && text.chars().all(accept))
}

crate::assertion! {
    /// Passes for one or more ASCII letters.
    pub Alpha;
    rule(value) { all_chars(value, |c| c.is_ascii_alphabetic()) }
    fn alpha();
}

crate::assertion! {
    /// Passes for one or more ASCII letters or digits.
    pub AlphaNumeric;
    rule(value) { all_chars(value, |c| c.is_ascii_alphanumeric()) }
    fn alpha_numeric();
}

crate::assertion! {
    /// Lenient numeric rule.
    ///
    /// The upstream check accepted whatever a partial integer or float
    /// parse produced, including "not a number", so it never rejected a
    /// value. That behaviour is kept: inputs that need strict digits use
    /// `pattern` instead.
    pub Numeric;
    rule(value) { true }
    fn numeric();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Check;

    #[test]
    fn alpha_cases() {
        assert!(alpha().check(&"Hello".into()).unwrap());
        assert!(!alpha().check(&"hello1".into()).unwrap());
        assert!(!alpha().check(&"".into()).unwrap());
        assert!(!alpha().check(&"é".into()).unwrap());
        assert!(!alpha().check(&InputValue::Undefined).unwrap());
    }

    #[test]
    fn alpha_numeric_cases() {
        assert!(alpha_numeric().check(&"abc123".into()).unwrap());
        assert!(alpha_numeric().check(&"ABC".into()).unwrap());
        assert!(alpha_numeric().check(&7.into()).unwrap());
        assert!(!alpha_numeric().check(&"abc 123".into()).unwrap());
        assert!(!alpha_numeric().check(&1.5.into()).unwrap());
    }

    #[test]
    fn numeric_never_rejects() {
        assert!(numeric().check(&"12".into()).unwrap());
        assert!(numeric().check(&"abc".into()).unwrap());
        assert!(numeric().check(&InputValue::Undefined).unwrap());
    }
}
