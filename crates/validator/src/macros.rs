//! Macros for declaring built-in rules with minimal boilerplate.
//!
//! [`assertion!`] creates the rule struct, its [`Check`](crate::foundation::Check)
//! implementation and a factory function.
//!
//! ```rust,ignore
//! // Unit rule (no limit)
//! assertion! {
//!     pub Required;
//!     rule(value) { matches!(value, InputValue::Text(text) if !text.is_empty()) }
//!     fn required();
//! }
//!
//! // Rule carrying a limit
//! assertion! {
//!     #[derive(Copy, PartialEq)]
//!     pub Max { limit: f64 };
//!     rule(self, value) { value.as_ordinal().is_some_and(|n| n <= self.limit) }
//!     fn max(limit: f64);
//! }
//! ```

/// Creates a rule: struct definition, `Check` implementation and factory
/// function.
///
/// `#[derive(Debug, Clone)]` is always applied; unit rules additionally
/// derive `Copy, PartialEq, Eq, Hash, Default`. Rules built with this
/// macro are infallible; fallible rules implement `Check` by hand.
#[macro_export]
macro_rules! assertion {
    // ── Unit rule (no fields) + factory fn ──────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Check for $name {
            #[allow(unused_variables)]
            fn check(
                &self,
                $inp: &$crate::foundation::InputValue,
            ) -> Result<bool, $crate::foundation::Error> {
                Ok($rule)
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };

    // ── Rule with fields + factory fn ───────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Check for $name {
            fn check(
                &$self_,
                $inp: &$crate::foundation::InputValue,
            ) -> Result<bool, $crate::foundation::Error> {
                Ok($rule)
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::{Check, InputValue};

    crate::assertion! {
        /// Passes for the text "ok".
        pub IsOk;
        rule(value) { matches!(value, InputValue::Text(text) if text == "ok") }
        fn is_ok();
    }

    crate::assertion! {
        #[derive(Copy, PartialEq)]
        pub AtLeast { floor: f64 };
        rule(self, value) { value.as_ordinal().is_some_and(|n| n >= self.floor) }
        fn at_least(floor: f64);
    }

    #[test]
    fn unit_rule() {
        assert!(is_ok().check(&"ok".into()).unwrap());
        assert!(!IsOk.check(&"no".into()).unwrap());
    }

    #[test]
    fn rule_with_fields() {
        let rule = at_least(2.0);
        assert_eq!(rule, AtLeast::new(2.0));
        assert!(rule.check(&3.into()).unwrap());
        assert!(!rule.check(&1.into()).unwrap());
        assert!(!rule.check(&InputValue::Undefined).unwrap());
    }
}
