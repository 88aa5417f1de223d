//! Rule lists written as JSON.
//!
//! Components receive their rules as plain data such as
//! `["required", {"max": 20}, {"pattern": "^[0-9]+$"}]`. A string names a
//! rule; an object maps its first key to a limit. Shapes that are neither
//! are skipped, while unknown rule names are errors.
//!
//! ```rust
//! use form_validator::rules::json::parse_rules;
//! use serde_json::json;
//!
//! let rules = parse_rules(&json!(["required", {"max": 20}, null])).unwrap();
//! assert_eq!(rules.len(), 2);
//! ```

use serde_json::Value;

use crate::foundation::{Error, Result};
use crate::rules::RuleSpec;
use crate::validators::Limit;

/// Parses one rule list entry.
///
/// Returns `Ok(None)` for an entry whose shape carries no rule.
///
/// # Errors
///
/// [`Error::UnknownRule`] when the entry names an unregistered rule.
pub fn parse_rule(entry: &Value) -> Result<Option<RuleSpec>> {
    match entry {
        Value::String(name) => RuleSpec::named(name).map(Some),
        Value::Object(map) => {
            let Some((name, limit)) = map.iter().next() else {
                tracing::debug!("skipping empty rule object");
                return Ok(None);
            };
            if map.len() > 1 {
                tracing::debug!(
                    rule = %name,
                    extra = map.len() - 1,
                    "ignoring extra rule object keys"
                );
            }
            let limit = match limit {
                Value::Number(number) => number.as_f64().map(Limit::Number),
                Value::String(text) => Some(Limit::Text(text.clone())),
                _ => None,
            };
            match limit {
                Some(limit) => RuleSpec::with_limit(name, limit).map(Some),
                None => {
                    tracing::debug!(rule = %name, "skipping rule with unsupported limit");
                    Ok(None)
                }
            }
        }
        other => {
            tracing::debug!(entry = %other, "skipping unsupported rule entry");
            Ok(None)
        }
    }
}

/// Parses a JSON array of rule entries, skipping unsupported shapes.
///
/// # Errors
///
/// [`Error::InvalidRuleList`] when `rules` is not an array, and any error
/// from [`parse_rule`].
pub fn parse_rules(rules: &Value) -> Result<Vec<RuleSpec>> {
    let Value::Array(entries) = rules else {
        return Err(Error::InvalidRuleList {
            reason: format!("expected an array, got {}", kind(rules)),
        });
    };

    let mut specs = Vec::with_capacity(entries.len());
    for entry in entries {
        if let Some(spec) = parse_rule(entry)? {
            specs.push(spec);
        }
    }
    Ok(specs)
}

/// Parses a rule list from JSON text.
pub fn parse_rules_str(rules: &str) -> Result<Vec<RuleSpec>> {
    let value: Value = serde_json::from_str(rules).map_err(|e| Error::InvalidRuleList {
        reason: e.to_string(),
    })?;
    parse_rules(&value)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleName;
    use serde_json::json;

    fn keys(specs: &[RuleSpec]) -> Vec<&str> {
        specs.iter().map(RuleSpec::key).collect()
    }

    #[test]
    fn strings_and_limits() {
        let specs = parse_rules(&json!(["required", {"max": 3}, {"pattern": "^a"}])).unwrap();
        assert_eq!(keys(&specs), ["required", "max", "pattern"]);
        assert!(matches!(specs[0], RuleSpec::Named(RuleName::Required)));
        assert!(matches!(
            specs[1],
            RuleSpec::NamedWithLimit(RuleName::Max, Limit::Number(n)) if n == 3.0
        ));
        assert!(matches!(
            &specs[2],
            RuleSpec::NamedWithLimit(RuleName::Pattern, Limit::Text(t)) if t == "^a"
        ));
    }

    #[test]
    fn unsupported_shapes_are_skipped() {
        let specs = parse_rules(&json!([
            null,
            true,
            7,
            ["required"],
            {},
            {"max": null},
            {"min": [1]},
            "email"
        ]))
        .unwrap();
        assert_eq!(keys(&specs), ["email"]);
    }

    #[test]
    fn first_key_wins() {
        let specs = parse_rules(&json!([{"min": 2, "max": 5}])).unwrap();
        assert_eq!(keys(&specs), ["min"]);
    }

    #[test]
    fn unknown_names_error() {
        let err = parse_rules(&json!(["required", "phone"])).unwrap_err();
        assert_eq!(err.code(), "RULE_UNKNOWN");

        let err = parse_rules(&json!([{"between": 3}])).unwrap_err();
        assert_eq!(err.code(), "RULE_UNKNOWN");
    }

    #[test]
    fn list_must_be_an_array() {
        let err = parse_rules(&json!({"required": 1})).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidRuleList {
                reason: "expected an array, got an object".into()
            }
        );
    }

    #[test]
    fn from_text() {
        let specs = parse_rules_str(r#"["alpha", {"min": "2"}]"#).unwrap();
        assert_eq!(keys(&specs), ["alpha", "min"]);
        assert!(parse_rules_str("[").is_err());
    }
}
