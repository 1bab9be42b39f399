//! Caller-side helpers for collecting variable values.
//!
//! None of these are used by the engines themselves: whether a ticket may be
//! generated with blanks left in it is the caller's decision.

use crate::engine::VariableValues;
use crate::error::{Result, TailorError};

/// Whether `values` holds a usable (non-blank) value for `name`.
pub fn is_filled(values: &VariableValues, name: &str) -> bool {
    values.get(name).is_some_and(|v| !v.trim().is_empty())
}

/// Variables with no usable value, in the order given.
pub fn missing_values(variables: &[String], values: &VariableValues) -> Vec<String> {
    variables
        .iter()
        .filter(|name| !is_filled(values, name))
        .cloned()
        .collect()
}

/// Fail with [`TailorError::MissingValues`] unless every variable is filled.
pub fn require_all(variables: &[String], values: &VariableValues) -> Result<()> {
    let missing = missing_values(variables, values);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(TailorError::MissingValues(missing))
    }
}

/// Build a fresh value map for `variables`, carrying over what was already typed.
///
/// Keys that are no longer in the template are dropped; new variables start empty.
pub fn seed_values(variables: &[String], previous: &VariableValues) -> VariableValues {
    variables
        .iter()
        .map(|name| {
            let value = previous.get(name).cloned().unwrap_or_default();
            (name.clone(), value)
        })
        .collect()
}

/// Human-readable label for a variable: `BRIEF_DESCRIPTION` -> `BRIEF DESCRIPTION`.
pub fn field_label(name: &str) -> String {
    name.replace('_', " ")
}

/// Parse a `NAME=VALUE` assignment. Splits at the first `=`; the name is trimmed,
/// the value is kept as written.
pub fn parse_assignment(raw: &str) -> Option<(String, String)> {
    let (name, value) = raw.split_once('=')?;
    Some((name.trim().to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> VariableValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_missing_values_blank_counts_as_missing() {
        let vars = names(&["A", "B", "C", "D"]);
        let vals = values(&[("A", "x"), ("B", ""), ("C", "   ")]);
        assert_eq!(missing_values(&vars, &vals), names(&["B", "C", "D"]));
    }

    #[test]
    fn test_require_all() {
        let vars = names(&["A", "B"]);
        assert!(require_all(&vars, &values(&[("A", "1"), ("B", "2")])).is_ok());
        match require_all(&vars, &values(&[("A", "1")])) {
            Err(TailorError::MissingValues(missing)) => assert_eq!(missing, names(&["B"])),
            other => panic!("expected MissingValues, got {other:?}"),
        }
    }

    #[test]
    fn test_require_all_no_variables() {
        assert!(require_all(&[], &VariableValues::new()).is_ok());
    }

    #[test]
    fn test_seed_values_keeps_known_drops_stale() {
        let previous = values(&[("A", "kept"), ("OLD", "gone")]);
        let seeded = seed_values(&names(&["A", "NEW"]), &previous);
        assert_eq!(seeded, values(&[("A", "kept"), ("NEW", "")]));
    }

    #[test]
    fn test_field_label() {
        assert_eq!(field_label("BRIEF_DESCRIPTION"), "BRIEF DESCRIPTION");
        assert_eq!(field_label("name"), "name");
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment(" MODULE = sale =x"),
            Some(("MODULE".to_string(), " sale =x".to_string()))
        );
        assert_eq!(parse_assignment("A="), Some(("A".to_string(), String::new())));
        assert_eq!(parse_assignment("no-equals"), None);
    }
}
