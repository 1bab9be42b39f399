//! Parsing of model replies into variable lists and filled tickets.
//!
//! Models are asked for JSON, but replies are accepted leniently: a Markdown
//! code fence around the JSON is stripped, and for variable lists a bare
//! array is accepted in place of the `{"variables": [...]}` object.

use std::collections::HashSet;

use serde::Deserialize;

use ticket_tailor_core::error::{Result, TailorError};

#[derive(Deserialize)]
#[serde(untagged)]
enum VariablesReply {
    Object { variables: Vec<String> },
    List(Vec<String>),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TicketReply {
    completed_ticket: String,
}

/// Remove a surrounding ```` ``` ```` / ```` ```json ```` fence, if present.
pub(crate) fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Parse a variable list, trimming names and dropping repeats.
pub(crate) fn parse_variables(text: &str) -> Result<Vec<String>> {
    let reply: VariablesReply = serde_json::from_str(strip_code_fence(text))
        .map_err(|e| TailorError::ModelResponse(format!("invalid variable list: {e}")))?;
    let names = match reply {
        VariablesReply::Object { variables } => variables,
        VariablesReply::List(names) => names,
    };

    let mut seen = HashSet::new();
    Ok(names
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| seen.insert(name.clone()))
        .collect())
}

/// Parse a filled ticket reply.
pub(crate) fn parse_completed_ticket(text: &str) -> Result<String> {
    let reply: TicketReply = serde_json::from_str(strip_code_fence(text))
        .map_err(|e| TailorError::ModelResponse(format!("invalid ticket reply: {e}")))?;
    Ok(reply.completed_ticket)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```json\n[\"A\"]\n```"), "[\"A\"]");
        assert_eq!(strip_code_fence("```\n{}\n```\n"), "{}");
        assert_eq!(strip_code_fence("  [\"A\"] "), "[\"A\"]");
    }

    #[test]
    fn test_parse_variables_object_and_array() {
        assert_eq!(
            parse_variables(r#"{"variables": ["A", "B"]}"#).unwrap(),
            vec!["A", "B"]
        );
        assert_eq!(parse_variables(r#"["A", "B"]"#).unwrap(), vec!["A", "B"]);
    }

    #[test]
    fn test_parse_variables_normalizes() {
        let vars = parse_variables("```json\n[\" A \", \"B\", \"A\"]\n```").unwrap();
        assert_eq!(vars, vec!["A", "B"]);
    }

    #[test]
    fn test_parse_variables_rejects_prose() {
        let result = parse_variables("The variables are A and B.");
        assert!(matches!(result, Err(TailorError::ModelResponse(_))));
    }

    #[test]
    fn test_parse_completed_ticket() {
        let text = r#"{"completedTicket": "Fix sale\n{{B}}"}"#;
        assert_eq!(parse_completed_ticket(text).unwrap(), "Fix sale\n{{B}}");
        assert!(parse_completed_ticket(r#"{"ticket": "x"}"#).is_err());
    }
}
