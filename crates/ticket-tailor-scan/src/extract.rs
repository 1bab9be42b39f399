use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// `{{`, the shortest run of characters up to the next `}}`, `}}`.
/// `.` does not match `\n`, so a placeholder never spans lines.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(.*?)\}\}").expect("constant regex pattern is valid"));

/// Unique variable names in `template`, trimmed, in first-seen order.
///
/// Names are not validated: `{{}}` yields `""` and `{{a b!}}` yields `"a b!"`.
/// A template without placeholders yields an empty list.
pub fn extract(template: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    PLACEHOLDER
        .captures_iter(template)
        .map(|caps| caps[1].trim().to_string())
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// The literal token for `name`: `{{name}}`.
pub fn placeholder(name: &str) -> String {
    format!("{{{{{name}}}}}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_empty_and_plain_text() {
        assert!(extract("").is_empty());
        assert!(extract("no vars here").is_empty());
    }

    #[test]
    fn test_extract_dedup_preserves_first_seen_order() {
        assert_eq!(extract("{{A}} and {{B}} and {{A}}"), vec!["A", "B"]);
        assert_eq!(extract("{{B}} {{A}} {{B}}"), vec!["B", "A"]);
    }

    #[test]
    fn test_extract_trims_whitespace() {
        assert_eq!(extract("{{ A }}"), vec!["A"]);
        assert_eq!(extract("{{A}} {{  A\t}}"), vec!["A"]);
    }

    #[test]
    fn test_extract_allows_any_name() {
        assert_eq!(extract("{{}} {{   }}"), vec![""]);
        assert_eq!(extract("{{A.B}} {{a b!}} {{(x)}}"), vec!["A.B", "a b!", "(x)"]);
        assert_eq!(extract("{{NOMBRE_MÓDULO}}"), vec!["NOMBRE_MÓDULO"]);
    }

    #[test]
    fn test_extract_non_greedy() {
        assert_eq!(extract("{{A}}{{B}}"), vec!["A", "B"]);
        assert_eq!(extract("{{A}}}"), vec!["A"]);
        assert_eq!(extract("{{{A}}"), vec!["{A"]);
    }

    #[test]
    fn test_extract_malformed_braces() {
        assert!(extract("{{A").is_empty());
        assert!(extract("A}}").is_empty());
        assert!(extract("{A}").is_empty());
        assert!(extract("{{A\nB}}").is_empty());
        assert_eq!(extract("{{A {{B}}"), vec!["A {{B"]);
    }

    #[test]
    fn test_extract_default_ticket_variables() {
        let vars = extract(ticket_tailor_core::templates::embedded::DEFAULT_TICKET);
        assert_eq!(vars, vec!["MODULE_NAME", "BRIEF_DESCRIPTION"]);
    }

    #[test]
    fn test_placeholder_token() {
        assert_eq!(placeholder("A.B"), "{{A.B}}");
        assert_eq!(placeholder(""), "{{}}");
    }
}
