use regex::{Captures, Regex};

use ticket_tailor_core::engine::VariableValues;
use ticket_tailor_core::form;

use crate::extract::{extract, placeholder};

/// Fill `template` with `values` in a single pass.
///
/// Only variables found by [`extract`] and holding a non-blank value are
/// replaced, at every occurrence of their literal token `{{NAME}}`. Other
/// placeholders (including spacing variants like `{{ NAME }}`) are left as
/// they are. Inserted values are never scanned again.
pub fn render(template: &str, values: &VariableValues) -> String {
    let tokens: Vec<String> = extract(template)
        .into_iter()
        .filter(|name| form::is_filled(values, name))
        .map(|name| regex::escape(&placeholder(&name)))
        .collect();

    if tokens.is_empty() {
        return template.to_string();
    }

    let pattern = match Regex::new(&tokens.join("|")) {
        Ok(re) => re,
        Err(e) => {
            tracing::warn!("placeholder pattern rejected, leaving template unresolved: {e}");
            return template.to_string();
        }
    };

    pattern
        .replace_all(template, |caps: &Captures| {
            let token = &caps[0];
            let name = &token[2..token.len() - 2];
            values
                .get(name)
                .cloned()
                .unwrap_or_else(|| token.to_string())
        })
        .into_owned()
}
