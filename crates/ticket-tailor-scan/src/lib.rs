//! Deterministic placeholder engine for ticket-tailor.
//!
//! Scans templates for `{{NAME}}` tokens with a regular expression and fills
//! them by literal, single-pass substitution. Pure functions, no I/O, no
//! shared mutable state: [`extract`] and [`render`] are usable directly, and
//! [`ScanEngine`] exposes them behind the
//! [`TicketEngine`](ticket_tailor_core::engine::TicketEngine) trait.
//!
//! ```
//! use ticket_tailor_core::engine::VariableValues;
//!
//! let template = "{{MODULE}} / {{ISSUE}} / {{MODULE}}";
//! assert_eq!(ticket_tailor_scan::extract(template), vec!["MODULE", "ISSUE"]);
//!
//! let mut values = VariableValues::new();
//! values.insert("MODULE".into(), "sale".into());
//! assert_eq!(
//!     ticket_tailor_scan::render(template, &values),
//!     "sale / {{ISSUE}} / sale"
//! );
//! ```

mod extract;
mod substitute;

pub use extract::{extract, placeholder};
pub use substitute::render;

use async_trait::async_trait;

use ticket_tailor_core::engine::{PrerequisiteError, TicketEngine, VariableValues};
use ticket_tailor_core::error::Result;

/// Regex-scan engine. Never fails and needs nothing at runtime.
pub struct ScanEngine;

impl Default for ScanEngine {
    fn default() -> Self {
        Self
    }
}

impl ScanEngine {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TicketEngine for ScanEngine {
    fn name(&self) -> &'static str {
        "scan"
    }

    fn display_name(&self) -> &'static str {
        "Local scan (regex)"
    }

    fn check_prerequisites(&self) -> std::result::Result<(), Vec<PrerequisiteError>> {
        Ok(())
    }

    async fn extract(&self, template: &str) -> Result<Vec<String>> {
        let variables = extract(template);
        tracing::debug!("found {} variables", variables.len());
        Ok(variables)
    }

    async fn render(&self, template: &str, values: &VariableValues) -> Result<String> {
        Ok(render(template, values))
    }
}
