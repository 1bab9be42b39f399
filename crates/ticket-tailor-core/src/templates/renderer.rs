//! Handlebars-based renderer for model instructions.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled.
//! Any `{{variable}}` referenced by a prompt must be present in the data
//! context, otherwise rendering returns an error instead of sending the model
//! an instruction with a hole in it.
//!
//! ## Usage
//!
//! ```ignore
//! use ticket_tailor_core::templates::{embedded, renderer::PromptRenderer};
//!
//! let renderer = PromptRenderer::new();
//! let data = serde_json::json!({
//!     "template": "Hello {{NAME}}",
//!     "example_placeholder": "{{VARIABLE_NAME}}",
//! });
//! let prompt = renderer.render(embedded::EXTRACT_VARIABLES_PROMPT, &data)?;
//! ```

use handlebars::Handlebars;
use serde_json::Value;

use crate::error::{Result, TailorError};

/// Placeholder shown to the model as an example of the token syntax.
pub const EXAMPLE_PLACEHOLDER: &str = "{{VARIABLE_NAME}}";

/// Prompt renderer using Handlebars in strict mode.
pub struct PromptRenderer {
    hbs: Handlebars<'static>,
}

impl PromptRenderer {
    /// Create a new renderer with strict mode enabled.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        Self { hbs }
    }

    /// Render a prompt template with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| TailorError::PromptRender(e.to_string()))
    }
}

impl Default for PromptRenderer {
    fn default() -> Self {
        Self::new()
    }
}
