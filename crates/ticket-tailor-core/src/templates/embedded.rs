//! Compile-time embedded templates.
//!
//! The paths are relative to this source file
//! (`crates/ticket-tailor-core/src/templates/embedded.rs`).
//!
//! Do NOT change the variables used in the `prompts/` files without updating
//! the data the genai engine passes to [`PromptRenderer`](super::renderer::PromptRenderer);
//! the renderer runs in strict mode and will reject missing keys.

// -------------------------------------------------------
// Ticket templates
// -------------------------------------------------------

/// Built-in ticket used when no template file is configured ("reset to default").
pub const DEFAULT_TICKET: &str = include_str!("../../../../templates/tickets/default.md");

// -------------------------------------------------------
// Model instructions
// -------------------------------------------------------

/// Data: `template`, `example_placeholder`.
pub const EXTRACT_VARIABLES_PROMPT: &str =
    include_str!("../../../../templates/prompts/extract_variables.hbs");

/// Data: `template`, `values_json`, `example_placeholder`.
pub const GENERATE_TICKET_PROMPT: &str =
    include_str!("../../../../templates/prompts/generate_ticket.hbs");
