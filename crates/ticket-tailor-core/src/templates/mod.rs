//! Templates shipped with ticket-tailor.
//!
//! Two kinds live here, both embedded at compile time via [`include_str!`] in
//! the [`embedded`] module:
//!
//! - **Ticket templates** use `{{VARIABLE}}` placeholders and are filled by a
//!   [`TicketEngine`](crate::engine::TicketEngine). They are never passed
//!   through Handlebars.
//! - **Prompt templates** (`templates/prompts/*.hbs`) are instructions for the
//!   model-backed engine, rendered with [Handlebars](https://handlebarsjs.com/)
//!   via [`renderer::PromptRenderer`]. User templates are injected as data with
//!   triple-stash (`{{{template}}}`), so their placeholders reach the model intact.
//!
//! **Warning**: Files in `templates/` and constants in [`embedded`] must stay in sync.
//! The `include_str!` paths are relative to `embedded.rs` and checked at compile-time.

pub mod embedded;
pub mod renderer;
