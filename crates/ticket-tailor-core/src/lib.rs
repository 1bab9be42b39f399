//! Core library for the ticket-tailor toolkit.
//!
//! Provides the [`engine::TicketEngine`] trait that every placeholder engine
//! implements, along with shared infrastructure: configuration loading, the
//! caller-side value form helpers, embedded templates, and the prompt renderer
//! used by model-backed engines.
//!
//! This crate is engine-agnostic. Concrete engines live in their own crates:
//! - `ticket_tailor_scan`: deterministic regex scan and literal substitution
//! - `ticket_tailor_genai`: extraction and filling via the Gemini API

pub mod config;
pub mod engine;
pub mod error;
pub mod form;
pub mod templates;
