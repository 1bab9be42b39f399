//! Unified error types for the ticket-tailor toolkit.
//!
//! The deterministic placeholder engine never produces these; they come from
//! configuration I/O, the model-backed engine, and caller-side preconditions.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur during ticket-tailor operations.
#[derive(Error, Debug)]
pub enum TailorError {
    // --- Configuration ---

    /// The configuration file (`ticket-tailor.config.json`) could not be read.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The specified engine name is not one of: `scan`, `genai`.
    #[error("unknown engine: {0} (supported: scan, genai)")]
    UnknownEngine(String),

    // --- Templates ---

    /// The template file passed on the command line or in config does not exist.
    #[error("template file not found: {0}")]
    TemplateNotFound(PathBuf),

    /// Handlebars rendering of a model instruction failed.
    #[error("prompt rendering failed: {0}")]
    PromptRender(String),

    /// Values are missing for variables the caller declared as required.
    #[error("missing values for: {}", .0.join(", "))]
    MissingValues(Vec<String>),

    // --- Model-backed engine ---

    /// The environment variable holding the model API key is not set.
    #[error("API key not found: set the {0} environment variable")]
    MissingApiKey(String),

    /// The HTTP request to the model endpoint failed.
    #[error("model request failed: {0}")]
    ModelRequest(String),

    /// The model replied, but the reply could not be understood.
    #[error("unexpected model response: {0}")]
    ModelResponse(String),

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias for `Result<T, TailorError>`.
pub type Result<T> = std::result::Result<T, TailorError>;
