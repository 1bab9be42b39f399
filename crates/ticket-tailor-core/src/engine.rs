use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TailorError};

/// Variable name to supplied value. Absent keys and blank values are "not yet supplied".
pub type VariableValues = BTreeMap<String, String>;

/// A filled template together with the variables that were found in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// The rendered document. Unresolved placeholders are left verbatim.
    pub content: String,
    /// Variables extracted from the source template, first-seen order.
    pub variables: Vec<String>,
}

/// Information about a missing prerequisite for an engine.
#[derive(Debug, Clone)]
pub struct PrerequisiteError {
    pub requirement: String,
    pub instructions: String,
}

/// Selectable engine implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum EngineKind {
    /// Deterministic regex scan and literal substitution.
    #[default]
    Scan,
    /// Extraction and filling delegated to a generative model.
    GenAi,
}

impl EngineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scan => "scan",
            Self::GenAi => "genai",
        }
    }

    /// Resolve an engine by name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "scan" => Ok(Self::Scan),
            "genai" => Ok(Self::GenAi),
            other => Err(TailorError::UnknownEngine(other.to_string())),
        }
    }
}

impl TryFrom<String> for EngineKind {
    type Error = TailorError;

    fn try_from(name: String) -> Result<Self> {
        Self::from_name(&name)
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every placeholder engine must implement this trait.
///
/// Both operations take the template by reference and never mutate it. The
/// deterministic engine is infallible; the `Result` exists for engines that
/// reach out to an external service.
#[async_trait]
pub trait TicketEngine: Send + Sync {
    /// Short identifier: "scan", "genai".
    fn name(&self) -> &'static str;

    /// Display name for user-facing output.
    fn display_name(&self) -> &'static str;

    /// Check that everything the engine needs at runtime is available.
    fn check_prerequisites(&self) -> std::result::Result<(), Vec<PrerequisiteError>>;

    /// Return the unique variable names in `template`, first-seen order.
    async fn extract(&self, template: &str) -> Result<Vec<String>>;

    /// Replace every resolvable placeholder in `template` with its value.
    ///
    /// Placeholders without a non-blank value stay in the output unchanged.
    async fn render(&self, template: &str, values: &VariableValues) -> Result<String>;

    /// Extract, then render, returning both results.
    async fn generate(&self, template: &str, values: &VariableValues) -> Result<Ticket> {
        let variables = self.extract(template).await?;
        let content = self.render(template, values).await?;
        Ok(Ticket { content, variables })
    }
}
