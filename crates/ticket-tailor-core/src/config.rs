//! `ticket-tailor.config.json` loading and saving.
//!
//! Every field is optional on disk; anything left out falls back to
//! [`TailorConfig::default`]. A missing file is not an error for commands
//! that only read configuration (see [`TailorConfig::load_or_default`]).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::engine::EngineKind;
use crate::error::{Result, TailorError};

/// Default file name looked up in the working directory.
pub const CONFIG_FILE: &str = "ticket-tailor.config.json";

const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Top-level project configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TailorConfig {
    /// Engine used when `--engine` is not given.
    pub engine: EngineKind,
    /// Template file used when `--template` is not given. Falls back to the
    /// built-in default ticket when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
    /// Settings for the model-backed engine.
    pub genai: GenAiConfig,
}

/// Settings for the Gemini-backed engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenAiConfig {
    /// Model identifier, e.g. `gemini-2.0-flash`.
    pub model: String,
    /// Base URL of the Generative Language API.
    pub api_url: Url,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    pub timeout_secs: u64,
    /// Total attempts for retryable failures (429, 5xx, transport).
    pub max_retries: u32,
    /// Base delay for exponential backoff between attempts.
    pub retry_delay_ms: u64,
}

impl Default for TailorConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::Scan,
            template: None,
            genai: GenAiConfig::default(),
        }
    }
}

impl Default for GenAiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".into(),
            api_url: Url::parse(DEFAULT_API_URL).expect("constant URL is valid"),
            api_key_env: "GEMINI_API_KEY".into(),
            timeout_secs: 60,
            max_retries: 3,
            retry_delay_ms: 500,
        }
    }
}

impl TailorConfig {
    /// Default config with the given engine selected.
    pub fn default_for_engine(engine: EngineKind) -> Self {
        Self {
            engine,
            ..Self::default()
        }
    }

    /// Load a config file, failing if it is missing or malformed.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| TailorError::ConfigNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&contents).map_err(|e| TailorError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load a config file, or return defaults if it does not exist.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Write the config as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| TailorError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Resolve `template` relative to the directory holding the config file.
    pub fn template_path(&self, config_path: &Path) -> Option<PathBuf> {
        let template = self.template.as_ref()?;
        if template.is_absolute() {
            return Some(template.clone());
        }
        let base = config_path.parent().unwrap_or(Path::new("."));
        Some(base.join(template))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut config = TailorConfig::default_for_engine(EngineKind::GenAi);
        config.template = Some(PathBuf::from("tickets/bug.md"));
        config.genai.model = "gemini-1.5-pro".into();

        config.save(&path).unwrap();
        let loaded = TailorConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "engine": "genai", "genai": { "timeout_secs": 5 } }"#).unwrap();

        let loaded = TailorConfig::load(&path).unwrap();
        assert_eq!(loaded.engine, EngineKind::GenAi);
        assert_eq!(loaded.genai.timeout_secs, 5);
        assert_eq!(loaded.genai.api_key_env, "GEMINI_API_KEY");
        assert!(loaded.template.is_none());
    }

    #[test]
    fn test_load_missing_is_error() {
        let result = TailorConfig::load(Path::new("/tmp/nonexistent_ticket_tailor_config.json"));
        assert!(matches!(result, Err(TailorError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config =
            TailorConfig::load_or_default(Path::new("/tmp/nonexistent_ticket_tailor_config.json"))
                .unwrap();
        assert_eq!(config, TailorConfig::default());
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            TailorConfig::load_or_default(&path),
            Err(TailorError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_unknown_engine_in_config_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "engine": "gpt" }"#).unwrap();
        match TailorConfig::load(&path) {
            Err(TailorError::ConfigParse { source, .. }) => {
                assert!(source.to_string().contains("unknown engine: gpt"));
            }
            other => panic!("expected ConfigParse, got {other:?}"),
        }
    }

    #[test]
    fn test_template_path_relative_to_config() {
        let config = TailorConfig {
            template: Some(PathBuf::from("ticket.md")),
            ..TailorConfig::default()
        };
        let resolved = config
            .template_path(Path::new("/work/ticket-tailor.config.json"))
            .unwrap();
        assert_eq!(resolved, PathBuf::from("/work/ticket.md"));
        assert!(TailorConfig::default()
            .template_path(Path::new(CONFIG_FILE))
            .is_none());
    }
}
