//! Model-backed placeholder engine for ticket-tailor.
//!
//! Sends the template to Google's Generative Language API (`generateContent`)
//! together with a Handlebars-rendered instruction, and parses the JSON reply.
//! Exposes the same [`TicketEngine`] contract as the deterministic scan
//! engine, but edge cases (spacing inside braces, odd names, malformed
//! braces) are up to the model and may not match it exactly.
//!
//! **Prerequisites**: an API key in the environment variable named by
//! `genai.api_key_env` (default `GEMINI_API_KEY`).

mod client;
mod response;

pub use client::GeminiClient;

use async_trait::async_trait;

use ticket_tailor_core::config::GenAiConfig;
use ticket_tailor_core::engine::{PrerequisiteError, TicketEngine, VariableValues};
use ticket_tailor_core::error::{Result, TailorError};
use ticket_tailor_core::form;
use ticket_tailor_core::templates::embedded;
use ticket_tailor_core::templates::renderer::{PromptRenderer, EXAMPLE_PLACEHOLDER};

/// Engine that asks a Gemini model to extract variables and fill templates.
pub struct GenAiEngine {
    config: GenAiConfig,
    api_key: Option<String>,
    renderer: PromptRenderer,
}

impl GenAiEngine {
    /// Engine that reads its API key from the environment on each call.
    pub fn new(config: GenAiConfig) -> Self {
        Self {
            config,
            api_key: None,
            renderer: PromptRenderer::new(),
        }
    }

    /// Engine with an explicit API key, ignoring the environment.
    pub fn with_api_key(config: GenAiConfig, api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::new(config)
        }
    }

    fn client(&self) -> Result<GeminiClient> {
        match &self.api_key {
            Some(key) => GeminiClient::new(key.clone(), &self.config),
            None => GeminiClient::from_env(&self.config),
        }
    }

    fn api_key_present(&self) -> bool {
        self.api_key.is_some()
            || std::env::var(&self.config.api_key_env).is_ok_and(|key| !key.trim().is_empty())
    }
}

/// Non-blank values whose literal `{{NAME}}` token occurs in `template`.
fn supplied_values(template: &str, values: &VariableValues) -> VariableValues {
    values
        .iter()
        .filter(|(name, _)| form::is_filled(values, name))
        .filter(|(name, _)| template.contains(&format!("{{{{{name}}}}}")))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

#[async_trait]
impl TicketEngine for GenAiEngine {
    fn name(&self) -> &'static str {
        "genai"
    }

    fn display_name(&self) -> &'static str {
        "Gemini (model-backed)"
    }

    fn check_prerequisites(&self) -> std::result::Result<(), Vec<PrerequisiteError>> {
        if self.api_key_present() {
            return Ok(());
        }
        Err(vec![PrerequisiteError {
            requirement: format!("{} environment variable", self.config.api_key_env),
            instructions: "create a key at https://aistudio.google.com/app/apikey and export it"
                .into(),
        }])
    }

    async fn extract(&self, template: &str) -> Result<Vec<String>> {
        let client = self.client()?;
        let prompt = self.renderer.render(
            embedded::EXTRACT_VARIABLES_PROMPT,
            &serde_json::json!({
                "template": template,
                "example_placeholder": EXAMPLE_PLACEHOLDER,
            }),
        )?;

        tracing::info!("extracting variables with {}", client.model());
        let reply = client.generate(&prompt).await?;
        tracing::debug!("model reply: {reply}");
        response::parse_variables(&reply)
    }

    async fn render(&self, template: &str, values: &VariableValues) -> Result<String> {
        let supplied = supplied_values(template, values);
        if supplied.is_empty() {
            return Ok(template.to_string());
        }

        let client = self.client()?;
        let values_json = serde_json::to_string_pretty(&supplied)
            .map_err(|e| TailorError::Other(e.into()))?;
        let prompt = self.renderer.render(
            embedded::GENERATE_TICKET_PROMPT,
            &serde_json::json!({
                "template": template,
                "values_json": values_json,
                "example_placeholder": EXAMPLE_PLACEHOLDER,
            }),
        )?;

        tracing::info!("filling template with {}", client.model());
        let reply = client.generate(&prompt).await?;
        response::parse_completed_ticket(&reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    const PATH: &str = "/models/gemini-test:generateContent";

    fn config(server: &mockito::Server) -> GenAiConfig {
        GenAiConfig {
            model: "gemini-test".into(),
            api_url: Url::parse(&server.url()).unwrap(),
            api_key_env: "TICKET_TAILOR_TEST_UNSET_KEY".into(),
            timeout_secs: 5,
            max_retries: 1,
            retry_delay_ms: 1,
        }
    }

    fn candidate_body(text: &str) -> String {
        serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_extract_sends_template_and_normalizes_reply() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .match_body(mockito::Matcher::Regex(r"Fix \{\{ MODULE \}\}".into()))
            .with_status(200)
            .with_body(candidate_body(r#"{"variables": ["MODULE", " MODULE ", "ISSUE"]}"#))
            .create_async()
            .await;

        let engine = GenAiEngine::with_api_key(config(&server), "fake-key");
        let vars = engine.extract("Fix {{ MODULE }} for {{ISSUE}}").await.unwrap();
        assert_eq!(vars, vec!["MODULE", "ISSUE"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_render_parses_completed_ticket() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .match_body(mockito::Matcher::Regex("sale".into()))
            .with_status(200)
            .with_body(candidate_body(r#"{"completedTicket": "Fix sale {{B}}"}"#))
            .create_async()
            .await;

        let engine = GenAiEngine::with_api_key(config(&server), "fake-key");
        let mut values = VariableValues::new();
        values.insert("A".into(), "sale".into());
        values.insert("B".into(), " ".into());

        let rendered = engine.render("Fix {{A}} {{B}}", &values).await.unwrap();
        assert_eq!(rendered, "Fix sale {{B}}");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_render_without_values_skips_model() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("POST", PATH).expect(0).create_async().await;

        let engine = GenAiEngine::with_api_key(config(&server), "fake-key");
        let rendered = engine
            .render("{{A}}", &VariableValues::new())
            .await
            .unwrap();
        assert_eq!(rendered, "{{A}}");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_render_values_absent_from_template_skip_model() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("POST", PATH).expect(0).create_async().await;

        let engine = GenAiEngine::with_api_key(config(&server), "fake-key");
        let mut values = VariableValues::new();
        values.insert("Z".into(), "z".into());
        values.insert("A".into(), "spaced".into());

        let rendered = engine.render("{{ A }} {{B}}", &values).await.unwrap();
        assert_eq!(rendered, "{{ A }} {{B}}");
        mock.assert_async().await;
    }

    #[test]
    fn test_supplied_values_keeps_only_filled_tokens_in_template() {
        let mut values = VariableValues::new();
        values.insert("A".into(), "sale".into());
        values.insert("A.B".into(), "dot".into());
        values.insert("B".into(), "  ".into());
        values.insert("C".into(), "spaced".into());
        values.insert("Z".into(), "unrelated".into());

        let supplied = supplied_values("Fix {{A}} {{A.B}} {{B}} {{ C }}", &values);
        let names: Vec<&str> = supplied.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["A", "A.B"]);
    }

    #[tokio::test]
    async fn test_extract_bad_reply_is_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(candidate_body("Sure! The variables are A and B."))
            .create_async()
            .await;

        let engine = GenAiEngine::with_api_key(config(&server), "fake-key");
        let result = engine.extract("{{A}} {{B}}").await;
        assert!(matches!(result, Err(TailorError::ModelResponse(_))));
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_request() {
        let engine = GenAiEngine::new(GenAiConfig {
            api_key_env: "TICKET_TAILOR_TEST_UNSET_KEY".into(),
            ..GenAiConfig::default()
        });
        assert!(engine.check_prerequisites().is_err());
        assert!(matches!(
            engine.extract("{{A}}").await,
            Err(TailorError::MissingApiKey(_))
        ));
    }

    #[test]
    fn test_explicit_key_satisfies_prerequisites() {
        let engine = GenAiEngine::with_api_key(GenAiConfig::default(), "k");
        assert!(engine.check_prerequisites().is_ok());
        assert_eq!(engine.name(), "genai");
    }
}
