//! Gemini `generateContent` client using reqwest.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use ticket_tailor_core::config::GenAiConfig;
use ticket_tailor_core::error::{Result, TailorError};

const X_GOOG_API_KEY: &str = "x-goog-api-key";

/// HTTP client for the Generative Language API.
#[derive(Clone)]
pub struct GeminiClient {
    api_key: String,
    api_url: Url,
    model: String,
    max_retries: u32,
    retry_delay_ms: u64,
    client: Client,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("max_retries", &self.max_retries)
            .field("retry_delay_ms", &self.retry_delay_ms)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Outcome of a single attempt that did not succeed.
enum SendError {
    Retryable(String),
    Fatal(TailorError),
}

impl GeminiClient {
    /// Create a client with an explicit API key.
    pub fn new(api_key: String, config: &GenAiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TailorError::ModelRequest(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            api_key,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            max_retries: config.max_retries,
            retry_delay_ms: config.retry_delay_ms,
            client,
        })
    }

    /// Create a client reading the API key from `config.api_key_env`.
    pub fn from_env(config: &GenAiConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| TailorError::MissingApiKey(config.api_key_env.clone()))?;
        Self::new(api_key, config)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_url.as_str().trim_end_matches('/'),
            self.model
        )
    }

    /// Send `prompt` as a single user turn and return the reply text.
    ///
    /// 429, 5xx and transport failures are retried with exponential backoff;
    /// any other error status fails immediately.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                temperature: 0.0,
            },
        };

        let max_attempts = self.max_retries.max(1);
        let mut last_error = None;

        for attempt in 0..max_attempts {
            if attempt > 0 {
                let delay = backoff_delay_ms(self.retry_delay_ms, attempt);
                tracing::info!("retrying model request (attempt {}/{max_attempts})", attempt + 1);
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }

            match self.send_request(&request).await {
                Ok(text) => return Ok(text),
                Err(SendError::Retryable(msg)) => {
                    tracing::warn!("model request failed: {msg}");
                    last_error = Some(msg);
                }
                Err(SendError::Fatal(e)) => return Err(e),
            }
        }

        Err(TailorError::ModelRequest(last_error.unwrap_or_else(|| {
            "request failed after all retries".to_string()
        })))
    }

    async fn send_request(
        &self,
        request: &GenerateRequest<'_>,
    ) -> std::result::Result<String, SendError> {
        let response = self
            .client
            .post(self.endpoint())
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| SendError::Retryable(format!("HTTP request failed: {e}")))?;

        let status = response.status();

        if status.is_success() {
            let body: GenerateResponse = response.json().await.map_err(|e| {
                SendError::Fatal(TailorError::ModelResponse(format!(
                    "failed to parse response: {e}"
                )))
            })?;
            let text: String = body
                .candidates
                .into_iter()
                .next()
                .and_then(|c| c.content)
                .map(|c| c.parts.into_iter().map(|p| p.text).collect::<String>())
                .unwrap_or_default();
            if text.trim().is_empty() {
                return Err(SendError::Fatal(TailorError::ModelResponse(
                    "response contained no text".into(),
                )));
            }
            Ok(text)
        } else if status.as_u16() == 429 {
            Err(SendError::Retryable("rate limited (429)".into()))
        } else if status.is_server_error() {
            Err(SendError::Retryable(format!("server error ({})", status.as_u16())))
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            Err(SendError::Fatal(TailorError::ModelRequest(format!(
                "API error ({}): {error_text}",
                status.as_u16()
            ))))
        }
    }
}

/// Delay before retry `attempt` (1-based): `base * 2^(attempt-1)`, saturating at `u64::MAX`.
fn backoff_delay_ms(base_ms: u64, attempt: u32) -> u64 {
    let factor = 2_u64
        .checked_pow(attempt.saturating_sub(1))
        .unwrap_or(u64::MAX);
    base_ms.saturating_mul(factor)
}
