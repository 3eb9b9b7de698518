//! Single-attempt caller for the generative language API.

use std::env;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::GeminiError;

/// Model used when `GEMINI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gemini-pro";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// What one model invocation produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelOutput {
    /// The candidate text parsed as a JSON object.
    Structured(serde_json::Value),
    /// The candidate text was not JSON; carried verbatim so the fallback
    /// layer can decide what to do with it.
    Unstructured(String),
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

/// Client for the generative language completion endpoint.
///
/// One request per call; no retries and no timeout. Callers that hold no
/// API key must not construct this client — the heuristic fallback handles
/// that path.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Build a client from the environment, if an API key is configured.
    ///
    /// `GEMINI_API_KEY` is preferred; `OPENAI_API_KEY` is accepted as a
    /// legacy alias. `GEMINI_MODEL` overrides [`DEFAULT_MODEL`].
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("OPENAI_API_KEY"))
            .ok()?;
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Some(Self::new(api_key, model))
    }

    /// Point the client at a different endpoint. Test seam.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Issue one `generateContent` request and classify the first
    /// candidate's text.
    ///
    /// Transport failures and non-2xx statuses are returned as errors for
    /// the caller to absorb; an empty candidate list is an error too.
    pub async fn generate(&self, prompt: &str) -> Result<ModelOutput, GeminiError> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self.http.post(&url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or(GeminiError::EmptyResponse)?;

        info!(model = %self.model, text_len = text.len(), "model responded");

        Ok(classify_candidate_text(text))
    }
}

/// Parse candidate text as JSON if possible; otherwise carry it verbatim.
pub fn classify_candidate_text(text: String) -> ModelOutput {
    match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(value) => ModelOutput::Structured(value),
        Err(_) => ModelOutput::Unstructured(text),
    }
}
