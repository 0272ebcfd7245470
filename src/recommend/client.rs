//! LLM backend HTTP client
//!
//! One outbound POST per invocation, normalized to plain text. No retry
//! lives here - a malformed or failed reply is surfaced immediately and
//! retry policy, if any, belongs to the caller.

use tracing::debug;

use super::backend::Backend;
use super::dto;

/// Default chat-completions endpoint (primary backend)
const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
/// Default inference endpoint (secondary backend)
const DEFAULT_HF_URL: &str =
    "https://api-inference.huggingface.co/models/mistralai/Mistral-7B-Instruct-v0.2";

/// Chat model used on the primary backend
const CHAT_MODEL: &str = "gpt-4o-mini";
/// System preamble sent ahead of every prompt on the primary backend
const SYSTEM_PROMPT: &str = "You are a music recommendation assistant.";

/// Errors from the recommendation request
#[derive(Debug, Clone, thiserror::Error)]
pub enum RecommendError {
    /// The upstream returned a non-success status or was unreachable
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// The response body wasn't the backend's expected shape (e.g. an HTML
    /// error page where JSON was expected)
    #[error("Backend returned a malformed response: {0}")]
    Malformed(String),
}

/// Client for the selectable LLM backends
pub struct RecommendClient {
    http_client: reqwest::Client,
    openai_url: String,
    hf_url: String,
    openai_api_key: String,
    hf_api_key: String,
}

impl RecommendClient {
    /// Create a client against the default endpoints
    pub fn new(openai_api_key: impl Into<String>, hf_api_key: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            openai_url: DEFAULT_OPENAI_URL.to_string(),
            hf_url: DEFAULT_HF_URL.to_string(),
            openai_api_key: openai_api_key.into(),
            hf_api_key: hf_api_key.into(),
        }
    }

    /// Create a client with custom endpoints (tests, proxies)
    pub fn with_urls(
        openai_url: impl Into<String>,
        hf_url: impl Into<String>,
        openai_api_key: impl Into<String>,
        hf_api_key: impl Into<String>,
    ) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            openai_url: openai_url.into(),
            hf_url: hf_url.into(),
            openai_api_key: openai_api_key.into(),
            hf_api_key: hf_api_key.into(),
        }
    }

    /// Send `prompt` to the chosen backend and return its reply as plain
    /// text. An empty reply is returned as-is; deciding what an empty
    /// recommendation means is the caller's business.
    pub async fn request(&self, prompt: &str, backend: Backend) -> Result<String, RecommendError> {
        debug!(%backend, prompt_len = prompt.len(), "requesting recommendations");
        match backend {
            Backend::OpenAi => self.request_chat(prompt).await,
            Backend::HuggingFace => self.request_inference(prompt).await,
        }
    }

    async fn request_chat(&self, prompt: &str) -> Result<String, RecommendError> {
        let body = dto::ChatRequest {
            model: CHAT_MODEL,
            messages: vec![
                dto::ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                dto::ChatMessage {
                    role: "user",
                    content: prompt.to_string(),
                },
            ],
        };

        let response = self
            .http_client
            .post(&self.openai_url)
            .bearer_auth(&self.openai_api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| RecommendError::Unavailable(e.to_string()))?;

        let text = Self::success_body(response).await?;
        let parsed: dto::ChatResponse = serde_json::from_str(&text)
            .map_err(|e| RecommendError::Malformed(e.to_string()))?;

        Ok(parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default())
    }

    async fn request_inference(&self, prompt: &str) -> Result<String, RecommendError> {
        let body = dto::InferenceRequest {
            inputs: prompt.to_string(),
        };

        let response = self
            .http_client
            .post(&self.hf_url)
            .bearer_auth(&self.hf_api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| RecommendError::Unavailable(e.to_string()))?;

        // The inference API is known to hand back HTML error pages with a
        // 200 status, so the body must be parsed from text rather than
        // trusted as JSON.
        let text = Self::success_body(response).await?;
        let parsed: Vec<dto::GeneratedText> = serde_json::from_str(&text)
            .map_err(|_| RecommendError::Malformed(truncate_for_error(&text)))?;

        Ok(parsed
            .into_iter()
            .next()
            .and_then(|g| g.generated_text)
            .unwrap_or_default())
    }

    /// Check the status and read the body; non-success maps to Unavailable.
    async fn success_body(response: reqwest::Response) -> Result<String, RecommendError> {
        let status = response.status();
        if !status.is_success() {
            return Err(RecommendError::Unavailable(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }
        response
            .text()
            .await
            .map_err(|e| RecommendError::Unavailable(e.to_string()))
    }
}

/// Keep error messages readable when the body is a whole HTML page.
fn truncate_for_error(body: &str) -> String {
    const LIMIT: usize = 120;
    if body.len() <= LIMIT {
        body.to_string()
    } else {
        let mut end = LIMIT;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_uses_defaults() {
        let client = RecommendClient::new("sk-test", "hf-test");
        assert_eq!(client.openai_url, DEFAULT_OPENAI_URL);
        assert_eq!(client.hf_url, DEFAULT_HF_URL);
    }

    #[test]
    fn test_truncate_short_body_unchanged() {
        assert_eq!(truncate_for_error("<html>"), "<html>");
    }

    #[test]
    fn test_truncate_long_body() {
        let body = "x".repeat(500);
        let msg = truncate_for_error(&body);
        assert!(msg.len() < 200);
        assert!(msg.ends_with("..."));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_unavailable() {
        let client = RecommendClient::with_urls(
            "http://127.0.0.1:1/chat",
            "http://127.0.0.1:1/infer",
            "",
            "",
        );
        let err = client.request("prompt", Backend::OpenAi).await.unwrap_err();
        assert!(matches!(err, RecommendError::Unavailable(_)));
        let err = client
            .request("prompt", Backend::HuggingFace)
            .await
            .unwrap_err();
        assert!(matches!(err, RecommendError::Unavailable(_)));
    }
}
