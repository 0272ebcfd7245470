//! LLM backend Data Transfer Objects
//!
//! The two backends speak different dialects:
//! - the chat backend takes a role-tagged message list and answers with a
//!   `choices` array;
//! - the inference backend takes `{"inputs": ...}` and answers with an
//!   array of `{"generated_text": ...}` objects.

use serde::{Deserialize, Serialize};

/// A role-tagged chat message
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    /// "system" or "user"
    pub role: &'static str,
    /// Message text
    pub content: String,
}

/// Chat-completions request body
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier
    pub model: &'static str,
    /// Conversation so far (system preamble + user prompt)
    pub messages: Vec<ChatMessage>,
}

/// Chat-completions response body
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Completion candidates; the first one is used
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// One completion candidate
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The assistant's reply
    pub message: ChatReply,
}

/// The assistant message inside a choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    /// Reply text; the API may omit it on filtered completions
    #[serde(default)]
    pub content: Option<String>,
}

/// Inference API request body
#[derive(Debug, Clone, Serialize)]
pub struct InferenceRequest {
    /// The raw prompt
    pub inputs: String,
}

/// One element of the inference API response array
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedText {
    /// Generated continuation of the prompt
    #[serde(default)]
    pub generated_text: Option<String>,
}

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_chat_response() {
        let json = r#"{
            "choices": [
                { "message": { "role": "assistant", "content": "1. Song by Artist" } }
            ]
        }"#;

        let response: ChatResponse = serde_json::from_str(json).expect("Should parse chat reply");
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("1. Song by Artist")
        );
    }

    #[test]
    fn test_parse_chat_response_without_choices() {
        let response: ChatResponse = serde_json::from_str("{}").expect("Should tolerate no choices");
        assert!(response.choices.is_empty());
    }

    #[test]
    fn test_parse_inference_response() {
        let json = r#"[{ "generated_text": "Imagine by John Lennon" }]"#;
        let items: Vec<GeneratedText> =
            serde_json::from_str(json).expect("Should parse inference reply");
        assert_eq!(
            items[0].generated_text.as_deref(),
            Some("Imagine by John Lennon")
        );
    }

    #[test]
    fn test_chat_request_serializes_roles() {
        let request = ChatRequest {
            model: "gpt-4o-mini",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You are a music recommendation assistant.".to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: "recommend something".to_string(),
                },
            ],
        };
        let json = serde_json::to_string(&request).expect("Should serialize");
        assert!(json.contains(r#""role":"system""#));
        assert!(json.contains(r#""role":"user""#));
    }
}
