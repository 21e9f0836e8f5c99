//! Fake AI client for testing.
//!
//! Returns deterministic responses based on prompt matching, allowing tests
//! to run without network access or API costs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use super::types::{ChatRequest, ChatResponse, Usage};
use super::{AiClient, AiError};

/// A fake AI client for testing.
///
/// Responses are matched by checking if any message in the request contains a
/// registered substring. If no match is found, returns the default response
/// or an error.
#[derive(Debug, Default)]
pub struct FakeClient {
    /// Map of prompt substring -> response
    responses: RwLock<HashMap<String, String>>,
    /// Default response if no match found
    default_response: Option<String>,
}

impl FakeClient {
    /// Create a new FakeClient with no registered responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a FakeClient that returns a specific response for prompts
    /// containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut client = Self::new();
        client.add_response(prompt_contains, response);
        client
    }

    /// Create a FakeClient that returns the same response for everything.
    pub fn with_default_response(response: &str) -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: Some(response.to_string()),
        }
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(prompt_contains.to_string(), response.to_string());
    }
}

#[async_trait]
impl AiClient for FakeClient {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, AiError> {
        let prompt: String = request
            .messages
            .iter()
            .map(|m| m.content.to_lowercase())
            .collect::<Vec<_>>()
            .join("\n");

        let responses = self.responses.read().unwrap();
        let matched = responses
            .iter()
            .find(|(pattern, _)| prompt.contains(&pattern.to_lowercase()))
            .map(|(_, response)| response.clone())
            .or_else(|| self.default_response.clone());

        match matched {
            Some(content) => Ok(ChatResponse {
                content,
                usage: Usage::default(),
            }),
            None => Err(AiError::RequestFailed(
                "FakeClient has no response for this prompt".to_string(),
            )),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::ChatMessage;

    fn request(content: &str) -> ChatRequest {
        ChatRequest {
            messages: vec![ChatMessage::user(content)],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn returns_registered_response_on_substring_match() {
        let client = FakeClient::with_response("recipes", r#"{"recipes": []}"#);
        let response = client.complete(request("Generate 3 recipes")).await.unwrap();
        assert_eq!(response.content, r#"{"recipes": []}"#);
    }

    #[tokio::test]
    async fn matching_is_case_insensitive() {
        let client = FakeClient::with_response("RECIPES", "ok");
        let response = client.complete(request("some recipes please")).await.unwrap();
        assert_eq!(response.content, "ok");
    }

    #[tokio::test]
    async fn falls_back_to_default_response() {
        let client = FakeClient::with_default_response("{}");
        let response = client.complete(request("anything")).await.unwrap();
        assert_eq!(response.content, "{}");
    }

    #[tokio::test]
    async fn errors_without_match_or_default() {
        let client = FakeClient::new();
        let result = client.complete(request("anything")).await;
        assert!(matches!(result, Err(AiError::RequestFailed(_))));
    }
}
