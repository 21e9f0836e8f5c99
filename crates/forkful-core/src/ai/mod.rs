//! AI provider abstraction for recipe generation and ingredient recognition.
//!
//! This module provides a trait-based abstraction over chat-completion
//! providers, an OpenAI-compatible implementation, and a fake implementation
//! for tests.
//!
//! # Configuration
//!
//! - `FORKFUL_AI_PROVIDER`: "openai" | "fake" (default: "openai")
//! - `OPENAI_API_KEY`: API key (required for the openai provider)
//! - `FORKFUL_AI_MODEL`: Model name (default: "gpt-4o")
//! - `FORKFUL_AI_BASE_URL`: API base URL (default: "https://api.openai.com/v1")

mod config;
mod fake;
mod generate;
mod openai;
pub mod prompts;
mod recognize;
mod types;

pub use config::{AiConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use fake::FakeClient;
pub use generate::generate_recipes;
pub use openai::OpenAiClient;
pub use recognize::recognize_ingredients;
pub use types::{ChatMessage, ChatRequest, ChatResponse, ImageData, Role, Usage};

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for AI operations.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Trait for chat-completion providers.
///
/// Implementations should be stateless and thread-safe. The provider is
/// responsible for making the API call and returning the model's text
/// response.
#[async_trait]
pub trait AiClient: Send + Sync + fmt::Debug {
    /// Send a chat request and get the model's text response.
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, AiError>;

    /// Get the provider name (e.g., "openai", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name (e.g., "gpt-4o").
    fn model_name(&self) -> &str;
}

/// Create a provider from environment variables.
///
/// Returns [`AiError::NotConfigured`] when the selected provider is missing
/// its configuration; callers decide whether that is fatal (the server keeps
/// running and answers AI endpoints with 503).
pub fn create_client_from_env() -> Result<Box<dyn AiClient>, AiError> {
    let provider = std::env::var("FORKFUL_AI_PROVIDER").unwrap_or_else(|_| "openai".to_string());

    match provider.as_str() {
        "fake" => Ok(Box::new(FakeClient::with_default_response("{}"))),
        "openai" => {
            let config = AiConfig::from_env().map_err(|e| AiError::NotConfigured(e.to_string()))?;
            Ok(Box::new(OpenAiClient::new(config)))
        }
        other => Err(AiError::NotConfigured(format!(
            "Unknown provider: {}",
            other
        ))),
    }
}
