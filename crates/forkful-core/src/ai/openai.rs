//! OpenAI-compatible chat-completions client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::types::{ChatMessage, ChatRequest, ChatResponse, Role, Usage};
use super::{AiClient, AiConfig, AiError};

/// Chat-completions client for OpenAI-compatible APIs.
#[derive(Debug)]
pub struct OpenAiClient {
    config: AiConfig,
    client: reqwest::Client,
}

impl OpenAiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

/// Wire request format.
#[derive(Debug, Serialize)]
struct WireRequest {
    model: String,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<WireResponseFormat>,
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: &'static str,
    content: WireContent,
}

/// Message content: a plain string, or parts when images are attached.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum WireContent {
    Text(String),
    Parts(Vec<WirePart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
enum WirePart {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: WireImageUrl },
}

#[derive(Debug, Serialize)]
struct WireImageUrl {
    url: String,
}

#[derive(Debug, Serialize)]
struct WireResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

/// Wire response format.
#[derive(Debug, Deserialize)]
struct WireResponse {
    choices: Vec<WireChoice>,
    #[serde(default)]
    usage: Option<WireUsage>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct WireChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct WireUsage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
    #[serde(default)]
    total_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct WireApiError {
    message: String,
}

/// Error envelope from the API.
#[derive(Debug, Deserialize)]
struct WireErrorResponse {
    error: WireApiError,
}

fn to_wire_message(message: &ChatMessage) -> WireMessage {
    let role = match message.role {
        Role::System => "system",
        Role::User => "user",
        Role::Assistant => "assistant",
    };

    let content = if message.images.is_empty() {
        WireContent::Text(message.content.clone())
    } else {
        let mut parts = vec![WirePart::Text {
            text: message.content.clone(),
        }];
        parts.extend(message.images.iter().map(|image| WirePart::ImageUrl {
            image_url: WireImageUrl {
                url: image.to_data_url(),
            },
        }));
        WireContent::Parts(parts)
    };

    WireMessage { role, content }
}

#[async_trait]
impl AiClient for OpenAiClient {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, AiError> {
        let wire_request = WireRequest {
            model: self.config.model.clone(),
            messages: request.messages.iter().map(to_wire_message).collect(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            response_format: request.json_response.then_some(WireResponseFormat {
                format_type: "json_object",
            }),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| AiError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();

        if status == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(AiError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| AiError::RequestFailed(e.to_string()))?;

        if status != 200 {
            if let Ok(error_response) = serde_json::from_str::<WireErrorResponse>(&body) {
                return Err(AiError::ApiError {
                    status,
                    message: error_response.error.message,
                });
            }
            return Err(AiError::ApiError {
                status,
                message: body,
            });
        }

        let response: WireResponse =
            serde_json::from_str(&body).map_err(|e| AiError::ParseError(e.to_string()))?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| AiError::ParseError("No content in response".to_string()))?;

        let usage = response.usage.unwrap_or_default();

        Ok(ChatResponse {
            content,
            usage: Usage {
                prompt_tokens: usage.prompt_tokens,
                completion_tokens: usage.completion_tokens,
                total_tokens: usage.total_tokens,
            },
        })
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::ImageData;

    #[test]
    fn text_only_message_serializes_as_string_content() {
        let wire = to_wire_message(&ChatMessage::user("hello"));
        let json = serde_json::to_value(&wire).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "hello");
    }

    #[test]
    fn image_message_serializes_as_content_parts() {
        let message = ChatMessage::user_with_images(
            "what is in this photo?",
            vec![ImageData::new("image/jpeg", "QUJD")],
        );
        let json = serde_json::to_value(to_wire_message(&message)).unwrap();

        let parts = json["content"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["type"], "text");
        assert_eq!(parts[1]["type"], "image_url");
        assert_eq!(
            parts[1]["image_url"]["url"],
            "data:image/jpeg;base64,QUJD"
        );
    }

    #[test]
    fn json_mode_sets_response_format() {
        let wire_request = WireRequest {
            model: "gpt-4o".to_string(),
            messages: vec![],
            max_tokens: None,
            temperature: None,
            response_format: Some(WireResponseFormat {
                format_type: "json_object",
            }),
        };
        let json = serde_json::to_value(&wire_request).unwrap();
        assert_eq!(json["response_format"]["type"], "json_object");
        assert!(json.get("max_tokens").is_none());
    }
}
