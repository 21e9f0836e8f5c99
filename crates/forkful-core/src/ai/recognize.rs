//! Ingredient recognition from a photo.

use serde::Deserialize;

use crate::ai::prompts::{render_recognize_system_prompt, render_recognize_user_prompt};
use crate::ai::{AiClient, AiError, ChatMessage, ChatRequest, ImageData};

/// Response format from the AI.
#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    ingredients: Vec<String>,
}

/// Identify the cooking ingredients visible in a photo.
///
/// Returns an empty list when the model sees no food; that is not an error.
pub async fn recognize_ingredients(
    client: &dyn AiClient,
    image: ImageData,
) -> Result<Vec<String>, AiError> {
    let request = ChatRequest {
        messages: vec![
            ChatMessage::system(render_recognize_system_prompt()),
            ChatMessage::user_with_images(render_recognize_user_prompt(), vec![image]),
        ],
        json_response: true,
        max_tokens: Some(300),
        temperature: None,
    };

    let response = client.complete(request).await?;

    let parsed: RecognizeResponse = serde_json::from_str(&response.content).map_err(|e| {
        AiError::ParseError(format!(
            "Failed to parse ingredient recognition response: {}",
            e
        ))
    })?;

    Ok(parsed.ingredients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::FakeClient;

    fn image() -> ImageData {
        ImageData::new("image/jpeg", "QUJD")
    }

    #[tokio::test]
    async fn parses_recognized_ingredients() {
        let client = FakeClient::with_response(
            "identify all the food ingredients",
            r#"{"ingredients": ["chicken breast", "garlic"]}"#,
        );
        let ingredients = recognize_ingredients(&client, image()).await.unwrap();
        assert_eq!(ingredients, vec!["chicken breast", "garlic"]);
    }

    #[tokio::test]
    async fn missing_ingredients_field_is_empty_list() {
        let client = FakeClient::with_default_response("{}");
        let ingredients = recognize_ingredients(&client, image()).await.unwrap();
        assert!(ingredients.is_empty());
    }

    #[tokio::test]
    async fn malformed_response_is_a_parse_error() {
        let client = FakeClient::with_default_response("oops");
        let result = recognize_ingredients(&client, image()).await;
        assert!(matches!(result, Err(AiError::ParseError(_))));
    }
}
