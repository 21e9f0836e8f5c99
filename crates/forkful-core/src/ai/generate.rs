//! Recipe generation from a list of ingredients.

use serde::Deserialize;

use crate::ai::prompts::{render_generate_system_prompt, render_generate_user_prompt};
use crate::ai::{AiClient, AiError, ChatMessage, ChatRequest};
use crate::types::GeneratedRecipe;

/// Response format from the AI.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    recipes: Vec<GeneratedRecipe>,
}

/// Generate recipes from the user's ingredients.
///
/// `dietary_preferences` and `cooking_time` are free-text hints forwarded
/// into the prompt. The model is asked for exactly three recipes but the
/// response is taken as-is; an empty list is valid.
pub async fn generate_recipes(
    client: &dyn AiClient,
    ingredients: &[String],
    dietary_preferences: Option<&str>,
    cooking_time: Option<&str>,
) -> Result<Vec<GeneratedRecipe>, AiError> {
    let request = ChatRequest {
        messages: vec![
            ChatMessage::system(render_generate_system_prompt()),
            ChatMessage::user(render_generate_user_prompt(
                ingredients,
                dietary_preferences,
                cooking_time,
            )),
        ],
        json_response: true,
        max_tokens: Some(2048),
        temperature: None,
    };

    let response = client.complete(request).await?;

    let parsed: GenerateResponse = serde_json::from_str(&response.content).map_err(|e| {
        AiError::ParseError(format!("Failed to parse recipe generation response: {}", e))
    })?;

    Ok(parsed.recipes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::FakeClient;

    const FAKE_RESPONSE: &str = r#"{
        "recipes": [
            {
                "title": "Garlic Chicken",
                "description": "Pan-seared chicken with garlic.",
                "cook_time": "25 minutes",
                "servings": "4 servings",
                "difficulty": "Easy",
                "ingredients": [
                    {"name": "chicken breast", "amount": "500 g"},
                    {"name": "garlic", "amount": "4 cloves"}
                ],
                "instructions": ["Season the chicken.", "Sear until cooked through."],
                "tags": ["dinner", "quick"]
            }
        ]
    }"#;

    #[tokio::test]
    async fn parses_generated_recipes() {
        let client = FakeClient::with_response("Generate 3 unique", FAKE_RESPONSE);
        let recipes = generate_recipes(&client, &["chicken".to_string()], None, None)
            .await
            .unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Garlic Chicken");
        assert_eq!(recipes[0].ingredients.len(), 2);
        assert_eq!(recipes[0].instructions.len(), 2);
        assert_eq!(recipes[0].tags, vec!["dinner", "quick"]);
    }

    #[tokio::test]
    async fn missing_tags_defaults_to_empty() {
        let response = r#"{
            "recipes": [{
                "title": "Plain Rice",
                "description": "Just rice.",
                "cook_time": "15 minutes",
                "servings": "2 servings",
                "difficulty": "Easy",
                "ingredients": [{"name": "rice", "amount": "1 cup"}],
                "instructions": ["Boil the rice."]
            }]
        }"#;
        let client = FakeClient::with_default_response(response);
        let recipes = generate_recipes(&client, &["rice".to_string()], None, None)
            .await
            .unwrap();
        assert!(recipes[0].tags.is_empty());
    }

    #[tokio::test]
    async fn malformed_response_is_a_parse_error() {
        let client = FakeClient::with_default_response("not json");
        let result = generate_recipes(&client, &["rice".to_string()], None, None).await;
        assert!(matches!(result, Err(AiError::ParseError(_))));
    }
}
