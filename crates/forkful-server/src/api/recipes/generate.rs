use crate::api::ErrorResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use forkful_core::ai::{self, AiError};
use forkful_core::{GeneratedIngredient, GeneratedRecipe};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GenerateRecipesRequest {
    /// The user's ingredients, free text
    pub ingredients: Vec<String>,
    /// Free-text dietary hint, e.g. "vegetarian"
    pub dietary_preferences: Option<String>,
    /// Free-text time hint, e.g. "under 30 minutes"
    pub cooking_time: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GeneratedIngredientResponse {
    pub name: String,
    pub amount: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GeneratedRecipeResponse {
    pub title: String,
    pub description: String,
    pub cook_time: String,
    pub servings: String,
    pub difficulty: String,
    pub ingredients: Vec<GeneratedIngredientResponse>,
    pub instructions: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GenerateRecipesResponse {
    pub recipes: Vec<GeneratedRecipeResponse>,
}

impl From<GeneratedIngredient> for GeneratedIngredientResponse {
    fn from(ingredient: GeneratedIngredient) -> Self {
        Self {
            name: ingredient.name,
            amount: ingredient.amount,
        }
    }
}

impl From<GeneratedRecipe> for GeneratedRecipeResponse {
    fn from(recipe: GeneratedRecipe) -> Self {
        Self {
            title: recipe.title,
            description: recipe.description,
            cook_time: recipe.cook_time,
            servings: recipe.servings,
            difficulty: recipe.difficulty,
            ingredients: recipe.ingredients.into_iter().map(Into::into).collect(),
            instructions: recipe.instructions,
            tags: recipe.tags,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/recipes/generate",
    tag = "recipes",
    request_body = GenerateRecipesRequest,
    responses(
        (status = 200, description = "Generated recipes", body = GenerateRecipesResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 429, description = "Provider rate limited", body = ErrorResponse),
        (status = 502, description = "Provider failure", body = ErrorResponse),
        (status = 503, description = "AI provider not configured", body = ErrorResponse)
    )
)]
pub async fn generate_recipes(
    State(state): State<AppState>,
    Json(request): Json<GenerateRecipesRequest>,
) -> impl IntoResponse {
    if request.ingredients.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No ingredients provided".to_string(),
            }),
        )
            .into_response();
    }

    let Some(ref client) = state.ai else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "Recipe generation is not available. Please set your OpenAI API key."
                    .to_string(),
            }),
        )
            .into_response();
    };

    let generated = ai::generate_recipes(
        client.as_ref(),
        &request.ingredients,
        request.dietary_preferences.as_deref(),
        request.cooking_time.as_deref(),
    )
    .await;

    match generated {
        Ok(recipes) => (
            StatusCode::OK,
            Json(GenerateRecipesResponse {
                recipes: recipes.into_iter().map(Into::into).collect(),
            }),
        )
            .into_response(),
        Err(AiError::RateLimited { .. }) => (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorResponse {
                error: "Recipe generation is rate limited, try again shortly".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to generate recipes: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "Failed to generate recipes".to_string(),
                }),
            )
                .into_response()
        }
    }
}
