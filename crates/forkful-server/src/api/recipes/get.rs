use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{Ingredient, Recipe};
use crate::schema::recipes;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Full recipe representation returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub ingredients: Vec<Ingredient>,
    pub instructions: String,
    pub cook_time_minutes: Option<i32>,
    pub servings: Option<i32>,
    pub difficulty: Option<String>,
    pub cuisine: Option<String>,
    pub image_url: Option<String>,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        // Tolerate malformed rows rather than failing the whole response.
        let ingredients: Vec<Ingredient> =
            serde_json::from_value(recipe.ingredients).unwrap_or_default();

        Self {
            id: recipe.id,
            title: recipe.title,
            description: recipe.description,
            ingredients,
            instructions: recipe.instructions,
            cook_time_minutes: recipe.cook_time_minutes,
            servings: recipe.servings,
            difficulty: recipe.difficulty,
            cuisine: recipe.cuisine,
            image_url: recipe.image_url,
            is_favorite: recipe.is_favorite,
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "The recipe", body = RecipeResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let pool: &DbPool = &state.pool;
    let mut conn = get_conn!(pool);

    let recipe: Option<Recipe> = match recipes::table
        .find(id)
        .select(Recipe::as_select())
        .first(&mut conn)
        .optional()
    {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to fetch recipe: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipe".to_string(),
                }),
            )
                .into_response();
        }
    };

    match recipe {
        Some(recipe) => (StatusCode::OK, Json(RecipeResponse::from(recipe))).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Recipe not found".to_string(),
            }),
        )
            .into_response(),
    }
}
