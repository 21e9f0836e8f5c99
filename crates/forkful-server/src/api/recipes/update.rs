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
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::get::RecipeResponse;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateRecipeRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<Vec<Ingredient>>,
    pub instructions: Option<String>,
    pub cook_time_minutes: Option<i32>,
    pub servings: Option<i32>,
    pub difficulty: Option<String>,
    pub cuisine: Option<String>,
    pub image_url: Option<String>,
}

/// Only fields present in the request are written; `updated_at` always is.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::recipes)]
struct RecipeChangeset<'a> {
    title: Option<&'a str>,
    description: Option<&'a str>,
    ingredients: Option<serde_json::Value>,
    instructions: Option<&'a str>,
    cook_time_minutes: Option<i32>,
    servings: Option<i32>,
    difficulty: Option<&'a str>,
    cuisine: Option<&'a str>,
    image_url: Option<&'a str>,
    updated_at: DateTime<Utc>,
}

#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 200, description = "Recipe updated successfully", body = RecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRecipeRequest>,
) -> impl IntoResponse {
    if let Some(ref title) = request.title {
        if title.trim().is_empty() {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Title cannot be empty".to_string(),
                }),
            )
                .into_response();
        }
    }

    if let Some(ref instructions) = request.instructions {
        if instructions.trim().is_empty() {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Instructions cannot be empty".to_string(),
                }),
            )
                .into_response();
        }
    }

    let ingredients_json = match request.ingredients.as_ref().map(serde_json::to_value) {
        Some(Ok(v)) => Some(v),
        Some(Err(_)) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Invalid ingredients format".to_string(),
                }),
            )
                .into_response();
        }
        None => None,
    };

    let changeset = RecipeChangeset {
        title: request.title.as_deref(),
        description: request.description.as_deref(),
        ingredients: ingredients_json,
        instructions: request.instructions.as_deref(),
        cook_time_minutes: request.cook_time_minutes,
        servings: request.servings,
        difficulty: request.difficulty.as_deref(),
        cuisine: request.cuisine.as_deref(),
        image_url: request.image_url.as_deref(),
        updated_at: Utc::now(),
    };

    let pool: &DbPool = &state.pool;
    let mut conn = get_conn!(pool);

    let updated: Result<Recipe, diesel::result::Error> =
        diesel::update(recipes::table.find(id))
            .set(&changeset)
            .returning(Recipe::as_returning())
            .get_result(&mut conn);

    match updated {
        Ok(recipe) => (StatusCode::OK, Json(RecipeResponse::from(recipe))).into_response(),
        Err(diesel::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Recipe not found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to update recipe: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
