use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::Recipe;
use crate::schema::recipes;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use forkful_core::CandidateRecipe;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;
use uuid::Uuid;

use super::get::RecipeResponse;
use super::list::like_escape;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SearchRecipesRequest {
    /// The user's ingredients, free text
    pub ingredients: Vec<String>,
    /// Number of results to return (default: 6, max: 50)
    pub limit: Option<i64>,
    /// Restrict candidates to one cuisine (case-insensitive)
    pub cuisine: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeMatch {
    pub recipe: RecipeResponse,
    /// Number of distinct query ingredients found in this recipe
    pub match_count: usize,
    /// match_count divided by the number of query ingredients
    pub match_percentage: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchRecipesResponse {
    pub recipes: Vec<RecipeMatch>,
}

/// Pull the ingredient names out of a stored jsonb ingredient list.
///
/// Rows written through the API hold `[{"name": ..., "amount": ...}]`;
/// imported datasets sometimes hold plain string arrays. Accept both.
fn ingredient_names(value: &serde_json::Value) -> Vec<String> {
    let Some(entries) = value.as_array() else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            entry
                .as_str()
                .or_else(|| entry.get("name").and_then(|n| n.as_str()))
                .map(|s| s.to_string())
        })
        .collect()
}

#[utoipa::path(
    post,
    path = "/api/recipes/search",
    tag = "recipes",
    request_body = SearchRecipesRequest,
    responses(
        (status = 200, description = "Recipes ranked by ingredient overlap", body = SearchRecipesResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    )
)]
pub async fn search_recipes(
    State(state): State<AppState>,
    Json(request): Json<SearchRecipesRequest>,
) -> impl IntoResponse {
    let limit = request.limit.unwrap_or(6).clamp(0, 50) as usize;

    let cuisine_pattern = request.cuisine.as_deref().map(like_escape);

    let pool: &DbPool = &state.pool;
    let mut conn = get_conn!(pool);

    // Materialize the candidate snapshot. The ranker works over an in-memory
    // sequence; upstream I/O failures are ours to report, not the ranker's.
    let mut query = recipes::table.into_boxed();
    if let Some(ref pattern) = cuisine_pattern {
        query = query.filter(recipes::cuisine.ilike(pattern));
    }

    let rows: Vec<Recipe> = match query
        .order(recipes::created_at.asc())
        .select(Recipe::as_select())
        .load(&mut conn)
    {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to load search candidates: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to search recipes".to_string(),
                }),
            )
                .into_response();
        }
    };

    let candidates: Vec<CandidateRecipe> = rows
        .iter()
        .map(|row| CandidateRecipe {
            id: row.id,
            cuisine: row.cuisine.clone(),
            ingredients: ingredient_names(&row.ingredients),
        })
        .collect();

    let ranked = forkful_core::rank(&candidates, &request.ingredients, limit);

    // Decorate ranked candidates with their full rows, preserving rank order.
    let mut rows_by_id: HashMap<Uuid, Recipe> =
        rows.into_iter().map(|row| (row.id, row)).collect();

    let matches: Vec<RecipeMatch> = ranked
        .into_iter()
        .filter_map(|result| {
            rows_by_id.remove(&result.candidate.id).map(|row| RecipeMatch {
                recipe: RecipeResponse::from(row),
                match_count: result.match_count,
                match_percentage: result.match_percentage,
            })
        })
        .collect();

    (
        StatusCode::OK,
        Json(SearchRecipesResponse { recipes: matches }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ingredient_names_reads_object_entries() {
        let value = json!([
            {"name": "chicken breast", "amount": "500 g"},
            {"name": "garlic"}
        ]);
        assert_eq!(ingredient_names(&value), vec!["chicken breast", "garlic"]);
    }

    #[test]
    fn ingredient_names_reads_plain_strings() {
        let value = json!(["chicken breast", "garlic"]);
        assert_eq!(ingredient_names(&value), vec!["chicken breast", "garlic"]);
    }

    #[test]
    fn ingredient_names_skips_malformed_entries() {
        let value = json!([{"amount": "1 cup"}, 42, "rice"]);
        assert_eq!(ingredient_names(&value), vec!["rice"]);
    }

    #[test]
    fn ingredient_names_of_non_array_is_empty() {
        assert!(ingredient_names(&json!({"name": "rice"})).is_empty());
        assert!(ingredient_names(&json!(null)).is_empty());
    }
}
