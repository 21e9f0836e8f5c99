use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::Recipe;
use crate::schema::recipes;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Text};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::get::RecipeResponse;

/// Sort field for recipe list
#[derive(Debug, Default, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// Sort by update time
    #[default]
    UpdatedAt,
    /// Random order (useful for "surprise me" discovery)
    Random,
}

/// Sort direction
#[derive(Debug, Default, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Descending (newest first)
    #[default]
    Desc,
    /// Ascending (oldest first)
    Asc,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListRecipesParams {
    /// Number of items to return (default: 20, max: 100)
    pub limit: Option<i64>,
    /// Number of items to skip (default: 0)
    pub offset: Option<i64>,
    /// Filter by cuisine (case-insensitive)
    pub cuisine: Option<String>,
    /// Only return favorited recipes
    pub favorites_only: Option<bool>,
    /// Sort field (default: updated_at)
    #[serde(default)]
    pub sort_by: SortBy,
    /// Sort direction (default: desc). Ignored when sort_by=random.
    #[serde(default)]
    pub sort_dir: Direction,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginationMetadata {
    /// Total number of items available
    pub total: i64,
    /// Number of items requested (limit)
    pub limit: i64,
    /// Number of items skipped (offset)
    pub offset: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListRecipesResponse {
    pub recipes: Vec<RecipeResponse>,
    pub pagination: PaginationMetadata,
}

/// Escape LIKE wildcards in user input.
pub(crate) fn like_escape(input: &str) -> String {
    input.replace('%', "\\%").replace('_', "\\_")
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    params(ListRecipesParams),
    responses(
        (status = 200, description = "List of recipes", body = ListRecipesResponse),
        (status = 400, description = "Invalid parameters", body = ErrorResponse)
    )
)]
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(params): Query<ListRecipesParams>,
) -> impl IntoResponse {
    // Validate and set defaults for pagination
    let limit = params.limit.unwrap_or(20).clamp(1, 100);
    let offset = params.offset.unwrap_or(0).max(0);

    let cuisine_pattern = params.cuisine.as_deref().map(like_escape);

    let pool: &DbPool = &state.pool;
    let mut conn = get_conn!(pool);

    // Build base query with filters
    let mut query = recipes::table.into_boxed();

    if let Some(ref pattern) = cuisine_pattern {
        query = query.filter(recipes::cuisine.ilike(pattern));
    }

    if params.favorites_only.unwrap_or(false) {
        query = query.filter(recipes::is_favorite.eq(true));
    }

    // Apply ordering
    let query = match (params.sort_by, params.sort_dir) {
        (SortBy::Random, _) => query.order(sql::<Text>("RANDOM()")),
        (SortBy::UpdatedAt, Direction::Desc) => query.order(recipes::updated_at.desc()),
        (SortBy::UpdatedAt, Direction::Asc) => query.order(recipes::updated_at.asc()),
    };

    // Get paginated results with total count using window function
    // COUNT(*) OVER() computes the total count across all matching rows
    let results: Vec<(Recipe, i64)> = match query
        .select((Recipe::as_select(), sql::<BigInt>("COUNT(*) OVER()")))
        .limit(limit)
        .offset(offset)
        .load(&mut conn)
    {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to fetch recipes: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipes".to_string(),
                }),
            )
                .into_response();
        }
    };

    // Extract total from first result, or 0 if no results
    let total = results.first().map(|(_, count)| *count).unwrap_or(0);

    let recipes = results
        .into_iter()
        .map(|(recipe, _)| RecipeResponse::from(recipe))
        .collect();

    (
        StatusCode::OK,
        Json(ListRecipesResponse {
            recipes,
            pagination: PaginationMetadata {
                total,
                limit,
                offset,
            },
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_escape_neutralizes_wildcards() {
        assert_eq!(like_escape("100%_italian"), "100\\%\\_italian");
        assert_eq!(like_escape("thai"), "thai");
    }
}
