pub mod create;
pub mod delete;
pub mod favorite;
pub mod generate;
pub mod get;
pub mod list;
pub mod search;
pub mod update;

use crate::AppState;
use axum::routing::{get, patch, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route("/search", post(search::search_recipes))
        .route("/generate", post(generate::generate_recipes))
        .route(
            "/{id}",
            get(get::get_recipe)
                .put(update::update_recipe)
                .delete(delete::delete_recipe),
        )
        .route("/{id}/favorite", patch(favorite::toggle_favorite))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_recipe,
        list::list_recipes,
        get::get_recipe,
        update::update_recipe,
        delete::delete_recipe,
        favorite::toggle_favorite,
        search::search_recipes,
        generate::generate_recipes,
    ),
    components(schemas(
        create::CreateRecipeRequest,
        create::CreateRecipeResponse,
        list::ListRecipesResponse,
        list::PaginationMetadata,
        list::SortBy,
        list::Direction,
        get::RecipeResponse,
        update::UpdateRecipeRequest,
        search::SearchRecipesRequest,
        search::SearchRecipesResponse,
        search::RecipeMatch,
        generate::GenerateRecipesRequest,
        generate::GenerateRecipesResponse,
        generate::GeneratedRecipeResponse,
        generate::GeneratedIngredientResponse,
    ))
)]
pub struct ApiDoc;
