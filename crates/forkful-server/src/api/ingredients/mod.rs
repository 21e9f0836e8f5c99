pub mod recognize;

use crate::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/ingredients endpoints (mounted at /api/ingredients)
pub fn router() -> Router<AppState> {
    Router::new().route("/recognize", post(recognize::recognize_ingredients))
}

#[derive(OpenApi)]
#[openapi(
    paths(recognize::recognize_ingredients),
    components(schemas(
        recognize::RecognizeIngredientsRequest,
        recognize::RecognizeIngredientsResponse,
    ))
)]
pub struct ApiDoc;
