use crate::api::ErrorResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use forkful_core::ai::{self, ImageData};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RecognizeIngredientsRequest {
    /// Base64-encoded image, with or without a `data:image/...;base64,` prefix
    pub image: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecognizeIngredientsResponse {
    pub ingredients: Vec<String>,
}

/// Split an optional data-URL prefix off a base64 payload, keeping the
/// declared media type. Bare base64 is assumed to be JPEG.
fn parse_image_payload(image: &str) -> ImageData {
    if let Some(rest) = image.strip_prefix("data:") {
        if let Some((media_type, data)) = rest.split_once(";base64,") {
            if !media_type.is_empty() {
                return ImageData::new(media_type, data);
            }
            return ImageData::new("image/jpeg", data);
        }
    }
    ImageData::new("image/jpeg", image)
}

#[utoipa::path(
    post,
    path = "/api/ingredients/recognize",
    tag = "ingredients",
    request_body = RecognizeIngredientsRequest,
    responses(
        (status = 200, description = "Ingredients recognized in the image", body = RecognizeIngredientsResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 429, description = "Provider rate limited", body = ErrorResponse),
        (status = 502, description = "Provider failure", body = ErrorResponse),
        (status = 503, description = "AI provider not configured", body = ErrorResponse)
    )
)]
pub async fn recognize_ingredients(
    State(state): State<AppState>,
    Json(request): Json<RecognizeIngredientsRequest>,
) -> impl IntoResponse {
    if request.image.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Base64 image data is required".to_string(),
            }),
        )
            .into_response();
    }

    let Some(ref client) = state.ai else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "Ingredient recognition is not available. Please set your OpenAI API key."
                    .to_string(),
            }),
        )
            .into_response();
    };

    let image = parse_image_payload(request.image.trim());

    match ai::recognize_ingredients(client.as_ref(), image).await {
        Ok(ingredients) => (
            StatusCode::OK,
            Json(RecognizeIngredientsResponse { ingredients }),
        )
            .into_response(),
        Err(ai::AiError::RateLimited { .. }) => (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorResponse {
                error: "Ingredient recognition is rate limited, try again shortly".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to recognize ingredients: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "Failed to recognize ingredients".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_base64_defaults_to_jpeg() {
        let image = parse_image_payload("QUJD");
        assert_eq!(image.media_type, "image/jpeg");
        assert_eq!(image.base64, "QUJD");
    }

    #[test]
    fn data_url_prefix_is_stripped_and_media_type_kept() {
        let image = parse_image_payload("data:image/png;base64,QUJD");
        assert_eq!(image.media_type, "image/png");
        assert_eq!(image.base64, "QUJD");
    }

    #[test]
    fn data_url_without_media_type_defaults_to_jpeg() {
        let image = parse_image_payload("data:;base64,QUJD");
        assert_eq!(image.media_type, "image/jpeg");
        assert_eq!(image.base64, "QUJD");
    }
}
