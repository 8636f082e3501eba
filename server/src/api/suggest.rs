use crate::api::ErrorResponse;
use crate::AppState;
use axum::routing::post;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Form, Json, Router};
use serde::Deserialize;
use souschef_core::suggest_recipe;
use utoipa::{OpenApi, ToSchema};

/// Returns the router for the suggestion endpoint
pub fn router() -> Router<AppState> {
    Router::new().route("/suggest", post(suggest))
}

/// Form body for a suggestion request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SuggestRequest {
    /// Comma-separated ingredients the user has on hand.
    pub ingredients: String,
    /// Dietary preferences, e.g. "vegan, quick". May be omitted.
    #[serde(default)]
    pub preferences: String,
}

/// Suggest a recipe from available ingredients
///
/// Forwards the ingredients and preferences to the configured model and
/// returns the structured suggestion. Stateless: nothing is persisted and
/// identical inputs trigger a fresh generation every time.
#[utoipa::path(
    post,
    path = "/suggest",
    tag = "suggest",
    request_body(
        content = SuggestRequest,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Structured recipe suggestion", body = souschef_core::RecipeSuggestion),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn suggest(
    State(client): State<AppState>,
    Form(request): Form<SuggestRequest>,
) -> impl IntoResponse {
    match suggest_recipe(client.as_ref(), &request.ingredients, &request.preferences).await {
        Ok(result) => (StatusCode::OK, Json(result.suggestion)).into_response(),
        Err(e) => {
            tracing::warn!("Suggestion failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[derive(OpenApi)]
#[openapi(paths(suggest), components(schemas(SuggestRequest)))]
pub struct ApiDoc;
