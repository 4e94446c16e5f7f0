use axum::{extract::State, Json};

use crate::models::{GenerateResponse, PromptRequest};
use crate::startup::AppState;

/// `POST /api/generate`.
///
/// Forwards the prompt to the generator and wraps whatever comes back in
/// a single-field body. Always answers 200; upstream failures arrive as
/// sentinel strings inside `code`, not as HTTP error statuses.
#[tracing::instrument(skip(state, request))]
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<PromptRequest>,
) -> Json<GenerateResponse> {
    let code = state.generator.generate_code(&request.prompt).await;

    Json(GenerateResponse { code })
}
