use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::cache::normalize_role;
use super::model::{AskRequest, AskResponse};
use super::service::gather_context;

/// Ask the academy assistant a question
#[utoipa::path(
    post,
    path = "/api/ai-assistant",
    request_body = AskRequest,
    responses(
        (status = 200, description = "Answer (cached or freshly generated)", body = AskResponse),
        (status = 422, description = "Missing question", body = ErrorResponse),
        (status = 502, description = "Generation service failure", body = ErrorResponse)
    ),
    tag = "Assistant"
)]
#[instrument(skip(state, dto))]
pub async fn ask_assistant(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let role = normalize_role(dto.role.as_deref()).to_string();

    let response = state
        .assistant
        .ask(&dto.question, dto.role.as_deref(), || {
            gather_context(&state.db, &role)
        })
        .await?;

    Ok(Json(AskResponse { response }))
}
