use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::SuccessResponse;
use crate::modules::messages::model::{ContactDto, ContactMessage};
use crate::modules::messages::service::MessageService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Leave a message through the contact form
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactDto,
    responses(
        (status = 200, description = "Message recorded", body = SuccessResponse),
        (status = 400, description = "Required fields missing", body = ErrorResponse)
    ),
    tag = "Messages"
)]
#[instrument(skip(state, dto))]
pub async fn create_message(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ContactDto>,
) -> Result<Json<SuccessResponse>, AppError> {
    MessageService::create_message(&state.db, dto).await?;
    Ok(Json(SuccessResponse { success: true }))
}

/// List contact messages
#[utoipa::path(
    get,
    path = "/api/admin/messages",
    responses(
        (status = 200, description = "Messages, newest first", body = Vec<ContactMessage>),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Messages"
)]
#[instrument(skip(state))]
pub async fn get_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactMessage>>, AppError> {
    let messages = MessageService::get_messages(&state.db).await?;
    Ok(Json(messages))
}

/// Mark a message as read
#[utoipa::path(
    patch,
    path = "/api/admin/messages/{id}/read",
    params(("id" = Uuid, Path, description = "Message id")),
    responses(
        (status = 200, description = "Marked read", body = SuccessResponse),
        (status = 404, description = "Message not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Messages"
)]
#[instrument(skip(state))]
pub async fn mark_message_read(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SuccessResponse>, AppError> {
    MessageService::mark_read(&state.db, id).await?;
    Ok(Json(SuccessResponse { success: true }))
}
