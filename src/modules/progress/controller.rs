use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::SuccessResponse;
use crate::modules::progress::model::{ProgressWithLesson, UpdateProgressDto};
use crate::modules::progress::service::ProgressService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// The calling student's progress across all tracked lessons
#[utoipa::path(
    get,
    path = "/api/student/progress",
    responses(
        (status = 200, description = "Progress rows, most recent first", body = Vec<ProgressWithLesson>),
        (status = 403, description = "Student role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Progress"
)]
#[instrument(skip(state))]
pub async fn get_progress(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<ProgressWithLesson>>, AppError> {
    let student_id = user.user_id()?;
    let progress = ProgressService::get_progress(&state.db, student_id).await?;
    Ok(Json(progress))
}

/// Record or update progress on a lesson
#[utoipa::path(
    post,
    path = "/api/student/progress/{lesson_id}",
    params(("lesson_id" = Uuid, Path, description = "Lesson id")),
    request_body = UpdateProgressDto,
    responses(
        (status = 200, description = "Progress recorded", body = SuccessResponse),
        (status = 404, description = "Lesson not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Progress"
)]
#[instrument(skip(state, dto))]
pub async fn update_progress(
    State(state): State<AppState>,
    user: AuthUser,
    Path(lesson_id): Path<Uuid>,
    Json(dto): Json<UpdateProgressDto>,
) -> Result<Json<SuccessResponse>, AppError> {
    let student_id = user.user_id()?;
    ProgressService::upsert_progress(&state.db, student_id, lesson_id, dto.completed).await?;
    Ok(Json(SuccessResponse { success: true }))
}
