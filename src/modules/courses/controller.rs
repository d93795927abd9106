use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::SuccessResponse;
use crate::modules::courses::model::{CourseDto, SpecializedCourse};
use crate::modules::courses::service::CourseService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// List specialized courses
#[utoipa::path(
    get,
    path = "/api/specialized-courses",
    responses(
        (status = 200, description = "Specialized courses, oldest first", body = Vec<SpecializedCourse>)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<SpecializedCourse>>, AppError> {
    let courses = CourseService::get_courses(&state.db).await?;
    Ok(Json(courses))
}

/// Create a specialized course
#[utoipa::path(
    post,
    path = "/api/admin/specialized-courses",
    request_body = CourseDto,
    responses(
        (status = 200, description = "Course created", body = SuccessResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, dto))]
pub async fn create_course(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CourseDto>,
) -> Result<Json<SuccessResponse>, AppError> {
    CourseService::create_course(&state.db, dto).await?;
    Ok(Json(SuccessResponse { success: true }))
}

/// Update a specialized course
#[utoipa::path(
    put,
    path = "/api/admin/specialized-courses/{id}",
    params(("id" = Uuid, Path, description = "Course id")),
    request_body = CourseDto,
    responses(
        (status = 200, description = "Course updated", body = SuccessResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, dto))]
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<CourseDto>,
) -> Result<Json<SuccessResponse>, AppError> {
    CourseService::update_course(&state.db, id, dto).await?;
    Ok(Json(SuccessResponse { success: true }))
}

/// Delete a specialized course
#[utoipa::path(
    delete,
    path = "/api/admin/specialized-courses/{id}",
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course deleted", body = SuccessResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SuccessResponse>, AppError> {
    CourseService::delete_course(&state.db, id).await?;
    Ok(Json(SuccessResponse { success: true }))
}
