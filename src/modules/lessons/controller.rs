use axum::Json;
use axum::extract::{Multipart, Path, Query, State};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::SuccessResponse;
use crate::modules::lessons::model::{LessonForm, LessonListParams, LessonStatus, LessonWithRelations};
use crate::modules::lessons::service::LessonService;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::uploads::save_upload;

/// List published lessons
#[utoipa::path(
    get,
    path = "/api/lessons",
    params(("category" = Option<String>, Query, description = "Category slug filter")),
    responses(
        (status = 200, description = "Published lessons, newest first", body = Vec<LessonWithRelations>)
    ),
    tag = "Lessons"
)]
#[instrument(skip(state))]
pub async fn get_lessons(
    State(state): State<AppState>,
    Query(params): Query<LessonListParams>,
) -> Result<Json<Vec<LessonWithRelations>>, AppError> {
    let lessons = LessonService::get_published(&state.db, params.category).await?;
    Ok(Json(lessons))
}

/// Fetch one lesson by slug
#[utoipa::path(
    get,
    path = "/api/lessons/{slug}",
    params(("slug" = String, Path, description = "Lesson slug")),
    responses(
        (status = 200, description = "The lesson", body = LessonWithRelations),
        (status = 404, description = "No lesson with that slug", body = ErrorResponse)
    ),
    tag = "Lessons"
)]
#[instrument(skip(state))]
pub async fn get_lesson_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<LessonWithRelations>, AppError> {
    let lesson = LessonService::get_by_slug(&state.db, &slug).await?;
    Ok(Json(lesson))
}

/// Management list (teachers see their own lessons only)
#[utoipa::path(
    get,
    path = "/api/lessons-management",
    responses(
        (status = 200, description = "Lessons visible to the caller", body = Vec<LessonWithRelations>),
        (status = 403, description = "Admin or teacher role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Lessons"
)]
#[instrument(skip(state, auth_user))]
pub async fn get_lessons_for_staff(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<LessonWithRelations>>, AppError> {
    let (role, actor_id) = actor(&auth_user)?;
    let lessons = LessonService::get_for_staff(&state.db, role, actor_id).await?;
    Ok(Json(lessons))
}

/// Create a lesson (multipart: text fields plus optional image/audio files)
#[utoipa::path(
    post,
    path = "/api/lessons-management",
    responses(
        (status = 200, description = "Lesson created", body = SuccessResponse),
        (status = 409, description = "Slug already taken", body = ErrorResponse),
        (status = 403, description = "Admin or teacher role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Lessons"
)]
#[instrument(skip(state, auth_user, multipart))]
pub async fn create_lesson(
    State(state): State<AppState>,
    auth_user: AuthUser,
    multipart: Multipart,
) -> Result<Json<SuccessResponse>, AppError> {
    let (role, actor_id) = actor(&auth_user)?;
    let form = parse_lesson_form(&state, multipart).await?;
    LessonService::create_lesson(&state.db, form, role, actor_id).await?;
    Ok(Json(SuccessResponse { success: true }))
}

/// Update a lesson (ownership enforced for teachers)
#[utoipa::path(
    put,
    path = "/api/lessons-management/{id}",
    params(("id" = Uuid, Path, description = "Lesson id")),
    responses(
        (status = 200, description = "Lesson updated", body = SuccessResponse),
        (status = 403, description = "Not the owning teacher", body = ErrorResponse),
        (status = 404, description = "Lesson not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Lessons"
)]
#[instrument(skip(state, auth_user, multipart))]
pub async fn update_lesson(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    auth_user: AuthUser,
    multipart: Multipart,
) -> Result<Json<SuccessResponse>, AppError> {
    let (role, actor_id) = actor(&auth_user)?;
    let form = parse_lesson_form(&state, multipart).await?;
    LessonService::update_lesson(&state.db, id, form, role, actor_id).await?;
    Ok(Json(SuccessResponse { success: true }))
}

/// Delete a lesson (ownership enforced for teachers)
#[utoipa::path(
    delete,
    path = "/api/lessons-management/{id}",
    params(("id" = Uuid, Path, description = "Lesson id")),
    responses(
        (status = 200, description = "Lesson deleted", body = SuccessResponse),
        (status = 403, description = "Not the owning teacher", body = ErrorResponse),
        (status = 404, description = "Lesson not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Lessons"
)]
#[instrument(skip(state, auth_user))]
pub async fn delete_lesson(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    auth_user: AuthUser,
) -> Result<Json<SuccessResponse>, AppError> {
    let (role, actor_id) = actor(&auth_user)?;
    LessonService::delete_lesson(&state.db, id, role, actor_id).await?;
    Ok(Json(SuccessResponse { success: true }))
}

fn actor(auth_user: &AuthUser) -> Result<(UserRole, Uuid), AppError> {
    let role = UserRole::parse(auth_user.role())
        .ok_or_else(|| AppError::forbidden(anyhow::anyhow!("Unknown role in token")))?;
    Ok((role, auth_user.user_id()?))
}

/// Collects the multipart lesson form. File fields (`image`, `audio`) are
/// validated and persisted as they stream in; text fields land verbatim.
async fn parse_lesson_form(
    state: &AppState,
    mut multipart: Multipart,
) -> Result<LessonForm, AppError> {
    let mut form = LessonForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(anyhow::anyhow!("Invalid multipart body: {}", e)))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "image" | "audio" => {
                let file_name = field
                    .file_name()
                    .map(str::to_string)
                    .unwrap_or_else(|| name.clone());
                let content_type = field
                    .content_type()
                    .map(str::to_string)
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let data = field.bytes().await.map_err(|e| {
                    AppError::bad_request(anyhow::anyhow!("Failed to read upload: {}", e))
                })?;

                let path =
                    save_upload(&state.upload_config.dir, &file_name, &content_type, &data)
                        .await?;
                if name == "image" {
                    form.featured_image = Some(path);
                } else {
                    form.audio_file = Some(path);
                }
            }
            _ => {
                let value = field.text().await.map_err(|e| {
                    AppError::bad_request(anyhow::anyhow!("Invalid field {}: {}", name, e))
                })?;

                match name.as_str() {
                    "title" => form.title = Some(value),
                    "slug" => form.slug = Some(value),
                    "short_description" => form.short_description = Some(value),
                    "full_content" => form.full_content = Some(value),
                    "video_link" => form.video_link = Some(value),
                    "status" => form.status = LessonStatus::parse(&value),
                    "category_id" => {
                        form.category_id = Some(Uuid::parse_str(&value).map_err(|_| {
                            AppError::bad_request(anyhow::anyhow!("category_id must be a UUID"))
                        })?)
                    }
                    "teacher_id" => {
                        // Blank means "unassigned" on the admin form.
                        if !value.is_empty() {
                            form.teacher_id = Some(Uuid::parse_str(&value).map_err(|_| {
                                AppError::bad_request(anyhow::anyhow!("teacher_id must be a UUID"))
                            })?);
                        }
                    }
                    // Echoed-back media paths when no new file is uploaded.
                    "featured_image" => {
                        if form.featured_image.is_none() && !value.is_empty() {
                            form.featured_image = Some(value);
                        }
                    }
                    "audio_file" => {
                        if form.audio_file.is_none() && !value.is_empty() {
                            form.audio_file = Some(value);
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    Ok(form)
}
