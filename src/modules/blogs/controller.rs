use axum::Json;
use axum::extract::{Multipart, Path, State};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::SuccessResponse;
use crate::modules::blogs::model::{Blog, BlogForm};
use crate::modules::blogs::service::BlogService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::uploads::save_upload;

/// List blog posts
#[utoipa::path(
    get,
    path = "/api/blogs",
    responses(
        (status = 200, description = "Blog posts, newest first", body = Vec<Blog>)
    ),
    tag = "Blogs"
)]
#[instrument(skip(state))]
pub async fn get_blogs(State(state): State<AppState>) -> Result<Json<Vec<Blog>>, AppError> {
    let blogs = BlogService::get_blogs(&state.db).await?;
    Ok(Json(blogs))
}

/// Create a blog post (multipart: text fields plus optional image)
#[utoipa::path(
    post,
    path = "/api/admin/blogs",
    responses(
        (status = 200, description = "Blog created", body = SuccessResponse),
        (status = 409, description = "Slug already taken", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Blogs"
)]
#[instrument(skip(state, multipart))]
pub async fn create_blog(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<SuccessResponse>, AppError> {
    let form = parse_blog_form(&state, multipart).await?;
    BlogService::create_blog(&state.db, form).await?;
    Ok(Json(SuccessResponse { success: true }))
}

/// Update a blog post
#[utoipa::path(
    put,
    path = "/api/admin/blogs/{id}",
    params(("id" = Uuid, Path, description = "Blog id")),
    responses(
        (status = 200, description = "Blog updated", body = SuccessResponse),
        (status = 404, description = "Blog not found", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Blogs"
)]
#[instrument(skip(state, multipart))]
pub async fn update_blog(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<SuccessResponse>, AppError> {
    let form = parse_blog_form(&state, multipart).await?;
    BlogService::update_blog(&state.db, id, form).await?;
    Ok(Json(SuccessResponse { success: true }))
}

/// Delete a blog post
#[utoipa::path(
    delete,
    path = "/api/admin/blogs/{id}",
    params(("id" = Uuid, Path, description = "Blog id")),
    responses(
        (status = 200, description = "Blog deleted", body = SuccessResponse),
        (status = 404, description = "Blog not found", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Blogs"
)]
#[instrument(skip(state))]
pub async fn delete_blog(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SuccessResponse>, AppError> {
    BlogService::delete_blog(&state.db, id).await?;
    Ok(Json(SuccessResponse { success: true }))
}

async fn parse_blog_form(state: &AppState, mut multipart: Multipart) -> Result<BlogForm, AppError> {
    let mut form = BlogForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(anyhow::anyhow!("Invalid multipart body: {}", e)))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == "image" && field.file_name().is_some() {
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

            form.image =
                Some(save_upload(&state.upload_config.dir, &file_name, &content_type, &data).await?);
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| AppError::bad_request(anyhow::anyhow!("Invalid field {}: {}", name, e)))?;

        match name.as_str() {
            "title" => form.title = Some(value),
            "slug" => form.slug = Some(value),
            "content" => form.content = Some(value),
            "category" => form.category = Some(value),
            // Echoed-back image path when no new file is uploaded.
            "image" => {
                if form.image.is_none() && !value.is_empty() {
                    form.image = Some(value);
                }
            }
            _ => {}
        }
    }

    Ok(form)
}
