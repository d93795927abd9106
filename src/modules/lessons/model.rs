//! Lesson entities and management DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Publication state. Stored as the `lesson_status` Postgres enum; only
/// published lessons appear on the public catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "lesson_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LessonStatus {
    Draft,
    Published,
}

impl LessonStatus {
    pub fn parse(status: &str) -> Option<Self> {
        match status {
            "draft" => Some(LessonStatus::Draft),
            "published" => Some(LessonStatus::Published),
            _ => None,
        }
    }
}

/// A lesson joined with its category name and owning teacher's username,
/// as returned by both the public catalog and the management list.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, ToSchema)]
pub struct LessonWithRelations {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub short_description: Option<String>,
    pub full_content: Option<String>,
    pub featured_image: Option<String>,
    pub audio_file: Option<String>,
    pub video_link: Option<String>,
    pub category_id: Uuid,
    pub teacher_id: Option<Uuid>,
    pub status: LessonStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub category_name: String,
    pub teacher_name: Option<String>,
}

/// Query parameters for the public lesson list.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LessonListParams {
    /// Category slug to filter by.
    pub category: Option<String>,
}

/// Fields collected from the multipart lesson form. `featured_image` and
/// `audio_file` hold either a freshly uploaded file's public path or the
/// previously stored path echoed back by the client.
#[derive(Debug, Default, Clone)]
pub struct LessonForm {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub short_description: Option<String>,
    pub full_content: Option<String>,
    pub category_id: Option<Uuid>,
    pub teacher_id: Option<Uuid>,
    pub video_link: Option<String>,
    pub status: Option<LessonStatus>,
    pub featured_image: Option<String>,
    pub audio_file: Option<String>,
}

impl LessonForm {
    /// Required-field validation for create/update.
    pub fn require_core(&self) -> Result<(String, String, Uuid), crate::utils::errors::AppError> {
        use crate::utils::errors::AppError;

        let title = self
            .title
            .clone()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::bad_request(anyhow::anyhow!("title is required")))?;
        let slug = self
            .slug
            .clone()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::bad_request(anyhow::anyhow!("slug is required")))?;
        let category_id = self
            .category_id
            .ok_or_else(|| AppError::bad_request(anyhow::anyhow!("category_id is required")))?;

        Ok((title, slug, category_id))
    }
}
