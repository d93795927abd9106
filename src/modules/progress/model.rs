use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A student's progress on one lesson, joined with the lesson it refers to.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct ProgressWithLesson {
    pub id: Uuid,
    pub lesson_id: Uuid,
    pub completed: bool,
    pub last_accessed: DateTime<Utc>,
    pub lesson_title: String,
    pub lesson_slug: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProgressDto {
    pub completed: bool,
}
