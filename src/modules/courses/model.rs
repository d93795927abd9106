use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A specialized course card shown on the marketing site. `features` holds
/// a JSON-encoded string array, stored as authored by the admin UI.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, ToSchema)]
pub struct SpecializedCourse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub features: String,
    pub icon_name: Option<String>,
    pub color_class: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CourseDto {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub features: String,
    pub icon_name: Option<String>,
    pub color_class: Option<String>,
}
