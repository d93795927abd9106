use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A message left through the public contact form. Created by anonymous
/// visitors; only the read flag is ever mutated, and only by an admin.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, ToSchema)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ContactDto {
    #[validate(length(min = 1, message = "Required fields missing"))]
    pub name: String,
    #[validate(email(message = "Required fields missing"))]
    pub email: String,
    #[validate(length(min = 1, message = "Required fields missing"))]
    pub message: String,
}
