use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, ToSchema)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub category: Option<String>,
    pub image: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Fields collected from the multipart blog form.
#[derive(Debug, Default, Clone)]
pub struct BlogForm {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
}

impl BlogForm {
    pub fn require_core(&self) -> Result<(String, String, String), crate::utils::errors::AppError> {
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
        let content = self
            .content
            .clone()
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AppError::bad_request(anyhow::anyhow!("content is required")))?;

        Ok((title, slug, content))
    }
}
