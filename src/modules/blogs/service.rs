use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::blogs::model::{Blog, BlogForm};
use crate::utils::errors::{AppError, is_unique_violation};

pub struct BlogService;

impl BlogService {
    #[instrument(skip(db))]
    pub async fn get_blogs(db: &PgPool) -> Result<Vec<Blog>, AppError> {
        let blogs = sqlx::query_as::<_, Blog>(
            "SELECT id, title, slug, content, category, image, created_at
             FROM blogs ORDER BY created_at DESC",
        )
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(blogs)
    }

    #[instrument(skip(db, form))]
    pub async fn create_blog(db: &PgPool, form: BlogForm) -> Result<(), AppError> {
        let (title, slug, content) = form.require_core()?;

        sqlx::query(
            "INSERT INTO blogs (title, slug, content, category, image)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&title)
        .bind(&slug)
        .bind(&content)
        .bind(&form.category)
        .bind(&form.image)
        .execute(db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::conflict(anyhow::anyhow!("Slug must be unique"))
            } else {
                AppError::database(e)
            }
        })?;

        Ok(())
    }

    #[instrument(skip(db, form))]
    pub async fn update_blog(db: &PgPool, id: Uuid, form: BlogForm) -> Result<(), AppError> {
        let (title, slug, content) = form.require_core()?;

        let result = sqlx::query(
            "UPDATE blogs SET title = $1, slug = $2, content = $3, category = $4, image = $5
             WHERE id = $6",
        )
        .bind(&title)
        .bind(&slug)
        .bind(&content)
        .bind(&form.category)
        .bind(&form.image)
        .bind(id)
        .execute(db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::conflict(anyhow::anyhow!("Slug must be unique"))
            } else {
                AppError::database(e)
            }
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Blog not found")));
        }

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn delete_blog(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Blog not found")));
        }

        Ok(())
    }
}
