use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::messages::model::{ContactDto, ContactMessage};
use crate::utils::errors::AppError;

pub struct MessageService;

impl MessageService {
    #[instrument(skip(db, dto))]
    pub async fn create_message(db: &PgPool, dto: ContactDto) -> Result<(), AppError> {
        sqlx::query("INSERT INTO contact_messages (name, email, message) VALUES ($1, $2, $3)")
            .bind(&dto.name)
            .bind(&dto.email)
            .bind(&dto.message)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn get_messages(db: &PgPool) -> Result<Vec<ContactMessage>, AppError> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            "SELECT id, name, email, message, is_read, created_at
             FROM contact_messages ORDER BY created_at DESC",
        )
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(messages)
    }

    #[instrument(skip(db))]
    pub async fn mark_read(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE contact_messages SET is_read = true WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Message not found")));
        }

        Ok(())
    }
}
