use sqlx::PgPool;
use tracing::instrument;

use crate::modules::categories::model::Category;
use crate::utils::errors::AppError;

pub struct CategoryService;

impl CategoryService {
    #[instrument(skip(db))]
    pub async fn get_categories(db: &PgPool) -> Result<Vec<Category>, AppError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name, slug, description FROM categories ORDER BY name",
        )
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(categories)
    }
}
