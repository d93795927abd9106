use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::courses::model::{CourseDto, SpecializedCourse};
use crate::utils::errors::AppError;

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db))]
    pub async fn get_courses(db: &PgPool) -> Result<Vec<SpecializedCourse>, AppError> {
        let courses = sqlx::query_as::<_, SpecializedCourse>(
            "SELECT id, title, description, features, icon_name, color_class, created_at
             FROM specialized_courses ORDER BY created_at ASC",
        )
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(courses)
    }

    #[instrument(skip(db, dto))]
    pub async fn create_course(db: &PgPool, dto: CourseDto) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO specialized_courses (title, description, features, icon_name, color_class)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(&dto.features)
        .bind(&dto.icon_name)
        .bind(&dto.color_class)
        .execute(db)
        .await
        .map_err(AppError::database)?;

        Ok(())
    }

    #[instrument(skip(db, dto))]
    pub async fn update_course(db: &PgPool, id: Uuid, dto: CourseDto) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE specialized_courses SET
                 title = $1, description = $2, features = $3, icon_name = $4, color_class = $5
             WHERE id = $6",
        )
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(&dto.features)
        .bind(&dto.icon_name)
        .bind(&dto.color_class)
        .bind(id)
        .execute(db)
        .await
        .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Course not found")));
        }

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn delete_course(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM specialized_courses WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Course not found")));
        }

        Ok(())
    }
}
