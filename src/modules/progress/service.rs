use sqlx::PgPool;
use uuid::Uuid;

use crate::modules::progress::model::ProgressWithLesson;
use crate::utils::errors::AppError;

pub struct ProgressService;

impl ProgressService {
    /// All progress rows for one student, with lesson title and slug.
    pub async fn get_progress(
        db: &PgPool,
        student_id: Uuid,
    ) -> Result<Vec<ProgressWithLesson>, AppError> {
        let rows = sqlx::query_as::<_, ProgressWithLesson>(
            r#"
            SELECT p.id, p.lesson_id, p.completed, p.last_accessed,
                   l.title AS lesson_title, l.slug AS lesson_slug
            FROM student_progress p
            JOIN lessons l ON l.id = p.lesson_id
            WHERE p.student_id = $1
            ORDER BY p.last_accessed DESC
            "#,
        )
        .bind(student_id)
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(rows)
    }

    /// Records a lesson visit. Re-visiting an already tracked lesson
    /// updates the completion flag and bumps the access time.
    pub async fn upsert_progress(
        db: &PgPool,
        student_id: Uuid,
        lesson_id: Uuid,
        completed: bool,
    ) -> Result<(), AppError> {
        let lesson_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM lessons WHERE id = $1)",
        )
        .bind(lesson_id)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        if !lesson_exists {
            return Err(AppError::not_found(anyhow::anyhow!("Lesson not found")));
        }

        sqlx::query(
            r#"
            INSERT INTO student_progress (student_id, lesson_id, completed)
            VALUES ($1, $2, $3)
            ON CONFLICT (student_id, lesson_id)
            DO UPDATE SET completed = excluded.completed, last_accessed = now()
            "#,
        )
        .bind(student_id)
        .bind(lesson_id)
        .bind(completed)
        .execute(db)
        .await
        .map_err(AppError::database)?;

        Ok(())
    }
}
