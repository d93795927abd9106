use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::lessons::model::{LessonForm, LessonStatus, LessonWithRelations};
use crate::modules::users::model::UserRole;
use crate::utils::errors::{AppError, is_unique_violation};

const LESSON_COLUMNS: &str = "l.id, l.title, l.slug, l.short_description, l.full_content, \
     l.featured_image, l.audio_file, l.video_link, l.category_id, l.teacher_id, l.status, \
     l.created_at, l.updated_at, c.name AS category_name, u.username AS teacher_name";

pub struct LessonService;

impl LessonService {
    /// Public catalog: published lessons, newest first, optionally filtered
    /// by category slug.
    #[instrument(skip(db))]
    pub async fn get_published(
        db: &PgPool,
        category_slug: Option<String>,
    ) -> Result<Vec<LessonWithRelations>, AppError> {
        let lessons = match category_slug {
            Some(slug) => {
                sqlx::query_as::<_, LessonWithRelations>(&format!(
                    "SELECT {LESSON_COLUMNS} FROM lessons l
                     JOIN categories c ON l.category_id = c.id
                     LEFT JOIN users u ON l.teacher_id = u.id
                     WHERE l.status = 'published' AND c.slug = $1
                     ORDER BY l.created_at DESC"
                ))
                .bind(slug)
                .fetch_all(db)
                .await
            }
            None => {
                sqlx::query_as::<_, LessonWithRelations>(&format!(
                    "SELECT {LESSON_COLUMNS} FROM lessons l
                     JOIN categories c ON l.category_id = c.id
                     LEFT JOIN users u ON l.teacher_id = u.id
                     WHERE l.status = 'published'
                     ORDER BY l.created_at DESC"
                ))
                .fetch_all(db)
                .await
            }
        }
        .map_err(AppError::database)?;

        Ok(lessons)
    }

    #[instrument(skip(db))]
    pub async fn get_by_slug(db: &PgPool, slug: &str) -> Result<LessonWithRelations, AppError> {
        let lesson = sqlx::query_as::<_, LessonWithRelations>(&format!(
            "SELECT {LESSON_COLUMNS} FROM lessons l
             JOIN categories c ON l.category_id = c.id
             LEFT JOIN users u ON l.teacher_id = u.id
             WHERE l.slug = $1"
        ))
        .bind(slug)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Lesson not found")))?;

        Ok(lesson)
    }

    /// Management list. Admins see every lesson; teachers only their own.
    #[instrument(skip(db))]
    pub async fn get_for_staff(
        db: &PgPool,
        actor_role: UserRole,
        actor_id: Uuid,
    ) -> Result<Vec<LessonWithRelations>, AppError> {
        let lessons = match actor_role {
            UserRole::Teacher => {
                sqlx::query_as::<_, LessonWithRelations>(&format!(
                    "SELECT {LESSON_COLUMNS} FROM lessons l
                     JOIN categories c ON l.category_id = c.id
                     LEFT JOIN users u ON l.teacher_id = u.id
                     WHERE l.teacher_id = $1
                     ORDER BY l.created_at DESC"
                ))
                .bind(actor_id)
                .fetch_all(db)
                .await
            }
            _ => {
                sqlx::query_as::<_, LessonWithRelations>(&format!(
                    "SELECT {LESSON_COLUMNS} FROM lessons l
                     JOIN categories c ON l.category_id = c.id
                     LEFT JOIN users u ON l.teacher_id = u.id
                     ORDER BY l.created_at DESC"
                ))
                .fetch_all(db)
                .await
            }
        }
        .map_err(AppError::database)?;

        Ok(lessons)
    }

    #[instrument(skip(db, form))]
    pub async fn create_lesson(
        db: &PgPool,
        form: LessonForm,
        actor_role: UserRole,
        actor_id: Uuid,
    ) -> Result<(), AppError> {
        let (title, slug, category_id) = form.require_core()?;
        let teacher_id = Self::resolve_owner(&form, actor_role, actor_id);
        let status = form.status.unwrap_or(LessonStatus::Published);

        sqlx::query(
            "INSERT INTO lessons
                 (title, slug, short_description, full_content, category_id,
                  featured_image, audio_file, video_link, status, teacher_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(&title)
        .bind(&slug)
        .bind(&form.short_description)
        .bind(&form.full_content)
        .bind(category_id)
        .bind(&form.featured_image)
        .bind(&form.audio_file)
        .bind(&form.video_link)
        .bind(status)
        .bind(teacher_id)
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
    pub async fn update_lesson(
        db: &PgPool,
        id: Uuid,
        form: LessonForm,
        actor_role: UserRole,
        actor_id: Uuid,
    ) -> Result<(), AppError> {
        Self::ensure_owner(db, id, actor_role, actor_id).await?;

        let (title, slug, category_id) = form.require_core()?;
        let teacher_id = Self::resolve_owner(&form, actor_role, actor_id);
        let status = form.status.unwrap_or(LessonStatus::Published);

        sqlx::query(
            "UPDATE lessons SET
                 title = $1, slug = $2, short_description = $3, full_content = $4,
                 category_id = $5, featured_image = $6, audio_file = $7,
                 video_link = $8, status = $9, teacher_id = $10, updated_at = now()
             WHERE id = $11",
        )
        .bind(&title)
        .bind(&slug)
        .bind(&form.short_description)
        .bind(&form.full_content)
        .bind(category_id)
        .bind(&form.featured_image)
        .bind(&form.audio_file)
        .bind(&form.video_link)
        .bind(status)
        .bind(teacher_id)
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

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn delete_lesson(
        db: &PgPool,
        id: Uuid,
        actor_role: UserRole,
        actor_id: Uuid,
    ) -> Result<(), AppError> {
        Self::ensure_owner(db, id, actor_role, actor_id).await?;

        sqlx::query("DELETE FROM lessons WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        Ok(())
    }

    /// Admins may assign any owner; teachers always own what they touch.
    fn resolve_owner(form: &LessonForm, actor_role: UserRole, actor_id: Uuid) -> Option<Uuid> {
        match actor_role {
            UserRole::Admin => form.teacher_id,
            _ => Some(actor_id),
        }
    }

    /// Ownership refinement on top of the role gate: a teacher may only
    /// mutate lessons whose `teacher_id` matches their claim subject.
    async fn ensure_owner(
        db: &PgPool,
        lesson_id: Uuid,
        actor_role: UserRole,
        actor_id: Uuid,
    ) -> Result<(), AppError> {
        let owner = sqlx::query_scalar::<_, Option<Uuid>>(
            "SELECT teacher_id FROM lessons WHERE id = $1",
        )
        .bind(lesson_id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Lesson not found")))?;

        if actor_role == UserRole::Teacher && owner != Some(actor_id) {
            return Err(AppError::forbidden(anyhow::anyhow!("Forbidden")));
        }

        Ok(())
    }
}
