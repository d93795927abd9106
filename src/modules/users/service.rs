use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::{AdminStats, CreateUserDto, User, UserRole};
use crate::utils::errors::{AppError, is_unique_violation};
use crate::utils::password::hash_password;

pub struct UserService;

impl UserService {
    #[instrument(skip(db, dto), fields(username = %dto.username))]
    pub async fn create_user(db: &PgPool, dto: CreateUserDto) -> Result<User, AppError> {
        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password, email, role)
             VALUES ($1, $2, $3, $4)
             RETURNING id, username, email, role, created_at",
        )
        .bind(&dto.username)
        .bind(&hashed_password)
        .bind(&dto.email)
        .bind(dto.role)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::conflict(anyhow::anyhow!("User already exists"))
            } else {
                AppError::database(e)
            }
        })?;

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn get_users(db: &PgPool, role: Option<UserRole>) -> Result<Vec<User>, AppError> {
        let users = match role {
            Some(role) => {
                sqlx::query_as::<_, User>(
                    "SELECT id, username, email, role, created_at FROM users
                     WHERE role = $1 ORDER BY created_at DESC",
                )
                .bind(role)
                .fetch_all(db)
                .await
            }
            None => {
                sqlx::query_as::<_, User>(
                    "SELECT id, username, email, role, created_at FROM users
                     ORDER BY created_at DESC",
                )
                .fetch_all(db)
                .await
            }
        }
        .map_err(AppError::database)?;

        Ok(users)
    }

    #[instrument(skip(db))]
    pub async fn delete_user(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "User with id {} not found",
                id
            )));
        }

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn get_stats(db: &PgPool) -> Result<AdminStats, AppError> {
        let total_lessons: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM lessons")
            .fetch_one(db)
            .await
            .map_err(AppError::database)?;
        let total_categories: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(db)
            .await
            .map_err(AppError::database)?;
        let unread_messages: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages WHERE is_read = false")
                .fetch_one(db)
                .await
                .map_err(AppError::database)?;
        let total_teachers: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = 'teacher'")
                .fetch_one(db)
                .await
                .map_err(AppError::database)?;
        let total_students: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = 'student'")
                .fetch_one(db)
                .await
                .map_err(AppError::database)?;

        Ok(AdminStats {
            total_lessons,
            total_categories,
            unread_messages,
            total_teachers,
            total_students,
        })
    }
}
