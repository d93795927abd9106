use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::UserRole;
use crate::utils::errors::{AppError, is_unique_violation};
use crate::utils::jwt::create_access_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{LoginRequest, LoginResponse, RegisterRequestDto};

pub struct AuthService;

impl AuthService {
    /// Self-registration. The role is fixed to student; admins and teachers
    /// are only ever created through admin endpoints or the CLI.
    #[instrument(skip(db, dto), fields(username = %dto.username))]
    pub async fn register_user(db: &PgPool, dto: RegisterRequestDto) -> Result<(), AppError> {
        let hashed_password = hash_password(&dto.password)?;

        sqlx::query(
            "INSERT INTO users
                 (username, password, email, first_name, phone, teams_id,
                  country, city, program, preferred_days, role)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(&dto.username)
        .bind(&hashed_password)
        .bind(&dto.email)
        .bind(&dto.first_name)
        .bind(&dto.phone)
        .bind(&dto.teams_id)
        .bind(&dto.country)
        .bind(&dto.city)
        .bind(&dto.program)
        .bind(&dto.preferred_days)
        .bind(UserRole::Student)
        .execute(db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::conflict(anyhow::anyhow!("Username already exists"))
            } else {
                AppError::database(e)
            }
        })?;

        Ok(())
    }

    #[instrument(skip(db, dto, jwt_config), fields(username = %dto.username))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: Uuid,
            username: String,
            password: String,
            role: UserRole,
        }

        let user = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, username, password, role FROM users WHERE username = $1",
        )
        .bind(&dto.username)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Invalid credentials")))?;

        let is_valid = verify_password(&dto.password, &user.password)?;
        if !is_valid {
            return Err(AppError::unauthorized(anyhow::anyhow!("Invalid credentials")));
        }

        let token = create_access_token(user.id, &user.username, &user.role, jwt_config)?;

        Ok(LoginResponse {
            token,
            username: user.username,
            role: user.role,
        })
    }
}
