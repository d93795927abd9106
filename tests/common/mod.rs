use std::path::PathBuf;
use std::sync::Arc;

use quran_academy_api::config::cors::CorsConfig;
use quran_academy_api::config::jwt::JwtConfig;
use quran_academy_api::config::uploads::UploadConfig;
use quran_academy_api::modules::assistant::cache::{AnswerCache, BoxFuture};
use quran_academy_api::modules::assistant::generator::ResponseGenerator;
use quran_academy_api::modules::assistant::service::Assistant;
use quran_academy_api::modules::users::model::UserRole;
use quran_academy_api::router::init_router;
use quran_academy_api::state::AppState;
use quran_academy_api::utils::errors::AppError;
use quran_academy_api::utils::jwt::create_access_token;
use quran_academy_api::utils::password::hash_password;
use sqlx::PgPool;
use uuid::Uuid;

/// Assistant stand-ins: routes under test never generate anything.
pub struct NullCache;

impl AnswerCache for NullCache {
    fn lookup<'a>(
        &'a self,
        _question: &'a str,
        _role: &'a str,
    ) -> BoxFuture<'a, Result<Option<String>, AppError>> {
        Box::pin(async { Ok(None) })
    }

    fn store<'a>(
        &'a self,
        _question: &'a str,
        _role: &'a str,
        _response: &'a str,
    ) -> BoxFuture<'a, Result<(), AppError>> {
        Box::pin(async { Ok(()) })
    }
}

pub struct NullGenerator;

impl ResponseGenerator for NullGenerator {
    fn generate<'a>(
        &'a self,
        _question: &'a str,
        _context: &'a str,
    ) -> BoxFuture<'a, Result<String, AppError>> {
        Box::pin(async { Ok(String::new()) })
    }
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration_test_secret".to_string(),
        token_expiry: 3600,
    }
}

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    let state = AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        upload_config: UploadConfig {
            dir: PathBuf::from("public/uploads"),
        },
        assistant: Arc::new(Assistant::new(Box::new(NullCache), Box::new(NullGenerator))),
    };

    init_router(state)
}

/// Bearer token signed with the test secret.
#[allow(dead_code)]
pub fn token_for(user_id: Uuid, username: &str, role: UserRole) -> String {
    create_access_token(user_id, username, &role, &test_jwt_config()).unwrap()
}

/// Inserts a user directly, bypassing the registration endpoint.
#[allow(dead_code)]
pub async fn create_test_user(
    pool: &PgPool,
    username: &str,
    password: &str,
    role: UserRole,
) -> Uuid {
    let hashed = hash_password(password).unwrap();

    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (username, password, role) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(username)
    .bind(hashed)
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap()
}
