use std::sync::Arc;

use sqlx::PgPool;

use crate::config::assistant::AssistantConfig;
use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::jwt::JwtConfig;
use crate::config::uploads::UploadConfig;
use crate::modules::assistant::cache::PgAnswerCache;
use crate::modules::assistant::generator::GeminiGenerator;
use crate::modules::assistant::service::Assistant;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub upload_config: UploadConfig,
    pub assistant: Arc<Assistant>,
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let db = init_db_pool().await?;

    sqlx::migrate!("./migrations").run(&db).await?;

    let assistant_config = AssistantConfig::from_env();
    let assistant = Assistant::new(
        Box::new(PgAnswerCache::new(
            db.clone(),
            assistant_config.cache_ttl_days,
            assistant_config.cache_max_entries,
        )),
        Box::new(GeminiGenerator::new(
            assistant_config.api_key,
            assistant_config.model,
        )),
    );

    Ok(AppState {
        db,
        jwt_config: JwtConfig::from_env()?,
        cors_config: CorsConfig::from_env(),
        upload_config: UploadConfig::from_env(),
        assistant: Arc::new(assistant),
    })
}
