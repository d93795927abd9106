use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::{Mutex, OnceCell};
use tracing::instrument;

use crate::utils::errors::AppError;

use super::cache::{AnswerCache, normalize_role};
use super::generator::{FALLBACK_RESPONSE, ResponseGenerator};

type PendingKey = (String, String);

/// Orchestrates the assistant: cache lookup, single-flight generation,
/// cache write-back.
///
/// Concurrent identical (question, role) requests join one outstanding
/// generation through the pending map, so the external service is called
/// exactly once per distinct in-flight question and the cache receives one
/// write.
pub struct Assistant {
    cache: Box<dyn AnswerCache>,
    generator: Box<dyn ResponseGenerator>,
    pending: Mutex<HashMap<PendingKey, Arc<OnceCell<String>>>>,
}

impl std::fmt::Debug for Assistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assistant").finish_non_exhaustive()
    }
}

impl Assistant {
    pub fn new(cache: Box<dyn AnswerCache>, generator: Box<dyn ResponseGenerator>) -> Self {
        Self {
            cache,
            generator,
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// Answers a question, consulting the cache first.
    ///
    /// `context` is only evaluated on a cache miss, by the request that owns
    /// the generation; joined requests wait on the shared cell. Whatever the
    /// generator returns is stored unconditionally, substituting the apology
    /// fallback when the text is unusable. Generation errors surface to the
    /// caller and leave the cache untouched.
    pub async fn ask<F, Fut>(
        &self,
        question: &str,
        role: Option<&str>,
        context: F,
    ) -> Result<String, AppError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String, AppError>>,
    {
        let role = normalize_role(role);

        if let Some(hit) = self.cache.lookup(question, role).await? {
            return Ok(hit);
        }

        let key: PendingKey = (question.to_string(), role.to_string());
        let cell = {
            let mut pending = self.pending.lock().await;
            pending
                .entry(key.clone())
                .or_insert_with(|| Arc::new(OnceCell::new()))
                .clone()
        };

        let result = cell
            .get_or_try_init(|| async {
                let context = context().await?;
                let text = self.generator.generate(question, &context).await?;
                let text = if text.trim().is_empty() {
                    FALLBACK_RESPONSE.to_string()
                } else {
                    text
                };
                self.cache.store(question, role, &text).await?;
                Ok::<_, AppError>(text)
            })
            .await
            .map(|answer| answer.clone());

        // Drop the marker only if it is still ours; a failed generation may
        // already have been replaced by a retry.
        let mut pending = self.pending.lock().await;
        if let Some(existing) = pending.get(&key) {
            if Arc::ptr_eq(existing, &cell) {
                pending.remove(&key);
            }
        }

        result
    }
}

/// Bounded snapshot of academy content handed to the generator: up to ten
/// published lesson titles, all category names, up to five blog titles and
/// all specialized-course titles.
#[instrument(skip(db))]
pub async fn gather_context(db: &PgPool, role: &str) -> Result<String, AppError> {
    let lessons = sqlx::query_scalar::<_, String>(
        "SELECT title FROM lessons WHERE status = 'published' ORDER BY created_at DESC LIMIT 10",
    )
    .fetch_all(db)
    .await
    .map_err(AppError::database)?;

    let categories = sqlx::query_scalar::<_, String>("SELECT name FROM categories")
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

    let blogs =
        sqlx::query_scalar::<_, String>("SELECT title FROM blogs ORDER BY created_at DESC LIMIT 5")
            .fetch_all(db)
            .await
            .map_err(AppError::database)?;

    let courses = sqlx::query_scalar::<_, String>("SELECT title FROM specialized_courses")
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

    Ok(format!(
        "You are an AI Assistant for MY Quran Guide.\n\
         The academy offers various courses including Tajweed, Tafsir, and Hifz.\n\
         Current categories: {}.\n\
         Specialized Courses: {}.\n\
         Some available lessons: {}.\n\
         Recent Blog Posts: {}.\n\
         User Role: {}.\n\
         \n\
         Instructions:\n\
         - Provide helpful, respectful, and accurate information about Quran learning.\n\
         - If the user asks about lessons or courses, mention relevant ones from the list above.\n\
         - Keep answers concise but informative.\n\
         - Use a warm, encouraging tone.\n\
         - Refer to the academy as \"MY Quran Guide\".",
        categories.join(", "),
        courses.join(", "),
        lessons.join(", "),
        blogs.join(", "),
        role,
    ))
}
