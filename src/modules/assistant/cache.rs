//! Answer cache keyed on (question, role).
//!
//! Lookups are exact-match on both fields, case- and whitespace-sensitive:
//! this is plain memoization of the generation service, not a semantic
//! cache. Two textually distinct questions never share an entry.

use std::future::Future;
use std::pin::Pin;

use sqlx::PgPool;
use tracing::instrument;

use crate::utils::errors::AppError;

/// Role recorded for anonymous questions, so anonymous and explicit-visitor
/// queries share cache entries.
pub const VISITOR_ROLE: &str = "visitor";

/// Maps an absent or empty role to [`VISITOR_ROLE`].
pub fn normalize_role(role: Option<&str>) -> &str {
    match role {
        Some(r) if !r.is_empty() => r,
        _ => VISITOR_ROLE,
    }
}

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Storage seam for cached answers. The production implementation is
/// [`PgAnswerCache`]; tests substitute an in-memory map.
pub trait AnswerCache: Send + Sync {
    fn lookup<'a>(
        &'a self,
        question: &'a str,
        role: &'a str,
    ) -> BoxFuture<'a, Result<Option<String>, AppError>>;

    fn store<'a>(
        &'a self,
        question: &'a str,
        role: &'a str,
        response: &'a str,
    ) -> BoxFuture<'a, Result<(), AppError>>;
}

/// Postgres-backed cache over the `ai_cache` table.
///
/// Writes are append-only; reads ignore entries older than the TTL and
/// writes prune the table beyond the row cap, which bounds growth without
/// changing the exact-match lookup contract.
#[derive(Clone, Debug)]
pub struct PgAnswerCache {
    pool: PgPool,
    ttl_days: i64,
    max_entries: i64,
}

impl PgAnswerCache {
    pub fn new(pool: PgPool, ttl_days: i64, max_entries: i64) -> Self {
        Self {
            pool,
            ttl_days,
            max_entries,
        }
    }

    #[instrument(skip(self, question))]
    async fn lookup_inner(&self, question: &str, role: &str) -> Result<Option<String>, AppError> {
        let response = sqlx::query_scalar::<_, String>(
            "SELECT response FROM ai_cache
             WHERE question = $1
               AND user_role = $2
               AND created_at > now() - make_interval(days => $3::int)
             ORDER BY created_at DESC
             LIMIT 1",
        )
        .bind(question)
        .bind(role)
        .bind(self.ttl_days)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::database)?;

        Ok(response)
    }

    #[instrument(skip(self, question, response))]
    async fn store_inner(
        &self,
        question: &str,
        role: &str,
        response: &str,
    ) -> Result<(), AppError> {
        sqlx::query("INSERT INTO ai_cache (question, response, user_role) VALUES ($1, $2, $3)")
            .bind(question)
            .bind(response)
            .bind(role)
            .execute(&self.pool)
            .await
            .map_err(AppError::database)?;

        // Prune the oldest rows beyond the cap.
        sqlx::query(
            "DELETE FROM ai_cache WHERE id IN
                 (SELECT id FROM ai_cache ORDER BY created_at DESC OFFSET $1)",
        )
        .bind(self.max_entries)
        .execute(&self.pool)
        .await
        .map_err(AppError::database)?;

        Ok(())
    }
}

impl AnswerCache for PgAnswerCache {
    fn lookup<'a>(
        &'a self,
        question: &'a str,
        role: &'a str,
    ) -> BoxFuture<'a, Result<Option<String>, AppError>> {
        Box::pin(self.lookup_inner(question, role))
    }

    fn store<'a>(
        &'a self,
        question: &'a str,
        role: &'a str,
        response: &'a str,
    ) -> BoxFuture<'a, Result<(), AppError>> {
        Box::pin(self.store_inner(question, role, response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_role_defaults_to_visitor() {
        assert_eq!(normalize_role(None), "visitor");
        assert_eq!(normalize_role(Some("")), "visitor");
        assert_eq!(normalize_role(Some("student")), "student");
    }

    #[test]
    fn test_normalize_role_keeps_whitespace_as_authored() {
        // Exact-match semantics: whitespace is not trimmed.
        assert_eq!(normalize_role(Some(" student")), " student");
    }
}
