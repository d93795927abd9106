use std::env;

/// Configuration for the AI assistant and its response cache.
///
/// The API key is optional at startup: deployments without AI enabled still
/// serve everything else, and assistant requests surface an upstream error.
#[derive(Clone, Debug)]
pub struct AssistantConfig {
    pub api_key: Option<String>,
    pub model: String,
    /// Cached answers older than this are treated as misses.
    pub cache_ttl_days: i64,
    /// Oldest rows beyond this count are pruned on write.
    pub cache_max_entries: i64,
}

impl AssistantConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("GEMINI_API_KEY").ok(),
            model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-3-flash-preview".to_string()),
            cache_ttl_days: env::var("AI_CACHE_TTL_DAYS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            cache_max_entries: env::var("AI_CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10_000),
        }
    }
}
