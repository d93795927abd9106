//! External answer generation.
//!
//! The production implementation calls the Gemini `generateContent` REST
//! endpoint. The trait seam exists so the assistant orchestration can be
//! exercised with a stand-in generator.

use serde_json::{Value, json};
use tracing::instrument;

use crate::utils::errors::AppError;

use super::cache::BoxFuture;

/// Returned (and cached) when the generation service produced nothing usable.
pub const FALLBACK_RESPONSE: &str = "I'm sorry, I couldn't process that request.";

pub trait ResponseGenerator: Send + Sync {
    /// Produces an answer to `question` given an academy context snapshot.
    fn generate<'a>(
        &'a self,
        question: &'a str,
        context: &'a str,
    ) -> BoxFuture<'a, Result<String, AppError>>;
}

/// Gemini-backed generator.
#[derive(Clone, Debug)]
pub struct GeminiGenerator {
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiGenerator {
    pub fn new(api_key: Option<String>, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
        }
    }

    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    #[instrument(skip(self, question, context))]
    async fn generate_inner(&self, question: &str, context: &str) -> Result<String, AppError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AppError::upstream(anyhow::anyhow!(
                "AI features are not configured (GEMINI_API_KEY is unset)"
            ))
        })?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let body = json!({
            "contents": [{ "parts": [{ "text": question }] }],
            "systemInstruction": { "parts": [{ "text": context }] }
        });

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::upstream(anyhow::anyhow!("AI request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::upstream(anyhow::anyhow!(
                "AI service returned status {}",
                response.status()
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| AppError::upstream(anyhow::anyhow!("Malformed AI response: {}", e)))?;

        Ok(extract_text(&payload))
    }
}

impl ResponseGenerator for GeminiGenerator {
    fn generate<'a>(
        &'a self,
        question: &'a str,
        context: &'a str,
    ) -> BoxFuture<'a, Result<String, AppError>> {
        Box::pin(self.generate_inner(question, context))
    }
}

/// Concatenates the text parts of the first candidate. Empty when the
/// response carries no usable text; the caller substitutes the fallback.
fn extract_text(payload: &Value) -> String {
    payload["candidates"][0]["content"]["parts"]
        .as_array()
        .map(|parts| {
            parts
                .iter()
                .filter_map(|p| p["text"].as_str())
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_reads_first_candidate() {
        let payload = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Tajweed is " }, { "text": "recitation." }] }
            }]
        });
        assert_eq!(extract_text(&payload), "Tajweed is recitation.");
    }

    #[test]
    fn test_extract_text_empty_on_missing_candidates() {
        assert_eq!(extract_text(&json!({})), "");
        assert_eq!(extract_text(&json!({ "candidates": [] })), "");
    }
}
