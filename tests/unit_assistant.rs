use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use quran_academy_api::modules::assistant::cache::{AnswerCache, BoxFuture, normalize_role};
use quran_academy_api::modules::assistant::generator::{FALLBACK_RESPONSE, ResponseGenerator};
use quran_academy_api::modules::assistant::service::Assistant;
use quran_academy_api::utils::errors::AppError;
use tokio::sync::Mutex;

/// In-memory stand-in for the Postgres cache.
#[derive(Default)]
struct InMemoryCache {
    entries: Mutex<HashMap<(String, String), String>>,
}

impl AnswerCache for InMemoryCache {
    fn lookup<'a>(
        &'a self,
        question: &'a str,
        role: &'a str,
    ) -> BoxFuture<'a, Result<Option<String>, AppError>> {
        Box::pin(async move {
            let entries = self.entries.lock().await;
            Ok(entries.get(&(question.to_string(), role.to_string())).cloned())
        })
    }

    fn store<'a>(
        &'a self,
        question: &'a str,
        role: &'a str,
        response: &'a str,
    ) -> BoxFuture<'a, Result<(), AppError>> {
        Box::pin(async move {
            let mut entries = self.entries.lock().await;
            entries.insert(
                (question.to_string(), role.to_string()),
                response.to_string(),
            );
            Ok(())
        })
    }
}

/// Counts invocations; answers with a canned string or an error.
struct CountingGenerator {
    calls: Arc<AtomicUsize>,
    answer: &'static str,
    fail: bool,
}

impl CountingGenerator {
    fn answering(answer: &'static str) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                calls: calls.clone(),
                answer,
                fail: false,
            },
            calls,
        )
    }

    fn failing() -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                calls: calls.clone(),
                answer: "",
                fail: true,
            },
            calls,
        )
    }
}

impl ResponseGenerator for CountingGenerator {
    fn generate<'a>(
        &'a self,
        _question: &'a str,
        _context: &'a str,
    ) -> BoxFuture<'a, Result<String, AppError>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(AppError::upstream(anyhow::anyhow!("generation failed")))
            } else {
                Ok(self.answer.to_string())
            }
        })
    }
}

async fn noop_context() -> Result<String, AppError> {
    Ok("context".to_string())
}

#[tokio::test]
async fn test_miss_generates_and_stores() {
    let (generator, calls) = CountingGenerator::answering("Tajweed governs recitation.");
    let assistant = Assistant::new(Box::new(InMemoryCache::default()), Box::new(generator));

    let answer = assistant
        .ask("What is tajweed?", Some("student"), noop_context)
        .await
        .unwrap();

    assert_eq!(answer, "Tajweed governs recitation.");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_hit_skips_generator() {
    let (generator, calls) = CountingGenerator::answering("first answer");
    let assistant = Assistant::new(Box::new(InMemoryCache::default()), Box::new(generator));

    let first = assistant
        .ask("What is hifz?", Some("student"), noop_context)
        .await
        .unwrap();
    let second = assistant
        .ask("What is hifz?", Some("student"), noop_context)
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_distinct_roles_do_not_share_entries() {
    let (generator, calls) = CountingGenerator::answering("an answer");
    let assistant = Assistant::new(Box::new(InMemoryCache::default()), Box::new(generator));

    assistant
        .ask("What is hifz?", Some("student"), noop_context)
        .await
        .unwrap();
    assistant
        .ask("What is hifz?", Some("teacher"), noop_context)
        .await
        .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_anonymous_and_visitor_share_an_entry() {
    let (generator, calls) = CountingGenerator::answering("an answer");
    let assistant = Assistant::new(Box::new(InMemoryCache::default()), Box::new(generator));

    assistant
        .ask("What is hifz?", None, noop_context)
        .await
        .unwrap();
    assistant
        .ask("What is hifz?", Some("visitor"), noop_context)
        .await
        .unwrap();
    assistant
        .ask("What is hifz?", Some(""), noop_context)
        .await
        .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_empty_generation_caches_fallback() {
    let (generator, calls) = CountingGenerator::answering("   ");
    let assistant = Assistant::new(Box::new(InMemoryCache::default()), Box::new(generator));

    let answer = assistant
        .ask("Unanswerable?", None, noop_context)
        .await
        .unwrap();
    assert_eq!(answer, FALLBACK_RESPONSE);

    // The fallback itself is cached.
    let again = assistant
        .ask("Unanswerable?", None, noop_context)
        .await
        .unwrap();
    assert_eq!(again, FALLBACK_RESPONSE);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_generation_error_is_not_cached() {
    let (generator, calls) = CountingGenerator::failing();
    let assistant = Assistant::new(Box::new(InMemoryCache::default()), Box::new(generator));

    assert!(
        assistant
            .ask("Broken?", None, noop_context)
            .await
            .is_err()
    );
    // A later identical question retries instead of replaying the failure.
    assert!(
        assistant
            .ask("Broken?", None, noop_context)
            .await
            .is_err()
    );
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_concurrent_identical_questions_generate_once() {
    let (generator, calls) = CountingGenerator::answering("shared answer");
    let assistant = Arc::new(Assistant::new(
        Box::new(InMemoryCache::default()),
        Box::new(generator),
    ));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let assistant = assistant.clone();
        handles.push(tokio::spawn(async move {
            assistant
                .ask("What is tafsir?", Some("student"), noop_context)
                .await
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), "shared answer");
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_normalize_role() {
    assert_eq!(normalize_role(None), "visitor");
    assert_eq!(normalize_role(Some("")), "visitor");
    assert_eq!(normalize_role(Some("student")), "student");
    // Exact-match semantics: whitespace is kept as authored.
    assert_eq!(normalize_role(Some(" student ")), " student ");
}
