//! Question generation — one call produces the raw payload, the validator
//! decides what enters a Session.
//!
//! The source is pluggable behind `QuestionSource` (carried in `AppState`
//! as `Arc<dyn QuestionSource>`), so tests drive the orchestration with
//! fixture payloads and a two-phase source could be swapped in without
//! touching callers. The shipped source asks for the whole batch at once.

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::{QUESTION_PROMPT_TEMPLATE, QUESTION_SYSTEM};
use crate::generation::validator::validate_batch;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::LlmClient;
use crate::models::question::{Difficulty, Question};

/// Produces a raw, unvalidated generation payload for a topic/difficulty.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn generate(
        &self,
        topic: &str,
        difficulty: Difficulty,
        count: usize,
    ) -> Result<Value, AppError>;
}

/// Single-batch LLM source: all questions from one call.
pub struct LlmQuestionSource(pub LlmClient);

#[async_trait]
impl QuestionSource for LlmQuestionSource {
    async fn generate(
        &self,
        topic: &str,
        difficulty: Difficulty,
        count: usize,
    ) -> Result<Value, AppError> {
        let system = QUESTION_SYSTEM.replace("{json_only}", JSON_ONLY_INSTRUCTION);
        let prompt = QUESTION_PROMPT_TEMPLATE
            .replace("{count}", &count.to_string())
            .replace("{difficulty}", &difficulty.to_string())
            .replace("{topic}", topic);

        self.0
            .call_json::<Value>(&prompt, &system)
            .await
            .map_err(|e| AppError::Llm(format!("question generation call failed: {e}")))
    }
}

/// Fetches and validates one batch. Any failure surfaces as a single error
/// and nothing reaches the caller's Session — the attempt can be repeated
/// against the same configuration.
pub async fn generate_questions(
    source: &dyn QuestionSource,
    topic: &str,
    difficulty: Difficulty,
    expected_count: usize,
) -> Result<Vec<Question>, AppError> {
    let raw = source.generate(topic, difficulty, expected_count).await?;
    let questions = validate_batch(&raw, expected_count)
        .map_err(|e| AppError::Llm(format!("generated payload rejected: {e}")))?;
    info!(
        "Validated {} generated questions for topic '{topic}' ({difficulty})",
        questions.len()
    );
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Fixture source returning a canned payload, no network.
    struct FixtureSource(Value);

    #[async_trait]
    impl QuestionSource for FixtureSource {
        async fn generate(
            &self,
            _topic: &str,
            _difficulty: Difficulty,
            _count: usize,
        ) -> Result<Value, AppError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl QuestionSource for FailingSource {
        async fn generate(
            &self,
            _topic: &str,
            _difficulty: Difficulty,
            _count: usize,
        ) -> Result<Value, AppError> {
            Err(AppError::Llm("upstream timeout".to_string()))
        }
    }

    fn well_formed(n: usize) -> Value {
        json!({
            "questions": (0..n).map(|i| json!({
                "question": format!("Q{i}?"),
                "options": [format!("a{i}"), format!("b{i}"), format!("c{i}"), format!("d{i}")],
                "correct_answer": format!("c{i}"),
            })).collect::<Vec<_>>()
        })
    }

    #[tokio::test]
    async fn test_valid_payload_passes_through() {
        let source = FixtureSource(well_formed(10));
        let questions = generate_questions(&source, "Rust", Difficulty::Medium, 10)
            .await
            .unwrap();
        assert_eq!(questions.len(), 10);
        assert_eq!(questions[0].correct_answer, "c0");
    }

    #[tokio::test]
    async fn test_short_payload_is_rejected_whole() {
        let source = FixtureSource(well_formed(7));
        let err = generate_questions(&source, "Rust", Difficulty::Easy, 10)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }

    #[tokio::test]
    async fn test_source_failure_propagates_as_llm_error() {
        let err = generate_questions(&FailingSource, "Go", Difficulty::Hard, 10)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }
}
