//! Generation response validator.
//!
//! LLM output is untrusted until it passes this module. One pure function
//! turns a raw payload into exactly `expected_count` validated questions or
//! a typed failure — never a partially-valid or truncated batch. No network,
//! no side effects, so fixture payloads exercise it directly in tests.

use serde_json::Value;
use thiserror::Error;

use crate::models::question::{Question, OPTIONS_PER_QUESTION};

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("malformed generation payload: {0}")]
    MalformedPayload(String),

    #[error("expected {expected} questions, payload contains {actual}")]
    CountMismatch { expected: usize, actual: usize },

    #[error("question {index} is invalid: {reason}")]
    InvalidQuestion { index: usize, reason: String },
}

/// Validates a raw generation payload of the shape
/// `{"questions": [{"question", "options", "correct_answer"}, ...]}` and
/// returns the questions in payload order.
pub fn validate_batch(raw: &Value, expected_count: usize) -> Result<Vec<Question>, ValidationError> {
    let object = raw
        .as_object()
        .ok_or_else(|| ValidationError::MalformedPayload("payload is not a JSON object".into()))?;

    let records = object
        .get("questions")
        .ok_or_else(|| ValidationError::MalformedPayload("missing 'questions' field".into()))?
        .as_array()
        .ok_or_else(|| ValidationError::MalformedPayload("'questions' is not an array".into()))?;

    if records.len() != expected_count {
        return Err(ValidationError::CountMismatch {
            expected: expected_count,
            actual: records.len(),
        });
    }

    records
        .iter()
        .enumerate()
        .map(|(index, record)| validate_record(index, record))
        .collect()
}

fn validate_record(index: usize, record: &Value) -> Result<Question, ValidationError> {
    let invalid = |reason: &str| ValidationError::InvalidQuestion {
        index,
        reason: reason.to_string(),
    };

    let object = record.as_object().ok_or_else(|| invalid("not an object"))?;

    let prompt = object
        .get("question")
        .and_then(Value::as_str)
        .ok_or_else(|| invalid("missing 'question' text"))?;
    if prompt.trim().is_empty() {
        return Err(invalid("'question' text is empty"));
    }

    let raw_options = object
        .get("options")
        .ok_or_else(|| invalid("missing 'options'"))?
        .as_array()
        .ok_or_else(|| invalid("'options' is not an array"))?;
    if raw_options.len() != OPTIONS_PER_QUESTION {
        return Err(ValidationError::InvalidQuestion {
            index,
            reason: format!(
                "expected {OPTIONS_PER_QUESTION} options, got {}",
                raw_options.len()
            ),
        });
    }

    let mut options = Vec::with_capacity(OPTIONS_PER_QUESTION);
    for option in raw_options {
        let option = option
            .as_str()
            .ok_or_else(|| invalid("option is not a string"))?;
        if options.iter().any(|o: &String| o == option) {
            return Err(invalid("duplicate options"));
        }
        options.push(option.to_string());
    }

    let correct_answer = object
        .get("correct_answer")
        .and_then(Value::as_str)
        .ok_or_else(|| invalid("missing 'correct_answer'"))?;
    // Byte-for-byte membership; no trimming or case folding.
    if !options.iter().any(|o| o == correct_answer) {
        return Err(invalid("'correct_answer' is not among the options"));
    }

    Ok(Question {
        prompt: prompt.to_string(),
        options,
        correct_answer: correct_answer.to_string(),
    })
}
