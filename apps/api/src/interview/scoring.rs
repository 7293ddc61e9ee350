//! Scoring and timing analytics over a completed answer sheet.
//! Pure functions; an inconsistent sheet is an explicit error, never NaN.

use serde::Serialize;
use thiserror::Error;

use crate::models::question::Question;

#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    #[error("cannot score an interview with no questions")]
    NoQuestions,

    #[error("answer count {answers} does not match question count {questions}")]
    LengthMismatch { questions: usize, answers: usize },
}

/// Percentage of answers matching the correct option: `100 * matches / N`.
pub fn score(questions: &[Question], answers: &[String]) -> Result<f64, ScoreError> {
    if questions.is_empty() {
        return Err(ScoreError::NoQuestions);
    }
    if answers.len() != questions.len() {
        return Err(ScoreError::LengthMismatch {
            questions: questions.len(),
            answers: answers.len(),
        });
    }
    let matches = questions
        .iter()
        .zip(answers)
        .filter(|(q, a)| q.is_correct(a))
        .count();
    Ok(matches as f64 * 100.0 / questions.len() as f64)
}

/// One row of the per-question breakdown shown on the results page and in
/// the exported report.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionOutcome {
    pub number: usize,
    pub prompt: String,
    pub selected: String,
    pub correct_answer: String,
    pub correct: bool,
    pub time_secs: f64,
    pub notes: String,
}

/// Derives the per-question rows. Lengths must already agree; the state
/// machine guarantees this for completed sessions.
pub fn outcomes(
    questions: &[Question],
    answers: &[String],
    times: &[f64],
    notes: &[String],
) -> Result<Vec<QuestionOutcome>, ScoreError> {
    if questions.is_empty() {
        return Err(ScoreError::NoQuestions);
    }
    if answers.len() != questions.len() || times.len() != questions.len() {
        return Err(ScoreError::LengthMismatch {
            questions: questions.len(),
            answers: answers.len(),
        });
    }
    Ok(questions
        .iter()
        .enumerate()
        .map(|(i, q)| QuestionOutcome {
            number: i + 1,
            prompt: q.prompt.clone(),
            selected: answers[i].clone(),
            correct_answer: q.correct_answer.clone(),
            correct: q.is_correct(&answers[i]),
            time_secs: times[i],
            notes: notes.get(i).cloned().unwrap_or_default(),
        })
        .collect())
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TimingSummary {
    pub total_secs: f64,
    pub average_secs: f64,
}

/// Total and average seconds per question. `None` when nothing was timed.
pub fn summarize_times(times: &[f64]) -> Option<TimingSummary> {
    if times.is_empty() {
        return None;
    }
    let total: f64 = times.iter().sum();
    Some(TimingSummary {
        total_secs: total,
        average_secs: total / times.len() as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions_with_correct(correct: &[&str]) -> Vec<Question> {
        correct
            .iter()
            .map(|c| Question {
                prompt: format!("pick {c}"),
                options: vec![
                    c.to_string(),
                    "wrong-1".to_string(),
                    "wrong-2".to_string(),
                    "wrong-3".to_string(),
                ],
                correct_answer: c.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_seven_of_ten_scores_seventy() {
        // correct for indices 0–6, incorrect for 7–9
        let correct: Vec<String> = (0..10).map(|i| format!("c{i}")).collect();
        let questions =
            questions_with_correct(&correct.iter().map(String::as_str).collect::<Vec<_>>());
        let answers: Vec<String> = (0..10)
            .map(|i| {
                if i <= 6 {
                    format!("c{i}")
                } else {
                    "wrong-1".to_string()
                }
            })
            .collect();
        assert_eq!(score(&questions, &answers).unwrap(), 70.0);
    }

    #[test]
    fn test_no_matches_scores_zero() {
        let questions = questions_with_correct(&["a", "b"]);
        let answers = vec!["wrong-1".to_string(), "wrong-2".to_string()];
        assert_eq!(score(&questions, &answers).unwrap(), 0.0);
    }

    #[test]
    fn test_all_matches_scores_hundred() {
        let questions = questions_with_correct(&["a", "b", "c"]);
        let answers = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(score(&questions, &answers).unwrap(), 100.0);
    }

    #[test]
    fn test_empty_is_an_error_not_zero() {
        assert_eq!(score(&[], &[]).unwrap_err(), ScoreError::NoQuestions);
    }

    #[test]
    fn test_length_mismatch_is_an_error() {
        let questions = questions_with_correct(&["a", "b"]);
        let answers = vec!["a".to_string()];
        assert_eq!(
            score(&questions, &answers).unwrap_err(),
            ScoreError::LengthMismatch {
                questions: 2,
                answers: 1
            }
        );
    }

    #[test]
    fn test_match_is_byte_for_byte() {
        let questions = questions_with_correct(&["Answer"]);
        let answers = vec!["answer".to_string()];
        assert_eq!(score(&questions, &answers).unwrap(), 0.0);
    }

    #[test]
    fn test_outcomes_rows_line_up() {
        let questions = questions_with_correct(&["a", "b"]);
        let answers = vec!["a".to_string(), "wrong-1".to_string()];
        let times = vec![3.0, 9.0];
        let notes = vec!["first".to_string(), String::new()];
        let rows = outcomes(&questions, &answers, &times, &notes).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].number, 1);
        assert!(rows[0].correct);
        assert_eq!(rows[0].notes, "first");
        assert!(!rows[1].correct);
        assert_eq!(rows[1].time_secs, 9.0);
    }

    #[test]
    fn test_outcomes_rejects_mismatch() {
        let questions = questions_with_correct(&["a", "b"]);
        let err = outcomes(&questions, &["a".to_string()], &[1.0], &[]).unwrap_err();
        assert!(matches!(err, ScoreError::LengthMismatch { .. }));
    }

    #[test]
    fn test_summarize_times() {
        let summary = summarize_times(&[2.0, 4.0, 6.0]).unwrap();
        assert_eq!(summary.total_secs, 12.0);
        assert_eq!(summary.average_secs, 4.0);
        assert!(summarize_times(&[]).is_none());
    }
}
