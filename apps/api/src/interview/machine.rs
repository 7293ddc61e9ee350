#![allow(dead_code)]

//! Session state machine — strict forward progression through
//! welcome → profile → configuring → answering → results.
//!
//! Every transition takes the Session by value and returns the next value,
//! or an error and no new value. Callers keep the old Session on failure,
//! so a rejected action can never leave partial state behind. Wall-clock
//! inputs (profile id, timestamps, elapsed seconds) are parameters, which
//! keeps a replayed action sequence deterministic.

use thiserror::Error;

use crate::models::candidate::CandidateProfile;
use crate::models::question::Question;
use crate::models::session::{Page, Session, QUESTION_COUNT};
use crate::roles::RoleCatalog;

#[derive(Debug, Error, PartialEq)]
pub enum TransitionError {
    #[error("'{action}' is not available on the current page")]
    WrongPage { action: &'static str },

    #[error("an access code is required to begin")]
    AccessCodeRequired,

    #[error("access code rejected")]
    AccessCodeRejected,

    #[error("candidate name must not be empty")]
    EmptyName,

    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("expected {expected} questions, got {actual}")]
    WrongQuestionCount { expected: usize, actual: usize },

    #[error("no option selected")]
    MissingSelection,

    #[error("selected option is not one of the current question's options")]
    UnknownOption,

    #[error("elapsed time must not be negative")]
    NegativeElapsed,
}

/// Welcome-page gate. With no code configured the gate is open; otherwise
/// the begin action must supply the exact configured code.
#[derive(Debug, Clone)]
pub struct AccessGate {
    code: Option<String>,
}

impl AccessGate {
    pub fn new(code: Option<String>) -> Self {
        Self { code }
    }

    pub fn open() -> Self {
        Self { code: None }
    }

    pub fn check(&self, supplied: Option<&str>) -> Result<(), TransitionError> {
        match (&self.code, supplied) {
            (None, _) => Ok(()),
            (Some(_), None) => Err(TransitionError::AccessCodeRequired),
            (Some(expected), Some(given)) => {
                if expected == given {
                    Ok(())
                } else {
                    Err(TransitionError::AccessCodeRejected)
                }
            }
        }
    }
}

/// One answer action: the chosen option, the wall-clock seconds since the
/// question was presented, and optional free-text notes.
#[derive(Debug, Clone)]
pub struct AnswerSubmission {
    pub selection: String,
    pub elapsed_secs: f64,
    pub notes: String,
}

/// Welcome → Profile.
pub fn begin(
    mut session: Session,
    supplied_code: Option<&str>,
    gate: &AccessGate,
) -> Result<Session, TransitionError> {
    if session.page != Page::Welcome {
        return Err(TransitionError::WrongPage { action: "begin" });
    }
    gate.check(supplied_code)?;
    session.page = Page::Profile;
    Ok(session)
}

/// Profile → Configuring. The profile must be fully populated: non-empty
/// name and a role from the catalog. Id and timestamp arrive already set.
pub fn submit_profile(
    mut session: Session,
    profile: CandidateProfile,
    catalog: &RoleCatalog,
) -> Result<Session, TransitionError> {
    if session.page != Page::Profile {
        return Err(TransitionError::WrongPage { action: "profile" });
    }
    if profile.name.trim().is_empty() {
        return Err(TransitionError::EmptyName);
    }
    if !catalog.contains(&profile.role) {
        return Err(TransitionError::UnknownRole(profile.role));
    }
    session.candidate = Some(profile);
    session.page = Page::Configuring;
    Ok(session)
}

/// Configuring → Answering. Questions land as one validated batch of
/// exactly `QUESTION_COUNT`; they are never mutated afterwards.
pub fn load_questions(
    mut session: Session,
    questions: Vec<Question>,
) -> Result<Session, TransitionError> {
    if session.page != Page::Configuring {
        return Err(TransitionError::WrongPage { action: "start" });
    }
    if questions.len() != QUESTION_COUNT {
        return Err(TransitionError::WrongQuestionCount {
            expected: QUESTION_COUNT,
            actual: questions.len(),
        });
    }
    session.questions = questions;
    session.page = Page::Answering;
    Ok(session)
}

/// One answer action as a single atomic update: append answer, elapsed time
/// and notes, then either advance the index or complete the interview.
/// All checks run before the first append, so a rejected submission mutates
/// nothing and an accepted one advances exactly once.
pub fn submit_answer(
    mut session: Session,
    submission: AnswerSubmission,
) -> Result<Session, TransitionError> {
    if session.page != Page::Answering {
        return Err(TransitionError::WrongPage { action: "answer" });
    }
    if submission.selection.is_empty() {
        return Err(TransitionError::MissingSelection);
    }
    if submission.elapsed_secs < 0.0 {
        return Err(TransitionError::NegativeElapsed);
    }
    let question = session
        .questions
        .get(session.current_question)
        .ok_or(TransitionError::WrongPage { action: "answer" })?;
    if !question.options.iter().any(|o| *o == submission.selection) {
        return Err(TransitionError::UnknownOption);
    }

    session.answers.push(submission.selection);
    session.times.push(submission.elapsed_secs);
    session.notes.push(submission.notes);

    if session.current_question < session.questions.len() - 1 {
        session.current_question += 1;
    } else {
        session.completed = true;
        session.page = Page::Results;
    }
    Ok(session)
}

/// Reinitializes the Session to defaults and returns to Welcome. Valid from
/// any page. The next profile submission mints a fresh id and timestamp.
pub fn reset(_session: Session) -> Session {
    Session::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_profile(catalog: &RoleCatalog) -> CandidateProfile {
        CandidateProfile::new(
            "Ada Lovelace".to_string(),
            catalog.roles()[0].name.clone(),
            Uuid::new_v4(),
            Utc::now(),
        )
    }

    fn sample_questions(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| Question {
                prompt: format!("Question {i}?"),
                options: vec![
                    format!("alpha-{i}"),
                    format!("beta-{i}"),
                    format!("gamma-{i}"),
                    format!("delta-{i}"),
                ],
                correct_answer: format!("alpha-{i}"),
            })
            .collect()
    }

    fn session_at_answering() -> Session {
        let catalog = RoleCatalog::builtin();
        let s = begin(Session::new(), None, &AccessGate::open()).unwrap();
        let s = submit_profile(s, sample_profile(&catalog), &catalog).unwrap();
        load_questions(s, sample_questions(QUESTION_COUNT)).unwrap()
    }

    fn answer(selection: &str) -> AnswerSubmission {
        AnswerSubmission {
            selection: selection.to_string(),
            elapsed_secs: 4.2,
            notes: String::new(),
        }
    }

    #[test]
    fn test_begin_moves_to_profile() {
        let s = begin(Session::new(), None, &AccessGate::open()).unwrap();
        assert_eq!(s.page, Page::Profile);
        assert!(s.progress_consistent());
    }

    #[test]
    fn test_begin_rejected_off_welcome() {
        let mut s = Session::new();
        s.page = Page::Profile;
        let err = begin(s, None, &AccessGate::open()).unwrap_err();
        assert_eq!(err, TransitionError::WrongPage { action: "begin" });
    }

    #[test]
    fn test_gate_requires_code_when_configured() {
        let gate = AccessGate::new(Some("sesame".to_string()));
        assert_eq!(
            begin(Session::new(), None, &gate).unwrap_err(),
            TransitionError::AccessCodeRequired
        );
        assert_eq!(
            begin(Session::new(), Some("wrong"), &gate).unwrap_err(),
            TransitionError::AccessCodeRejected
        );
        let s = begin(Session::new(), Some("sesame"), &gate).unwrap();
        assert_eq!(s.page, Page::Profile);
    }

    #[test]
    fn test_open_gate_ignores_supplied_code() {
        let s = begin(Session::new(), Some("anything"), &AccessGate::open()).unwrap();
        assert_eq!(s.page, Page::Profile);
    }

    #[test]
    fn test_submit_profile_populates_candidate() {
        let catalog = RoleCatalog::builtin();
        let s = begin(Session::new(), None, &AccessGate::open()).unwrap();
        let profile = sample_profile(&catalog);
        let expected_role = profile.role.clone();
        let s = submit_profile(s, profile, &catalog).unwrap();
        assert_eq!(s.page, Page::Configuring);
        assert_eq!(s.candidate.as_ref().unwrap().role, expected_role);
    }

    #[test]
    fn test_submit_profile_rejects_blank_name() {
        let catalog = RoleCatalog::builtin();
        let s = begin(Session::new(), None, &AccessGate::open()).unwrap();
        let mut profile = sample_profile(&catalog);
        profile.name = "   ".to_string();
        assert_eq!(
            submit_profile(s, profile, &catalog).unwrap_err(),
            TransitionError::EmptyName
        );
    }

    #[test]
    fn test_submit_profile_rejects_unknown_role() {
        let catalog = RoleCatalog::builtin();
        let s = begin(Session::new(), None, &AccessGate::open()).unwrap();
        let mut profile = sample_profile(&catalog);
        profile.role = "Astronaut".to_string();
        assert_eq!(
            submit_profile(s, profile, &catalog).unwrap_err(),
            TransitionError::UnknownRole("Astronaut".to_string())
        );
    }

    #[test]
    fn test_load_questions_requires_exact_count() {
        let catalog = RoleCatalog::builtin();
        let s = begin(Session::new(), None, &AccessGate::open()).unwrap();
        let s = submit_profile(s, sample_profile(&catalog), &catalog).unwrap();
        let err = load_questions(s, sample_questions(9)).unwrap_err();
        assert_eq!(
            err,
            TransitionError::WrongQuestionCount {
                expected: QUESTION_COUNT,
                actual: 9
            }
        );
    }

    #[test]
    fn test_load_questions_rejected_before_profile() {
        let s = begin(Session::new(), None, &AccessGate::open()).unwrap();
        let err = load_questions(s, sample_questions(QUESTION_COUNT)).unwrap_err();
        assert_eq!(err, TransitionError::WrongPage { action: "start" });
    }

    #[test]
    fn test_submit_answer_advances_exactly_once() {
        let s = session_at_answering();
        let s = submit_answer(s, answer("beta-0")).unwrap();
        assert_eq!(s.current_question, 1);
        assert!(!s.completed);
        assert_eq!(s.answers, vec!["beta-0".to_string()]);
        assert_eq!(s.times, vec![4.2]);
        assert_eq!(s.notes, vec![String::new()]);
        assert!(s.progress_consistent());
    }

    #[test]
    fn test_submit_answer_rejects_empty_selection() {
        let s = session_at_answering();
        let before = s.clone();
        assert_eq!(
            submit_answer(s.clone(), answer("")).unwrap_err(),
            TransitionError::MissingSelection
        );
        // rejected action mutates nothing
        assert_eq!(s, before);
    }

    #[test]
    fn test_submit_answer_rejects_foreign_option() {
        let s = session_at_answering();
        assert_eq!(
            submit_answer(s, answer("alpha-7")).unwrap_err(),
            TransitionError::UnknownOption
        );
    }

    #[test]
    fn test_submit_answer_rejects_negative_elapsed() {
        let s = session_at_answering();
        let submission = AnswerSubmission {
            selection: "alpha-0".to_string(),
            elapsed_secs: -0.001,
            notes: String::new(),
        };
        assert_eq!(
            submit_answer(s, submission).unwrap_err(),
            TransitionError::NegativeElapsed
        );
    }

    #[test]
    fn test_last_answer_completes_and_moves_to_results() {
        let mut s = session_at_answering();
        for i in 0..QUESTION_COUNT {
            assert_eq!(s.current_question, i);
            s = submit_answer(s, answer(&format!("alpha-{i}"))).unwrap();
            assert!(s.progress_consistent());
        }
        assert!(s.completed);
        assert_eq!(s.page, Page::Results);
        assert_eq!(s.answers.len(), QUESTION_COUNT);
        assert_eq!(s.current_question, QUESTION_COUNT - 1);
    }

    #[test]
    fn test_answer_rejected_after_completion() {
        let mut s = session_at_answering();
        for i in 0..QUESTION_COUNT {
            s = submit_answer(s, answer(&format!("alpha-{i}"))).unwrap();
        }
        assert_eq!(
            submit_answer(s, answer("alpha-0")).unwrap_err(),
            TransitionError::WrongPage { action: "answer" }
        );
    }

    #[test]
    fn test_reset_returns_defaults_from_any_page() {
        let mut s = session_at_answering();
        s = submit_answer(s, answer("alpha-0")).unwrap();
        let r = reset(s);
        assert_eq!(r, Session::new());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let s = session_at_answering();
        let once = reset(s);
        let twice = reset(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_replay_produces_identical_session() {
        // Same ordered inputs against a fresh Session → same final value.
        let catalog = RoleCatalog::builtin();
        let profile = sample_profile(&catalog);
        let run = || {
            let s = begin(Session::new(), None, &AccessGate::open()).unwrap();
            let s = submit_profile(s, profile.clone(), &catalog).unwrap();
            let mut s = load_questions(s, sample_questions(QUESTION_COUNT)).unwrap();
            for i in 0..QUESTION_COUNT {
                s = submit_answer(
                    s,
                    AnswerSubmission {
                        selection: format!("alpha-{i}"),
                        elapsed_secs: i as f64,
                        notes: format!("note {i}"),
                    },
                )
                .unwrap();
            }
            s
        };
        assert_eq!(run(), run());
    }
}
