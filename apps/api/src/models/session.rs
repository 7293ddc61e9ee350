#![allow(dead_code)]

use serde::Serialize;

use crate::models::candidate::CandidateProfile;
use crate::models::question::Question;

/// Questions per interview attempt.
pub const QUESTION_COUNT: usize = 10;

/// The page a session is currently on. Progression is strictly forward;
/// the only way back to `Welcome` is an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Welcome,
    Profile,
    /// Interview sub-state: topic/difficulty chosen, questions not yet loaded.
    Configuring,
    /// Interview sub-state: a validated batch is loaded and being answered.
    Answering,
    Results,
}

/// Per-attempt mutable record tracking page, profile, and quiz progress.
///
/// Invariant: `answers`, `times`, and `notes` always have the same length,
/// equal to `current_question` until completion and to `questions.len()`
/// after. Transitions in `interview::machine` preserve this; nothing else
/// mutates a Session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub page: Page,
    pub candidate: Option<CandidateProfile>,
    pub questions: Vec<Question>,
    pub answers: Vec<String>,
    pub times: Vec<f64>,
    pub notes: Vec<String>,
    pub current_question: usize,
    pub completed: bool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            page: Page::Welcome,
            candidate: None,
            questions: Vec::new(),
            answers: Vec::new(),
            times: Vec::new(),
            notes: Vec::new(),
            current_question: 0,
            completed: false,
        }
    }

    /// The question currently presented, if the session is mid-interview.
    pub fn current(&self) -> Option<&Question> {
        if self.page == Page::Answering && !self.completed {
            self.questions.get(self.current_question)
        } else {
            None
        }
    }

    /// Accumulator-length invariant. Checked by tests after every transition.
    pub fn progress_consistent(&self) -> bool {
        let n = self.answers.len();
        let aligned = self.times.len() == n && self.notes.len() == n;
        if self.completed {
            aligned && n == self.questions.len()
        } else {
            aligned && n == self.current_question
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
