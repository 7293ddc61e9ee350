//! In-memory session store.
//!
//! One `Session` per session id, mutated only under the lock and never
//! across an await. Transitions run on a clone and are written back only on
//! success, so a failed action leaves the stored value untouched.
//!
//! Each entry carries a `generating` flag: while a generation call is in
//! flight for a session, every other action on it is rejected with a
//! conflict — rejected, not queued. The entry also tracks when the current
//! question was presented; the elapsed `Instant` delta is handed to the
//! state machine as the answer's timing input and the clock resets only on
//! successful submission.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::machine::{self, AnswerSubmission, TransitionError};
use crate::models::question::Question;
use crate::models::session::{Page, Session};

struct SessionEntry {
    session: Session,
    generating: bool,
    presented_at: Option<Instant>,
}

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<Uuid, SessionEntry>>>,
}

const GENERATION_IN_FLIGHT: &str = "a generation call is already in flight for this session";

impl SessionStore {
    pub fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        let entry = SessionEntry {
            session: Session::new(),
            generating: false,
            presented_at: None,
        };
        self.lock().insert(id, entry);
        id
    }

    pub fn get(&self, id: Uuid) -> Result<Session, AppError> {
        let map = self.lock();
        let entry = entry_of(&map, id)?;
        Ok(entry.session.clone())
    }

    /// Runs a transition against the stored session, committing on success.
    pub fn apply<F>(&self, id: Uuid, transition: F) -> Result<Session, AppError>
    where
        F: FnOnce(Session) -> Result<Session, TransitionError>,
    {
        let mut map = self.lock();
        let entry = entry_of_mut(&mut map, id)?;
        if entry.generating {
            return Err(AppError::Conflict(GENERATION_IN_FLIGHT.to_string()));
        }
        let next = transition(entry.session.clone())?;
        entry.session = next.clone();
        Ok(next)
    }

    /// Records an answer, timing it from when the question was presented.
    /// The presentation clock resets only when the submission succeeds.
    pub fn submit_answer(
        &self,
        id: Uuid,
        selection: String,
        notes: String,
    ) -> Result<Session, AppError> {
        let mut map = self.lock();
        let entry = entry_of_mut(&mut map, id)?;
        if entry.generating {
            return Err(AppError::Conflict(GENERATION_IN_FLIGHT.to_string()));
        }
        let elapsed_secs = entry
            .presented_at
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0);
        let next = machine::submit_answer(
            entry.session.clone(),
            AnswerSubmission {
                selection,
                elapsed_secs,
                notes,
            },
        )?;
        entry.session = next.clone();
        entry.presented_at = Some(Instant::now());
        Ok(next)
    }

    /// Claims the session for a generation call. Fails if one is already in
    /// flight or the session is not waiting for questions.
    pub fn begin_generation(&self, id: Uuid) -> Result<(), AppError> {
        let mut map = self.lock();
        let entry = entry_of_mut(&mut map, id)?;
        if entry.generating {
            return Err(AppError::Conflict(GENERATION_IN_FLIGHT.to_string()));
        }
        if entry.session.page != Page::Configuring {
            return Err(TransitionError::WrongPage { action: "start" }.into());
        }
        entry.generating = true;
        Ok(())
    }

    /// Installs a validated batch and starts the first question's clock.
    pub fn complete_generation(
        &self,
        id: Uuid,
        questions: Vec<Question>,
    ) -> Result<Session, AppError> {
        let mut map = self.lock();
        let entry = entry_of_mut(&mut map, id)?;
        entry.generating = false;
        let next = machine::load_questions(entry.session.clone(), questions)?;
        entry.session = next.clone();
        entry.presented_at = Some(Instant::now());
        Ok(next)
    }

    /// Releases the generation claim without touching the session, leaving
    /// it in Configuring for an explicit retry.
    pub fn abort_generation(&self, id: Uuid) {
        if let Some(entry) = self.lock().get_mut(&id) {
            entry.generating = false;
        }
    }

    pub fn reset(&self, id: Uuid) -> Result<Session, AppError> {
        let mut map = self.lock();
        let entry = entry_of_mut(&mut map, id)?;
        if entry.generating {
            return Err(AppError::Conflict(GENERATION_IN_FLIGHT.to_string()));
        }
        entry.session = machine::reset(entry.session.clone());
        entry.presented_at = None;
        Ok(entry.session.clone())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, SessionEntry>> {
        self.inner.lock().expect("session store lock poisoned")
    }
}

fn entry_of(map: &HashMap<Uuid, SessionEntry>, id: Uuid) -> Result<&SessionEntry, AppError> {
    map.get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

fn entry_of_mut(
    map: &mut HashMap<Uuid, SessionEntry>,
    id: Uuid,
) -> Result<&mut SessionEntry, AppError> {
    map.get_mut(&id)
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}
