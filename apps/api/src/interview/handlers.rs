use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::notes::{analyze_notes, NotesAnalysis};
use crate::errors::AppError;
use crate::generation::generator::generate_questions;
use crate::interview::machine::{self, AccessGate};
use crate::interview::scoring::{outcomes, score, summarize_times, QuestionOutcome, TimingSummary};
use crate::models::candidate::CandidateProfile;
use crate::models::question::Difficulty;
use crate::models::session::{Page, Session, QUESTION_COUNT};
use crate::report::{build_report, render_markdown};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / response bodies
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct BeginRequest {
    pub access_code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub name: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct StartRequest {
    pub topic: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub selection: String,
    #[serde(default)]
    pub notes: String,
}

/// What the client sees of the question being asked. Deliberately has no
/// `correct_answer` field — answers only appear in results after completion.
#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub options: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub page: Page,
    pub candidate: Option<CandidateProfile>,
    pub question: Option<QuestionView>,
    pub answered: usize,
    pub completed: bool,
}

impl SessionView {
    fn of(id: Uuid, session: &Session) -> Self {
        let question = session.current().map(|q| QuestionView {
            number: session.current_question + 1,
            total: session.questions.len(),
            prompt: q.prompt.clone(),
            options: q.options.clone(),
        });
        Self {
            id,
            page: session.page,
            candidate: session.candidate.clone(),
            question,
            answered: session.answers.len(),
            completed: session.completed,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    pub score: f64,
    pub timing: Option<TimingSummary>,
    pub outcomes: Vec<QuestionOutcome>,
    pub notes_analysis: Option<NotesAnalysis>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Result<Json<SessionView>, AppError> {
    let id = state.sessions.create();
    info!("Created session {id}");
    let session = state.sessions.get(id)?;
    Ok(Json(SessionView::of(id, &session)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = state.sessions.get(id)?;
    Ok(Json(SessionView::of(id, &session)))
}

/// POST /api/v1/sessions/:id/begin
pub async fn handle_begin(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<BeginRequest>,
) -> Result<Json<SessionView>, AppError> {
    let gate = AccessGate::new(state.config.access_code.clone());
    let session = state
        .sessions
        .apply(id, |s| machine::begin(s, req.access_code.as_deref(), &gate))?;
    Ok(Json(SessionView::of(id, &session)))
}

/// POST /api/v1/sessions/:id/profile
pub async fn handle_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ProfileRequest>,
) -> Result<Json<SessionView>, AppError> {
    let profile = CandidateProfile::new(req.name, req.role, Uuid::new_v4(), Utc::now());
    let session = state
        .sessions
        .apply(id, |s| machine::submit_profile(s, profile, &state.roles))?;
    info!(
        "Session {id}: profile submitted for role '{}'",
        session.candidate.as_ref().map(|c| c.role.as_str()).unwrap_or("")
    );
    Ok(Json(SessionView::of(id, &session)))
}

/// POST /api/v1/sessions/:id/start
///
/// Claims the session before the generation call and releases it after, so
/// a second start (or any other action) while the call is outstanding gets
/// a 409 instead of being queued. A failed call leaves the session in
/// Configuring for an explicit retry.
pub async fn handle_start(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<StartRequest>,
) -> Result<Json<SessionView>, AppError> {
    let topic = req.topic.trim().to_string();
    if topic.is_empty() {
        return Err(AppError::Validation("topic must not be empty".to_string()));
    }

    state.sessions.begin_generation(id)?;
    info!(
        "Session {id}: generating {QUESTION_COUNT} {} questions on '{topic}'",
        req.difficulty
    );

    let generated =
        generate_questions(state.question_source.as_ref(), &topic, req.difficulty, QUESTION_COUNT)
            .await;

    match generated {
        Ok(questions) => {
            let session = state.sessions.complete_generation(id, questions)?;
            Ok(Json(SessionView::of(id, &session)))
        }
        Err(e) => {
            state.sessions.abort_generation(id);
            Err(e)
        }
    }
}

/// POST /api/v1/sessions/:id/answer
pub async fn handle_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<SessionView>, AppError> {
    let session = state.sessions.submit_answer(id, req.selection, req.notes)?;
    if session.completed {
        info!("Session {id}: interview completed");
    }
    Ok(Json(SessionView::of(id, &session)))
}

/// POST /api/v1/sessions/:id/reset
pub async fn handle_reset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = state.sessions.reset(id)?;
    info!("Session {id}: reset to defaults");
    Ok(Json(SessionView::of(id, &session)))
}

/// GET /api/v1/sessions/:id/results
pub async fn handle_results(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResultsResponse>, AppError> {
    let session = completed_session(&state, id)?;
    let notes_analysis = analyze_notes(&state.llm, &session.notes).await;
    Ok(Json(ResultsResponse {
        score: score(&session.questions, &session.answers)?,
        timing: summarize_times(&session.times),
        outcomes: outcomes(&session.questions, &session.answers, &session.times, &session.notes)?,
        notes_analysis,
    }))
}

/// GET /api/v1/sessions/:id/report
///
/// Renders the final report as a downloadable Markdown artifact.
pub async fn handle_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let session = completed_session(&state, id)?;
    let notes_analysis = analyze_notes(&state.llm, &session.notes).await;
    let report = build_report(&session, notes_analysis, Utc::now())?;
    let markdown = render_markdown(&report);
    Ok((
        [
            (header::CONTENT_TYPE, "text/markdown; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"interview-report.md\"",
            ),
        ],
        markdown,
    ))
}

fn completed_session(state: &AppState, id: Uuid) -> Result<Session, AppError> {
    let session = state.sessions.get(id)?;
    if !session.completed {
        return Err(AppError::UnprocessableEntity(
            "interview is not complete".to_string(),
        ));
    }
    Ok(session)
}
