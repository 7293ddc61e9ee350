//! Report assembly and rendering.
//!
//! A `Report` is a pure function of a completed Session plus the optional
//! notes analysis; rendering produces the downloadable Markdown artifact.
//! Nothing here feeds back into the Session.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write;

use crate::analysis::notes::NotesAnalysis;
use crate::errors::AppError;
use crate::interview::scoring::{outcomes, score, summarize_times, QuestionOutcome, TimingSummary};
use crate::models::candidate::CandidateProfile;
use crate::models::session::Session;

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub candidate: CandidateProfile,
    pub score: f64,
    pub timing: TimingSummary,
    pub outcomes: Vec<QuestionOutcome>,
    pub notes_analysis: Option<NotesAnalysis>,
    pub generated_at: DateTime<Utc>,
}

/// Assembles the report from a completed session.
pub fn build_report(
    session: &Session,
    notes_analysis: Option<NotesAnalysis>,
    generated_at: DateTime<Utc>,
) -> Result<Report, AppError> {
    if !session.completed {
        return Err(AppError::UnprocessableEntity(
            "interview is not complete".to_string(),
        ));
    }
    let candidate = session.candidate.clone().ok_or_else(|| {
        AppError::UnprocessableEntity("session has no candidate profile".to_string())
    })?;
    let timing = summarize_times(&session.times).ok_or_else(|| {
        AppError::UnprocessableEntity("session has no recorded timings".to_string())
    })?;

    Ok(Report {
        candidate,
        score: score(&session.questions, &session.answers)?,
        timing,
        outcomes: outcomes(
            &session.questions,
            &session.answers,
            &session.times,
            &session.notes,
        )?,
        notes_analysis,
        generated_at,
    })
}

pub fn render_markdown(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Interview Report — {}", report.candidate.name);
    let _ = writeln!(out);
    let _ = writeln!(out, "- **Role:** {}", report.candidate.role);
    let _ = writeln!(
        out,
        "- **Date:** {}",
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(out, "- **Overall score:** {:.1}%", report.score);
    let _ = writeln!(
        out,
        "- **Total time:** {:.1}s (average {:.1}s per question)",
        report.timing.total_secs, report.timing.average_secs
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "## Question breakdown");
    let _ = writeln!(out);
    let _ = writeln!(out, "| # | Result | Time (s) | Your answer | Correct answer |");
    let _ = writeln!(out, "|---|--------|----------|-------------|----------------|");
    for row in &report.outcomes {
        let _ = writeln!(
            out,
            "| {} | {} | {:.1} | {} | {} |",
            row.number,
            if row.correct { "correct" } else { "incorrect" },
            row.time_secs,
            row.selected,
            row.correct_answer,
        );
    }

    let noted: Vec<&QuestionOutcome> = report
        .outcomes
        .iter()
        .filter(|o| !o.notes.trim().is_empty())
        .collect();
    if !noted.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "## Notes");
        let _ = writeln!(out);
        for row in noted {
            let _ = writeln!(out, "- **Q{}:** {}", row.number, row.notes.trim());
        }
    }

    if let Some(analysis) = &report.notes_analysis {
        let _ = writeln!(out);
        let _ = writeln!(out, "## Notes analysis");
        render_list(&mut out, "Key observations", &analysis.key_observations);
        render_list(&mut out, "Strengths", &analysis.strengths);
        render_list(&mut out, "Areas for improvement", &analysis.areas_of_improvement);
    }

    out
}

fn render_list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "### {title}");
    let _ = writeln!(out);
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
}
