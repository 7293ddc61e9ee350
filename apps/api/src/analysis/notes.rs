//! Free-text notes analysis for the results page.
//! Skipped when the candidate wrote nothing; a failed call yields `None`
//! rather than an error — results render fine without it.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::prompts::{NOTES_PROMPT_TEMPLATE, NOTES_SYSTEM};
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::LlmClient;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotesAnalysis {
    pub key_observations: Vec<String>,
    pub strengths: Vec<String>,
    pub areas_of_improvement: Vec<String>,
}

/// True when at least one note has non-whitespace content.
pub fn has_content(notes: &[String]) -> bool {
    notes.iter().any(|n| !n.trim().is_empty())
}

pub async fn analyze_notes(llm: &LlmClient, notes: &[String]) -> Option<NotesAnalysis> {
    if !has_content(notes) {
        return None;
    }
    let notes_json = serde_json::to_string(notes).ok()?;
    let system = NOTES_SYSTEM.replace("{json_only}", JSON_ONLY_INSTRUCTION);
    let prompt = NOTES_PROMPT_TEMPLATE.replace("{notes}", &notes_json);

    match llm.call_json::<NotesAnalysis>(&prompt, &system).await {
        Ok(analysis) => Some(analysis),
        Err(e) => {
            warn!("Notes analysis failed, continuing without it: {e}");
            None
        }
    }
}
