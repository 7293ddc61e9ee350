// LLM prompt constants for the analysis module.
// Shared JSON-only fragment comes from llm_client::prompts.

/// System prompt for résumé analysis.
pub const DOCUMENT_SYSTEM: &str =
    "You are an experienced technical recruiter reviewing a candidate's resume \
    to prefill an interview setup form. {json_only}";

/// Résumé analysis prompt template. Replace `{roles}` and `{document}`.
pub const DOCUMENT_PROMPT_TEMPLATE: &str = r#"Review the resume text below and suggest interview settings.

Return a JSON object with this EXACT schema (use null where the resume gives no signal):
{
  "suggested_role": "one of: {roles}",
  "suggested_difficulty": "Easy" | "Medium" | "Hard",
  "extracted_name": "candidate's full name"
}

Rules:
- "suggested_role" MUST be copied verbatim from the list above, or null.
- Base difficulty on apparent seniority: junior -> Easy, mid -> Medium, senior -> Hard.

RESUME:
{document}"#;

/// System prompt for interview notes analysis.
pub const NOTES_SYSTEM: &str =
    "You are an interview assessor analyzing a candidate's written notes. {json_only}";

/// Notes analysis prompt template. Replace `{notes}` with a JSON array of
/// per-question notes.
pub const NOTES_PROMPT_TEMPLATE: &str = r#"Analyze these interview notes and provide insights about the candidate's thought process.

Return a JSON object with this EXACT schema:
{
  "key_observations": ["main point", ...],
  "strengths": ["apparent strength", ...],
  "areas_of_improvement": ["potential area to improve", ...]
}

NOTES (one entry per question, in order):
{notes}"#;
