// Auxiliary LLM analysis: résumé-driven profile suggestions and free-text
// notes insights. Everything here is advisory — the interview flow never
// depends on an analysis succeeding.
// All LLM calls go through llm_client — no direct API calls here.

pub mod document;
pub mod extract;
pub mod handlers;
pub mod notes;
pub mod prompts;
