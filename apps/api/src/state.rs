use std::sync::Arc;

use crate::config::Config;
use crate::generation::generator::QuestionSource;
use crate::llm_client::LlmClient;
use crate::roles::RoleCatalog;
use crate::sessions::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub llm: LlmClient,
    /// Pluggable question source. Default: single-batch LLM generation.
    pub question_source: Arc<dyn QuestionSource>,
    /// Role catalog, read-only after startup.
    pub roles: Arc<RoleCatalog>,
    pub config: Config,
}
