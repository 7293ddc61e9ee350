pub mod health;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::analysis::handlers::handle_document_upload;
use crate::errors::AppError;
use crate::interview::handlers;
use crate::roles::RoleConfig;
use crate::state::AppState;

/// GET /api/v1/roles
async fn handle_list_roles(State(state): State<AppState>) -> Result<Json<Vec<RoleConfig>>, AppError> {
    Ok(Json(state.roles.roles().to_vec()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/roles", get(handle_list_roles))
        // Session lifecycle
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route("/api/v1/sessions/:id", get(handlers::handle_get_session))
        .route("/api/v1/sessions/:id/begin", post(handlers::handle_begin))
        .route("/api/v1/sessions/:id/profile", post(handlers::handle_profile))
        .route("/api/v1/sessions/:id/document", post(handle_document_upload))
        .route("/api/v1/sessions/:id/start", post(handlers::handle_start))
        .route("/api/v1/sessions/:id/answer", post(handlers::handle_answer))
        .route("/api/v1/sessions/:id/reset", post(handlers::handle_reset))
        // Results
        .route("/api/v1/sessions/:id/results", get(handlers::handle_results))
        .route("/api/v1/sessions/:id/report", get(handlers::handle_report))
        .with_state(state)
}
