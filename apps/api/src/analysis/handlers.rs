use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::document::{analyze_document, ProfileSuggestions};
use crate::analysis::extract::extract_text;
use crate::errors::AppError;
use crate::models::session::Page;
use crate::state::AppState;

/// POST /api/v1/sessions/:id/document
///
/// Multipart résumé upload. Extraction failures are reported (the file is
/// unusable), but an analyzer failure degrades to empty suggestions —
/// profile completion never depends on this endpoint.
pub async fn handle_document_upload(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<ProfileSuggestions>, AppError> {
    let session = state.sessions.get(id)?;
    if session.page != Page::Profile {
        return Err(AppError::UnprocessableEntity(
            "document analysis is only available on the profile page".to_string(),
        ));
    }

    let mut data: Option<Bytes> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() == Some("document") {
            data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?,
            );
        }
    }
    let data =
        data.ok_or_else(|| AppError::Validation("missing 'document' field".to_string()))?;

    let text = extract_text(&data)?;
    info!("Session {id}: extracted {} chars from uploaded document", text.len());

    match analyze_document(&state.llm, &state.roles, &text).await {
        Ok(suggestions) => Ok(Json(suggestions)),
        Err(e) => {
            warn!("Document analysis failed, returning empty suggestions: {e}");
            Ok(Json(ProfileSuggestions::default()))
        }
    }
}
