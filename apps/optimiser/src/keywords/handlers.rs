use axum::{
    extract::{Path, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::keywords::models::{KeywordRow, KeywordVolumeTable};
use crate::keywords::parser::parse_keyword_bytes;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: KeywordVolumeTable,
    pub table: Vec<KeywordRow>,
    /// The table re-serialized as `keyword,volume` lines.
    pub normalized: String,
}

/// POST /api/v1/sessions/:id/keywords
///
/// Body is the raw pasted keyword text. Replaces the session's keyword table
/// only when at least one record parses.
pub async fn handle_parse_keywords(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    body: Bytes,
) -> Result<Json<KeywordsResponse>, AppError> {
    // Unknown session is reported before any parse error.
    state.sessions.get(session_id).await?;

    let keywords = parse_keyword_bytes(&body)?;
    info!(
        "Parsed {} keywords for session {session_id}",
        keywords.len()
    );

    state
        .sessions
        .set_keywords(session_id, keywords.clone())
        .await?;

    Ok(Json(KeywordsResponse {
        table: keywords.rows(),
        normalized: keywords.to_delimited(),
        keywords,
    }))
}
