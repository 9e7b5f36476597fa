//! Axum route handlers for the page analysis and recommendation actions.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::keywords::models::KeywordRow;
use crate::optimisation::prompts::KEYWORD_DENSITY_NOTICE;
use crate::optimisation::recommender::generate_recommendations;
use crate::optimisation::suggester::suggest_keywords;
use crate::page::extractor::extract_elements;
use crate::page::models::PageElements;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
    /// Overrides the configured suggestion count.
    pub num_keywords: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub page: PageElements,
    pub suggested_keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub notice: &'static str,
    pub keyword_table: Vec<KeywordRow>,
    pub recommendations: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/analyze
///
/// Fetch → extract → suggest. The extracted elements are stored in the session
/// as soon as extraction succeeds, so a failed suggestion call still leaves
/// the page available for recommendations.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let url = request.url.trim();
    if url.is_empty() {
        return Err(AppError::Validation("Please enter a valid URL.".to_string()));
    }

    state.sessions.get(session_id).await?;

    let html = state.fetcher.fetch(url).await?;
    let page = extract_elements(&html);
    info!(
        "Extracted page '{}' ({} h2s) for session {session_id}",
        page.title,
        page.h2s.len()
    );
    state.sessions.set_page(session_id, page.clone()).await?;

    let count = request.num_keywords.unwrap_or(state.suggestion_count);
    let suggested_keywords = suggest_keywords(state.llm.as_ref(), &page, count).await?;

    Ok(Json(AnalyzeResponse {
        page,
        suggested_keywords,
    }))
}

/// POST /api/v1/sessions/:id/recommendations
///
/// Requires both a page and a keyword table in the session.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let session = state.sessions.get(session_id).await?;
    let (page, keywords) = session.recommendation_inputs()?;

    let recommendations = generate_recommendations(state.llm.as_ref(), page, keywords).await?;

    Ok(Json(RecommendationsResponse {
        notice: KEYWORD_DENSITY_NOTICE,
        keyword_table: keywords.rows(),
        recommendations,
    }))
}
