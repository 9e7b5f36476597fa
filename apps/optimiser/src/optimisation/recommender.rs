//! Recommendation Generator — turns current page elements plus the operator's
//! keyword table into optimisation guidance for the editor.
//!
//! Keyword roles follow table order: first record is the main keyword,
//! records 2–4 drive H2s, the rest seed the FAQ section.

use tracing::info;

use crate::errors::AppError;
use crate::keywords::models::{join_keywords, KeywordVolumeTable};
use crate::llm_client::prompts::{compose_system, THAI_OUTPUT_INSTRUCTION};
use crate::llm_client::CompletionProvider;
use crate::optimisation::prompts::{RECOMMENDATION_PROMPT_TEMPLATE, RECOMMENDATION_SYSTEM};
use crate::page::models::PageElements;

pub fn build_recommendation_prompt(
    page: &PageElements,
    keywords: &KeywordVolumeTable,
) -> Result<String, AppError> {
    let main_keyword = keywords
        .main_keyword()
        .ok_or_else(|| AppError::Precondition("Keyword table is empty".to_string()))?;

    Ok(RECOMMENDATION_PROMPT_TEMPLATE
        .replace("{main_keyword}", &main_keyword.keyword)
        .replace(
            "{secondary_keywords}",
            &join_keywords(keywords.secondary_keywords()),
        )
        .replace("{faq_keywords}", &join_keywords(keywords.faq_keywords()))
        .replace("{title}", &page.title)
        .replace("{h1}", &page.h1)
        .replace("{h2s}", &page.joined_h2s())
        .replace("{meta_description}", &page.meta_description))
}

/// Generates free-text recommendations. The response is returned trimmed and
/// otherwise unvalidated.
pub async fn generate_recommendations(
    llm: &dyn CompletionProvider,
    page: &PageElements,
    keywords: &KeywordVolumeTable,
) -> Result<String, AppError> {
    let prompt = build_recommendation_prompt(page, keywords)?;
    let system = compose_system(RECOMMENDATION_SYSTEM, &[THAI_OUTPUT_INSTRUCTION]);

    let response = llm
        .complete(&prompt, &system)
        .await
        .map_err(|e| AppError::Llm(format!("Recommendation generation failed: {e}")))?;

    let recommendations = response.trim().to_string();
    info!(
        "Generated {} chars of recommendations for {} keywords",
        recommendations.chars().count(),
        keywords.len()
    );
    Ok(recommendations)
}
