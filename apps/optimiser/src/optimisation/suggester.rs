//! Keyword Suggester — asks the LLM which keywords a page is currently about.

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::{compose_system, MIXED_LANGUAGE_NOTE};
use crate::llm_client::CompletionProvider;
use crate::optimisation::prompts::{KEYWORD_SUGGEST_PROMPT_TEMPLATE, KEYWORD_SUGGEST_SYSTEM};
use crate::page::models::PageElements;

/// Characters of body text included in the prompt.
const CONTENT_EXCERPT_CHARS: usize = 500;

pub fn build_suggestion_prompt(page: &PageElements, count: usize) -> String {
    let excerpt: String = page.content.chars().take(CONTENT_EXCERPT_CHARS).collect();
    KEYWORD_SUGGEST_PROMPT_TEMPLATE
        .replace("{num_keywords}", &count.to_string())
        .replace("{title}", &page.title)
        .replace("{h1}", &page.h1)
        .replace("{h2s}", &page.joined_h2s())
        .replace("{meta_description}", &page.meta_description)
        .replace("{content_excerpt}", &excerpt)
}

/// One keyword per non-blank response line, trimmed, at most `count`.
pub fn parse_suggestions(response: &str, count: usize) -> Vec<String> {
    response
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(count)
        .map(String::from)
        .collect()
}

/// Returns up to `count` suggested keywords for the page, most relevant first.
pub async fn suggest_keywords(
    llm: &dyn CompletionProvider,
    page: &PageElements,
    count: usize,
) -> Result<Vec<String>, AppError> {
    let prompt = build_suggestion_prompt(page, count);
    let system = compose_system(KEYWORD_SUGGEST_SYSTEM, &[MIXED_LANGUAGE_NOTE]);

    let response = llm
        .complete(&prompt, &system)
        .await
        .map_err(|e| AppError::Llm(format!("Keyword suggestion failed: {e}")))?;

    let keywords = parse_suggestions(&response, count);
    info!("LLM suggested {} keywords", keywords.len());
    Ok(keywords)
}
