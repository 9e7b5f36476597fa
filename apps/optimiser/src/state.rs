use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionProvider;
use crate::page::fetcher::PageFetcher;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. `LlmClient` in production, a stub in tests.
    pub llm: Arc<dyn CompletionProvider>,
    pub fetcher: PageFetcher,
    pub sessions: SessionStore,
    /// Keyword suggestions returned when a request does not ask for a count.
    pub suggestion_count: usize,
}

impl AppState {
    pub fn new(config: &Config, llm: Arc<dyn CompletionProvider>, fetcher: PageFetcher) -> Self {
        Self {
            llm,
            fetcher,
            sessions: SessionStore::new(),
            suggestion_count: config.suggestion_count,
        }
    }
}
