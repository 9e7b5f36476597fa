use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_BASE_URL;
use crate::page::fetcher::DEFAULT_USER_AGENT;

const DEFAULT_SUGGESTION_COUNT: usize = 5;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openrouter_api_key: String,
    pub llm_base_url: String,
    pub fetch_user_agent: String,
    pub suggestion_count: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openrouter_api_key: require_env("OPENROUTER_API_KEY")?,
            llm_base_url: optional_env("LLM_BASE_URL", DEFAULT_BASE_URL),
            fetch_user_agent: optional_env("FETCH_USER_AGENT", DEFAULT_USER_AGENT),
            suggestion_count: std::env::var("SUGGESTION_COUNT")
                .map(|v| v.parse::<usize>())
                .unwrap_or(Ok(DEFAULT_SUGGESTION_COUNT))
                .context("SUGGESTION_COUNT must be a non-negative integer")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
