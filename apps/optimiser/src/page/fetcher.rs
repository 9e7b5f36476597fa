//! Single best-effort page fetch.

use anyhow::{Context, Result};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info};

/// Desktop browser identity sent with every fetch. Some sites refuse or
/// degrade responses for unknown clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },
}

/// Fetches raw page markup. One GET per call, redirects followed, no retry.
#[derive(Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .context("Failed to build page fetch HTTP client")?;
        Ok(Self { client })
    }

    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("Fetching {url}");

        let request_error = |source: reqwest::Error| FetchError::Request {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let html = response.text().await.map_err(request_error)?;
        info!("Fetched {} bytes from {url}", html.len());
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_returns_body_and_sends_browser_user_agent() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/article")
                    .header("user-agent", DEFAULT_USER_AGENT);
                then.status(200).body("<html><title>ok</title></html>");
            })
            .await;

        let fetcher = PageFetcher::new(DEFAULT_USER_AGENT).unwrap();
        let html = fetcher.fetch(&server.url("/article")).await.unwrap();

        mock.assert_async().await;
        assert!(html.contains("<title>ok</title>"));
    }

    #[tokio::test]
    async fn test_fetch_follows_redirects() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/old");
                then.status(301).header("location", "/new");
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/new");
                then.status(200).body("moved here");
            })
            .await;

        let fetcher = PageFetcher::new(DEFAULT_USER_AGENT).unwrap();
        let html = fetcher.fetch(&server.url("/old")).await.unwrap();
        assert_eq!(html, "moved here");
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_is_error() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/missing");
                then.status(404);
            })
            .await;

        let fetcher = PageFetcher::new(DEFAULT_USER_AGENT).unwrap();
        let err = fetcher.fetch(&server.url("/missing")).await.unwrap_err();

        // Exactly one attempt, no retry.
        mock.assert_hits_async(1).await;
        assert!(matches!(err, FetchError::HttpStatus { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_fetch_invalid_url_is_request_error() {
        let fetcher = PageFetcher::new(DEFAULT_USER_AGENT).unwrap();
        let err = fetcher.fetch("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::Request { .. }));
    }
}
