use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::keywords::parser::KeywordParseError;
use crate::page::fetcher::FetchError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant is terminal for the triggering request only.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<KeywordParseError> for AppError {
    fn from(e: KeywordParseError) -> Self {
        AppError::MalformedInput(format!(
            "{e}. Use 'Keyword,Volume' or 'Keyword\\nVolume' for each entry."
        ))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Fetch(e) => {
                tracing::warn!("Fetch error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "FETCH_ERROR",
                    format!("เกิดข้อผิดพลาดในการดึงข้อมูลจากเว็บไซต์: {e}"),
                )
            }
            AppError::MalformedInput(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "MALFORMED_INPUT",
                msg.clone(),
            ),
            AppError::Precondition(msg) => {
                tracing::warn!("Precondition failed: {msg}");
                (StatusCode::CONFLICT, "PRECONDITION_FAILED", msg.clone())
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (AppError::MalformedInput("x".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (AppError::Precondition("x".into()), StatusCode::CONFLICT),
            (AppError::Llm("x".into()), StatusCode::BAD_GATEWAY),
            (
                AppError::Internal(anyhow::anyhow!("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_parse_errors_become_malformed_input() {
        let err: AppError = KeywordParseError::Empty.into();
        assert!(matches!(err, AppError::MalformedInput(msg) if msg.contains("Keyword,Volume")));
        let err: AppError = KeywordParseError::NotText.into();
        assert!(matches!(err, AppError::MalformedInput(_)));
    }
}
