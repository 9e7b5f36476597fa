//! Test doubles shared by optimisation and handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{CompletionProvider, LlmError};
use crate::page::models::PageElements;

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: String,
    pub system: String,
}

/// Canned `CompletionProvider` that records every call it receives.
pub struct StubProvider {
    reply: Option<String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubProvider {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(RecordedCall {
            prompt: prompt.to_string(),
            system: system.to_string(),
        });
        self.reply.clone().ok_or(LlmError::Api {
            status: 503,
            message: "stub provider unavailable".to_string(),
        })
    }
}

pub fn sample_page() -> PageElements {
    PageElements {
        title: "VPN ที่ดีที่สุด".to_string(),
        h1: "Best VPN for Crypto".to_string(),
        h2s: vec!["What is a VPN".to_string(), "How to choose".to_string()],
        meta_description: "รีวิว VPN สำหรับคริปโต".to_string(),
        content: "VPN ที่ดีที่สุด\nBest VPN for Crypto\nIntro paragraph.".to_string(),
    }
}
