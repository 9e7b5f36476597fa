use serde::{Deserialize, Serialize};

/// Placeholder shown when the page has no `<title>`.
pub const MISSING_TITLE: &str = "ไม่พบชื่อเรื่อง";
/// Placeholder shown when the page has no `<h1>`.
pub const MISSING_H1: &str = "ไม่พบ H1";
/// Placeholder shown when the page has no meta description.
pub const MISSING_META_DESCRIPTION: &str = "ไม่พบคำอธิบายเมตา";

/// SEO-relevant elements extracted from a single page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageElements {
    pub title: String,
    pub h1: String,
    pub h2s: Vec<String>,
    pub meta_description: String,
    /// Visible text, one text node per line.
    pub content: String,
}

impl PageElements {
    pub fn joined_h2s(&self) -> String {
        self.h2s.join(", ")
    }
}
