use serde::{Deserialize, Serialize};

/// Number of records after the main keyword that feed H2 suggestions.
const SECONDARY_COUNT: usize = 3;

/// A single (keyword, search volume) pair from the operator's research export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRecord {
    pub keyword: String,
    pub volume: u64,
}

impl KeywordRecord {
    pub fn new(keyword: impl Into<String>, volume: u64) -> Self {
        Self {
            keyword: keyword.into(),
            volume,
        }
    }
}

/// Display row for the keyword table, column names as shown to the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordRow {
    #[serde(rename = "Keyword")]
    pub keyword: String,
    #[serde(rename = "Search Volume")]
    pub search_volume: u64,
}

/// Ordered keyword table. Order is input order and carries meaning:
/// record 1 is the main keyword, records 2–4 are secondary (H2) keywords,
/// everything after that seeds the FAQ section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordVolumeTable {
    records: Vec<KeywordRecord>,
}

impl KeywordVolumeTable {
    pub fn new(records: Vec<KeywordRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[KeywordRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn main_keyword(&self) -> Option<&KeywordRecord> {
        self.records.first()
    }

    pub fn secondary_keywords(&self) -> &[KeywordRecord] {
        let end = self.records.len().min(1 + SECONDARY_COUNT);
        self.records.get(1..end).unwrap_or_default()
    }

    pub fn faq_keywords(&self) -> &[KeywordRecord] {
        self.records.get(1 + SECONDARY_COUNT..).unwrap_or_default()
    }

    /// Serializes back to the delimited paste format, one `keyword,volume` per line.
    pub fn to_delimited(&self) -> String {
        self.records()
            .iter()
            .map(|r| format!("{},{}", r.keyword, r.volume))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn rows(&self) -> Vec<KeywordRow> {
        self.records()
            .iter()
            .map(|r| KeywordRow {
                keyword: r.keyword.clone(),
                search_volume: r.volume,
            })
            .collect()
    }
}

/// Joins keyword text with `", "` for prompt interpolation.
pub fn join_keywords(records: &[KeywordRecord]) -> String {
    records
        .iter()
        .map(|r| r.keyword.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
