//! Keyword/volume parser for text pasted from spreadsheets and keyword tools.
//!
//! Two shapes are accepted and told apart by the first populated line:
//! - delimited: `keyword,volume` per line (CSV-style exports)
//! - paired lines: keyword and volume alternate, one per line (two spreadsheet
//!   columns that lost their structure on copy)

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::keywords::models::{KeywordRecord, KeywordVolumeTable};

const FIELD_SEPARATOR: char = ',';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeywordParseError {
    #[error("keyword input is not valid UTF-8 text")]
    NotText,

    #[error("no keyword/volume pairs found in input")]
    Empty,
}

/// Parses pasted keyword text into a table. Never fails: lines that do not
/// fit the detected shape are skipped.
pub fn parse_keywords(input: &str) -> KeywordVolumeTable {
    let lines: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let Some(first) = lines.first() else {
        return KeywordVolumeTable::default();
    };

    let pairs = if first.contains(FIELD_SEPARATOR) {
        delimited_pairs(&lines)
    } else {
        paired_line_pairs(&lines)
    };

    let records = pairs
        .into_iter()
        .filter(|(keyword, _)| !keyword.is_empty())
        .map(|(keyword, volume)| KeywordRecord::new(keyword, normalize_volume(volume)))
        .collect();

    KeywordVolumeTable::new(records)
}

/// Like [`parse_keywords`] but an empty result is an error.
pub fn parse_keywords_strict(input: &str) -> Result<KeywordVolumeTable, KeywordParseError> {
    let table = parse_keywords(input);
    if table.is_empty() {
        return Err(KeywordParseError::Empty);
    }
    Ok(table)
}

/// Strict parse of a raw request body.
pub fn parse_keyword_bytes(raw: &[u8]) -> Result<KeywordVolumeTable, KeywordParseError> {
    let text = std::str::from_utf8(raw).map_err(|_| KeywordParseError::NotText)?;
    parse_keywords_strict(text)
}

/// Value of the first run of decimal digits in the token, or 0 when there is none.
///
/// Any Unicode decimal digit counts, so Thai `"๑๐๐"` is 100.
/// Suffixes are not scaled: `"1.5K"` is 1 and `"0–10"` is 0.
pub fn normalize_volume(token: &str) -> u64 {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    let digits = DIGITS.get_or_init(|| Regex::new(r"\d+").expect("static regex"));

    match digits.find(token) {
        Some(run) => run.as_str().chars().fold(0u64, |acc, c| {
            acc.saturating_mul(10).saturating_add(digit_value(c))
        }),
        None => 0,
    }
}

/// Numeric value of a Unicode decimal digit.
///
/// Decimal digits are encoded as contiguous runs of ten starting at zero, so
/// the value is the distance from the start of the run, modulo ten.
fn digit_value(c: char) -> u64 {
    if let Some(d) = c.to_digit(10) {
        return u64::from(d);
    }
    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    u64::from((c as u32 - start) % 10)
}

fn is_decimal_digit(c: char) -> bool {
    static DIGIT: OnceLock<Regex> = OnceLock::new();
    let digit = DIGIT.get_or_init(|| Regex::new(r"^\d$").expect("static regex"));
    digit.is_match(c.encode_utf8(&mut [0; 4]))
}

fn delimited_pairs<'a>(lines: &[&'a str]) -> Vec<(&'a str, &'a str)> {
    lines
        .iter()
        .filter_map(|line| {
            let mut fields = line.split(FIELD_SEPARATOR);
            let keyword = fields.next()?;
            let volume = fields.next()?;
            Some((keyword.trim(), volume.trim()))
        })
        .collect()
}

// chunks_exact drops an odd trailing keyword with no volume line.
fn paired_line_pairs<'a>(lines: &[&'a str]) -> Vec<(&'a str, &'a str)> {
    lines
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect()
}
