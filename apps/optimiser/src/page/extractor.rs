//! HTML element extraction
//!
//! Pulls title, headings, meta description and visible text out of raw markup.

use scraper::{ElementRef, Html, Selector};

use crate::page::models::{PageElements, MISSING_H1, MISSING_META_DESCRIPTION, MISSING_TITLE};

/// Elements whose text content is never rendered.
const INVISIBLE_ELEMENTS: &[&str] = &["script", "style", "template"];

/// Extract SEO elements from an HTML document.
///
/// Missing title, h1 or meta description fall back to fixed placeholder text
/// so downstream prompts always have something to show.
pub fn extract_elements(html: &str) -> PageElements {
    let document = Html::parse_document(html);

    let title = first_text(&document, "title").unwrap_or_else(|| MISSING_TITLE.to_string());
    let h1 = first_text(&document, "h1").unwrap_or_else(|| MISSING_H1.to_string());
    let h2s = all_text(&document, "h2");
    let meta_description = meta_description(&document)
        .unwrap_or_else(|| MISSING_META_DESCRIPTION.to_string());
    let content = visible_text(&document);

    PageElements {
        title,
        h1,
        h2s,
        meta_description,
        content,
    }
}

fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn first_text(document: &Html, css: &str) -> Option<String> {
    let selector = selector(css)?;
    document.select(&selector).next().map(|el| element_text(&el))
}

fn all_text(document: &Html, css: &str) -> Vec<String> {
    let Some(selector) = selector(css) else {
        return Vec::new();
    };
    document.select(&selector).map(|el| element_text(&el)).collect()
}

fn meta_description(document: &Html) -> Option<String> {
    let selector = selector(r#"meta[name="description"]"#)?;
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|content| content.trim().to_string())
}

/// Every rendered text node, trimmed, one per line.
fn visible_text(document: &Html) -> String {
    document
        .root_element()
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let parent = node.parent()?;
            let hidden = parent
                .value()
                .as_element()
                .is_some_and(|el| INVISIBLE_ELEMENTS.contains(&el.name()));
            if hidden {
                return None;
            }
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
