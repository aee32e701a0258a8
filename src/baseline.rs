//! Baseline extraction.
//!
//! Used when the readability engine is unavailable, fails, or under-delivers.
//! Works from the most structured source to the least: JSON-LD `articleBody`,
//! then a semantic content container, then deduplicated text blocks, then the
//! whole body text. Boilerplate subtrees are dropped before anything below
//! the JSON-LD step runs.

use std::collections::HashSet;

use dom_query::{Document, Selection};
use serde_json::Value;

/// Subtrees that never contain article content.
static CLEANING_SELECTOR: &str = "script, style, noscript, nav, header, footer, aside, form";

/// Semantic containers tried in order of specificity.
static CONTAINER_SELECTORS: &[&str] = &["article", "[role=article]", "main", "[role=main]"];

/// Block-level elements scraped when no container is present.
static TEXT_BLOCK_SELECTOR: &str = "p, blockquote, pre, q, code";

/// Outcome of a baseline extraction.
pub(crate) struct BaselineExtract {
    /// Plain text of the extracted region.
    pub text: String,
    /// HTML rendering of the extracted region.
    pub html: String,
}

/// Extract article content without the readability engine.
///
/// Returns `None` when the document yields no text at all.
pub(crate) fn baseline(document: &Document) -> Option<BaselineExtract> {
    // 1. JSON-LD articleBody: structured data beats heuristics when present.
    if let Some(body) = json_ld_article_body(document) {
        let html = format!("<p>{}</p>", escape_text(&body));
        return Some(BaselineExtract { text: body, html });
    }

    // Work on a clone; cleaning mutates the tree.
    let doc = Document::from(document.html().to_string());
    doc.select(CLEANING_SELECTOR).remove();

    // 2. Semantic content containers.
    for selector in CONTAINER_SELECTORS {
        let selection = doc.select(selector);
        let Some(node) = selection.nodes().first() else {
            continue;
        };
        let container = Selection::from(*node);
        let text = container.text().trim().to_string();
        if !text.is_empty() {
            return Some(BaselineExtract {
                html: container.html().to_string(),
                text,
            });
        }
    }

    // 3. Deduplicated text blocks.
    let mut seen = HashSet::new();
    let mut parts = Vec::new();
    for node in doc.select(TEXT_BLOCK_SELECTOR).nodes() {
        let entry = Selection::from(*node).text().trim().to_string();
        if entry.is_empty() || seen.contains(&entry) {
            continue;
        }
        seen.insert(entry.clone());
        parts.push(entry);
    }
    if !parts.is_empty() {
        let html = parts
            .iter()
            .map(|p| format!("<p>{}</p>", escape_text(p)))
            .collect::<Vec<_>>()
            .join("\n");
        return Some(BaselineExtract {
            text: parts.join("\n\n"),
            html,
        });
    }

    // 4. Whole body text.
    let body_text = doc.select("body").text().trim().to_string();
    if !body_text.is_empty() {
        return Some(BaselineExtract {
            html: format!("<p>{}</p>", escape_text(&body_text)),
            text: body_text,
        });
    }

    None
}

/// Extract an `articleBody` field from JSON-LD script tags.
///
/// Many sites embed the complete article text in structured data; when they
/// do, it is more reliable than any DOM heuristic.
fn json_ld_article_body(document: &Document) -> Option<String> {
    for node in document
        .select(r#"script[type="application/ld+json"]"#)
        .nodes()
    {
        let json_text = Selection::from(*node).text().trim().to_string();
        if json_text.is_empty() {
            continue;
        }

        let Ok(data) = serde_json::from_str::<Value>(&json_text) else {
            continue;
        };

        if let Some(body) = find_article_body(&data) {
            let body = body.trim().to_string();
            if body.is_empty() {
                continue;
            }
            // Some sites put markup inside articleBody; reduce it to text.
            if body.contains("<p>") {
                let tmp = Document::from(format!("<div>{body}</div>"));
                return Some(tmp.select("div").text().trim().to_string());
            }
            return Some(body);
        }
    }

    None
}

/// Recursively find an `articleBody` string in JSON-LD data.
fn find_article_body(value: &Value) -> Option<String> {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                if key.eq_ignore_ascii_case("articlebody") {
                    if let Value::String(s) = val {
                        return Some(s.clone());
                    }
                }
                if let Some(found) = find_article_body(val) {
                    return Some(found);
                }
            }
            None
        }
        Value::Array(arr) => arr.iter().find_map(find_article_body),
        _ => None,
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
