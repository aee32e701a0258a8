//! Result types for extraction output.
//!
//! This module defines the structured output from content extraction: the
//! article body in text and HTML form, plus whatever metadata the document
//! declared.

/// Result of content extraction from an HTML document.
#[derive(Debug, Clone, Default)]
pub struct ExtractResult {
    /// Main content as plain text, whitespace-normalized.
    pub content_text: String,

    /// Main content as HTML (preserves structure). `None` when nothing was
    /// extracted.
    pub content_html: Option<String>,

    /// Metadata about the document.
    pub metadata: Metadata,

    /// Whether the content came from the baseline extractor rather than the
    /// readability engine.
    pub used_fallback: bool,

    /// Non-fatal issues encountered during extraction, such as a readability
    /// failure that was recovered by the baseline, or a document with no
    /// main content at all.
    pub warnings: Vec<String>,
}

/// Metadata extracted from an HTML document.
///
/// All fields are optional as metadata may not be present in all documents.
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    /// Page title.
    pub title: Option<String>,

    /// Author name(s).
    pub byline: Option<String>,

    /// Page description or excerpt.
    pub excerpt: Option<String>,

    /// Site name (e.g. from `og:site_name`).
    pub site_name: Option<String>,
}
