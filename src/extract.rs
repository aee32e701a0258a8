//! The extraction pipeline.
//!
//! A single linear pass: parse the document, delegate to the readability
//! engine, fall back to the baseline extractor when the engine fails or
//! under-delivers, then shape the structured result. Parsing itself never
//! fails; the external parser's error recovery is the malformed-input
//! policy.

use dom_query::Document;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::baseline::{self, BaselineExtract};
use crate::error::{Error, Result};
use crate::metadata;
use crate::options::Options;
use crate::result::ExtractResult;

#[allow(clippy::expect_used)]
static SPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\r\u{A0}]+").expect("valid regex"));

#[allow(clippy::expect_used)]
static NEWLINE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\n\s*\n\s*").expect("valid regex"));

/// Extraction candidate: text, HTML, and whether the baseline produced it.
struct Candidate {
    text: String,
    html: String,
    from_fallback: bool,
}

/// Main entry point for content extraction.
pub(crate) fn extract_document(html: &str, options: &Options) -> Result<ExtractResult> {
    let document = Document::from(html);

    // Metadata comes from the full document, before any cleaning.
    let mut metadata = metadata::examine(&document);

    let mut warnings: Vec<String> = Vec::new();
    let mut candidate: Option<Candidate> = None;

    #[cfg(feature = "readability")]
    {
        if options.use_readability {
            match readability::run(&document, options) {
                Ok(outcome) => {
                    let chars = outcome.text.chars().count();
                    debug!(chars, "readability produced a candidate");
                    if metadata.title.is_none() {
                        metadata.title = outcome.title;
                    }
                    candidate = Some(Candidate {
                        text: outcome.text,
                        html: outcome.html,
                        from_fallback: false,
                    });
                }
                Err(err) => {
                    if !options.use_baseline_fallback {
                        return Err(err);
                    }
                    debug!(error = %err, "readability failed, falling back to baseline");
                    warnings.push(err.to_string());
                }
            }
        }
    }

    let sufficient = candidate
        .as_ref()
        .is_some_and(|c| c.text.chars().count() >= options.min_content_len);

    if !sufficient && options.use_baseline_fallback {
        if let Some(BaselineExtract { text, html }) = baseline::baseline(&document) {
            let text = normalize_whitespace(&text);
            let improves = candidate
                .as_ref()
                .is_none_or(|c| text.chars().count() > c.text.chars().count());
            if improves && !text.is_empty() {
                debug!(chars = text.chars().count(), "using baseline extraction");
                candidate = Some(Candidate {
                    text,
                    html,
                    from_fallback: true,
                });
            }
        }
    }

    match candidate {
        Some(c) if !c.text.is_empty() => Ok(ExtractResult {
            content_text: c.text,
            content_html: Some(c.html),
            metadata,
            used_fallback: c.from_fallback,
            warnings,
        }),
        _ => {
            if options.require_content {
                return Err(Error::NoContent);
            }
            warnings.push("no main content found - document may be empty or boilerplate-only".to_string());
            Ok(ExtractResult {
                content_text: String::new(),
                content_html: None,
                metadata,
                used_fallback: false,
                warnings,
            })
        }
    }
}

/// Collapse space runs and blank-line runs; trim the ends.
fn normalize_whitespace(text: &str) -> String {
    let text = SPACE_RUNS.replace_all(text, " ");
    let text = NEWLINE_RUNS.replace_all(&text, "\n\n");
    text.trim().to_string()
}

#[cfg(feature = "readability")]
mod readability {
    //! Delegation to the external readability engine.

    use dom_query::Document;
    use dom_smoothie::{Config, Readability};

    use super::normalize_whitespace;
    use crate::error::{Error, Result};
    use crate::options::Options;

    pub(super) struct Outcome {
        pub text: String,
        pub html: String,
        pub title: Option<String>,
    }

    /// Run the readability engine over a clone of the parsed document.
    pub(super) fn run(document: &Document, options: &Options) -> Result<Outcome> {
        let config = Config {
            max_elements_to_parse: options.max_elements_to_parse,
            ..Config::default()
        };

        // The engine takes ownership of the tree and mutates it while
        // scoring, so it gets its own copy.
        let doc = Document::from(document.html().to_string());
        let mut reader = Readability::with_document(doc, options.url.as_deref(), Some(config))
            .map_err(|err| Error::Extraction(format!("{err:?}")))?;
        let article = reader
            .parse()
            .map_err(|err| Error::Extraction(format!("{err:?}")))?;

        let title = article.title.trim().to_string();
        Ok(Outcome {
            text: normalize_whitespace(&article.text_content),
            html: article.content.to_string(),
            title: (!title.is_empty()).then_some(title),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_space_runs() {
        assert_eq!(normalize_whitespace("a  \t b"), "a b");
    }

    #[test]
    fn normalize_collapses_blank_lines() {
        assert_eq!(normalize_whitespace("a\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn normalize_trims_ends() {
        assert_eq!(normalize_whitespace("  a b \n"), "a b");
    }
}
