//! Document-level metadata extraction.
//!
//! Examines standard meta tags (plus Open Graph, Twitter card and Dublin
//! Core variants) for the fields this crate reports. The first declared
//! value wins. Title falls back to the `<title>` element and then the first
//! `<h1>` when no meta tag declares one.

use dom_query::{Document, Selection};

use crate::result::Metadata;

/// Examine a parsed document for metadata.
pub(crate) fn examine(doc: &Document) -> Metadata {
    let mut meta = Metadata::default();

    for node in doc.select("meta").nodes() {
        let tag = Selection::from(*node);

        let name = tag
            .attr("name")
            .or_else(|| tag.attr("property"))
            .or_else(|| tag.attr("itemprop"))
            .map(|v| v.to_lowercase())
            .unwrap_or_default();

        let content = tag
            .attr("content")
            .map(|v| v.trim().to_string())
            .unwrap_or_default();

        if name.is_empty() || content.is_empty() {
            continue;
        }

        match name.as_str() {
            "og:title" | "twitter:title" | "dc.title" | "title" => {
                if meta.title.is_none() {
                    meta.title = Some(content);
                }
            }

            "author" | "article:author" | "dc.creator" | "byl" => {
                if meta.byline.is_none() {
                    meta.byline = Some(content);
                }
            }

            "description" | "og:description" | "twitter:description" | "dc.description" => {
                if meta.excerpt.is_none() {
                    meta.excerpt = Some(content);
                }
            }

            "og:site_name" | "application-name" | "publisher" | "dc.publisher" => {
                if meta.site_name.is_none() {
                    meta.site_name = Some(content);
                }
            }

            _ => {}
        }
    }

    if meta.title.is_none() {
        let title = doc.select("title").text().trim().to_string();
        if !title.is_empty() {
            meta.title = Some(title);
        }
    }

    if meta.title.is_none() {
        if let Some(node) = doc.select("h1").nodes().first() {
            let heading = Selection::from(*node).text().trim().to_string();
            if !heading.is_empty() {
                meta.title = Some(heading);
            }
        }
    }

    meta
}
