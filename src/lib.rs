//! # rs-readable
//!
//! Readable-article extraction for saved HTML documents.
//!
//! This library takes an HTML document - a string, raw bytes, or a file on
//! disk - parses it into a DOM, and extracts the main article content while
//! dropping navigation, advertisements, and other boilerplate. The heavy
//! lifting is delegated: DOM construction to `dom_query` and content
//! identification to the `dom_smoothie` readability engine, with a small
//! baseline extractor covering documents the engine rejects.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_readable::extract;
//!
//! let html = r#"<html><head><title>My Article</title></head>
//! <body><article><p>Main content here.</p></article></body></html>"#;
//!
//! let result = extract(html)?;
//! println!("Title: {:?}", result.metadata.title);
//! println!("Content: {}", result.content_text);
//! # Ok::<(), rs_readable::Error>(())
//! ```
//!
//! ## Reading from disk
//!
//! ```rust,no_run
//! use rs_readable::{extract_file, DEFAULT_INPUT_PATH};
//!
//! let result = extract_file(DEFAULT_INPUT_PATH)?;
//! println!("{}", result.content_text);
//! # Ok::<(), rs_readable::Error>(())
//! ```

mod baseline;
mod error;
mod extract;
mod metadata;
mod options;
mod result;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Source document acquisition.
pub mod input;

// Public API - re-exports
pub use error::{Error, Result};
pub use input::DEFAULT_INPUT_PATH;
pub use options::Options;
pub use result::{ExtractResult, Metadata};

use std::path::Path;

/// Extracts main content from an HTML document using default options.
///
/// Returns `Ok(ExtractResult)` containing the extracted content and
/// metadata. A document with no extractable content yields a partial result
/// carrying a warning rather than an error, unless
/// [`Options::require_content`] is set.
#[allow(clippy::missing_errors_doc)]
pub fn extract(html: &str) -> Result<ExtractResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts main content from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use rs_readable::{extract_with_options, Options};
///
/// let html = "<html><body><article><p>Content</p></article></body></html>";
/// let options = Options {
///     use_readability: false,
///     ..Options::default()
/// };
/// let result = extract_with_options(html, &options)?;
/// # Ok::<(), rs_readable::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractResult> {
    extract::extract_document(html, options)
}

/// Extracts main content from HTML bytes with automatic encoding detection.
///
/// The bytes are transcoded to UTF-8 first: a byte-order mark wins, then a
/// `<meta charset=...>` declaration, then the UTF-8 default. Invalid
/// sequences are replaced rather than rejected.
#[allow(clippy::missing_errors_doc)]
pub fn extract_bytes(html: &[u8]) -> Result<ExtractResult> {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts main content from HTML bytes with custom options and automatic
/// encoding detection.
#[allow(clippy::missing_errors_doc)]
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<ExtractResult> {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, options)
}

/// Reads a saved HTML document from disk and extracts its main content.
///
/// The read failure channel is checked before anything else runs: a missing
/// or unreadable file returns [`Error::FileRead`] and the parser never sees
/// partial data.
#[allow(clippy::missing_errors_doc)]
pub fn extract_file(path: impl AsRef<Path>) -> Result<ExtractResult> {
    extract_file_with_options(path, &Options::default())
}

/// Reads a saved HTML document from disk and extracts its main content with
/// custom options.
#[allow(clippy::missing_errors_doc)]
pub fn extract_file_with_options(path: impl AsRef<Path>, options: &Options) -> Result<ExtractResult> {
    let bytes = input::read_document(path)?;
    extract_bytes_with_options(&bytes, options)
}
