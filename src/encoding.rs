//! Character encoding detection and transcoding.
//!
//! Saved pages arrive as raw bytes in whatever encoding the origin server
//! used. Before parsing, the bytes are normalized to UTF-8: a byte-order mark
//! wins, then a charset declaration in the document head, then the web
//! default of UTF-8. Decoding is always lossy; invalid sequences become the
//! replacement character rather than an error.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match the charset label in either `<meta charset="...">` or
/// `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[allow(clippy::expect_used)]
static CHARSET_DECLARATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Number of leading bytes examined for a charset declaration.
const DECLARATION_WINDOW: usize = 1024;

/// Detect the character encoding of an HTML document.
///
/// Detection order: byte-order mark, charset declaration within the first
/// 1024 bytes, UTF-8 default.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = &html[..html.len().min(DECLARATION_WINDOW)];
    let head_str = String::from_utf8_lossy(head);

    if let Some(label) = declared_charset(&head_str) {
        if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
            return encoding;
        }
    }

    UTF_8
}

/// Extract the charset label declared in a meta tag, if any.
fn declared_charset(html: &str) -> Option<String> {
    CHARSET_DECLARATION_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// # Examples
///
/// ```
/// use rs_readable::encoding::transcode_to_utf8;
///
/// let html = b"<html><body>Hello, World!</body></html>";
/// let utf8_str = transcode_to_utf8(html);
/// assert!(utf8_str.contains("Hello, World!"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);

    // Fast path for BOM-less UTF-8. Inputs with a BOM go through decode(),
    // which strips it.
    if encoding == UTF_8 && !html.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}
