//! Configuration options for content extraction.
//!
//! The `Options` struct controls how far extraction is delegated to the
//! readability engine and what happens when the engine comes up short.

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_readable::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     require_content: true,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Base URL of the document, used by the readability engine to resolve
    /// relative links.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Delegate extraction to the readability engine.
    ///
    /// Requires the `readability` feature flag; without it only the baseline
    /// extractor runs.
    ///
    /// Default: `true`
    pub use_readability: bool,

    /// Run the baseline extractor when the readability engine fails or its
    /// candidate falls below `min_content_len`.
    ///
    /// When disabled, a readability failure is returned to the caller as an
    /// error instead of being recovered.
    ///
    /// Default: `true`
    pub use_baseline_fallback: bool,

    /// Character count below which a readability candidate is considered
    /// insufficient and compared against the baseline extraction.
    ///
    /// Default: `200`
    pub min_content_len: usize,

    /// Upper bound on elements the readability engine will parse.
    ///
    /// `0` means no limit.
    ///
    /// Default: `0`
    pub max_elements_to_parse: usize,

    /// Treat an empty extraction as [`crate::Error::NoContent`] instead of
    /// returning a partial result with a warning.
    ///
    /// Default: `false`
    pub require_content: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: None,
            use_readability: true,
            use_baseline_fallback: true,
            min_content_len: 200,
            max_elements_to_parse: 0,
            require_content: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = Options::default();

        assert!(opts.url.is_none());
        assert!(opts.use_readability);
        assert!(opts.use_baseline_fallback);
        assert_eq!(opts.min_content_len, 200);
        assert_eq!(opts.max_elements_to_parse, 0);
        assert!(!opts.require_content);
    }

    #[test]
    fn options_can_be_customized() {
        let opts = Options {
            url: Some("https://example.com/article".to_string()),
            use_readability: false,
            min_content_len: 50,
            require_content: true,
            ..Options::default()
        };

        assert_eq!(opts.url.as_deref(), Some("https://example.com/article"));
        assert!(!opts.use_readability);
        assert_eq!(opts.min_content_len, 50);
        assert!(opts.require_content);
    }
}
