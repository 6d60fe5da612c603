//! Error types for the ss-xref crate.

/// Errors that can occur while building the xref components.
///
/// Extraction and resolution are infallible once constructed; the only
/// failure mode is compiling the built-in patterns.
#[derive(Debug, thiserror::Error)]
pub enum XrefError {
    /// A built-in pattern failed to compile.
    #[error("invalid pattern '{pattern}': {source}")]
    Pattern {
        /// The offending pattern source.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },
}

impl XrefError {
    /// Creates a new [`XrefError::Pattern`] error.
    #[inline]
    pub fn pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            source,
        }
    }
}
