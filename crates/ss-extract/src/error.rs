//! Error types for the ss-extract crate.

/// Errors that can occur while building extractors.
///
/// Extraction itself is infallible over in-memory input; the only failure
/// mode in this crate is compiling the configured patterns at construction
/// time.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// A configured or built-in pattern failed to compile.
    #[error("invalid pattern '{pattern}': {source}")]
    Pattern {
        /// The offending pattern source.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },
}

impl ExtractError {
    /// Creates a new [`ExtractError::Pattern`] error.
    #[inline]
    pub fn pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            source,
        }
    }
}
