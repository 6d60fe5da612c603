//! Noise-exclusion rules for the prose extractor.
//!
//! Prose documents contain many `"type": "<name>"` pairs that are not
//! structural-type declarations: MIME types in asset-index examples,
//! syntax-highlighting token names in code-block metadata, lifecycle states,
//! CSL item types, and similar enumerations. [`ExclusionSet`] compiles the
//! configured rule lists into a matcher consulted before a candidate is
//! admitted.
//!
//! Rules match the whole candidate only. Exact rules compare by string
//! equality; pattern rules are anchored at compile time so `is_match` is a
//! full match. Substring matching is deliberately unsupported: a rule like
//! "comment is a highlight token" must not swallow the identically named
//! annotation type, so ambiguous names are resolved by leaving them out of
//! the rule set entirely.

use regex::Regex;
use ss_core::{ExclusionConfig, FxHashSet};

use crate::error::ExtractError;

/// A compiled set of exclusion rules.
///
/// # Examples
///
/// ```
/// use ss_core::ExclusionConfig;
/// use ss_extract::ExclusionSet;
///
/// let set = ExclusionSet::from_config(&ExclusionConfig::default()).unwrap();
/// assert!(set.is_excluded("image/png"));
/// assert!(set.is_excluded("draft"));
/// assert!(!set.is_excluded("heading"));
/// // Ambiguous highlight-token/annotation-type name is admitted
/// assert!(!set.is_excluded("comment"));
/// ```
#[derive(Debug)]
pub struct ExclusionSet {
    /// Names excluded by exact match.
    exact: FxHashSet<String>,
    /// Anchored patterns excluded by full match.
    patterns: Vec<Regex>,
}

impl ExclusionSet {
    /// Compiles an exclusion set from configuration.
    ///
    /// Each configured pattern is wrapped in `^(?:...)$` so that matching is
    /// always against the whole candidate name.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Pattern`] for the first pattern that fails to
    /// compile.
    pub fn from_config(config: &ExclusionConfig) -> Result<Self, ExtractError> {
        let exact: FxHashSet<String> = config.exact.iter().cloned().collect();

        let mut patterns = Vec::with_capacity(config.patterns.len());
        for pattern in &config.patterns {
            let anchored = format!("^(?:{pattern})$");
            let compiled =
                Regex::new(&anchored).map_err(|e| ExtractError::pattern(pattern.clone(), e))?;
            patterns.push(compiled);
        }

        Ok(Self { exact, patterns })
    }

    /// Returns `true` if `name` is excluded from the structural vocabulary.
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exact.contains(name) || self.patterns.iter().any(|re| re.is_match(name))
    }

    /// Number of exact rules in the set.
    #[inline]
    #[must_use]
    pub fn exact_len(&self) -> usize {
        self.exact.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_set() -> ExclusionSet {
        ExclusionSet::from_config(&ExclusionConfig::default()).unwrap()
    }

    #[test]
    fn test_mime_types_excluded() {
        let set = default_set();
        assert!(set.is_excluded("image/png"));
        assert!(set.is_excluded("font/woff2"));
        assert!(set.is_excluded("application/json"));
        assert!(set.is_excluded("text/plain"));
        assert!(set.is_excluded("audio/mpeg"));
        assert!(set.is_excluded("video/mp4"));
        assert!(set.is_excluded("image/svg+xml"));
    }

    #[test]
    fn test_mime_pattern_is_not_substring_matched() {
        let set = default_set();
        // A structural type that merely contains a MIME-looking fragment
        // must not be excluded
        assert!(!set.is_excluded("my-image/png-block"));
        assert!(!set.is_excluded("image"));
    }

    #[test]
    fn test_enumeration_values_excluded() {
        let set = default_set();
        // lifecycle states, highlight tokens, primitives, CSL types
        assert!(set.is_excluded("draft"));
        assert!(set.is_excluded("keyword"));
        assert!(set.is_excluded("null"));
        assert!(set.is_excluded("article-journal"));
        assert!(set.is_excluded("strikethrough"));
        assert!(set.is_excluded("required"));
    }

    #[test]
    fn test_ambiguous_annotation_type_not_excluded() {
        let set = default_set();
        assert!(!set.is_excluded("comment"));
    }

    #[test]
    fn test_structural_names_not_excluded() {
        let set = default_set();
        for name in ["heading", "paragraph", "table", "code-block", "callout"] {
            assert!(!set.is_excluded(name), "{name} should be admitted");
        }
    }

    #[test]
    fn test_invalid_pattern_reports_error() {
        let config = ExclusionConfig {
            exact: Vec::new(),
            patterns: vec!["(".to_owned()],
        };
        let err = ExclusionSet::from_config(&config);
        assert!(err.is_err());
    }

    #[test]
    fn test_case_sensitive_exact_match() {
        let set = default_set();
        assert!(set.is_excluded("draft"));
        assert!(!set.is_excluded("Draft"));
    }
}
