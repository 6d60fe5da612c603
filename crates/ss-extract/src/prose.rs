//! Structural-type extraction from prose documents.
//!
//! Prose specification documents embed structural examples as JSON snippets
//! and inline code. [`ProseTypeExtractor`] scans a document line by line
//! with two capture patterns - the declaration as plain text and wrapped in
//! inline-code backticks - and admits every captured name that survives the
//! placeholder and exclusion filters.

use camino::Utf8Path;
use regex::Regex;
use ss_core::{SourceKind, SourceLocation, StructuralType, TEXT_PLACEHOLDER, fx_hash_set};
use tracing::trace;

use crate::error::ExtractError;
use crate::exclusion::ExclusionSet;

/// Pattern for `"type": "<name>"` written as plain text.
const PLAIN_PATTERN: &str = r#""type":\s*"([^"]+)""#;

/// Pattern for the same declaration wrapped in inline-code backticks.
const INLINE_PATTERN: &str = r#"`"type":\s*"([^"]+)"`"#;

/// Extracts structural-type declarations from prose text.
///
/// Extraction is a pure function over the document text: no filesystem
/// access, no shared state. Duplicate names within one file are dropped
/// (first occurrence wins and keeps its location).
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use ss_core::ExclusionConfig;
/// use ss_extract::{ExclusionSet, ProseTypeExtractor};
///
/// let exclusions = ExclusionSet::from_config(&ExclusionConfig::default()).unwrap();
/// let extractor = ProseTypeExtractor::new(exclusions).unwrap();
///
/// let text = r#"
/// A paragraph block:
///     { "type": "paragraph", "content": [] }
/// "#;
/// let types = extractor.extract(Utf8Path::new("spec/blocks.md"), text);
/// assert_eq!(types[0].name, "paragraph");
/// ```
#[derive(Debug)]
pub struct ProseTypeExtractor {
    /// Matches declarations in JSON example blocks.
    plain: Regex,
    /// Matches declarations quoted as inline code.
    inline: Regex,
    /// Noise filter consulted before admitting a candidate.
    exclusions: ExclusionSet,
}

impl ProseTypeExtractor {
    /// Creates an extractor with the given exclusion rules.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Pattern`] if a capture pattern fails to
    /// compile.
    pub fn new(exclusions: ExclusionSet) -> Result<Self, ExtractError> {
        let plain =
            Regex::new(PLAIN_PATTERN).map_err(|e| ExtractError::pattern(PLAIN_PATTERN, e))?;
        let inline =
            Regex::new(INLINE_PATTERN).map_err(|e| ExtractError::pattern(INLINE_PATTERN, e))?;

        Ok(Self {
            plain,
            inline,
            exclusions,
        })
    }

    /// Extracts the structural types declared in one prose document.
    ///
    /// # Arguments
    ///
    /// * `file` - Path of the document, relative to the corpus root
    /// * `text` - The document contents
    ///
    /// # Returns
    ///
    /// An ordered list of admitted types, one entry per distinct name, in
    /// order of first occurrence.
    #[must_use]
    pub fn extract(&self, file: &Utf8Path, text: &str) -> Vec<StructuralType> {
        let mut seen = fx_hash_set();
        let mut types = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let line_number = u32::try_from(index + 1).unwrap_or(u32::MAX);

            for captures in self
                .plain
                .captures_iter(line)
                .chain(self.inline.captures_iter(line))
            {
                let Some(name) = captures.get(1).map(|m| m.as_str()) else {
                    continue;
                };

                // "text" is always present and never a structural type
                if name == TEXT_PLACEHOLDER {
                    continue;
                }

                if self.exclusions.is_excluded(name) {
                    trace!(name, file = %file, line = line_number, "Excluded candidate");
                    continue;
                }

                if !seen.insert(name.to_owned()) {
                    continue;
                }

                types.push(StructuralType::new(
                    name,
                    SourceLocation::new(file, line_number),
                    SourceKind::Prose,
                ));
            }
        }

        types
    }
}

#[cfg(test)]
mod tests {
    use ss_core::ExclusionConfig;

    use super::*;

    fn extractor() -> ProseTypeExtractor {
        let exclusions = ExclusionSet::from_config(&ExclusionConfig::default()).unwrap();
        ProseTypeExtractor::new(exclusions).unwrap()
    }

    fn extract(text: &str) -> Vec<StructuralType> {
        extractor().extract(Utf8Path::new("spec/core.md"), text)
    }

    #[test]
    fn test_extracts_plain_declaration() {
        let types = extract(r#"  { "type": "heading", "level": 1 }"#);
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].name, "heading");
        assert_eq!(types[0].kind, SourceKind::Prose);
        assert_eq!(types[0].location.line, Some(1));
    }

    #[test]
    fn test_extracts_inline_code_declaration() {
        let types = extract(r#"Declared as `"type": "callout"` in examples."#);
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].name, "callout");
    }

    #[test]
    fn test_skips_text_placeholder() {
        let types = extract(r#"{ "type": "text", "value": "hello" }"#);
        assert!(types.is_empty());
    }

    #[test]
    fn test_exclusion_rules_applied() {
        // Syntactically valid declarations whose names are not structural
        let text = r#"
{ "type": "image/png" }
{ "type": "draft" }
{ "type": "keyword" }
"#;
        assert!(extract(text).is_empty());
    }

    #[test]
    fn test_ambiguous_comment_type_admitted() {
        let types = extract(r#"{ "type": "comment", "thread": [] }"#);
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].name, "comment");
    }

    #[test]
    fn test_dedup_first_occurrence_wins() {
        let text = r#"
{ "type": "heading" }
{ "type": "paragraph" }
{ "type": "heading" }
"#;
        let types = extract(text);
        assert_eq!(types.len(), 2);
        assert_eq!(types[0].name, "heading");
        assert_eq!(types[0].location.line, Some(2));
        assert_eq!(types[1].name, "paragraph");
    }

    #[test]
    fn test_multiple_declarations_on_one_line() {
        let types = extract(r#"{ "type": "list", "items": [{ "type": "list-item" }] }"#);
        let names: Vec<&str> = types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["list", "list-item"]);
    }

    #[test]
    fn test_order_follows_first_occurrence() {
        let text = r#"
`"type": "table"` is documented before the example:
{ "type": "table-row" }
"#;
        let names: Vec<String> = extract(text).into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["table".to_owned(), "table-row".to_owned()]);
    }

    #[test]
    fn test_pure_over_text_no_matches() {
        assert!(extract("no declarations here\njust prose\n").is_empty());
    }
}
