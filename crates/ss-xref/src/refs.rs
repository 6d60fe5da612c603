//! Cross-reference extraction from prose documents.
//!
//! Four reference syntaxes are recognized, applied independently per line:
//!
//! - markdown links `[text](target)` (external http/https targets are
//!   discarded; everything else is tracked, including bare `#anchor`
//!   targets and cross-document `other.md#anchor` targets)
//! - narrative citations `see [section] N[.N...]`
//! - the stricter parenthesized variant `(see Section N[.N...])`
//!
//! The two narrative patterns may match overlapping text; the resulting
//! duplicate `section:` references are acceptable because that target kind
//! always resolves, so duplication only repeats a "valid" entry.

use camino::Utf8Path;
use regex::Regex;
use ss_core::Reference;

use crate::error::XrefError;

/// Pattern for markdown links.
const LINK_PATTERN: &str = r"\[([^\]]+)\]\(([^)]+)\)";

/// Pattern for narrative section citations.
const NARRATIVE_PATTERN: &str = r"(?i)see\s+(?:section\s+)?(\d+(?:\.\d+)*)";

/// Pattern for parenthesized section citations.
const PAREN_PATTERN: &str = r"\(see\s+[Ss]ection\s+(\d+(?:\.\d+)*)\)";

/// The synthesized target prefix for narrative citations.
pub(crate) const SECTION_TARGET_PREFIX: &str = "section:";

/// Extracts reference occurrences from prose text.
///
/// Occurrences are never deduplicated; each carries its own location and
/// context for reporting.
#[derive(Debug)]
pub struct ReferenceExtractor {
    link: Regex,
    narrative: Regex,
    paren: Regex,
}

impl ReferenceExtractor {
    /// Creates an extractor.
    ///
    /// # Errors
    ///
    /// Returns [`XrefError::Pattern`] if a built-in pattern fails to
    /// compile.
    pub fn new() -> Result<Self, XrefError> {
        let link = Regex::new(LINK_PATTERN).map_err(|e| XrefError::pattern(LINK_PATTERN, e))?;
        let narrative = Regex::new(NARRATIVE_PATTERN)
            .map_err(|e| XrefError::pattern(NARRATIVE_PATTERN, e))?;
        let paren = Regex::new(PAREN_PATTERN).map_err(|e| XrefError::pattern(PAREN_PATTERN, e))?;
        Ok(Self {
            link,
            narrative,
            paren,
        })
    }

    /// Extracts all reference occurrences in one document.
    ///
    /// # Arguments
    ///
    /// * `file` - Path of the document, relative to the corpus root
    /// * `text` - The document contents
    #[must_use]
    pub fn extract(&self, file: &Utf8Path, text: &str) -> Vec<Reference> {
        let mut references = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let line_number = u32::try_from(index + 1).unwrap_or(u32::MAX);

            for captures in self.link.captures_iter(line) {
                let (Some(whole), Some(target)) = (captures.get(0), captures.get(2)) else {
                    continue;
                };
                let target = target.as_str();

                // Only internal references are tracked
                if target.starts_with("http://") || target.starts_with("https://") {
                    continue;
                }

                references.push(Reference::new(target, file, line_number, whole.as_str()));
            }

            for captures in self.narrative.captures_iter(line) {
                if let (Some(whole), Some(number)) = (captures.get(0), captures.get(1)) {
                    references.push(Reference::new(
                        format!("{SECTION_TARGET_PREFIX}{}", number.as_str()),
                        file,
                        line_number,
                        whole.as_str(),
                    ));
                }
            }

            for captures in self.paren.captures_iter(line) {
                if let (Some(whole), Some(number)) = (captures.get(0), captures.get(1)) {
                    references.push(Reference::new(
                        format!("{SECTION_TARGET_PREFIX}{}", number.as_str()),
                        file,
                        line_number,
                        whole.as_str(),
                    ));
                }
            }
        }

        references
    }
}
