//! Heading and explicit-anchor extraction, and the global anchor index.
//!
//! Two independent per-line matches contribute to the index: markdown
//! headings (1-6 `#` characters) whose slug is derived by
//! [`slugify`](crate::slugify), and explicit `<a name="...">` markers whose
//! slug is the literal attribute value. Both participate identically in
//! resolution; there is no precedence between them.

use camino::{Utf8Path, Utf8PathBuf};
use regex::Regex;
use ss_core::{FxHashMap, FxHashSet, Heading, fx_hash_map};
use tracing::debug;

use crate::error::XrefError;
use crate::slug::slugify;

/// Pattern for markdown headings: 1-6 hashes, whitespace, title.
const HEADING_PATTERN: &str = r"^(#{1,6})\s+(.+)$";

/// Pattern for explicit HTML-style anchors.
const ANCHOR_PATTERN: &str = r#"(?i)<a\s+name=["']([^"']+)["']"#;

/// Extracts headings and explicit anchors from one prose document.
#[derive(Debug)]
pub struct AnchorIndexer {
    heading: Regex,
    anchor: Regex,
}

impl AnchorIndexer {
    /// Creates an indexer.
    ///
    /// # Errors
    ///
    /// Returns [`XrefError::Pattern`] if a built-in pattern fails to
    /// compile.
    pub fn new() -> Result<Self, XrefError> {
        let heading =
            Regex::new(HEADING_PATTERN).map_err(|e| XrefError::pattern(HEADING_PATTERN, e))?;
        let anchor =
            Regex::new(ANCHOR_PATTERN).map_err(|e| XrefError::pattern(ANCHOR_PATTERN, e))?;
        Ok(Self { heading, anchor })
    }

    /// Extracts all addressable points declared in one document.
    ///
    /// Both match kinds may fire on the same line; each produces its own
    /// entry. Duplicate slugs are retained, not merged.
    ///
    /// # Arguments
    ///
    /// * `file` - Path of the document, relative to the corpus root
    /// * `text` - The document contents
    #[must_use]
    pub fn extract(&self, file: &Utf8Path, text: &str) -> Vec<Heading> {
        let mut headings = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let line_number = u32::try_from(index + 1).unwrap_or(u32::MAX);

            if let Some(captures) = self.heading.captures(line) {
                if let Some(title) = captures.get(2).map(|m| m.as_str()) {
                    headings.push(Heading::new(slugify(title), title, file, line_number));
                }
            }

            for captures in self.anchor.captures_iter(line) {
                if let Some(name) = captures.get(1).map(|m| m.as_str()) {
                    headings.push(Heading::explicit_anchor(name, file, line_number));
                }
            }
        }

        headings
    }
}

/// The global anchor index over a prose corpus.
///
/// Lookup identity is `(file, slug)`, never `slug` alone: two files with
/// the same heading title produce the same slug but remain distinct
/// entries. Duplicate slugs within one file are all retained, so lookup
/// answers existence rather than uniqueness.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use ss_core::Heading;
/// use ss_xref::AnchorIndex;
///
/// let mut index = AnchorIndex::new();
/// index.add_all(vec![Heading::new("intro", "Intro", Utf8Path::new("a.md"), 1)]);
/// assert!(index.contains(Utf8Path::new("a.md"), "intro"));
/// assert!(!index.contains(Utf8Path::new("b.md"), "intro"));
/// ```
#[derive(Debug, Default)]
pub struct AnchorIndex {
    /// Every indexed entry, duplicates included.
    entries: Vec<Heading>,
    /// Per-file slug sets for resolution lookups.
    by_file: FxHashMap<Utf8PathBuf, FxHashSet<String>>,
}

impl AnchorIndex {
    /// Creates an empty index.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            by_file: fx_hash_map(),
        }
    }

    /// Adds one file's extracted entries to the index.
    pub fn add_all(&mut self, headings: Vec<Heading>) {
        for heading in headings {
            self.by_file
                .entry(heading.file.clone())
                .or_default()
                .insert(heading.slug.clone());
            self.entries.push(heading);
        }
        debug!(total = self.entries.len(), "Anchor index updated");
    }

    /// Returns `true` if `file` declares an anchor with the given slug.
    #[must_use]
    pub fn contains(&self, file: &Utf8Path, slug: &str) -> bool {
        self.by_file
            .get(file)
            .is_some_and(|slugs| slugs.contains(slug))
    }

    /// All indexed entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Heading] {
        &self.entries
    }

    /// Total indexed sections and anchors, duplicates included.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been indexed.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indexer() -> AnchorIndexer {
        AnchorIndexer::new().unwrap()
    }

    fn extract(text: &str) -> Vec<Heading> {
        indexer().extract(Utf8Path::new("spec/core.md"), text)
    }

    #[test]
    fn test_heading_levels_one_through_six() {
        let text = "# One\n## Two\n###### Six\n";
        let headings = extract(text);
        assert_eq!(headings.len(), 3);
        assert_eq!(headings[0].slug, "one");
        assert_eq!(headings[2].slug, "six");
        assert_eq!(headings[2].line, 3);
    }

    #[test]
    fn test_seven_hashes_is_not_a_heading() {
        assert!(extract("####### Too Deep\n").is_empty());
    }

    #[test]
    fn test_hash_without_space_is_not_a_heading() {
        assert!(extract("#hashtag\n").is_empty());
    }

    #[test]
    fn test_heading_slug_derivation() {
        let headings = extract("## Getting Started\n");
        assert_eq!(headings[0].slug, "getting-started");
        assert_eq!(headings[0].title, "Getting Started");
    }

    #[test]
    fn test_explicit_anchor() {
        let headings = extract(r#"Some text <a name="wire-format"></a> here"#);
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].slug, "wire-format");
        assert_eq!(headings[0].title, "(anchor: wire-format)");
    }

    #[test]
    fn test_anchor_single_quotes_and_case() {
        let headings = extract("<A NAME='legacy-anchor'>");
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].slug, "legacy-anchor");
    }

    #[test]
    fn test_heading_and_anchor_on_same_line() {
        let headings = extract(r#"## Overview <a name="overview-alt">"#);
        assert_eq!(headings.len(), 2);
        // Both contribute; no precedence between them
        assert_eq!(headings[1].slug, "overview-alt");
    }

    #[test]
    fn test_duplicate_slugs_retained() {
        let text = "## Setup\n\n## Setup\n";
        let headings = extract(text);
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[0].slug, headings[1].slug);
    }

    #[test]
    fn test_index_is_file_scoped() {
        let mut index = AnchorIndex::new();
        index.add_all(indexer().extract(Utf8Path::new("a.md"), "# Intro\n"));
        index.add_all(indexer().extract(Utf8Path::new("b.md"), "# Intro\n"));

        assert_eq!(index.len(), 2);
        assert!(index.contains(Utf8Path::new("a.md"), "intro"));
        assert!(index.contains(Utf8Path::new("b.md"), "intro"));
        assert!(!index.contains(Utf8Path::new("c.md"), "intro"));
    }
}
