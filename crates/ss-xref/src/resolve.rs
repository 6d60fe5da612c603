//! Syntax-directed reference resolution.
//!
//! Each extracted [`Reference`] is classified by the shape of its raw
//! target and checked against the anchor index, the known corpus file
//! list, or the filesystem. Rules are evaluated in a fixed precedence
//! order; resolution never errors, it strictly partitions into
//! valid/broken.

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use ss_core::{FxHashSet, Reference};
use tracing::debug;

use crate::anchors::AnchorIndex;
use crate::refs::SECTION_TARGET_PREFIX;

/// Marker identifying a cross-document target: the prose file extension
/// appearing anywhere in the target.
const PROSE_MARKER: &str = ".md";

/// Resolves references against an anchor index and a corpus file list.
///
/// # Resolution rules (in precedence order)
///
/// 1. Leading `#`: same-file anchor lookup.
/// 2. Target containing `.md`: cross-file reference, resolved relative to
///    the referencing file's directory; the file must be in the corpus and
///    any `#anchor` suffix must exist in that file.
/// 3. `section:` prefix: always valid. Numbered-section citations are
///    informational by design; they refer to numbered sections in the
///    rendered document, not to anchors, and are deliberately not checked
///    against a numbering scheme.
/// 4. Target containing a path separator: valid iff the path exists on the
///    filesystem relative to the referencing file's directory.
/// 5. Fallback: the literal target as an anchor name in the current file.
#[derive(Debug)]
pub struct ReferenceResolver<'a> {
    /// Global anchor index over the prose corpus.
    index: &'a AnchorIndex,
    /// Known corpus files, relative to the corpus root.
    corpus: &'a FxHashSet<Utf8PathBuf>,
    /// Corpus root, for filesystem existence checks (rule 4).
    root: &'a Utf8Path,
}

impl<'a> ReferenceResolver<'a> {
    /// Creates a resolver over the given index and corpus.
    #[must_use]
    pub fn new(
        index: &'a AnchorIndex,
        corpus: &'a FxHashSet<Utf8PathBuf>,
        root: &'a Utf8Path,
    ) -> Self {
        Self {
            index,
            corpus,
            root,
        }
    }

    /// Returns `true` if the reference resolves.
    #[must_use]
    pub fn resolve(&self, reference: &Reference) -> bool {
        let target = reference.target.as_str();

        // Rule 1: same-file anchor
        if let Some(anchor) = target.strip_prefix('#') {
            return self.index.contains(&reference.file, anchor);
        }

        // Rule 2: cross-file reference, optional anchor suffix
        if target.contains(PROSE_MARKER) {
            let (file_part, anchor_part) = match target.split_once('#') {
                Some((file, anchor)) => (file, Some(anchor)),
                None => (target, None),
            };

            let resolved = self.resolve_relative(&reference.file, file_part);
            if !self.corpus.contains(&resolved) {
                return false;
            }

            return match anchor_part {
                Some(anchor) => self.index.contains(&resolved, anchor),
                None => true,
            };
        }

        // Rule 3: narrative section citations are informational, not
        // anchored; always valid
        if target.starts_with(SECTION_TARGET_PREFIX) {
            return true;
        }

        // Rule 4: generic relative path
        if target.contains('/') {
            let resolved = self.resolve_relative(&reference.file, target);
            return self.root.join(resolved).as_std_path().exists();
        }

        // Rule 5: bare anchor in the current file
        self.index.contains(&reference.file, target)
    }

    /// Partitions references into (valid, broken).
    #[must_use]
    pub fn partition(&self, references: Vec<Reference>) -> (Vec<Reference>, Vec<Reference>) {
        let mut valid = Vec::new();
        let mut broken = Vec::new();

        for reference in references {
            if self.resolve(&reference) {
                valid.push(reference);
            } else {
                debug!(
                    target = %reference.target,
                    file = %reference.file,
                    line = reference.line,
                    "Broken reference"
                );
                broken.push(reference);
            }
        }

        (valid, broken)
    }

    /// Resolves `target` against the directory of the referencing file,
    /// normalizing `.` and `..` components lexically.
    fn resolve_relative(&self, referencing: &Utf8Path, target: &str) -> Utf8PathBuf {
        let base = referencing.parent().unwrap_or(Utf8Path::new(""));
        normalize(&base.join(target))
    }
}

/// Lexically normalizes `.` and `..` components.
///
/// A `..` that would escape the corpus root is dropped; the resulting path
/// cannot be a corpus member, so the reference reports as broken rather
/// than resolving outside the tree.
fn normalize(path: &Utf8Path) -> Utf8PathBuf {
    let mut parts: Vec<&str> = Vec::new();

    for component in path.components() {
        match component {
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => {
                parts.pop();
            }
            Utf8Component::Normal(name) => parts.push(name),
            Utf8Component::RootDir | Utf8Component::Prefix(_) => {}
        }
    }

    parts.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use ss_core::fx_hash_set;

    use super::*;
    use crate::anchors::AnchorIndexer;

    /// Builds an index + corpus from (path, contents) pairs.
    fn fixture(docs: &[(&str, &str)]) -> (AnchorIndex, FxHashSet<Utf8PathBuf>) {
        let indexer = AnchorIndexer::new().unwrap();
        let mut index = AnchorIndex::new();
        let mut corpus = fx_hash_set();

        for (path, contents) in docs {
            let path = Utf8Path::new(path);
            index.add_all(indexer.extract(path, contents));
            corpus.insert(path.to_owned());
        }

        (index, corpus)
    }

    fn reference(target: &str, file: &str) -> Reference {
        Reference::new(target, Utf8Path::new(file), 1, target)
    }

    #[test]
    fn test_same_file_anchor_valid() {
        let (index, corpus) = fixture(&[("spec/a.md", "## Getting Started\n")]);
        let resolver = ReferenceResolver::new(&index, &corpus, Utf8Path::new("."));
        assert!(resolver.resolve(&reference("#getting-started", "spec/a.md")));
    }

    #[test]
    fn test_same_file_anchor_broken() {
        let (index, corpus) = fixture(&[("spec/a.md", "## Getting Started\n")]);
        let resolver = ReferenceResolver::new(&index, &corpus, Utf8Path::new("."));
        assert!(!resolver.resolve(&reference("#missing", "spec/a.md")));
    }

    #[test]
    fn test_cross_file_with_anchor_valid() {
        let (index, corpus) = fixture(&[
            ("spec/a.md", "# A\n"),
            ("spec/other.md", "# Intro\n"),
        ]);
        let resolver = ReferenceResolver::new(&index, &corpus, Utf8Path::new("."));
        assert!(resolver.resolve(&reference("other.md#intro", "spec/a.md")));
    }

    #[test]
    fn test_cross_file_missing_anchor_broken() {
        let (index, corpus) = fixture(&[
            ("spec/a.md", "# A\n"),
            ("spec/other.md", "# Intro\n"),
        ]);
        let resolver = ReferenceResolver::new(&index, &corpus, Utf8Path::new("."));
        assert!(!resolver.resolve(&reference("other.md#conclusion", "spec/a.md")));
    }

    #[test]
    fn test_cross_file_without_anchor_needs_only_membership() {
        let (index, corpus) = fixture(&[
            ("spec/a.md", "# A\n"),
            ("spec/other.md", "no headings at all\n"),
        ]);
        let resolver = ReferenceResolver::new(&index, &corpus, Utf8Path::new("."));
        assert!(resolver.resolve(&reference("other.md", "spec/a.md")));
    }

    #[test]
    fn test_cross_file_absent_from_corpus_broken() {
        let (index, corpus) = fixture(&[("spec/a.md", "# A\n")]);
        let resolver = ReferenceResolver::new(&index, &corpus, Utf8Path::new("."));
        assert!(!resolver.resolve(&reference("nope.md", "spec/a.md")));
    }

    #[test]
    fn test_cross_file_parent_traversal() {
        let (index, corpus) = fixture(&[
            ("spec/extensions/forms.md", "# Forms\n"),
            ("spec/core.md", "# Core Concepts\n"),
        ]);
        let resolver = ReferenceResolver::new(&index, &corpus, Utf8Path::new("."));
        assert!(resolver.resolve(&reference(
            "../core.md#core-concepts",
            "spec/extensions/forms.md"
        )));
    }

    #[test]
    fn test_section_citation_always_valid() {
        let (index, corpus) = fixture(&[("spec/a.md", "")]);
        let resolver = ReferenceResolver::new(&index, &corpus, Utf8Path::new("."));
        // Never checked against a numbering scheme, by design
        assert!(resolver.resolve(&reference("section:4.2", "spec/a.md")));
        assert!(resolver.resolve(&reference("section:99.99", "spec/a.md")));
    }

    #[test]
    fn test_generic_relative_path_missing_broken() {
        let (index, corpus) = fixture(&[("spec/a.md", "")]);
        let resolver = ReferenceResolver::new(&index, &corpus, Utf8Path::new("."));
        assert!(!resolver.resolve(&reference("assets/missing.png", "spec/a.md")));
    }

    #[test]
    fn test_fallback_bare_anchor_in_current_file() {
        let (index, corpus) = fixture(&[("spec/a.md", "## Wire Format\n")]);
        let resolver = ReferenceResolver::new(&index, &corpus, Utf8Path::new("."));
        assert!(resolver.resolve(&reference("wire-format", "spec/a.md")));
        assert!(!resolver.resolve(&reference("unknown-anchor", "spec/a.md")));
    }

    #[test]
    fn test_partition_keeps_every_occurrence() {
        let (index, corpus) = fixture(&[("spec/a.md", "## Setup\n")]);
        let resolver = ReferenceResolver::new(&index, &corpus, Utf8Path::new("."));

        let refs = vec![
            reference("#setup", "spec/a.md"),
            reference("#setup", "spec/a.md"),
            reference("#gone", "spec/a.md"),
        ];
        let (valid, broken) = resolver.partition(refs);
        assert_eq!(valid.len(), 2);
        assert_eq!(broken.len(), 1);
        assert_eq!(broken[0].target, "#gone");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize(Utf8Path::new("spec/extensions/../core.md")),
            Utf8PathBuf::from("spec/core.md")
        );
        assert_eq!(
            normalize(Utf8Path::new("./spec/./a.md")),
            Utf8PathBuf::from("spec/a.md")
        );
        // Escaping the root is clamped
        assert_eq!(normalize(Utf8Path::new("../a.md")), Utf8PathBuf::from("a.md"));
    }
}
