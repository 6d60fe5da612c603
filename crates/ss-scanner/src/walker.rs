//! Directory traversal for corpus files.
//!
//! This module provides [`CorpusWalker`], which uses the `ignore` crate to
//! walk a corpus subtree while respecting `.gitignore` patterns. A walker is
//! bound to one [`FileKind`] at construction: either the prose corpus
//! (`.md` files) or the schema corpus (`.schema.json` files).
//!
//! # Examples
//!
//! ```no_run
//! use ss_scanner::{CorpusWalker, FileKind};
//! use camino::Utf8Path;
//!
//! let walker = CorpusWalker::new(Utf8Path::new("spec"), FileKind::Prose);
//! let paths = walker.collect_paths()?;
//!
//! for path in &paths {
//!     println!("Found: {path}");
//! }
//! # Ok::<(), ss_scanner::ScanError>(())
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use ignore::WalkBuilder;
use tracing::debug;

use crate::error::ScanError;

/// Prose corpus file extension.
const PROSE_EXTENSION: &str = "md";

/// Schema corpus file name suffix.
///
/// Matched against the full file name, not the extension: `block.schema.json`
/// is a schema document, `package.json` is not.
const SCHEMA_SUFFIX: &str = ".schema.json";

/// The corpus a walker selects files for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Prose documents (`.md`).
    Prose,
    /// Schema documents (`.schema.json`).
    Schema,
}

impl FileKind {
    /// Checks whether a path belongs to this corpus.
    #[must_use]
    pub fn matches(self, path: &Utf8Path) -> bool {
        match self {
            Self::Prose => path.extension() == Some(PROSE_EXTENSION),
            Self::Schema => path
                .file_name()
                .is_some_and(|name| name.ends_with(SCHEMA_SUFFIX)),
        }
    }
}

/// A file walker that discovers corpus files in a directory tree.
///
/// Uses the `ignore` crate for efficient traversal with gitignore support.
///
/// # Design
///
/// The walker uses a "collect-then-parallelize" pattern:
/// 1. Walker collects all paths first (single-threaded, I/O bound)
/// 2. Paths are then processed in parallel with rayon
///
/// Collected paths are sorted lexically so that report ordering is stable
/// across runs and platforms.
///
/// A missing root is not an error: a corpus with no prose directory simply
/// has an empty prose vocabulary.
#[derive(Debug)]
pub struct CorpusWalker {
    /// The root directory to walk.
    root: Utf8PathBuf,
    /// Which corpus this walker selects for.
    kind: FileKind,
    /// Additional directories to skip (beyond standard filters).
    skip_dirs: Vec<String>,
    /// Whether to follow symbolic links.
    follow_links: bool,
}

impl CorpusWalker {
    /// Creates a new walker over `root` for the given corpus.
    #[must_use]
    pub fn new(root: &Utf8Path, kind: FileKind) -> Self {
        Self {
            root: root.to_owned(),
            kind,
            skip_dirs: Vec::new(),
            follow_links: false,
        }
    }

    /// Adds directories to skip during traversal.
    ///
    /// # Arguments
    ///
    /// * `dirs` - Directory names to skip (not full paths)
    #[must_use]
    pub fn with_skip_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_dirs.extend(dirs.into_iter().map(Into::into));
        self
    }

    /// Configures whether to follow symbolic links.
    ///
    /// By default, symbolic links are not followed.
    #[must_use]
    pub const fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Collects all corpus file paths in the directory tree, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Walk`] if directory traversal fails.
    /// Returns [`ScanError::NonUtf8Path`] if a non-UTF-8 path is encountered.
    pub fn collect_paths(&self) -> Result<Vec<Utf8PathBuf>, ScanError> {
        if !self.root.is_dir() {
            debug!(root = %self.root, "Corpus root absent; yielding no files");
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();

        for result in self.build_walker() {
            let entry = result?;

            // Skip directories and non-files
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.path();
            let utf8_path =
                Utf8Path::from_path(path).ok_or_else(|| ScanError::NonUtf8Path(path.to_owned()))?;

            if !self.kind.matches(utf8_path) {
                continue;
            }

            if self.should_skip_path(utf8_path) {
                continue;
            }

            paths.push(utf8_path.to_owned());
        }

        paths.sort_unstable();
        Ok(paths)
    }

    /// Builds the ignore walker with configured settings.
    fn build_walker(&self) -> ignore::Walk {
        WalkBuilder::new(&self.root)
            // Enable standard filters (.gitignore, .ignore, hidden files)
            .standard_filters(true)
            .follow_links(self.follow_links)
            // Use a single thread for walking (we parallelize later)
            .threads(1)
            // Don't require the root to be a git repo
            .require_git(false)
            .build()
    }

    /// Checks if a path should be skipped based on directory name.
    fn should_skip_path(&self, path: &Utf8Path) -> bool {
        path.components()
            .any(|component| self.skip_dirs.iter().any(|d| d == component.as_str()))
    }

    /// Returns the root directory being walked.
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prose_matches_markdown_only() {
        assert!(FileKind::Prose.matches(Utf8Path::new("spec/blocks.md")));
        assert!(FileKind::Prose.matches(Utf8Path::new("README.md")));
        assert!(!FileKind::Prose.matches(Utf8Path::new("spec/blocks.markdown")));
        assert!(!FileKind::Prose.matches(Utf8Path::new("spec/blocks.md.bak")));
        assert!(!FileKind::Prose.matches(Utf8Path::new("block.schema.json")));
    }

    #[test]
    fn test_schema_matches_full_suffix() {
        assert!(FileKind::Schema.matches(Utf8Path::new("schemas/block.schema.json")));
        assert!(FileKind::Schema.matches(Utf8Path::new("mark.schema.json")));
        assert!(!FileKind::Schema.matches(Utf8Path::new("package.json")));
        assert!(!FileKind::Schema.matches(Utf8Path::new("schemas/data.json")));
        assert!(!FileKind::Schema.matches(Utf8Path::new("schema.json.md")));
    }

    #[test]
    fn test_should_skip_path() {
        let walker = CorpusWalker::new(Utf8Path::new("."), FileKind::Prose)
            .with_skip_dirs(vec!["node_modules".to_owned(), "drafts".to_owned()]);

        assert!(walker.should_skip_path(Utf8Path::new("node_modules/pkg/readme.md")));
        assert!(walker.should_skip_path(Utf8Path::new("spec/drafts/new.md")));
        assert!(!walker.should_skip_path(Utf8Path::new("spec/blocks.md")));
        // Whole-component match only
        assert!(!walker.should_skip_path(Utf8Path::new("spec/drafts-final.md")));
    }

    #[test]
    fn test_missing_root_yields_empty() {
        let walker = CorpusWalker::new(
            Utf8Path::new("definitely/not/a/real/path"),
            FileKind::Prose,
        );
        let paths = walker.collect_paths().unwrap();
        assert!(paths.is_empty());
    }
}
