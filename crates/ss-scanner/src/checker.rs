//! Parallel consistency pipelines.
//!
//! This module provides [`ConsistencyChecker`], which orchestrates the two
//! checks over a spec corpus:
//!
//! - **Sync**: extract structural-type vocabularies from prose and schemas,
//!   then reconcile them into a [`SyncReport`]
//! - **Xrefs**: index anchors across the prose corpus, extract references,
//!   and resolve them into an [`XrefReport`]
//!
//! # Design
//!
//! Uses the "collect-then-parallelize" pattern:
//!
//! 1. Paths are collected first by [`CorpusWalker`](crate::CorpusWalker)
//! 2. Files are read and extracted in parallel with `rayon::par_iter()`
//! 3. Per-file results are folded sequentially in path order, so report
//!    contents are deterministic regardless of thread scheduling
//!
//! Both checks are advisory: a file that cannot be read or parsed is
//! recorded as a recoverable error in the outcome and the run continues.
//!
//! # Examples
//!
//! ```no_run
//! use ss_core::Config;
//! use ss_scanner::ConsistencyChecker;
//!
//! let checker = ConsistencyChecker::new(Config::default())?;
//!
//! let sync = checker.check_sync()?;
//! println!("{} types in sync", sync.report.synced.len());
//!
//! let xrefs = checker.check_xrefs()?;
//! println!("{} broken references", xrefs.report.broken.len());
//! # Ok::<(), ss_scanner::ScanError>(())
//! ```

use std::fs;

use camino::Utf8PathBuf;
use rayon::prelude::*;
use serde_json::Value;
use ss_core::{Config, Heading, Reference, StructuralType, SyncReport, XrefReport, fx_hash_set};
use ss_extract::{ExclusionSet, ProseTypeExtractor, SchemaTypeExtractor, reconcile};
use ss_xref::{AnchorIndex, AnchorIndexer, ReferenceExtractor, ReferenceResolver};
use tracing::{info, warn};

use crate::error::ScanError;
use crate::walker::{CorpusWalker, FileKind};

/// Result of a sync check: the report plus any files that were skipped.
#[derive(Debug)]
pub struct SyncOutcome {
    /// The reconciled vocabulary report.
    pub report: SyncReport,
    /// Files skipped due to recoverable errors, in path order.
    pub errors: Vec<(Utf8PathBuf, ScanError)>,
}

/// Result of a cross-reference check: the report plus any skipped files.
#[derive(Debug)]
pub struct XrefOutcome {
    /// The resolved reference report.
    pub report: XrefReport,
    /// Files skipped due to recoverable errors, in path order.
    pub errors: Vec<(Utf8PathBuf, ScanError)>,
}

/// Orchestrates corpus traversal, extraction, and reconciliation.
///
/// All extractors are compiled once at construction; both checks can then
/// run any number of times against the configured corpus.
#[derive(Debug)]
pub struct ConsistencyChecker {
    config: Config,
    prose: ProseTypeExtractor,
    schema: SchemaTypeExtractor,
    anchors: AnchorIndexer,
    refs: ReferenceExtractor,
}

impl ConsistencyChecker {
    /// Creates a checker for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Config`] if the configuration fails validation,
    /// or a pattern error if a configured exclusion regex does not compile.
    pub fn new(config: Config) -> Result<Self, ScanError> {
        config
            .validate()
            .map_err(|e| ScanError::config(e.to_string()))?;

        let exclusions = ExclusionSet::from_config(&config.exclusions)?;

        Ok(Self {
            prose: ProseTypeExtractor::new(exclusions)?,
            schema: SchemaTypeExtractor::new(),
            anchors: AnchorIndexer::new()?,
            refs: ReferenceExtractor::new()?,
            config,
        })
    }

    /// Returns the active configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the prose/schema vocabulary sync check.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Walk`] or [`ScanError::NonUtf8Path`] if corpus
    /// traversal fails. Per-file read and parse failures do not abort the
    /// check; they are collected in [`SyncOutcome::errors`].
    pub fn check_sync(&self) -> Result<SyncOutcome, ScanError> {
        let prose_paths = self.collect(FileKind::Prose)?;
        let schema_paths = self.collect(FileKind::Schema)?;
        info!(
            prose_files = prose_paths.len(),
            schema_files = schema_paths.len(),
            "Scanning corpus for structural types"
        );

        let prose_results: Vec<_> = prose_paths
            .par_iter()
            .map(|path| {
                let rel = self.config.corpus.relativize(path);
                let extracted = fs::read_to_string(path)
                    .map_err(|e| ScanError::read(rel.clone(), e))
                    .map(|text| self.prose.extract(&rel, &text));
                (rel, extracted)
            })
            .collect();

        let schema_results: Vec<_> = schema_paths
            .par_iter()
            .map(|path| {
                let rel = self.config.corpus.relativize(path);
                let extracted = fs::read_to_string(path)
                    .map_err(|e| ScanError::read(rel.clone(), e))
                    .and_then(|text| {
                        serde_json::from_str::<Value>(&text)
                            .map_err(|e| ScanError::json(rel.clone(), e))
                    })
                    .map(|value| self.schema.extract(&rel, &value));
                (rel, extracted)
            })
            .collect();

        let mut errors = Vec::new();
        let prose_types = fold_extracted(prose_results, &mut errors);
        let schema_types = fold_extracted(schema_results, &mut errors);

        let report = reconcile(&prose_types, &schema_types);
        info!(
            synced = report.synced.len(),
            prose_only = report.prose_only.len(),
            schema_only = report.schema_only.len(),
            skipped = errors.len(),
            "Sync check complete"
        );

        Ok(SyncOutcome { report, errors })
    }

    /// Runs the cross-reference validation check.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Walk`] or [`ScanError::NonUtf8Path`] if corpus
    /// traversal fails. Unreadable prose files are collected in
    /// [`XrefOutcome::errors`]; their anchors and references simply do not
    /// participate in resolution.
    pub fn check_xrefs(&self) -> Result<XrefOutcome, ScanError> {
        let prose_paths = self.collect(FileKind::Prose)?;
        info!(
            prose_files = prose_paths.len(),
            "Scanning corpus for cross-references"
        );

        // Corpus membership is about existence, not readability: a file we
        // walked is a legitimate link target even if its own contents could
        // not be read.
        let mut corpus = fx_hash_set();
        for path in &prose_paths {
            corpus.insert(self.config.corpus.relativize(path));
        }

        type PerFile = (Vec<Heading>, Vec<Reference>);
        let results: Vec<(Utf8PathBuf, Result<PerFile, ScanError>)> = prose_paths
            .par_iter()
            .map(|path| {
                let rel = self.config.corpus.relativize(path);
                let extracted = fs::read_to_string(path)
                    .map_err(|e| ScanError::read(rel.clone(), e))
                    .map(|text| {
                        (
                            self.anchors.extract(&rel, &text),
                            self.refs.extract(&rel, &text),
                        )
                    });
                (rel, extracted)
            })
            .collect();

        let mut errors = Vec::new();
        let mut index = AnchorIndex::new();
        let mut references = Vec::new();

        for (rel, result) in results {
            match result {
                Ok((headings, mut refs)) => {
                    index.add_all(headings);
                    references.append(&mut refs);
                }
                Err(err) => {
                    warn!(path = %rel, error = %err, "Skipping file");
                    errors.push((rel, err));
                }
            }
        }

        let sections_indexed = index.len();
        let references_found = references.len();

        let resolver = ReferenceResolver::new(&index, &corpus, &self.config.corpus.root);
        let (valid, broken) = resolver.partition(references);

        info!(
            sections_indexed,
            references_found,
            broken = broken.len(),
            skipped = errors.len(),
            "Cross-reference check complete"
        );

        Ok(XrefOutcome {
            report: XrefReport {
                sections_indexed,
                references_found,
                valid,
                broken,
            },
            errors,
        })
    }

    /// Collects sorted corpus paths for the given kind.
    fn collect(&self, kind: FileKind) -> Result<Vec<Utf8PathBuf>, ScanError> {
        let root = match kind {
            FileKind::Prose => self.config.corpus.prose_root(),
            FileKind::Schema => self.config.corpus.schema_root(),
        };

        CorpusWalker::new(&root, kind)
            .with_skip_dirs(self.config.corpus.skip_dirs.iter().cloned())
            .with_follow_links(self.config.corpus.follow_links)
            .collect_paths()
    }
}

/// Folds per-file extraction results in path order, routing recoverable
/// failures into `errors`.
fn fold_extracted(
    results: Vec<(Utf8PathBuf, Result<Vec<StructuralType>, ScanError>)>,
    errors: &mut Vec<(Utf8PathBuf, ScanError)>,
) -> Vec<StructuralType> {
    let mut types = Vec::new();

    for (rel, result) in results {
        match result {
            Ok(mut extracted) => types.append(&mut extracted),
            Err(err) => {
                warn!(path = %rel, error = %err, "Skipping file");
                errors.push((rel, err));
            }
        }
    }

    types
}

#[cfg(test)]
mod tests {
    use std::fs;

    use camino::Utf8Path;
    use tempfile::TempDir;

    use super::*;

    fn create_temp_dir() -> TempDir {
        TempDir::new().expect("Failed to create temp directory")
    }

    /// Lays out a corpus under `root` from (relative path, contents) pairs.
    fn write_corpus(root: &Utf8Path, files: &[(&str, &str)]) {
        for (rel, contents) in files {
            let path = root.join(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("Failed to create corpus dir");
            }
            fs::write(path, contents).expect("Failed to write corpus file");
        }
    }

    fn checker_for(root: &Utf8Path) -> ConsistencyChecker {
        let mut config = Config::default();
        config.corpus.root = root.to_owned();
        ConsistencyChecker::new(config).expect("Failed to build checker")
    }

    #[test]
    fn test_check_sync_end_to_end() {
        let temp_dir = create_temp_dir();
        let root = Utf8Path::from_path(temp_dir.path()).expect("Invalid path");

        write_corpus(
            root,
            &[
                (
                    "spec/blocks.md",
                    "# Blocks\n\nA heading is `\"type\": \"heading\"` and a callout is\n{ \"type\": \"callout\" }.\n",
                ),
                (
                    "schemas/block.schema.json",
                    r#"{
                        "anyOf": [
                            { "properties": { "type": { "const": "heading" } } },
                            { "properties": { "type": { "const": "table" } } }
                        ]
                    }"#,
                ),
            ],
        );

        let outcome = checker_for(root).check_sync().unwrap();
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.report.synced, vec!["heading".to_owned()]);

        let prose_only: Vec<_> = outcome
            .report
            .prose_only
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(prose_only, vec!["callout"]);

        let schema_only: Vec<_> = outcome
            .report
            .schema_only
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(schema_only, vec!["table"]);

        // Locations are reported relative to the corpus root
        assert_eq!(
            outcome.report.prose_only[0].location.file,
            Utf8Path::new("spec/blocks.md")
        );
    }

    #[test]
    fn test_check_sync_survives_malformed_schema() {
        let temp_dir = create_temp_dir();
        let root = Utf8Path::from_path(temp_dir.path()).expect("Invalid path");

        write_corpus(
            root,
            &[
                ("spec/a.md", "`\"type\": \"heading\"`\n"),
                ("schemas/bad.schema.json", "{ not json"),
                (
                    "schemas/good.schema.json",
                    r#"{ "properties": { "type": { "const": "heading" } } }"#,
                ),
            ],
        );

        let outcome = checker_for(root).check_sync().unwrap();

        // The malformed schema is skipped, not fatal
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].1.is_recoverable());
        assert_eq!(outcome.errors[0].0, Utf8Path::new("schemas/bad.schema.json"));

        // The rest of the corpus still reconciles
        assert_eq!(outcome.report.synced, vec!["heading".to_owned()]);
    }

    #[test]
    fn test_check_sync_missing_corpus_dirs() {
        let temp_dir = create_temp_dir();
        let root = Utf8Path::from_path(temp_dir.path()).expect("Invalid path");

        let outcome = checker_for(root).check_sync().unwrap();
        assert!(outcome.errors.is_empty());
        assert!(outcome.report.is_synced());
        assert!(outcome.report.synced.is_empty());
    }

    #[test]
    fn test_check_xrefs_end_to_end() {
        let temp_dir = create_temp_dir();
        let root = Utf8Path::from_path(temp_dir.path()).expect("Invalid path");

        write_corpus(
            root,
            &[
                (
                    "spec/intro.md",
                    "# Introduction\n\nSee [the model](model.md#document-model) and\n[nowhere](#missing-anchor). See Section 2.1 for history.\n",
                ),
                ("spec/model.md", "# Document Model\n"),
            ],
        );

        let outcome = checker_for(root).check_xrefs().unwrap();
        assert!(outcome.errors.is_empty());

        let report = &outcome.report;
        assert_eq!(report.sections_indexed, 2);
        assert_eq!(report.references_found, 3);
        assert_eq!(report.valid.len() + report.broken.len(), report.references_found);

        assert_eq!(report.broken.len(), 1);
        assert_eq!(report.broken[0].target, "#missing-anchor");
        assert_eq!(report.broken[0].file, Utf8Path::new("spec/intro.md"));
    }

    #[test]
    fn test_checks_are_deterministic() {
        let temp_dir = create_temp_dir();
        let root = Utf8Path::from_path(temp_dir.path()).expect("Invalid path");

        write_corpus(
            root,
            &[
                ("spec/a.md", "`\"type\": \"heading\"`\nSee [b](b.md#b).\n# A\n"),
                ("spec/b.md", "`\"type\": \"callout\"`\n# B\n"),
                ("spec/c.md", "`\"type\": \"table\"`\n[x](#a)\n"),
            ],
        );

        let checker = checker_for(root);
        let first = checker.check_sync().unwrap();
        let second = checker.check_sync().unwrap();
        assert_eq!(first.report, second.report);

        let xrefs_first = checker.check_xrefs().unwrap();
        let xrefs_second = checker.check_xrefs().unwrap();
        assert_eq!(xrefs_first.report, xrefs_second.report);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = Config::default();
        config.corpus.prose_dir = String::new();

        let err = ConsistencyChecker::new(config).unwrap_err();
        assert!(err.is_fatal());
    }
}
