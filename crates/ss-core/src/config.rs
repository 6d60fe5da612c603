//! Configuration structures for the specsync tool.
//!
//! This module provides configuration types for all components of the
//! application:
//!
//! - [`CorpusConfig`] - Where the prose and schema corpora live
//! - [`ExclusionConfig`] - Names that are not structural types despite
//!   matching the declaration pattern
//! - [`Config`] - Root configuration combining all settings
//!
//! All configuration types implement [`Default`] with values matching the
//! conventional spec repository layout (`spec/` for prose, `schemas/` for
//! schema definitions).

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for the corpus scanner.
///
/// Controls which directories are enumerated for prose documents and schema
/// definitions. Missing directories are not an error: they yield an empty
/// corpus, so a repository without (say) schemas still produces a report.
///
/// # Examples
///
/// ```
/// use ss_core::CorpusConfig;
///
/// let config = CorpusConfig::default();
/// assert_eq!(config.prose_dir, "spec");
/// assert_eq!(config.schema_dir, "schemas");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Base directory containing the spec repository.
    pub root: Utf8PathBuf,

    /// Subdirectory containing prose specification documents.
    pub prose_dir: String,

    /// Subdirectory containing JSON schema definitions.
    pub schema_dir: String,

    /// Directory names to skip during traversal.
    pub skip_dirs: Vec<String>,

    /// Whether to follow symbolic links during traversal.
    pub follow_links: bool,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            root: Utf8PathBuf::from("."),
            prose_dir: "spec".to_owned(),
            schema_dir: "schemas".to_owned(),
            skip_dirs: vec!["node_modules".to_owned(), ".git".to_owned()],
            follow_links: false,
        }
    }
}

impl CorpusConfig {
    /// Returns the full path to the prose corpus root.
    #[must_use]
    pub fn prose_root(&self) -> Utf8PathBuf {
        self.root.join(&self.prose_dir)
    }

    /// Returns the full path to the schema corpus root.
    #[must_use]
    pub fn schema_root(&self) -> Utf8PathBuf {
        self.root.join(&self.schema_dir)
    }

    /// Makes `path` relative to the configured root, for reporting.
    ///
    /// Paths outside the root are returned unchanged.
    #[must_use]
    pub fn relativize(&self, path: &Utf8Path) -> Utf8PathBuf {
        path.strip_prefix(&self.root)
            .map_or_else(|_| path.to_owned(), Utf8Path::to_owned)
    }
}

/// Configuration for the prose extractor's exclusion rules.
///
/// A `"type": "<name>"` pair in prose is only a structural-type declaration
/// if `<name>` is part of the document model's block/mark vocabulary. Plenty
/// of other enumerations are written with the same key: MIME types in asset
/// examples, syntax-highlighting token names, lifecycle states, and so on.
/// This configuration enumerates those non-structural vocabularies.
///
/// Rules match the whole candidate name only. `exact` entries compare by
/// string equality; `patterns` are regular expressions that are anchored
/// before compilation, so a rule can never fire on a substring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExclusionConfig {
    /// Names excluded by exact, case-sensitive match.
    pub exact: Vec<String>,

    /// Regular expressions excluded by full match.
    pub patterns: Vec<String>,
}

impl Default for ExclusionConfig {
    fn default() -> Self {
        let exact = [
            // Presentation-layer layout keywords
            "paginated",
            "continuous",
            "responsive",
            // Syntax-highlighting token names. "comment" is deliberately
            // absent: it doubles as the collaboration annotation type, and
            // excluding it would hide a real structural type.
            "keyword",
            "operator",
            "punctuation",
            "function",
            "variable",
            "constant",
            "builtin",
            "class-name",
            // Document lifecycle states
            "draft",
            "review",
            "final",
            "published",
            "archived",
            // Change-operation verbs
            "insert",
            "delete",
            "replace",
            "move",
            // Form-field input kinds
            "checkbox",
            "radio",
            "select",
            "textarea",
            "dropdown",
            // Bibliographic (CSL) item types
            "article",
            "article-journal",
            "book",
            "chapter",
            "webpage",
            "paper-conference",
            "thesis",
            "report",
            // The seven primitive/container kinds of the schema type system
            "string",
            "number",
            "integer",
            "boolean",
            "object",
            "array",
            "null",
            // Provenance evidence kinds
            "hash",
            "signature",
            "timestamp",
            "attestation",
            // Layout arrangement keywords
            "grid",
            "flow",
            "absolute",
            // Citation format keywords
            "apa",
            "mla",
            "chicago",
            "ieee",
            "harvard",
            // Inline text styling keywords
            "bold",
            "italic",
            "underline",
            "strikethrough",
            "superscript",
            "subscript",
            // Relationship/requirement enum values
            "required",
            "optional",
            "recommended",
            "deprecated",
        ];

        Self {
            exact: exact.iter().map(|&s| s.to_owned()).collect(),
            // MIME types: a known prefix followed by a subtype
            patterns: vec![r"(?:image|font|application|text|audio|video)/[\w.+-]+".to_owned()],
        }
    }
}

/// Root configuration for the specsync tool.
///
/// # Examples
///
/// ```
/// use ss_core::Config;
///
/// let config = Config::default();
/// let json = serde_json::to_string_pretty(&config).unwrap();
/// assert!(json.contains("prose_dir"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Corpus layout configuration.
    pub corpus: CorpusConfig,

    /// Exclusion rules for the prose type extractor.
    pub exclusions: ExclusionConfig,
}

impl Config {
    /// Validates the configuration.
    ///
    /// The corpus root may be missing (that is a legal empty corpus), but if
    /// it exists it must be a directory, and the layout options must be
    /// non-empty so corpus paths stay meaningful.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] describing the first invalid setting found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.corpus.root.exists() && !self.corpus.root.is_dir() {
            return Err(ConfigError::NotADirectory(self.corpus.root.clone()));
        }
        if self.corpus.prose_dir.is_empty() {
            return Err(ConfigError::invalid_option(
                "prose_dir",
                "must not be empty",
            ));
        }
        if self.corpus.schema_dir.is_empty() {
            return Err(ConfigError::invalid_option(
                "schema_dir",
                "must not be empty",
            ));
        }
        if self.exclusions.exact.iter().any(String::is_empty) {
            return Err(ConfigError::invalid_option(
                "exclusions.exact",
                "entries must not be empty",
            ));
        }
        Ok(())
    }
}
