//! Source location types for tracking positions in corpus files.
//!
//! This module provides the [`SourceLocation`] type for representing where a
//! structural type was declared.

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// A position within a corpus file.
///
/// Purely descriptive: locations are attached to extracted entries for
/// reporting and never participate in identity comparisons.
///
/// # Field Conventions
///
/// - `file` is relative to the corpus root
/// - `line` is 1-indexed when present; schema extractions carry no line
///   because declarations are found in a parsed tree, not in text
///
/// # Examples
///
/// ```
/// use ss_core::SourceLocation;
/// use camino::Utf8Path;
///
/// let loc = SourceLocation::new(Utf8Path::new("spec/blocks.md"), 42);
/// assert_eq!(loc.to_string(), "spec/blocks.md:42");
///
/// let loc = SourceLocation::file_only(Utf8Path::new("schemas/content.schema.json"));
/// assert_eq!(loc.to_string(), "schemas/content.schema.json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Path of the file, relative to the corpus root.
    pub file: Utf8PathBuf,

    /// Line number (1-indexed), when known.
    pub line: Option<u32>,
}

impl SourceLocation {
    /// Creates a location with a known line.
    #[inline]
    #[must_use]
    pub fn new(file: &Utf8Path, line: u32) -> Self {
        Self {
            file: file.to_owned(),
            line: Some(line),
        }
    }

    /// Creates a location identifying a whole file.
    #[inline]
    #[must_use]
    pub fn file_only(file: &Utf8Path) -> Self {
        Self {
            file: file.to_owned(),
            line: None,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{line}", self.file),
            None => write!(f, "{}", self.file),
        }
    }
}
