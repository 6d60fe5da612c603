//! Structural-type vocabulary entries.
//!
//! A structural type is a named content-block or mark category forming part
//! of the document model's extensible vocabulary ("heading", "paragraph",
//! "comment", ...). The same vocabulary is declared twice: embedded in prose
//! examples and formalized in schema definitions. This module provides the
//! [`StructuralType`] entry produced by both extractors.

use serde::{Deserialize, Serialize};

use super::location::SourceLocation;

/// Which corpus an extraction came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Extracted from a prose specification document.
    Prose,
    /// Extracted from a JSON schema definition.
    Schema,
}

impl SourceKind {
    /// Returns a short human-readable label.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Prose => "prose",
            Self::Schema => "schema",
        }
    }
}

/// A structural type declared somewhere in a corpus.
///
/// Identity is `name`, compared case-sensitively by exact string match.
/// Entries are immutable once extracted; the location records the first
/// occurrence within the extraction that produced the entry.
///
/// # Examples
///
/// ```
/// use ss_core::{SourceKind, SourceLocation, StructuralType};
/// use camino::Utf8Path;
///
/// let entry = StructuralType::new(
///     "heading",
///     SourceLocation::new(Utf8Path::new("spec/blocks.md"), 12),
///     SourceKind::Prose,
/// );
/// assert_eq!(entry.name, "heading");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralType {
    /// The declared type name.
    pub name: String,

    /// Where the declaration was first seen.
    pub location: SourceLocation,

    /// Which corpus declared it.
    pub kind: SourceKind,
}

impl StructuralType {
    /// Creates a new structural-type entry.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, location: SourceLocation, kind: SourceKind) -> Self {
        Self {
            name: name.into(),
            location,
            kind,
        }
    }
}
