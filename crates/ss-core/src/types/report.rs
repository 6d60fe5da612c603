//! Terminal report aggregates.
//!
//! Reports are pure output values with no further lifecycle. They are
//! advisory: nothing in this workspace terminates the process over a
//! non-empty drift or broken partition; that policy belongs to the CLI
//! layer (or CI) consuming them.

use serde::{Deserialize, Serialize};

use super::reference::Reference;
use super::structural::StructuralType;

/// Result of reconciling the prose vocabulary against the schema vocabulary.
///
/// The three collections partition the union of both vocabularies: a name is
/// `synced` when both corpora declare it, and lands in exactly one of the
/// `*_only` lists otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    /// Names declared by both corpora, sorted.
    pub synced: Vec<String>,

    /// Entries documented in prose but missing from every schema.
    pub prose_only: Vec<StructuralType>,

    /// Entries defined in a schema but never documented in prose.
    pub schema_only: Vec<StructuralType>,
}

impl SyncReport {
    /// Returns `true` when the two vocabularies agree exactly.
    #[inline]
    #[must_use]
    pub fn is_synced(&self) -> bool {
        self.prose_only.is_empty() && self.schema_only.is_empty()
    }

    /// Number of names present in only one corpus.
    #[inline]
    #[must_use]
    pub fn drift_count(&self) -> usize {
        self.prose_only.len() + self.schema_only.len()
    }
}

/// Result of validating cross-references over the prose corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XrefReport {
    /// Total sections and anchors indexed across the corpus.
    pub sections_indexed: usize,

    /// Total reference occurrences found.
    pub references_found: usize,

    /// References that resolved.
    pub valid: Vec<Reference>,

    /// References that failed every resolution rule.
    pub broken: Vec<Reference>,
}

impl XrefReport {
    /// Returns `true` when no reference is broken.
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.broken.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use camino::Utf8Path;

    use super::*;
    use crate::types::{SourceKind, SourceLocation};

    #[test]
    fn test_sync_report_is_synced() {
        let report = SyncReport {
            synced: vec!["heading".to_owned()],
            ..SyncReport::default()
        };
        assert!(report.is_synced());
        assert_eq!(report.drift_count(), 0);
    }

    #[test]
    fn test_sync_report_drift_count() {
        let entry = StructuralType::new(
            "callout",
            SourceLocation::new(Utf8Path::new("spec/blocks.md"), 5),
            SourceKind::Prose,
        );
        let report = SyncReport {
            synced: Vec::new(),
            prose_only: vec![entry],
            schema_only: Vec::new(),
        };
        assert!(!report.is_synced());
        assert_eq!(report.drift_count(), 1);
    }

    #[test]
    fn test_xref_report_is_clean() {
        let mut report = XrefReport::default();
        assert!(report.is_clean());

        report
            .broken
            .push(Reference::new("#nope", Utf8Path::new("spec/a.md"), 2, "[x](#nope)"));
        assert!(!report.is_clean());
    }

    #[test]
    fn test_report_serialization_round_trip() {
        let report = SyncReport {
            synced: vec!["heading".to_owned(), "paragraph".to_owned()],
            ..SyncReport::default()
        };
        let json = serde_json::to_string(&report).unwrap();
        let parsed: SyncReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, parsed);
    }
}
