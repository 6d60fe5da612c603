//! Reconciliation of the prose vocabulary against the schema vocabulary.

use ss_core::{FxHashSet, StructuralType, SyncReport};
use tracing::debug;

/// Partitions the two extracted vocabularies into a [`SyncReport`].
///
/// Membership in the three output sets is a pure set operation over names:
/// iteration order cannot move a name between partitions, it only decides
/// which [`SourceLocation`](ss_core::SourceLocation) a drifted entry carries
/// when the same name was extracted from several files (first processed file
/// wins).
///
/// # Arguments
///
/// * `prose` - All entries extracted from the prose corpus, in processing
///   order
/// * `schema` - All entries extracted from the schema corpus, in processing
///   order
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use ss_core::{SourceKind, SourceLocation, StructuralType};
/// use ss_extract::reconcile;
///
/// let prose = vec![StructuralType::new(
///     "heading",
///     SourceLocation::new(Utf8Path::new("spec/blocks.md"), 4),
///     SourceKind::Prose,
/// )];
/// let report = reconcile(&prose, &[]);
/// assert_eq!(report.prose_only.len(), 1);
/// assert!(report.synced.is_empty());
/// ```
#[must_use]
pub fn reconcile(prose: &[StructuralType], schema: &[StructuralType]) -> SyncReport {
    let prose_names: FxHashSet<&str> = prose.iter().map(|t| t.name.as_str()).collect();
    let schema_names: FxHashSet<&str> = schema.iter().map(|t| t.name.as_str()).collect();

    let mut synced: Vec<String> = prose_names
        .intersection(&schema_names)
        .map(|&name| name.to_owned())
        .collect();
    synced.sort_unstable();

    let prose_only: Vec<StructuralType> = dedupe_by_name(prose)
        .into_iter()
        .filter(|t| !schema_names.contains(t.name.as_str()))
        .cloned()
        .collect();

    let schema_only: Vec<StructuralType> = dedupe_by_name(schema)
        .into_iter()
        .filter(|t| !prose_names.contains(t.name.as_str()))
        .cloned()
        .collect();

    debug!(
        synced = synced.len(),
        prose_only = prose_only.len(),
        schema_only = schema_only.len(),
        "Reconciled type vocabularies"
    );

    SyncReport {
        synced,
        prose_only,
        schema_only,
    }
}

/// Keeps the first entry per name, preserving input order.
fn dedupe_by_name(entries: &[StructuralType]) -> Vec<&StructuralType> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    entries
        .iter()
        .filter(|entry| seen.insert(entry.name.as_str()))
        .collect()
}
