//! Dual-source structural-type extraction and reconciliation.
//!
//! This crate extracts the document model's structural-type vocabulary from
//! two independently authored corpora and reconciles them:
//!
//! - [`ProseTypeExtractor`]: scans prose documents line by line for embedded
//!   `"type": "<name>"` declarations, filtered through an [`ExclusionSet`]
//! - [`SchemaTypeExtractor`]: recursively walks parsed JSON schema trees,
//!   collecting `type.const` declarations through composition and
//!   conditional operators
//! - [`reconcile`]: partitions the two vocabularies into synced /
//!   prose-only / schema-only
//!
//! # Example
//!
//! ```
//! use camino::Utf8Path;
//! use ss_core::ExclusionConfig;
//! use ss_extract::{ExclusionSet, ProseTypeExtractor, SchemaTypeExtractor, reconcile};
//!
//! # fn main() -> Result<(), ss_extract::ExtractError> {
//! let exclusions = ExclusionSet::from_config(&ExclusionConfig::default())?;
//! let prose = ProseTypeExtractor::new(exclusions)?;
//!
//! let documented = prose.extract(
//!     Utf8Path::new("spec/blocks.md"),
//!     r#"A heading block: `"type": "heading"`"#,
//! );
//! assert_eq!(documented.len(), 1);
//!
//! let schema = SchemaTypeExtractor::new();
//! let tree = serde_json::json!({
//!     "$defs": { "heading": { "properties": { "type": { "const": "heading" } } } }
//! });
//! let defined = schema.extract(Utf8Path::new("schemas/content.schema.json"), &tree);
//!
//! let report = reconcile(&documented, &defined);
//! assert_eq!(report.synced, vec!["heading".to_owned()]);
//! # Ok(())
//! # }
//! ```
//!
//! All extraction is pure computation over already-read text or parsed
//! trees; nothing here touches the filesystem.

#![deny(clippy::all)]
#![warn(missing_docs)]

mod error;
mod exclusion;
mod prose;
mod reconcile;
mod schema;

pub use error::ExtractError;
pub use exclusion::ExclusionSet;
pub use prose::ProseTypeExtractor;
pub use reconcile::reconcile;
pub use schema::SchemaTypeExtractor;
