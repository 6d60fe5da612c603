//! Anchor indexing and cross-reference resolution for prose corpora.
//!
//! Prose documents accumulate references - markdown links, bare anchors,
//! cross-document links, narrative "see Section N.M" citations - that rot
//! as content moves. This crate builds a global anchor index over the
//! corpus and resolves every extracted reference against it:
//!
//! - [`slugify`]: deterministic slug derivation from heading titles
//! - [`AnchorIndexer`] / [`AnchorIndex`]: per-file heading and explicit
//!   anchor extraction, aggregated into a `(file, slug)` index
//! - [`ReferenceExtractor`]: the four recognized reference syntaxes
//! - [`ReferenceResolver`]: syntax-directed resolution into valid/broken
//!
//! # Example
//!
//! ```
//! use camino::{Utf8Path, Utf8PathBuf};
//! use ss_core::fx_hash_set;
//! use ss_xref::{AnchorIndex, AnchorIndexer, ReferenceExtractor, ReferenceResolver};
//!
//! # fn main() -> Result<(), ss_xref::XrefError> {
//! let indexer = AnchorIndexer::new()?;
//! let mut index = AnchorIndex::new();
//! index.add_all(indexer.extract(Utf8Path::new("intro.md"), "## Getting Started\n"));
//!
//! let refs = ReferenceExtractor::new()?
//!     .extract(Utf8Path::new("intro.md"), "[here](#getting-started)\n");
//!
//! let mut corpus = fx_hash_set();
//! corpus.insert(Utf8PathBuf::from("intro.md"));
//! let resolver = ReferenceResolver::new(&index, &corpus, Utf8Path::new("."));
//! let (valid, broken) = resolver.partition(refs);
//! assert_eq!(valid.len(), 1);
//! assert!(broken.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! Resolution never raises an error for a missing target; it classifies
//! strictly into valid/broken, and both engines always run to completion.

#![deny(clippy::all)]
#![warn(missing_docs)]

mod anchors;
mod error;
mod refs;
mod resolve;
mod slug;

pub use anchors::{AnchorIndex, AnchorIndexer};
pub use error::XrefError;
pub use refs::ReferenceExtractor;
pub use resolve::ReferenceResolver;
pub use slug::slugify;
