//! Corpus scanner and parallel consistency pipelines.
//!
//! This crate is the file discovery and orchestration engine for specsync.
//! It walks a spec repository, reads prose and schema documents, and runs
//! the extraction crates over them in parallel.
//!
//! # Overview
//!
//! The main entry point is [`ConsistencyChecker`], which combines:
//!
//! - [`CorpusWalker`]: Directory traversal respecting `.gitignore` patterns
//! - `ss-extract`: Structural-type extraction and vocabulary reconciliation
//! - `ss-xref`: Anchor indexing and cross-reference resolution
//!
//! # Example
//!
//! ```no_run
//! use ss_core::Config;
//! use ss_scanner::ConsistencyChecker;
//!
//! let checker = ConsistencyChecker::new(Config::default())?;
//!
//! let sync = checker.check_sync()?;
//! if sync.report.is_synced() {
//!     println!("prose and schemas agree");
//! }
//!
//! let xrefs = checker.check_xrefs()?;
//! for broken in &xrefs.report.broken {
//!     println!("{}:{}: {}", broken.file, broken.line, broken.target);
//! }
//! # Ok::<(), ss_scanner::ScanError>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! ConsistencyChecker (main entry point)
//!     │
//!     ├── CorpusWalker (collect paths)
//!     │       │
//!     │       └── WalkBuilder (ignore crate)
//!     │
//!     ├── check_sync (rayon par_iter)
//!     │       │
//!     │       ├── ProseTypeExtractor (ss-extract)
//!     │       ├── SchemaTypeExtractor (ss-extract)
//!     │       └── reconcile → SyncReport
//!     │
//!     └── check_xrefs (rayon par_iter)
//!             │
//!             ├── AnchorIndexer (ss-xref)
//!             ├── ReferenceExtractor (ss-xref)
//!             └── ReferenceResolver → XrefReport
//! ```
//!
//! Per-file work runs in parallel; results are folded in path order so the
//! reports are deterministic.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod checker;
pub mod error;
pub mod walker;

pub use checker::{ConsistencyChecker, SyncOutcome, XrefOutcome};
pub use error::ScanError;
pub use walker::{CorpusWalker, FileKind};
