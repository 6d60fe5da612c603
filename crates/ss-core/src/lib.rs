//! Core types, errors, and utilities for the specsync tool.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - Error types for consistent error handling
//! - Configuration structures (corpus layout, exclusion rules)
//! - Domain types (`StructuralType`, `Heading`, `Reference`, reports)
//! - Type aliases for `FxHashMap`/`FxHashSet` (faster than std)

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod hash;
pub mod types;

pub use config::{Config, CorpusConfig, ExclusionConfig};
pub use error::ConfigError;
pub use hash::{
    FxBuildHasher, FxHashMap, FxHashSet, fx_hash_map, fx_hash_map_with_capacity, fx_hash_set,
    fx_hash_set_with_capacity,
};
pub use types::{
    Heading, Reference, SourceKind, SourceLocation, StructuralType, SyncReport, XrefReport,
};

/// The universal placeholder value for unstructured text content.
///
/// Every document model has it, so it is never itself a structural type.
/// Both extractors skip it unconditionally.
pub const TEXT_PLACEHOLDER: &str = "text";
