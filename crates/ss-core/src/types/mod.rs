//! Domain types for the specsync tool.
//!
//! This module contains all the core domain types used throughout the
//! application for representing extracted type vocabulary, document anchors,
//! cross-references, and the terminal report values.
//!
//! # Module Organization
//!
//! - [`location`] - Source locations within corpus files
//! - [`structural`] - Structural-type vocabulary entries
//! - [`heading`] - Headings and explicit anchors
//! - [`reference`] - Extracted cross-reference occurrences
//! - [`report`] - Terminal report aggregates
//!
//! # Re-exports
//!
//! All public types are re-exported at this module level and at the crate
//! root:
//!
//! ```
//! use ss_core::{Heading, Reference, SourceKind, StructuralType};
//! ```

mod heading;
mod location;
mod reference;
mod report;
mod structural;

// Re-export all public types
pub use heading::Heading;
pub use location::SourceLocation;
pub use reference::Reference;
pub use report::{SyncReport, XrefReport};
pub use structural::{SourceKind, StructuralType};
