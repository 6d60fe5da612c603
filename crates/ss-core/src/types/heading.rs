//! Headings and explicit anchors.
//!
//! Both markdown headings and explicit `<a name="...">` markers produce a
//! [`Heading`]: an addressable point within a prose document. They
//! participate identically in reference resolution.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// An addressable point within a prose document.
///
/// Uniqueness holds for `(file, slug)` pairs, not for `slug` alone: two
/// files may legitimately contain the same heading title. Duplicate slugs
/// within one file are retained as distinct entries, so resolution answers
/// "exists", never "is unique".
///
/// # Examples
///
/// ```
/// use ss_core::Heading;
/// use camino::Utf8Path;
///
/// let h = Heading::new("getting-started", "Getting Started", Utf8Path::new("spec/intro.md"), 3);
/// assert_eq!(h.slug, "getting-started");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Canonical slug derived from the title, or the literal anchor name.
    pub slug: String,

    /// The heading text, or a synthetic label for explicit anchors.
    pub title: String,

    /// Path of the declaring file, relative to the corpus root.
    pub file: Utf8PathBuf,

    /// Line number of the declaration (1-indexed).
    pub line: u32,
}

impl Heading {
    /// Creates a heading entry.
    #[must_use]
    pub fn new(slug: impl Into<String>, title: impl Into<String>, file: &Utf8Path, line: u32) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            file: file.to_owned(),
            line,
        }
    }

    /// Creates an entry for an explicit `<a name="...">` anchor.
    ///
    /// The slug is the literal attribute value; the title is a synthetic
    /// label identifying the entry as an anchor.
    #[must_use]
    pub fn explicit_anchor(name: &str, file: &Utf8Path, line: u32) -> Self {
        Self {
            slug: name.to_owned(),
            title: format!("(anchor: {name})"),
            file: file.to_owned(),
            line,
        }
    }
}
