//! Extracted cross-reference occurrences.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// One occurrence of a cross-reference in a prose document.
///
/// `target` is the raw, unresolved reference string: `#anchor`,
/// `other.md#anchor`, `section:3.2`, or a relative path. Occurrences are
/// never deduplicated; each carries its own reporting context and is
/// consumed exactly once by the resolver.
///
/// # Examples
///
/// ```
/// use ss_core::Reference;
/// use camino::Utf8Path;
///
/// let r = Reference::new("#getting-started", Utf8Path::new("spec/intro.md"), 14, "[here](#getting-started)");
/// assert_eq!(r.target, "#getting-started");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// The raw reference target.
    pub target: String,

    /// Path of the referencing file, relative to the corpus root.
    pub file: Utf8PathBuf,

    /// Line number of the occurrence (1-indexed).
    pub line: u32,

    /// Surrounding matched text, for reporting.
    pub context: String,
}

impl Reference {
    /// Creates a reference occurrence.
    #[must_use]
    pub fn new(
        target: impl Into<String>,
        file: &Utf8Path,
        line: u32,
        context: impl Into<String>,
    ) -> Self {
        Self {
            target: target.into(),
            file: file.to_owned(),
            line,
            context: context.into(),
        }
    }
}
