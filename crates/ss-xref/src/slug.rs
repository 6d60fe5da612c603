//! Deterministic slug derivation from heading titles.

/// Derives the canonical slug for a heading title.
///
/// The algorithm, applied in order:
///
/// 1. lowercase
/// 2. strip characters outside word/space/hyphen
/// 3. collapse whitespace runs to a single hyphen
/// 4. collapse repeated hyphens
/// 5. trim edge hyphens
///
/// The derivation is a pure function: equal titles always produce equal
/// slugs, which is what makes the global `(file, slug)` index stable across
/// runs.
///
/// # Examples
///
/// ```
/// use ss_xref::slugify;
///
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("  Multi   Space  "), "multi-space");
/// ```
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.to_lowercase().chars() {
        if ch.is_whitespace() || ch == '-' {
            pending_hyphen = true;
        } else if ch.is_alphanumeric() || ch == '_' {
            // No leading hyphen, and runs collapse to one
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        }
        // Everything else is stripped without breaking the current run
    }

    slug
}
