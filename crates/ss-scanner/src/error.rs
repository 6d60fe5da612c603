//! Error types for the ss-scanner crate.
//!
//! This module provides the [`ScanError`] type for errors that can occur
//! during corpus traversal and consistency checking.

use camino::Utf8PathBuf;

/// Errors that can occur during scanning operations.
///
/// # Error Recovery Strategy
///
/// - **Walker errors** ([`ScanError::Walk`]): Fatal - propagate immediately
/// - **File read errors** ([`ScanError::Read`]): Log warning, skip file, continue scan
/// - **Schema parse errors** ([`ScanError::Json`]): Log warning, skip file, continue scan
///
/// A schema document that is not well-formed JSON contributes nothing to the
/// schema vocabulary; the run still reports on every other file.
///
/// # Examples
///
/// ```
/// use ss_scanner::ScanError;
///
/// fn handle_error(err: ScanError) {
///     if err.is_recoverable() {
///         eprintln!("skipped: {err}");
///     } else {
///         eprintln!("aborted: {err}");
///     }
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Failed to walk a directory.
    ///
    /// This is typically a fatal error that prevents scanning from continuing.
    #[error("failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),

    /// Failed to read a file.
    ///
    /// Contains the path that failed and the underlying I/O error.
    /// Scanning can continue by skipping this file.
    #[error("failed to read file {path}: {source}")]
    Read {
        /// The path of the file that couldn't be read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a schema document as JSON.
    ///
    /// Contains the path that failed and the underlying parse error.
    /// Scanning can continue by skipping this file.
    #[error("failed to parse schema {path}: {source}")]
    Json {
        /// The path of the schema that couldn't be parsed.
        path: Utf8PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A prose extraction pattern failed to compile.
    #[error(transparent)]
    Extract(#[from] ss_extract::ExtractError),

    /// A cross-reference pattern failed to compile.
    #[error(transparent)]
    Xref(#[from] ss_xref::XrefError),

    /// Invalid checker configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A path is not valid UTF-8.
    ///
    /// This crate uses UTF-8 paths throughout. If a non-UTF-8 path is
    /// encountered, it cannot be processed.
    #[error("path is not valid UTF-8: {}", _0.display())]
    NonUtf8Path(std::path::PathBuf),
}

impl ScanError {
    /// Creates a new [`ScanError::Read`] error.
    #[inline]
    pub fn read(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a new [`ScanError::Json`] error.
    #[inline]
    pub fn json(path: impl Into<Utf8PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// Creates a new [`ScanError::Config`] error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns `true` if this error is recoverable (scanning can continue).
    ///
    /// Recoverable errors are file-specific issues that don't prevent
    /// scanning other files.
    #[inline]
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Json { .. })
    }

    /// Returns `true` if this error is fatal (scanning should stop).
    #[inline]
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !self.is_recoverable()
    }

    /// Returns the file path associated with this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8PathBuf> {
        match self {
            Self::Read { path, .. } | Self::Json { path, .. } => Some(path),
            Self::Walk(_) | Self::Extract(_) | Self::Xref(_) | Self::Config(_)
            | Self::NonUtf8Path(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_read_error_is_recoverable() {
        let err = ScanError::read(
            "spec/blocks.md",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.is_recoverable());
        assert!(!err.is_fatal());
        assert_eq!(err.path().map(|p| p.as_str()), Some("spec/blocks.md"));
    }

    #[test]
    fn test_json_error_is_recoverable() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ScanError::json("schemas/block.schema.json", source);
        assert!(err.is_recoverable());
        assert_eq!(
            err.path().map(|p| p.as_str()),
            Some("schemas/block.schema.json")
        );
    }

    #[test]
    fn test_config_error_is_fatal() {
        let err = ScanError::config("root path is not a directory: /dev/null");
        assert!(err.is_fatal());
        assert!(err.path().is_none());
    }

    #[test]
    fn test_error_display() {
        let err = ScanError::read(
            "spec/a.md",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("spec/a.md"));
        assert!(msg.contains("failed to read file"));
    }
}
