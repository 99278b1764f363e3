//! Error types for PharmaProfile.
//!
//! Library crates use [`PharmaProfileError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.
//!
//! The profiling core itself is infallible; these errors only surface at the
//! edges (reading bundles, loading config, writing output directories).

use std::path::PathBuf;

/// Top-level error type for all PharmaProfile I/O-facing operations.
#[derive(Debug, thiserror::Error)]
pub enum PharmaProfileError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Source bundle JSON could not be parsed at all.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Output validation error (missing file, schema mismatch, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },

    /// JSON serialization of a profile or manifest failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PharmaProfileError>;

impl PharmaProfileError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = PharmaProfileError::config("missing output dir");
        assert_eq!(err.to_string(), "config error: missing output dir");

        let err = PharmaProfileError::validation("schema_version 99 not supported");
        assert!(err.to_string().contains("schema_version 99"));
    }

    #[test]
    fn io_error_mentions_path() {
        let err = PharmaProfileError::io(
            "/tmp/missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        let msg = err.to_string();
        assert!(msg.contains("missing.json"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn serde_errors_convert() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PharmaProfileError = source.into();
        assert!(err.to_string().starts_with("serialization error"));
    }
}
