//! Error types for urlmap.
//!
//! The crate exposes a single `thiserror` enum. A broken cross-reference
//! table silently produces broken documentation links, so every load-time
//! problem is a hard error — callers should abort the run rather than
//! proceed with partial data.

use std::path::PathBuf;

/// Top-level error type for all urlmap operations.
#[derive(Debug, thiserror::Error)]
pub enum UrlMapError {
    /// The source data does not parse into the expected shape, or an
    /// entry's base URL is not a valid absolute URL.
    #[error("malformed table: {message}")]
    Malformed { message: String },

    /// The same namespace is bound to two different base URLs.
    #[error("duplicate namespace {namespace:?}: {first} vs {second}")]
    DuplicateNamespace {
        namespace: String,
        first: String,
        second: String,
    },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, UrlMapError>;

impl UrlMapError {
    /// Create a malformed-table error from any displayable message.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed {
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
