//! Error types for sharpq-query.

use std::path::PathBuf;

/// Errors raised lazily when a declaration view is asked for data its
/// underlying node cannot provide.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// A capability was requested from a node kind that structurally lacks it.
    #[error("{operation} is not supported on a {kind} node")]
    UnsupportedOperation {
        operation: &'static str,
        kind: String,
    },

    /// A method view wraps a node that is neither a named method nor a constructor.
    #[error("no method identifier on a {kind} node")]
    MissingIdentifier { kind: String },

    /// `body` was requested from a method declared without one.
    #[error("method '{method}' has no body")]
    MissingBody { method: String },
}

/// Errors from building a [`crate::SourceForest`] from disk.
#[derive(Debug, thiserror::Error)]
pub enum ForestError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("invalid glob '{glob}': {source}")]
    InvalidGlob {
        glob: String,
        #[source]
        source: ignore::Error,
    },

    #[error("entry path {} is not a directory", .0.display())]
    EntryPath(PathBuf),
}
