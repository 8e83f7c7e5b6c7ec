//! Error types for specferry-sync.

use std::path::PathBuf;

use thiserror::Error;

use specferry_git::GitError;
use specferry_host::HostError;

/// All errors that can arise from a sync run.
///
/// Configuration errors never appear here — options are fully validated
/// before a run starts.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A git-level failure outside branch setup.
    #[error("git error: {0}")]
    Git(#[from] GitError),

    /// A host API failure.
    #[error("host API error: {0}")]
    Host(#[from] HostError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A declared mapping points at a path that does not exist.
    #[error("source path {path} not found")]
    SourceMissing { path: PathBuf },

    /// An exclude glob did not compile.
    #[error("invalid exclude pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// The target repository could not be cloned.
    #[error("failed to clone {repository}; ensure the token has 'repo' scope and write access")]
    CloneFailed { repository: String },

    /// Branch setup (checkout/pull/create) failed.
    #[error("failed to set up branch {branch}: {source}")]
    Branch {
        branch: String,
        #[source]
        source: GitError,
    },

    /// The external spec generator failed.
    #[error("spec generator failed: {0}")]
    Generator(String),
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
