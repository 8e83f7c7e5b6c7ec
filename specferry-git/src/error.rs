//! Error types for specferry-git.

use thiserror::Error;

/// All errors that can arise from git subprocess calls.
#[derive(Debug, Error)]
pub enum GitError {
    /// The `git` binary could not be spawned at all.
    #[error("failed to run git {op}: {source}")]
    Spawn {
        op: String,
        #[source]
        source: std::io::Error,
    },

    /// git ran but exited with a failure status.
    #[error("git {op} failed ({status}): {stderr}")]
    Command {
        op: String,
        status: String,
        stderr: String,
    },
}
