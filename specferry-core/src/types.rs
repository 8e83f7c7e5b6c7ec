//! Domain types for a specferry run.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem
//! paths. Options structs are built once at run start and read-only after.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// SourceMapping
// ---------------------------------------------------------------------------

/// A declared source→destination copy instruction with optional exclusions.
///
/// `from` is resolved against the source workspace root, `to` against the
/// target repository root. `exclude` globs are matched against paths
/// relative to the source root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMapping {
    pub from: PathBuf,
    pub to: PathBuf,
    #[serde(default)]
    pub exclude: Vec<String>,
}

// ---------------------------------------------------------------------------
// RepoSlug
// ---------------------------------------------------------------------------

/// A strongly-typed `owner/repo` repository reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoSlug {
    pub owner: String,
    pub repo: String,
}

impl RepoSlug {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for RepoSlug {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidRepoSlug {
            input: s.to_string(),
        };
        let (owner, repo) = s.split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return Err(invalid());
        }
        Ok(Self::new(owner, repo))
    }
}

// ---------------------------------------------------------------------------
// Run options
// ---------------------------------------------------------------------------

/// Options for a mapping-sync run.
///
/// The working branch is reused if it already exists on the remote; the
/// pull request, if any, targets the fixed `main` base.
#[derive(Debug, Clone)]
pub struct MappingSyncOptions {
    /// Target repository the mappings are copied into.
    pub repository: RepoSlug,
    /// Ordered copy instructions, applied in declaration order.
    pub mappings: Vec<SourceMapping>,
    /// Working branch to stage synchronized content on.
    pub branch: String,
    /// Push directly instead of opening a pull request.
    pub auto_merge: bool,
    /// Carry an `Updated:` timestamp line in pull-request bodies.
    pub add_timestamp: bool,
    /// Root of the source workspace mappings are resolved against.
    pub source_root: PathBuf,
    /// Human-readable name of the source, used in the commit message.
    pub source_name: String,
}

/// Options for a generation-sync run.
///
/// The working branch is always created fresh; the pull request targets
/// the ref the run originated from.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    /// Repository the run operates in (the current checkout's origin).
    pub repository: RepoSlug,
    /// Brand-new branch to create for the generated changes.
    pub branch: String,
    /// Base branch for the pull request (the originating ref).
    pub base: String,
    /// Push directly instead of opening a pull request.
    pub auto_merge: bool,
    /// Carry an `Updated:` timestamp line in pull-request bodies.
    pub add_timestamp: bool,
}
