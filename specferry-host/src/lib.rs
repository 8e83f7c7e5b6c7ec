//! # specferry-host
//!
//! Remote-repository-host API interface.
//!
//! [`RepoHost`] is the narrow operation set the reconciliation core
//! depends on; [`GithubClient`] implements it against the GitHub v3 REST
//! API. The core never sees a concrete client type.

pub mod error;
pub mod github;

pub use error::HostError;
pub use github::GithubClient;

use specferry_core::RepoSlug;

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// An open pull request as the host reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub number: u64,
    pub head: String,
    pub base: String,
    pub title: String,
    pub body: String,
    pub url: String,
}

/// Fields for a pull request to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPull {
    pub title: String,
    pub head: String,
    pub base: String,
    pub body: String,
}

// ---------------------------------------------------------------------------
// RepoHost
// ---------------------------------------------------------------------------

/// The host operation set consumed by the reconciliation core.
pub trait RepoHost {
    /// Confirm the credential can see the repository at all.
    fn verify_access(&self, repo: &RepoSlug) -> Result<(), HostError>;

    /// Whether `heads/<branch>` exists in the remote reference namespace.
    ///
    /// A missing ref is `Ok(false)`, not an error.
    fn branch_ref_exists(&self, repo: &RepoSlug, branch: &str) -> Result<bool, HostError>;

    /// Open pull requests whose head matches `owner:branch`.
    fn list_open_pulls(&self, repo: &RepoSlug, head: &str) -> Result<Vec<PullRequest>, HostError>;

    fn create_pull(&self, repo: &RepoSlug, pull: &NewPull) -> Result<PullRequest, HostError>;

    fn update_pull_body(&self, repo: &RepoSlug, number: u64, body: &str)
        -> Result<(), HostError>;
}
