//! GitHub v3 REST implementation of [`RepoHost`].

use serde::Deserialize;
use serde_json::json;

use specferry_core::RepoSlug;

use crate::error::HostError;
use crate::{NewPull, PullRequest, RepoHost};

const DEFAULT_API_BASE: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("specferry/", env!("CARGO_PKG_VERSION"));

/// Typed client for api.github.com (or a compatible base URL).
pub struct GithubClient {
    agent: ureq::Agent,
    token: String,
    api_base: String,
}

impl GithubClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base(token, DEFAULT_API_BASE)
    }

    /// Point the client at a different API base (used by tests).
    pub fn with_base(token: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
            token: token.into(),
            api_base: api_base.into(),
        }
    }

    fn request(&self, method: &str, path: &str) -> ureq::Request {
        self.agent
            .request(method, &format!("{}{}", self.api_base, path))
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Accept", "application/vnd.github+json")
            .set("User-Agent", USER_AGENT)
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct PullWire {
    number: u64,
    html_url: String,
    title: String,
    body: Option<String>,
    head: RefWire,
    base: RefWire,
}

#[derive(Debug, Deserialize)]
struct RefWire {
    #[serde(rename = "ref")]
    name: String,
}

impl From<PullWire> for PullRequest {
    fn from(wire: PullWire) -> Self {
        PullRequest {
            number: wire.number,
            head: wire.head.name,
            base: wire.base.name,
            title: wire.title,
            body: wire.body.unwrap_or_default(),
            url: wire.html_url,
        }
    }
}

/// Branch names may carry query-hostile characters; encode the filter value.
fn open_pulls_path(repo: &RepoSlug, head: &str) -> String {
    format!(
        "/repos/{}/{}/pulls?state=open&head={}",
        repo.owner,
        repo.repo,
        urlencoding::encode(head)
    )
}

fn api_err(operation: &'static str, err: ureq::Error) -> HostError {
    match err {
        ureq::Error::Status(status, response) => HostError::Api {
            operation,
            status,
            detail: response.into_string().unwrap_or_default(),
        },
        other => HostError::Transport {
            operation,
            detail: other.to_string(),
        },
    }
}

// ---------------------------------------------------------------------------
// RepoHost impl
// ---------------------------------------------------------------------------

impl RepoHost for GithubClient {
    fn verify_access(&self, repo: &RepoSlug) -> Result<(), HostError> {
        let path = format!("/repos/{}/{}", repo.owner, repo.repo);
        match self.request("GET", &path).call() {
            Ok(_) => Ok(()),
            Err(ureq::Error::Status(status, _)) => Err(HostError::AccessDenied {
                repository: repo.to_string(),
                status,
            }),
            Err(other) => Err(HostError::Transport {
                operation: "verify-access",
                detail: other.to_string(),
            }),
        }
    }

    fn branch_ref_exists(&self, repo: &RepoSlug, branch: &str) -> Result<bool, HostError> {
        let path = format!("/repos/{}/{}/git/ref/heads/{branch}", repo.owner, repo.repo);
        match self.request("GET", &path).call() {
            Ok(_) => Ok(true),
            Err(ureq::Error::Status(404, _)) => Ok(false),
            Err(other) => Err(api_err("get-ref", other)),
        }
    }

    fn list_open_pulls(&self, repo: &RepoSlug, head: &str) -> Result<Vec<PullRequest>, HostError> {
        let response = self
            .request("GET", &open_pulls_path(repo, head))
            .call()
            .map_err(|e| api_err("list-open-pulls", e))?;
        let pulls: Vec<PullWire> = response.into_json().map_err(|source| HostError::Decode {
            operation: "list-open-pulls",
            source,
        })?;
        Ok(pulls.into_iter().map(PullRequest::from).collect())
    }

    fn create_pull(&self, repo: &RepoSlug, pull: &NewPull) -> Result<PullRequest, HostError> {
        let path = format!("/repos/{}/{}/pulls", repo.owner, repo.repo);
        let response = self
            .request("POST", &path)
            .send_json(json!({
                "title": pull.title,
                "head": pull.head,
                "base": pull.base,
                "body": pull.body,
            }))
            .map_err(|e| api_err("create-pull", e))?;
        let wire: PullWire = response.into_json().map_err(|source| HostError::Decode {
            operation: "create-pull",
            source,
        })?;
        tracing::debug!("created pull request #{}", wire.number);
        Ok(wire.into())
    }

    fn update_pull_body(
        &self,
        repo: &RepoSlug,
        number: u64,
        body: &str,
    ) -> Result<(), HostError> {
        let path = format!("/repos/{}/{}/pulls/{number}", repo.owner, repo.repo);
        self.request("PATCH", &path)
            .send_json(json!({ "body": body }))
            .map_err(|e| api_err("update-pull", e))?;
        Ok(())
    }
}
