//! In-memory stubs for the reconciler and orchestrator tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use specferry_core::RepoSlug;
use specferry_git::{GitError, VersionControl};
use specferry_host::{HostError, NewPull, PullRequest, RepoHost};

use crate::error::SyncError;
use crate::generator::SpecGenerator;

// ---------------------------------------------------------------------------
// StubGit
// ---------------------------------------------------------------------------

/// Call-recording [`VersionControl`] stub with scriptable status/diff output.
#[derive(Default)]
pub(crate) struct StubGit {
    calls: RefCell<Vec<String>>,
    statuses: RefCell<VecDeque<String>>,
    diff: RefCell<String>,
    fail_fetch: Cell<bool>,
    fail_checkout: Cell<bool>,
    fail_create: Cell<bool>,
}

impl StubGit {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Replace the scripted status output.
    pub fn set_status(&self, status: &str) {
        let mut statuses = self.statuses.borrow_mut();
        statuses.clear();
        statuses.push_back(status.to_string());
    }

    /// Queue a status output; the last queued value repeats.
    pub fn queue_status(&self, status: &str) {
        self.statuses.borrow_mut().push_back(status.to_string());
    }

    pub fn set_diff(&self, diff: &str) {
        *self.diff.borrow_mut() = diff.to_string();
    }

    pub fn fail_fetches(&self) {
        self.fail_fetch.set(true);
    }

    pub fn fail_next_checkout(&self) {
        self.fail_checkout.set(true);
    }

    pub fn fail_creates(&self) {
        self.fail_create.set(true);
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn failure(op: &str) -> GitError {
        GitError::Command {
            op: op.to_string(),
            status: "exit status: 1".to_string(),
            stderr: "stub failure".to_string(),
        }
    }
}

impl VersionControl for StubGit {
    fn configure_identity(&self, name: &str, _email: &str) -> Result<(), GitError> {
        self.record(format!("config {name}"));
        Ok(())
    }

    fn create_branch(&self, branch: &str) -> Result<(), GitError> {
        self.record(format!("create {branch}"));
        if self.fail_create.get() {
            return Err(Self::failure("checkout"));
        }
        Ok(())
    }

    fn checkout_branch(&self, branch: &str) -> Result<(), GitError> {
        self.record(format!("checkout {branch}"));
        if self.fail_checkout.take() {
            return Err(Self::failure("checkout"));
        }
        Ok(())
    }

    fn pull_branch(&self, branch: &str) -> Result<(), GitError> {
        self.record(format!("pull {branch}"));
        Ok(())
    }

    fn fetch_branch(&self, branch: &str) -> Result<(), GitError> {
        self.record(format!("fetch {branch}"));
        if self.fail_fetch.get() {
            return Err(Self::failure("fetch"));
        }
        Ok(())
    }

    fn diff(&self, left: &str, right: &str) -> Result<String, GitError> {
        self.record(format!("diff {left} {right}"));
        Ok(self.diff.borrow().clone())
    }

    fn status_porcelain(&self) -> Result<String, GitError> {
        let mut statuses = self.statuses.borrow_mut();
        if statuses.len() > 1 {
            Ok(statuses.pop_front().unwrap_or_default())
        } else {
            Ok(statuses.front().cloned().unwrap_or_default())
        }
    }

    fn stage_all(&self) -> Result<(), GitError> {
        self.record("add".to_string());
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<(), GitError> {
        self.record(format!("commit {message}"));
        Ok(())
    }

    fn push(&self, branch: &str, force: bool) -> Result<(), GitError> {
        self.record(format!("push {branch} force={force}"));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// StubHost
// ---------------------------------------------------------------------------

/// Call-recording [`RepoHost`] stub.
#[derive(Default)]
pub(crate) struct StubHost {
    pub branch_exists: Cell<bool>,
    pub fail_ref_lookup: Cell<bool>,
    pub verify_calls: Cell<usize>,
    pub head_filters: RefCell<Vec<String>>,
    pub open_pulls: RefCell<Vec<PullRequest>>,
    pub created: RefCell<Vec<NewPull>>,
    pub updated: RefCell<Vec<(u64, String)>>,
}

impl RepoHost for StubHost {
    fn verify_access(&self, _repo: &RepoSlug) -> Result<(), HostError> {
        self.verify_calls.set(self.verify_calls.get() + 1);
        Ok(())
    }

    fn branch_ref_exists(&self, _repo: &RepoSlug, _branch: &str) -> Result<bool, HostError> {
        if self.fail_ref_lookup.get() {
            return Err(HostError::Transport {
                operation: "get-ref",
                detail: "stub transport failure".to_string(),
            });
        }
        Ok(self.branch_exists.get())
    }

    fn list_open_pulls(&self, _repo: &RepoSlug, head: &str) -> Result<Vec<PullRequest>, HostError> {
        self.head_filters.borrow_mut().push(head.to_string());
        Ok(self.open_pulls.borrow().clone())
    }

    fn create_pull(&self, _repo: &RepoSlug, pull: &NewPull) -> Result<PullRequest, HostError> {
        self.created.borrow_mut().push(pull.clone());
        let number = 100 + self.created.borrow().len() as u64;
        Ok(PullRequest {
            number,
            head: pull.head.clone(),
            base: pull.base.clone(),
            title: pull.title.clone(),
            body: pull.body.clone(),
            url: format!("https://example.test/pull/{number}"),
        })
    }

    fn update_pull_body(
        &self,
        _repo: &RepoSlug,
        number: u64,
        body: &str,
    ) -> Result<(), HostError> {
        self.updated.borrow_mut().push((number, body.to_string()));
        Ok(())
    }
}

/// An already-open pull request for stubbed lookups.
pub(crate) fn open_pull(number: u64, head: &str, base: &str) -> PullRequest {
    PullRequest {
        number,
        head: head.to_string(),
        base: base.to_string(),
        title: "chore: Update OpenAPI specifications".to_string(),
        body: String::new(),
        url: format!("https://example.test/pull/{number}"),
    }
}

// ---------------------------------------------------------------------------
// StubGenerator
// ---------------------------------------------------------------------------

/// Counting [`SpecGenerator`] stub.
#[derive(Default)]
pub(crate) struct StubGenerator {
    pub runs: Cell<usize>,
    pub fail: Cell<bool>,
}

impl SpecGenerator for StubGenerator {
    fn update(&self) -> Result<(), SyncError> {
        self.runs.set(self.runs.get() + 1);
        if self.fail.get() {
            return Err(SyncError::Generator("stub generator failure".to_string()));
        }
        Ok(())
    }
}
