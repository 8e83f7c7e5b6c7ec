//! Pull-request reconciler.
//!
//! After a successful push, ensures exactly one open pull request exists
//! from the working branch into the base. An existing PR gets its body
//! refreshed (title untouched); otherwise one is created from the
//! mode-specific template. Titles are stable — the timestamp lives in the
//! body as an `Updated:` line, gated by `add_timestamp`.

use chrono::{DateTime, SecondsFormat, Utc};

use specferry_core::RepoSlug;
use specferry_host::{NewPull, PullRequest, RepoHost};

use crate::error::SyncError;

/// Which run mode produced the content behind the pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullKind {
    /// Declared mappings copied from the source workspace.
    MappingSync,
    /// Output of the external spec generator.
    Generation,
}

fn pull_title(kind: PullKind) -> &'static str {
    match kind {
        PullKind::MappingSync => "chore: Update OpenAPI specifications",
        PullKind::Generation => "chore: Update API specifications with fern api update",
    }
}

fn pull_body(kind: PullKind, add_timestamp: bool, now: DateTime<Utc>) -> String {
    let mut body = match kind {
        PullKind::MappingSync => {
            "Update OpenAPI specifications based on changes in the source repository.".to_string()
        }
        PullKind::Generation => "Update API specifications by running fern api update.".to_string(),
    };
    if add_timestamp {
        body.push_str("\nUpdated: ");
        body.push_str(&now.to_rfc3339_opts(SecondsFormat::Secs, true));
    }
    body
}

/// Ensure one open pull request exists from `branch` into `base`.
///
/// The lookup filters open pulls by head `<owner>:<branch>`; the first
/// match is treated as canonical. Returns the touched pull request.
pub fn reconcile_pull(
    host: &dyn RepoHost,
    repo: &RepoSlug,
    branch: &str,
    base: &str,
    kind: PullKind,
    add_timestamp: bool,
) -> Result<PullRequest, SyncError> {
    let head = format!("{}:{}", repo.owner, branch);
    let open = host.list_open_pulls(repo, &head)?;

    if let Some(existing) = open.into_iter().next() {
        tracing::info!("updating pull request #{}", existing.number);
        let body = pull_body(kind, add_timestamp, Utc::now());
        host.update_pull_body(repo, existing.number, &body)?;
        return Ok(existing);
    }

    tracing::info!("creating new pull request from {branch} to {base}");
    let created = host.create_pull(
        repo,
        &NewPull {
            title: pull_title(kind).to_string(),
            head: branch.to_string(),
            base: base.to_string(),
            body: pull_body(kind, add_timestamp, Utc::now()),
        },
    )?;
    tracing::info!("pull request created: {}", created.url);
    Ok(created)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use crate::testing::{open_pull, StubHost};

    use super::*;

    fn repo() -> RepoSlug {
        RepoSlug::new("acme", "specs")
    }

    #[test]
    fn creates_exactly_one_pull_when_none_open() {
        let host = StubHost::default();
        let pull = reconcile_pull(&host, &repo(), "sync-spec", "main", PullKind::MappingSync, true)
            .expect("reconcile");

        let created = host.created.borrow();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].head, "sync-spec");
        assert_eq!(created[0].base, "main");
        assert_eq!(created[0].title, "chore: Update OpenAPI specifications");
        assert!(host.updated.borrow().is_empty());
        assert_eq!(pull.base, "main");
    }

    #[test]
    fn updates_existing_pull_and_creates_none() {
        let host = StubHost::default();
        host.open_pulls.borrow_mut().push(open_pull(7, "sync-spec", "main"));

        let pull = reconcile_pull(&host, &repo(), "sync-spec", "main", PullKind::MappingSync, true)
            .expect("reconcile");

        assert_eq!(pull.number, 7);
        assert!(host.created.borrow().is_empty(), "no duplicate PR");
        let updated = host.updated.borrow();
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].0, 7);
        assert!(updated[0].1.contains("Updated: "));
    }

    #[test]
    fn first_open_pull_is_canonical_when_duplicates_exist() {
        let host = StubHost::default();
        host.open_pulls.borrow_mut().push(open_pull(3, "sync-spec", "main"));
        host.open_pulls.borrow_mut().push(open_pull(9, "sync-spec", "main"));

        let pull = reconcile_pull(&host, &repo(), "sync-spec", "main", PullKind::MappingSync, true)
            .expect("reconcile");
        assert_eq!(pull.number, 3);
        assert_eq!(host.updated.borrow().len(), 1);
    }

    #[test]
    fn lookup_uses_owner_qualified_head() {
        let host = StubHost::default();
        reconcile_pull(&host, &repo(), "sync-spec", "main", PullKind::Generation, false)
            .expect("reconcile");
        assert_eq!(host.head_filters.borrow().as_slice(), ["acme:sync-spec"]);
    }

    #[test]
    fn titles_are_stable_and_timestamp_lives_in_the_body() {
        let now = Utc.with_ymd_and_hms(2026, 8, 29, 12, 0, 0).unwrap();

        assert!(!pull_title(PullKind::MappingSync).contains("${date}"));
        assert!(!pull_title(PullKind::Generation).contains("${date}"));

        let body = pull_body(PullKind::Generation, true, now);
        assert!(body.starts_with("Update API specifications by running fern api update."));
        assert!(body.ends_with("Updated: 2026-08-29T12:00:00Z"));

        let body = pull_body(PullKind::MappingSync, false, now);
        assert!(!body.contains("Updated:"), "timestamp is opt-out");
    }
}
