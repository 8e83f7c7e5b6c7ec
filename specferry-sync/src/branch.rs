//! Branch reconciler.
//!
//! Decides how the working branch comes into existence, whether the tree
//! mutation produced any change, and whether a push is necessary. Change
//! detection parses only the emptiness of `git status --porcelain`; the
//! push gate parses only the emptiness of `git diff HEAD origin/<branch>`.

use specferry_git::VersionControl;

use crate::error::SyncError;

/// Produce a checked-out local working branch.
///
/// `exists` is the remote-ref lookup result: when true the branch is
/// checked out and fast-forwarded from origin, otherwise a new local
/// branch is created from the current HEAD. Git failures are fatal and
/// carry the branch name.
pub fn setup_branch(
    git: &dyn VersionControl,
    branch: &str,
    exists: bool,
) -> Result<(), SyncError> {
    let result = if exists {
        tracing::info!("branch {branch} exists; checking it out");
        git.checkout_branch(branch)
            .and_then(|_| git.pull_branch(branch))
    } else {
        tracing::info!("branch {branch} does not exist; creating it");
        git.create_branch(branch)
    };
    result.map_err(|source| SyncError::Branch {
        branch: branch.to_string(),
        source,
    })
}

/// Whether the working tree carries any tracked or untracked change.
pub fn has_changes(git: &dyn VersionControl) -> Result<bool, SyncError> {
    Ok(!git.status_porcelain()?.trim().is_empty())
}

/// Stage everything and commit with the given deterministic message.
pub fn commit_all(git: &dyn VersionControl, message: &str) -> Result<(), SyncError> {
    git.stage_all()?;
    git.commit(message)?;
    Ok(())
}

/// Whether local HEAD differs from the remote branch.
///
/// A fetch failure means the branch does not exist remotely yet; that is
/// the first push, not an error.
fn differs_from_remote(git: &dyn VersionControl, branch: &str) -> bool {
    let diff = git
        .fetch_branch(branch)
        .and_then(|_| git.diff("HEAD", &format!("origin/{branch}")));
    match diff {
        Ok(text) => !text.trim().is_empty(),
        Err(err) => {
            tracing::info!("could not fetch remote branch ({err}); assuming first push");
            true
        }
    }
}

/// Push the working branch if the policy calls for it.
///
/// Auto-merge mode always pushes (unforced — the branch may be a shared
/// mainline). PR mode skips the push when the remote already carries
/// identical content, and forces otherwise: the working branch is a
/// disposable staging branch holding a single fresh commit per run.
///
/// Returns whether a push happened.
pub fn push_changes(
    git: &dyn VersionControl,
    branch: &str,
    auto_merge: bool,
) -> Result<bool, SyncError> {
    if auto_merge {
        git.push(branch, false)?;
        return Ok(true);
    }

    if !differs_from_remote(git, branch) {
        tracing::info!("no differences with remote branch; skipping push");
        return Ok(false);
    }

    git.push(branch, true)?;
    Ok(true)
}
