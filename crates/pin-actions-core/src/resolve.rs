//! Turning a requested specifier into an immutable commit.
//!
//! Resolution is a pure function of (repository, specifier, host): no
//! caching, no retries, no shared state. Two references to the same
//! repository resolve independently.

use std::fmt;

use crate::error::{PinError, Result};
use crate::host::ReleaseHost;
use crate::reference::{is_full_sha, ActionRef, Specifier};
use crate::version::{select_highest, VersionReq};

/// A successfully pinned reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub repository: String,
    /// Always exactly 40 lowercase hex characters.
    pub commit: String,
    /// The tag or branch name, kept as a trailing comment for readability.
    pub label: String,
}

impl Resolution {
    /// The replacement text written into workflow files.
    pub fn pinned_reference(&self) -> String {
        format!("{}@{} #{}", self.repository, self.commit, self.label)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pinned_reference())
    }
}

fn checked(repository: &str, label: String, commit: String) -> Result<Resolution> {
    let commit = commit.trim().to_string();
    if !is_full_sha(&commit) {
        return Err(PinError::MalformedCommit {
            repository: repository.to_string(),
            commit,
        });
    }
    Ok(Resolution {
        repository: repository.to_string(),
        commit,
        label,
    })
}

/// Resolve a version specifier against a repository's releases and tags.
///
/// `latest` asks the host for the newest release; an exact `a.b.c` skips the
/// tag listing entirely; a bare major or major.minor is matched against the
/// full tag listing with [`select_highest`]. The chosen tag is then looked
/// up for its commit; a tag with no commit is an explicit error.
pub fn resolve_version(
    host: &dyn ReleaseHost,
    repository: &str,
    req: &VersionReq,
) -> Result<Resolution> {
    let label = match req {
        VersionReq::Latest => host.latest_release(repository)?,
        VersionReq::Exact(version) => version.to_string(),
        VersionReq::Major(_) | VersionReq::MajorMinor(_, _) => {
            let tags = host.tag_names(repository)?;
            let chosen = select_highest(tags.iter().map(String::as_str), req).ok_or_else(|| {
                PinError::NoMatchingTag {
                    repository: repository.to_string(),
                    requested: req.to_string(),
                }
            })?;
            chosen.to_string()
        }
    };

    let commit = host
        .tag_commit(repository, &label)?
        .ok_or_else(|| PinError::TagNotFound {
            repository: repository.to_string(),
            tag: label.clone(),
        })?;
    checked(repository, label, commit)
}

/// Resolve a branch name to its tip commit. The label is the branch itself.
pub fn resolve_branch(host: &dyn ReleaseHost, repository: &str, branch: &str) -> Result<Resolution> {
    let commit = host.branch_commit(repository, branch)?;
    checked(repository, branch.to_string(), commit)
}

/// Resolve a parsed action reference, dispatching on its specifier kind.
pub fn resolve_action(host: &dyn ReleaseHost, action: &ActionRef) -> Result<Resolution> {
    match &action.specifier {
        Specifier::Version(req) => resolve_version(host, &action.repository, req),
        Specifier::Branch(branch) => resolve_branch(host, &action.repository, branch),
    }
}
