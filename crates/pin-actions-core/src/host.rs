//! The external query capability the resolver depends on.
//!
//! Production queries go through the `gh` CLI, the same surface the GitHub
//! CLI extension ecosystem uses: one subprocess round trip per query, JSON
//! on stdout, diagnostics on stderr. Tests substitute their own
//! [`ReleaseHost`] and never touch the network.

use std::process::Command;

use serde::Deserialize;

use crate::error::{PinError, QueryStage, Result};

/// Source-control host queries needed to pin a reference.
///
/// Four lookups, one per resolution stage. Implementations do not retry;
/// transient failures are the caller's concern.
pub trait ReleaseHost {
    /// Tag name of the most recent published release.
    fn latest_release(&self, repository: &str) -> Result<String>;

    /// Every tag name of the repository, order unspecified.
    fn tag_names(&self, repository: &str) -> Result<Vec<String>>;

    /// Commit sha of the tag exactly named `tag`, or `None` if no such tag.
    fn tag_commit(&self, repository: &str, tag: &str) -> Result<Option<String>>;

    /// Tip commit sha of the named branch.
    fn branch_commit(&self, repository: &str, branch: &str) -> Result<String>;
}

#[derive(Deserialize)]
struct CommitRef {
    sha: String,
}

#[derive(Deserialize)]
struct TagEntry {
    name: String,
    commit: CommitRef,
}

#[derive(Deserialize)]
struct BranchInfo {
    commit: CommitRef,
}

/// [`ReleaseHost`] backed by the `gh` CLI.
#[derive(Debug, Default, Clone, Copy)]
pub struct GhCli;

impl GhCli {
    pub fn new() -> Self {
        GhCli
    }

    fn exec(&self, stage: QueryStage, repository: &str, args: &[&str]) -> Result<String> {
        let gh = which::which("gh").map_err(|_| PinError::GhMissing)?;
        let output = Command::new(gh)
            .args(args)
            .output()
            .map_err(|e| PinError::HostQuery {
                stage,
                repository: repository.to_string(),
                detail: e.to_string(),
            })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PinError::HostQuery {
                stage,
                repository: repository.to_string(),
                detail: stderr.trim().chars().take(500).collect(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn tag_listing(&self, repository: &str, stage: QueryStage) -> Result<Vec<TagEntry>> {
        let endpoint = format!("repos/{repository}/tags");
        let stdout = self.exec(stage, repository, &["api", &endpoint])?;
        Ok(serde_json::from_str(&stdout)?)
    }
}

impl ReleaseHost for GhCli {
    fn latest_release(&self, repository: &str) -> Result<String> {
        let stdout = self.exec(
            QueryStage::ReleaseLookup,
            repository,
            &[
                "release", "view", "-R", repository, "--json", "tagName", "--jq", ".tagName",
            ],
        )?;
        Ok(stdout.trim().to_string())
    }

    fn tag_names(&self, repository: &str) -> Result<Vec<String>> {
        let tags = self.tag_listing(repository, QueryStage::TagListing)?;
        Ok(tags.into_iter().map(|t| t.name).collect())
    }

    fn tag_commit(&self, repository: &str, tag: &str) -> Result<Option<String>> {
        let tags = self.tag_listing(repository, QueryStage::TagCommitLookup)?;
        Ok(tags.into_iter().find(|t| t.name == tag).map(|t| t.commit.sha))
    }

    fn branch_commit(&self, repository: &str, branch: &str) -> Result<String> {
        let endpoint = format!("repos/{repository}/branches/{branch}");
        let stdout = self.exec(QueryStage::BranchLookup, repository, &["api", &endpoint])?;
        let info: BranchInfo = serde_json::from_str(&stdout)?;
        Ok(info.commit.sha)
    }
}
