use anyhow::Context;
use pin_actions_core::host::GhCli;
use pin_actions_core::resolve::{resolve_branch, resolve_version};
use pin_actions_core::version::VersionReq;

/// `gh-pin-actions pin` — resolve one action to a pinned reference line.
///
/// A branch takes precedence over a version; the version must look like
/// `latest`, `3`, `3.1`, or `3.1.1` (leading `v` allowed).
pub fn run(repository: &str, pin_version: &str, branch: Option<&str>) -> anyhow::Result<()> {
    let host = GhCli::new();

    let resolution = if let Some(branch) = branch {
        tracing::debug!(repository, branch, "resolving branch tip");
        resolve_branch(&host, repository, branch)
            .with_context(|| format!("unable to get sha of branch '{branch}'"))?
    } else {
        let req: VersionReq = pin_version.parse().map_err(|_| {
            anyhow::anyhow!(
                "version must be in the format 3, 3.1, or 3.1.1 (got '{pin_version}'); \
                 use --branch to pin to a branch"
            )
        })?;
        tracing::debug!(repository, %req, "resolving version");
        resolve_version(&host, repository, &req)
            .with_context(|| format!("unable to get sha of version '{pin_version}'"))?
    };

    println!("{resolution}");
    Ok(())
}
