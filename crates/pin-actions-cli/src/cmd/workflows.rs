use std::path::Path;

use anyhow::Context;
use pin_actions_core::host::GhCli;
use pin_actions_core::{rewrite, scan};

/// `gh-pin-actions workflows` — rewrite every workflow file in `dir`.
///
/// Each input gets a `-pin` sibling with resolvable references substituted.
/// A file that fails to parse, or a reference that fails to resolve, is
/// warned about and skipped; the rest of the batch still goes through.
pub fn run(dir: &Path) -> anyhow::Result<()> {
    let host = GhCli::new();

    let files = scan::workflow_files(dir)
        .with_context(|| format!("failed to read workflow directory {}", dir.display()))?;
    if files.is_empty() {
        println!("No workflow files found in {}", dir.display());
        return Ok(());
    }

    for file in &files {
        tracing::debug!(file = %file.display(), "processing workflow");
        match rewrite::pin_file(&host, file) {
            Ok(report) => {
                for resolution in &report.pinned {
                    tracing::debug!(pinned = %resolution, "replaced action with sha");
                }
                if report.already_pinned > 0 {
                    tracing::debug!(
                        count = report.already_pinned,
                        "references already pinned to a sha"
                    );
                }
                for failure in &report.failures {
                    tracing::warn!(
                        file = %file.display(),
                        reference = %failure.reference,
                        error = %failure.error,
                        "reference left unpinned"
                    );
                }
                println!("Done! Review the changes in: {}", report.output.display());
            }
            Err(error) => {
                tracing::warn!(file = %file.display(), %error, "skipping workflow");
            }
        }
    }

    Ok(())
}
