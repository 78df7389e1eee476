//! Rewriting workflow files with pinned references.
//!
//! The original file is never touched: its bytes are copied verbatim to a
//! `-pin` sibling and every substitution is applied to that copy with a
//! whole-file read-modify-write. Substitution is textual (first occurrence
//! of the raw reference), which keeps comments and formatting intact. If the
//! same unpinned reference appears in the file more times than steps use it,
//! the extra occurrences are left alone within a single pass.

use std::path::{Path, PathBuf};

use crate::error::{PinError, Result};
use crate::host::ReleaseHost;
use crate::io::atomic_write;
use crate::reference::{is_pinned, parse_action};
use crate::resolve::{resolve_action, Resolution};
use crate::workflow::Workflow;

/// One reference that could not be pinned; the file keeps its original text.
#[derive(Debug)]
pub struct PinFailure {
    pub reference: String,
    pub error: PinError,
}

/// Outcome of rewriting one workflow file. Partial success is normal:
/// failed references are reported here and their text left unchanged.
#[derive(Debug)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub pinned: Vec<Resolution>,
    pub already_pinned: usize,
    pub failures: Vec<PinFailure>,
}

/// Sibling output path: `ci.yml` → `ci-pin.yml`, `ci.yaml` → `ci-pin.yaml`.
pub fn pinned_output_path(path: &Path) -> PathBuf {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    let pinned = if let Some(stem) = name.strip_suffix(".yaml") {
        format!("{stem}-pin.yaml")
    } else if let Some(stem) = name.strip_suffix(".yml") {
        format!("{stem}-pin.yml")
    } else {
        format!("{name}-pin.yml")
    };
    path.with_file_name(pinned)
}

/// Pin every resolvable action reference in one workflow file.
///
/// A YAML parse failure aborts the whole file (no partial output); a
/// resolution failure for one reference is recorded and processing moves on
/// to the next. References already pinned to a 40-hex commit are counted
/// and skipped, so re-running over prior output is a no-op.
pub fn pin_file(host: &dyn ReleaseHost, path: &Path) -> Result<FileReport> {
    let content = std::fs::read_to_string(path)?;
    let workflow = Workflow::parse(&content)?;

    let output = pinned_output_path(path);
    atomic_write(&output, content.as_bytes())?;

    let mut report = FileReport {
        input: path.to_path_buf(),
        output: output.clone(),
        pinned: Vec::new(),
        already_pinned: 0,
        failures: Vec::new(),
    };

    for reference in workflow.action_references() {
        if is_pinned(reference) {
            report.already_pinned += 1;
            continue;
        }
        match parse_action(reference).and_then(|action| resolve_action(host, &action)) {
            Ok(resolution) => {
                substitute(&output, reference, &resolution.pinned_reference())?;
                report.pinned.push(resolution);
            }
            Err(error) => report.failures.push(PinFailure {
                reference: reference.to_string(),
                error,
            }),
        }
    }

    Ok(report)
}

/// Replace the first occurrence of `from` in the output file with `to`.
fn substitute(output: &Path, from: &str, to: &str) -> Result<()> {
    let current = std::fs::read_to_string(output)?;
    let updated = current.replacen(from, to, 1);
    atomic_write(output, updated.as_bytes())
}
