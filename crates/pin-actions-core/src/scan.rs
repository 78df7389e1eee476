use std::path::{Path, PathBuf};

use crate::error::Result;

fn is_pin_output(name: &str) -> bool {
    name.contains("-pin.yml") || name.contains("-pin.yaml")
}

/// List workflow files under `dir`, sorted by name.
///
/// Keeps `.yml`/`.yaml` files and excludes prior `-pin` output, so a second
/// run never treats its own results as input. An unreadable directory is an
/// error for the caller to report; nothing is retried.
pub fn workflow_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if (name.ends_with(".yml") || name.ends_with(".yaml")) && !is_pin_output(name) {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}
