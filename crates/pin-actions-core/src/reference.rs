//! Parsing of `owner/repo@specifier` action references.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{PinError, Result};
use crate::version::VersionReq;

static PINNED_RE: OnceLock<Regex> = OnceLock::new();
static BRANCH_RE: OnceLock<Regex> = OnceLock::new();

fn pinned_re() -> &'static Regex {
    PINNED_RE.get_or_init(|| Regex::new(r"@[0-9a-f]{40}$").unwrap())
}

fn branch_re() -> &'static Regex {
    BRANCH_RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9_-]+/[a-zA-Z0-9_-]+@[a-zA-Z0-9_-]+$").unwrap()
    })
}

/// What the part after `@` asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Specifier {
    Version(VersionReq),
    Branch(String),
}

/// One action reference as found in a workflow step.
///
/// `raw` is the exact substring from the source file: substitution is
/// textual, so the original text must be reproducible verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRef {
    pub repository: String,
    pub specifier: Specifier,
    pub raw: String,
}

/// Split `reference` on the first occurrence of `delimiter`.
///
/// `split_action("owner/repo@v3", "@v")` gives `("owner/repo", "3")` — the
/// version delimiter swallows the leading `v` of the specifier.
pub fn split_action<'a>(reference: &'a str, delimiter: &str) -> Result<(&'a str, &'a str)> {
    reference
        .split_once(delimiter)
        .ok_or_else(|| PinError::MissingDelimiter {
            reference: reference.to_string(),
            delimiter: delimiter.to_string(),
        })
}

/// True if the reference already ends in `@<40-hex-commit>` — nothing to do.
pub fn is_pinned(reference: &str) -> bool {
    pinned_re().is_match(reference)
}

/// True if the commit id a host handed back is a full 40-char lowercase sha.
pub fn is_full_sha(commit: &str) -> bool {
    commit.len() == 40 && commit.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase())
}

/// Classify a reference by shape: `@v...` means a version specifier,
/// otherwise a conservative `owner/repo@token` pattern means a branch.
/// Anything else is unrecognized and must be left untouched by callers.
pub fn parse_action(raw: &str) -> Result<ActionRef> {
    if raw.contains("@v") {
        let (repository, version) = split_action(raw, "@v")?;
        let req: VersionReq = version.parse()?;
        Ok(ActionRef {
            repository: repository.to_string(),
            specifier: Specifier::Version(req),
            raw: raw.to_string(),
        })
    } else if branch_re().is_match(raw) {
        let (repository, branch) = split_action(raw, "@")?;
        Ok(ActionRef {
            repository: repository.to_string(),
            specifier: Specifier::Branch(branch.to_string()),
            raw: raw.to_string(),
        })
    } else {
        Err(PinError::UnrecognizedReference(raw.to_string()))
    }
}
