//! Semantic version parsing and tag selection.
//!
//! Action tags in the wild are `v<major>.<minor>.<patch>` with an optional
//! leading `v`. Anything else — pre-release suffixes, two-component tags,
//! branch-ish names — is not a version and is skipped during selection
//! rather than treated as fatal.

use std::fmt;
use std::str::FromStr;

use crate::error::{PinError, Result};

/// A three-part semantic version. Field order gives the derived `Ord`
/// the major-then-minor-then-patch comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl FromStr for Version {
    type Err = PinError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.strip_prefix('v').unwrap_or(s);
        let mut parts = trimmed.split('.');
        let (major, minor, patch) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(a), Some(b), Some(c), None) => (a, b, c),
            _ => return Err(PinError::InvalidSemver(s.to_string())),
        };
        let parse = |p: &str| {
            p.parse::<u32>()
                .map_err(|_| PinError::InvalidSemver(s.to_string()))
        };
        Ok(Version {
            major: parse(major)?,
            minor: parse(minor)?,
            patch: parse(patch)?,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// A requested version specifier: what the user (or a workflow reference)
/// asked to pin to, before it is matched against real tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionReq {
    /// Empty string or the literal `latest` — whatever the newest release is.
    Latest,
    /// Bare major (`3`) — any minor/patch under this major.
    Major(u32),
    /// Major.minor (`3.1`) — the highest patch under this pair.
    MajorMinor(u32, u32),
    /// Full `3.1.1` — this exact tag, no listing required.
    Exact(Version),
}

impl FromStr for VersionReq {
    type Err = PinError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.strip_prefix('v').unwrap_or(s);
        if trimmed.is_empty() || trimmed == "latest" {
            return Ok(VersionReq::Latest);
        }
        let parts: Vec<&str> = trimmed.split('.').collect();
        let parse = |p: &str| {
            p.parse::<u32>()
                .map_err(|_| PinError::InvalidVersion(s.to_string()))
        };
        match parts.as_slice() {
            [major] => Ok(VersionReq::Major(parse(major)?)),
            [major, minor] => Ok(VersionReq::MajorMinor(parse(major)?, parse(minor)?)),
            [major, minor, patch] => Ok(VersionReq::Exact(Version {
                major: parse(major)?,
                minor: parse(minor)?,
                patch: parse(patch)?,
            })),
            _ => Err(PinError::InvalidVersion(s.to_string())),
        }
    }
}

impl fmt::Display for VersionReq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionReq::Latest => f.write_str("latest"),
            VersionReq::Major(major) => write!(f, "v{major}"),
            VersionReq::MajorMinor(major, minor) => write!(f, "v{major}.{minor}"),
            VersionReq::Exact(v) => v.fmt(f),
        }
    }
}

/// Pick the highest tag satisfying `req` from a raw tag listing.
///
/// Candidates that do not parse as three-part versions (including the empty
/// trailing element of a newline-split listing) are skipped silently.
/// Returns `None` when nothing matches — callers surface that as an explicit
/// no-matching-tag error rather than inventing a zero version.
pub fn select_highest<'a, I>(tags: I, req: &VersionReq) -> Option<Version>
where
    I: IntoIterator<Item = &'a str>,
{
    tags.into_iter()
        .filter_map(|tag| tag.parse::<Version>().ok())
        .filter(|v| match *req {
            VersionReq::Latest => true,
            VersionReq::Major(major) => v.major == major,
            VersionReq::MajorMinor(major, minor) => v.major == major && v.minor == minor,
            VersionReq::Exact(exact) => *v == exact,
        })
        .max()
}
