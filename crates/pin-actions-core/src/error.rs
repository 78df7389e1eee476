use thiserror::Error;

/// The external query a resolution was performing when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStage {
    ReleaseLookup,
    TagListing,
    TagCommitLookup,
    BranchLookup,
}

impl std::fmt::Display for QueryStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            QueryStage::ReleaseLookup => "release lookup",
            QueryStage::TagListing => "tag listing",
            QueryStage::TagCommitLookup => "tag-to-commit lookup",
            QueryStage::BranchLookup => "branch lookup",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum PinError {
    #[error("invalid version '{0}': expected up to three dot-separated numbers, e.g. 3, 3.1, 3.1.1")]
    InvalidVersion(String),

    #[error("invalid semver '{0}': expected major.minor.patch")]
    InvalidSemver(String),

    #[error("invalid action format '{reference}': missing '{delimiter}'")]
    MissingDelimiter {
        reference: String,
        delimiter: String,
    },

    #[error("unrecognized action reference: {0}")]
    UnrecognizedReference(String),

    #[error("no tag of {repository} matches version {requested}")]
    NoMatchingTag {
        repository: String,
        requested: String,
    },

    #[error("tag '{tag}' of {repository} does not exist, no commit found")]
    TagNotFound { repository: String, tag: String },

    #[error("{repository} returned a malformed commit id '{commit}' (want 40 hex chars)")]
    MalformedCommit { repository: String, commit: String },

    #[error("gh executable not found on PATH: install the GitHub CLI first")]
    GhMissing,

    #[error("{stage} failed for {repository}: {detail}")]
    HostQuery {
        stage: QueryStage,
        repository: String,
        detail: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PinError>;
