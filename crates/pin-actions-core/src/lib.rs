//! Core pipeline for pinning GitHub Actions references to commit SHAs.
//!
//! A human-readable reference (`actions/checkout@v4`) is resolved to the
//! matching tag or branch tip commit and substituted into a copy of the
//! workflow file as `actions/checkout@<40-hex-sha> #v4.1.1`. Resolution goes
//! through the [`host::ReleaseHost`] trait; the shipped implementation
//! shells out to the `gh` CLI.

pub mod error;
pub mod host;
pub mod io;
pub mod reference;
pub mod resolve;
pub mod rewrite;
pub mod scan;
pub mod version;
pub mod workflow;

pub use error::{PinError, QueryStage, Result};
