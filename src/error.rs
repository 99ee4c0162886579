//! Top-level Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction. Errors from the member crates are
//! kept as children in the tree.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// An application error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for application operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Configuration could not be loaded.
    #[display("could not load configuration")]
    Config,
    /// The project tree could not be listed.
    #[display("could not collect files under {}", _0.display())]
    Collect(#[error(not(source))] PathBuf),
    /// The unused file list could not be written.
    #[display("could not write report to {}", _0.display())]
    Report(#[error(not(source))] PathBuf),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Nothing in the scan is retried.
        false
    }
}
