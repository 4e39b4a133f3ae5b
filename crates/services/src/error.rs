//! Shared error types for the services crate.

use thiserror::Error;

use eco_core::model::ResultError;

/// Errors emitted by `QuizSubmitter` implementations.
///
/// The controller treats every variant the same way: the attempt failed and
/// the user may try again.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmitError {
    #[error("quiz submission failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("quiz submission returned a malformed body: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Result(#[from] ResultError),
    #[error("quiz submission failed: {0}")]
    Other(String),
}

/// Errors emitted while copying text to the clipboard.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ClipboardError {
    #[error("clipboard write was rejected: {0}")]
    Rejected(String),
    #[error("manual copy fallback failed")]
    FallbackFailed,
}
