//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::Slug;

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    /// The one user-visible hard failure: no question folders exist yet.
    #[error("no questions available; add question folders under the questions root first")]
    NoQuestions,
    #[error("question '{0}' not found")]
    QuestionNotFound(Slug),
}
