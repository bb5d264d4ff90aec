//! Problem Reader Port - Interface for loading problem descriptions.
//!
//! Readers parse a [`DecisionProblem`] from some source. Label resolution
//! and validation happen later in the domain, so a reader only fails on
//! missing sources and malformed documents.

use std::path::PathBuf;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::problem::DecisionProblem;

/// Errors that can occur while reading a problem
#[derive(Debug, thiserror::Error)]
pub enum ProblemReaderError {
    #[error("Problem not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse problem: {0}")]
    ParseFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<ProblemReaderError> for DomainError {
    fn from(err: ProblemReaderError) -> Self {
        let code = match &err {
            ProblemReaderError::NotFound(_) => ErrorCode::ProblemNotFound,
            ProblemReaderError::ParseFailed(_) => ErrorCode::SerializationFailed,
            ProblemReaderError::IoError(_) => ErrorCode::InternalError,
        };
        let domain = DomainError::new(code, err.to_string());
        match err {
            ProblemReaderError::NotFound(path) => {
                domain.with_detail("path", path.display().to_string())
            }
            _ => domain,
        }
    }
}

/// Port for loading decision problems
pub trait ProblemReader: Send + Sync {
    /// Read the problem stored at `source`
    ///
    /// # Errors
    /// Returns `ProblemReaderError::NotFound` if nothing exists at `source`
    /// and `ProblemReaderError::ParseFailed` if the document is malformed
    fn read(&self, source: &str) -> Result<DecisionProblem, ProblemReaderError>;
}
