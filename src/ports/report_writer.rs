//! Report Writer Port - Interface for emitting ranking reports.

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::report::RankingReport;

/// Errors that can occur while writing a report
#[derive(Debug, thiserror::Error)]
pub enum ReportWriterError {
    #[error("Failed to serialize report: {0}")]
    SerializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<ReportWriterError> for DomainError {
    fn from(err: ReportWriterError) -> Self {
        let code = match &err {
            ReportWriterError::SerializationFailed(_) => ErrorCode::SerializationFailed,
            ReportWriterError::IoError(_) => ErrorCode::InternalError,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Port for emitting ranking reports
pub trait ReportWriter {
    /// Write one complete report
    ///
    /// # Errors
    /// Returns `ReportWriterError` if serialization or the underlying write fails
    fn write_report(&mut self, report: &RankingReport) -> Result<(), ReportWriterError>;
}
