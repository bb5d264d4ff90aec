//! Errors raised by the ranking pipeline.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

use super::ScoringFormula;

/// Fatal failures of the ranking pipeline. Any of these aborts the run
/// before partial output is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Table '{table}' has {actual} {dimension}, expected {expected}")]
    ShapeMismatch {
        table: String,
        dimension: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Problem has no {dimension}")]
    EmptyDimension { dimension: &'static str },

    #[error("Invalid fuzzy number at {location}: {source}")]
    InvalidFuzzyNumber {
        location: String,
        #[source]
        source: ValidationError,
    },

    #[error("Importance of decision maker {decision_maker} has membership + non-membership = 0")]
    DegenerateWeight { decision_maker: usize },

    #[error("Decision maker scores sum to zero")]
    ZeroTotalWeight,

    #[error("Unknown term '{term}' in {vocabulary} vocabulary")]
    UnknownTerm { vocabulary: String, term: String },

    #[error("Invalid sweep parameter at {location}: {reason}")]
    InvalidSweepParameter { location: String, reason: String },

    #[error("Formula {formula} does not accept the supplied parameter kind")]
    ParameterMismatch { formula: ScoringFormula },
}

impl AnalysisError {
    /// Creates a shape mismatch error.
    pub fn shape_mismatch(
        table: impl Into<String>,
        dimension: &'static str,
        expected: usize,
        actual: usize,
    ) -> Self {
        AnalysisError::ShapeMismatch {
            table: table.into(),
            dimension,
            expected,
            actual,
        }
    }

    /// Creates an invalid fuzzy number error for the given location.
    pub fn invalid_fuzzy_number(location: impl Into<String>, source: ValidationError) -> Self {
        AnalysisError::InvalidFuzzyNumber {
            location: location.into(),
            source,
        }
    }

    /// Creates an unknown term error.
    pub fn unknown_term(vocabulary: impl Into<String>, term: impl Into<String>) -> Self {
        AnalysisError::UnknownTerm {
            vocabulary: vocabulary.into(),
            term: term.into(),
        }
    }

    /// Creates an invalid sweep parameter error.
    pub fn invalid_sweep_parameter(location: impl Into<String>, reason: impl Into<String>) -> Self {
        AnalysisError::InvalidSweepParameter {
            location: location.into(),
            reason: reason.into(),
        }
    }

    /// Maps the error onto the boundary error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::ShapeMismatch { .. } | AnalysisError::EmptyDimension { .. } => {
                ErrorCode::ShapeMismatch
            }
            AnalysisError::InvalidFuzzyNumber { .. } => ErrorCode::InvalidFuzzyNumber,
            AnalysisError::DegenerateWeight { .. } | AnalysisError::ZeroTotalWeight => {
                ErrorCode::DegenerateWeight
            }
            AnalysisError::UnknownTerm { .. } => ErrorCode::UnknownTerm,
            AnalysisError::InvalidSweepParameter { .. } | AnalysisError::ParameterMismatch { .. } => {
                ErrorCode::InvalidSweepParameter
            }
        }
    }
}

impl From<AnalysisError> for DomainError {
    fn from(err: AnalysisError) -> Self {
        let code = err.code();
        let domain = DomainError::new(code, err.to_string());
        match err {
            AnalysisError::InvalidFuzzyNumber { location, .. }
            | AnalysisError::InvalidSweepParameter { location, .. } => {
                domain.with_detail("location", location)
            }
            AnalysisError::DegenerateWeight { decision_maker } => {
                domain.with_detail("decision_maker", decision_maker.to_string())
            }
            AnalysisError::ShapeMismatch { table, .. } => domain.with_detail("table", table),
            AnalysisError::UnknownTerm { vocabulary, term } => domain
                .with_detail("vocabulary", vocabulary)
                .with_detail("term", term),
            _ => domain,
        }
    }
}
