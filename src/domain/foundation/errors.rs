//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be a finite number")]
    NotFinite { field: String },

    #[error("Field '{field}' must be between 0 and 1, got {actual}")]
    OutOfUnitRange { field: String, actual: f64 },

    #[error("Membership {membership} and non-membership {non_membership} sum above 1")]
    ExceedsUnitSum { membership: f64, non_membership: f64 },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates a non-finite value error.
    pub fn not_finite(field: impl Into<String>) -> Self {
        ValidationError::NotFinite { field: field.into() }
    }

    /// Creates an out of unit range validation error.
    pub fn out_of_unit_range(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::OutOfUnitRange {
            field: field.into(),
            actual,
        }
    }

    /// Creates a unit sum violation error.
    pub fn exceeds_unit_sum(membership: f64, non_membership: f64) -> Self {
        ValidationError::ExceedsUnitSum {
            membership,
            non_membership,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input errors
    ShapeMismatch,
    InvalidFuzzyNumber,
    UnknownTerm,
    InvalidSweepParameter,

    // Computation errors
    DegenerateWeight,

    // Infrastructure errors
    ProblemNotFound,
    SerializationFailed,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ShapeMismatch => "SHAPE_MISMATCH",
            ErrorCode::InvalidFuzzyNumber => "INVALID_FUZZY_NUMBER",
            ErrorCode::UnknownTerm => "UNKNOWN_TERM",
            ErrorCode::InvalidSweepParameter => "INVALID_SWEEP_PARAMETER",
            ErrorCode::DegenerateWeight => "DEGENERATE_WEIGHT",
            ErrorCode::ProblemNotFound => "PROBLEM_NOT_FOUND",
            ErrorCode::SerializationFailed => "SERIALIZATION_FAILED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
