//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the ranking domain.

mod direction;
mod errors;
mod ids;
mod ifn;
mod timestamp;

pub use direction::CriterionDirection;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::RunId;
pub use ifn::{Ifn, IFN_TOLERANCE};
pub use timestamp::Timestamp;
