//! Domain layer containing the ranking logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (fuzzy numbers, IDs, enums, errors)
//! - `problem` - Linguistic problem descriptions and vocabularies
//! - `analysis` - Pure pipeline stages (weights, IFWA, TOPSIS, sensitivity)
//! - `report` - Labelled result of one run

pub mod analysis;
pub mod foundation;
pub mod problem;
pub mod report;
