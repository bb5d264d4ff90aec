//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod ranking;

pub use ranking::{RunRankingCommand, RunRankingError, RunRankingHandler};
