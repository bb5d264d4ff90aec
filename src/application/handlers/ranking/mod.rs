//! Ranking command handlers.

mod run_ranking;

pub use run_ranking::{RunRankingCommand, RunRankingError, RunRankingHandler};
