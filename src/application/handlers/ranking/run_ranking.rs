//! RunRankingHandler - Command handler for ranking one decision problem.
//!
//! Reads the problem, resolves its labels, runs the full pipeline including
//! the sensitivity sweep, and labels the outcome as a [`RankingReport`].

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::analysis::{AnalysisError, RankingPipeline};
use crate::domain::foundation::{DomainError, RunId, Timestamp};
use crate::domain::report::RankingReport;
use crate::ports::{ProblemReader, ProblemReaderError};

/// Command to rank the problem found at `source`.
#[derive(Debug, Clone)]
pub struct RunRankingCommand {
    /// Reader-specific location of the problem (a path for file readers).
    pub source: String,
}

impl RunRankingCommand {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// Error type for ranking a problem.
#[derive(Debug)]
pub enum RunRankingError {
    /// The problem could not be loaded.
    Read(ProblemReaderError),
    /// The problem was loaded but is invalid or cannot be ranked.
    Analysis(AnalysisError),
}

impl std::fmt::Display for RunRankingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunRankingError::Read(err) => write!(f, "{}", err),
            RunRankingError::Analysis(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for RunRankingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunRankingError::Read(err) => Some(err),
            RunRankingError::Analysis(err) => Some(err),
        }
    }
}

impl From<ProblemReaderError> for RunRankingError {
    fn from(err: ProblemReaderError) -> Self {
        RunRankingError::Read(err)
    }
}

impl From<AnalysisError> for RunRankingError {
    fn from(err: AnalysisError) -> Self {
        RunRankingError::Analysis(err)
    }
}

impl From<RunRankingError> for DomainError {
    fn from(err: RunRankingError) -> Self {
        match err {
            RunRankingError::Read(err) => err.into(),
            RunRankingError::Analysis(err) => err.into(),
        }
    }
}

/// Handler for ranking problems.
pub struct RunRankingHandler {
    problem_reader: Arc<dyn ProblemReader>,
    pipeline: RankingPipeline,
}

impl RunRankingHandler {
    pub fn new(problem_reader: Arc<dyn ProblemReader>, pipeline: RankingPipeline) -> Self {
        Self {
            problem_reader,
            pipeline,
        }
    }

    pub fn handle(&self, cmd: RunRankingCommand) -> Result<RankingReport, RunRankingError> {
        let run_id = RunId::new();
        let started_at = Timestamp::now();
        info!(run_id = %run_id, source = %cmd.source, "Starting ranking run");

        // 1. Load and resolve the problem
        let problem = self.problem_reader.read(&cmd.source)?;
        let inputs = problem.resolve()?;

        // 2. Run every stage
        let outcome = self.pipeline.run(&inputs)?;

        // 3. Label the outcome
        let report = RankingReport::new(run_id, &problem, outcome);

        if !report.summary.is_robust() {
            warn!(
                run_id = %run_id,
                unstable = report.summary.unstable.len(),
                entries = report.summary.entries,
                "Ranking changes under part of the sensitivity sweep"
            );
        }
        info!(
            run_id = %run_id,
            leader = report.leader().unwrap_or_default(),
            elapsed_ms = report.computed_at.duration_since(&started_at).num_milliseconds(),
            "Ranking run finished"
        );

        Ok(report)
    }
}
