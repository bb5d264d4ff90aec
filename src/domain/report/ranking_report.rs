//! Ranking Report - Pipeline outcome labelled with problem names.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{PipelineOutcome, ScoringFormula, SensitivityReport, SweepParameter};
use crate::domain::foundation::{RunId, Timestamp};
use crate::domain::problem::{Criterion, DecisionProblem};

/// One alternative's place in the baseline ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub rank: usize,
    pub alternative: String,
    pub closeness: f64,
    /// Closeness was set to neutral because both separations were zero.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub degenerate: bool,
}

/// A sweep entry whose ranks differ from the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnstableEntry {
    pub formula: ScoringFormula,
    pub parameter: SweepParameter,
    pub ranks: Vec<usize>,
}

/// Condensed view of a sensitivity sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivitySummary {
    pub entries: usize,
    pub stable: usize,
    pub unstable: Vec<UnstableEntry>,
}

impl SensitivitySummary {
    pub fn from_report(report: &SensitivityReport) -> Self {
        Self {
            entries: report.outcomes.len(),
            stable: report.stable_count(),
            unstable: report
                .unstable()
                .map(|outcome| UnstableEntry {
                    formula: outcome.formula,
                    parameter: outcome.parameter,
                    ranks: outcome.ranking.ranks.clone(),
                })
                .collect(),
        }
    }

    /// True when every sweep entry reproduced the baseline ranking.
    pub fn is_robust(&self) -> bool {
        self.unstable.is_empty()
    }
}

/// Everything one run produced, with identifiers for the run itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingReport {
    pub run_id: RunId,
    pub computed_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem_name: Option<String>,
    pub alternatives: Vec<String>,
    pub criteria: Vec<Criterion>,
    /// Baseline ranking, best first.
    pub standings: Vec<Standing>,
    pub summary: SensitivitySummary,
    pub outcome: PipelineOutcome,
}

impl RankingReport {
    /// Labels `outcome` with the names declared in `problem`.
    pub fn new(run_id: RunId, problem: &DecisionProblem, outcome: PipelineOutcome) -> Self {
        let standings = outcome
            .baseline
            .order
            .iter()
            .map(|&index| Standing {
                rank: outcome.baseline.ranks[index],
                alternative: problem
                    .alternatives
                    .get(index)
                    .cloned()
                    .unwrap_or_else(|| format!("#{}", index + 1)),
                closeness: outcome.closeness.scores[index],
                degenerate: outcome.closeness.degenerate.contains(&index),
            })
            .collect();

        Self {
            run_id,
            computed_at: Timestamp::now(),
            problem_name: problem.name.clone(),
            alternatives: problem.alternatives.clone(),
            criteria: problem.criteria.clone(),
            standings,
            summary: SensitivitySummary::from_report(&outcome.sensitivity),
            outcome,
        }
    }

    /// Name of the top-ranked alternative.
    pub fn leader(&self) -> Option<&str> {
        self.standings.first().map(|s| s.alternative.as_str())
    }
}
