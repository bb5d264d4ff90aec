//! Ranking pipeline: the single entry point chaining every stage.
//!
//! ```text
//! importance ─► DecisionMakerWeights ─► IFWA ─┬─► criteria weights ─┐
//! ratings ────────────────────────────────────┴─► aggregated ratings ┴─► weighted matrix
//!   ─► ideal solutions ─► separation ─► closeness + baseline ranking ─► sensitivity sweep
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::foundation::{CriterionDirection, Ifn};

use super::{
    relative_closeness, AnalysisError, ClosenessScores, DecisionMakerWeights, IdealSolutionResolver,
    IdealSolutions, IfwaAggregator, Ranking, RankingRules, SensitivityAnalyzer, SensitivityReport,
    SeparationCalculator, SeparationMeasures, SweepPlan, WeightedDecisionMatrix,
};

/// Numeric inputs of one run. Every table shares the decision-maker,
/// alternative and criterion ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionInputs {
    /// One judgment per decision maker.
    pub decision_maker_importance: Vec<Ifn>,
    /// `[decision maker][criterion]`
    pub criteria_importance: Vec<Vec<Ifn>>,
    /// `[decision maker][alternative][criterion]`
    pub ratings: Vec<Vec<Vec<Ifn>>>,
    /// One direction per criterion.
    pub criterion_directions: Vec<CriterionDirection>,
    #[serde(default)]
    pub sweep: SweepPlan,
}

impl DecisionInputs {
    /// Builds inputs from raw `(μ, ν)` pairs, reporting the first invalid
    /// pair with its table and index.
    pub fn from_pairs(
        decision_maker_importance: &[(f64, f64)],
        criteria_importance: &[Vec<(f64, f64)>],
        ratings: &[Vec<Vec<(f64, f64)>>],
        criterion_directions: Vec<CriterionDirection>,
        sweep: SweepPlan,
    ) -> Result<Self, AnalysisError> {
        let decision_maker_importance = decision_maker_importance
            .iter()
            .enumerate()
            .map(|(k, pair)| to_ifn(*pair, || format!("decision_maker_importance[{}]", k)))
            .collect::<Result<Vec<_>, _>>()?;

        let criteria_importance = criteria_importance
            .iter()
            .enumerate()
            .map(|(k, row)| {
                row.iter()
                    .enumerate()
                    .map(|(j, pair)| to_ifn(*pair, || format!("criteria_importance[{}][{}]", k, j)))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let ratings = ratings
            .iter()
            .enumerate()
            .map(|(k, table)| {
                table
                    .iter()
                    .enumerate()
                    .map(|(i, row)| {
                        row.iter()
                            .enumerate()
                            .map(|(j, pair)| {
                                to_ifn(*pair, || format!("ratings[{}][{}][{}]", k, i, j))
                            })
                            .collect::<Result<Vec<_>, _>>()
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            decision_maker_importance,
            criteria_importance,
            ratings,
            criterion_directions,
            sweep,
        })
    }

    pub fn decision_maker_count(&self) -> usize {
        self.decision_maker_importance.len()
    }

    pub fn alternative_count(&self) -> usize {
        self.ratings.first().map_or(0, Vec::len)
    }

    pub fn criterion_count(&self) -> usize {
        self.criterion_directions.len()
    }

    /// Checks that every table agrees on the decision-maker, alternative and
    /// criterion counts, and that the sweep parameters are usable.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let decision_makers = self.decision_maker_count();
        let alternatives = self.alternative_count();
        let criteria = self.criterion_count();

        if decision_makers == 0 {
            return Err(AnalysisError::EmptyDimension {
                dimension: "decision makers",
            });
        }
        if alternatives == 0 {
            return Err(AnalysisError::EmptyDimension {
                dimension: "alternatives",
            });
        }
        if criteria == 0 {
            return Err(AnalysisError::EmptyDimension { dimension: "criteria" });
        }

        expect_len("criteria_importance", "decision makers", decision_makers, self.criteria_importance.len())?;
        for row in &self.criteria_importance {
            expect_len("criteria_importance", "criteria", criteria, row.len())?;
        }

        expect_len("ratings", "decision makers", decision_makers, self.ratings.len())?;
        for table in &self.ratings {
            expect_len("ratings", "alternatives", alternatives, table.len())?;
            for row in table {
                expect_len("ratings", "criteria", criteria, row.len())?;
            }
        }

        self.sweep.validate()
    }
}

fn to_ifn(pair: (f64, f64), location: impl FnOnce() -> String) -> Result<Ifn, AnalysisError> {
    Ifn::try_new(pair.0, pair.1).map_err(|e| AnalysisError::invalid_fuzzy_number(location(), e))
}

fn expect_len(
    table: &str,
    dimension: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), AnalysisError> {
    if expected != actual {
        return Err(AnalysisError::shape_mismatch(table, dimension, expected, actual));
    }
    Ok(())
}

/// Every derived entity of one run, in stage order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutcome {
    pub decision_maker_weights: DecisionMakerWeights,
    pub criteria_weights: Vec<Ifn>,
    pub aggregated_ratings: Vec<Vec<Ifn>>,
    pub weighted_matrix: WeightedDecisionMatrix,
    pub ideal_solutions: IdealSolutions,
    pub separation: SeparationMeasures,
    pub closeness: ClosenessScores,
    pub baseline: Ranking,
    pub sensitivity: SensitivityReport,
}

/// Runs all stages over validated [`DecisionInputs`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RankingPipeline {
    rules: RankingRules,
    parallel_sweep: bool,
}

impl RankingPipeline {
    pub fn new(rules: RankingRules) -> Self {
        Self {
            rules,
            parallel_sweep: false,
        }
    }

    pub fn with_parallel_sweep(mut self, parallel: bool) -> Self {
        self.parallel_sweep = parallel;
        self
    }

    pub fn rules(&self) -> RankingRules {
        self.rules
    }

    /// Executes the full pipeline. Fails before any computation when the
    /// inputs are inconsistent.
    pub fn run(&self, inputs: &DecisionInputs) -> Result<PipelineOutcome, AnalysisError> {
        inputs.validate()?;
        debug!(
            decision_makers = inputs.decision_maker_count(),
            alternatives = inputs.alternative_count(),
            criteria = inputs.criterion_count(),
            "Running ranking pipeline"
        );

        let decision_maker_weights = DecisionMakerWeights::derive(&inputs.decision_maker_importance)?;
        debug!(weights = ?decision_maker_weights.as_slice(), "Derived decision maker weights");

        let aggregator = IfwaAggregator::new(&decision_maker_weights);
        let criteria_weights = aggregator.aggregate_criteria_weights(&inputs.criteria_importance)?;
        let aggregated_ratings = aggregator.aggregate_ratings(&inputs.ratings)?;

        let weighted_matrix = WeightedDecisionMatrix::build(&aggregated_ratings, &criteria_weights)?;
        let ideal_solutions =
            IdealSolutionResolver::resolve(&weighted_matrix, &inputs.criterion_directions)?;
        let separation = SeparationCalculator::compute(&weighted_matrix, &ideal_solutions)?;

        let closeness = relative_closeness(&separation);
        if closeness.has_degenerate() {
            warn!(
                alternatives = ?closeness.degenerate,
                "Alternatives coincide with both ideals; closeness set to neutral"
            );
        }
        let baseline = Ranking::from_scores(&closeness.scores, self.rules);
        debug!(ranks = ?baseline.ranks, "Baseline ranking");

        let sensitivity = SensitivityAnalyzer::new(self.rules)
            .with_parallelism(self.parallel_sweep)
            .run(&separation, &baseline, &inputs.sweep)?;
        debug!(
            entries = sensitivity.outcomes.len(),
            stable = sensitivity.stable_count(),
            "Sensitivity sweep finished"
        );

        Ok(PipelineOutcome {
            decision_maker_weights,
            criteria_weights,
            aggregated_ratings,
            weighted_matrix,
            ideal_solutions,
            separation,
            closeness,
            baseline,
            sensitivity,
        })
    }
}
