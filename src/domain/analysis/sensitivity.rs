//! Sensitivity sweep: re-rank under alternative scoring formulas and
//! parameters and compare each ranking with the baseline.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::{
    AnalysisError, ClosenessScores, Ranking, RankingRules, ScoringFormula, SeparationMeasures,
    SweepParameter,
};

/// Which formulas to evaluate and with which parameters.
///
/// σ-formulas (V1, V2, V3, V5) run once per `sigmas` entry, V4 once per
/// `lambdas` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPlan {
    #[serde(default = "default_formulas")]
    pub formulas: Vec<ScoringFormula>,

    /// `[σ⁺, σ⁻]` pairs, usually summing to 1.
    #[serde(default = "default_sigmas")]
    pub sigmas: Vec<[f64; 2]>,

    #[serde(default = "default_lambdas")]
    pub lambdas: Vec<f64>,
}

impl Default for SweepPlan {
    fn default() -> Self {
        Self {
            formulas: default_formulas(),
            sigmas: default_sigmas(),
            lambdas: default_lambdas(),
        }
    }
}

fn default_formulas() -> Vec<ScoringFormula> {
    ScoringFormula::ALL.to_vec()
}

fn default_sigmas() -> Vec<[f64; 2]> {
    vec![
        [1.0, 0.0],
        [0.99, 0.01],
        [0.9, 0.1],
        [0.8, 0.2],
        [0.7, 0.3],
        [0.6, 0.4],
        [0.5, 0.5],
        [0.4, 0.6],
        [0.3, 0.7],
        [0.2, 0.8],
        [0.1, 0.9],
        [0.01, 0.99],
        [0.0, 1.0],
    ]
}

fn default_lambdas() -> Vec<f64> {
    vec![0.5, 1.0, 2.0, 3.0, 4.0]
}

impl SweepPlan {
    /// Sweep parameters must be finite and non-negative.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        for (i, pair) in self.sigmas.iter().enumerate() {
            for (k, value) in pair.iter().enumerate() {
                check_parameter(&format!("sweep.sigmas[{}][{}]", i, k), *value)?;
            }
        }
        for (i, value) in self.lambdas.iter().enumerate() {
            check_parameter(&format!("sweep.lambdas[{}]", i), *value)?;
        }
        Ok(())
    }

    /// Flattens the plan into `(formula, parameter)` entries, formulas in
    /// plan order and parameters in list order.
    pub fn entries(&self) -> Vec<(ScoringFormula, SweepParameter)> {
        self.formulas
            .iter()
            .flat_map(|formula| -> Vec<(ScoringFormula, SweepParameter)> {
                if formula.uses_lambda() {
                    self.lambdas
                        .iter()
                        .map(|lambda| (*formula, SweepParameter::Lambda(*lambda)))
                        .collect()
                } else {
                    self.sigmas
                        .iter()
                        .map(|[positive, negative]| {
                            (
                                *formula,
                                SweepParameter::Sigma {
                                    positive: *positive,
                                    negative: *negative,
                                },
                            )
                        })
                        .collect()
                }
            })
            .collect()
    }
}

fn check_parameter(location: &str, value: f64) -> Result<(), AnalysisError> {
    if !value.is_finite() {
        return Err(AnalysisError::invalid_sweep_parameter(location, "must be finite"));
    }
    if value < 0.0 {
        return Err(AnalysisError::invalid_sweep_parameter(location, "must be non-negative"));
    }
    Ok(())
}

/// Scores, ranking and stability of one sweep entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepOutcome {
    pub formula: ScoringFormula,
    pub parameter: SweepParameter,
    pub scores: ClosenessScores,
    pub ranking: Ranking,
    /// Rank vector equals the baseline rank vector element for element.
    pub stable: bool,
}

/// Every sweep outcome, in plan order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityReport {
    pub outcomes: Vec<SweepOutcome>,
}

impl SensitivityReport {
    pub fn stable_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.stable).count()
    }

    pub fn unstable(&self) -> impl Iterator<Item = &SweepOutcome> {
        self.outcomes.iter().filter(|o| !o.stable)
    }

    /// True when every entry reproduces the baseline ranking.
    pub fn is_robust(&self) -> bool {
        self.outcomes.iter().all(|o| o.stable)
    }

    /// Outcomes produced by one formula.
    pub fn for_formula(&self, formula: ScoringFormula) -> impl Iterator<Item = &SweepOutcome> {
        self.outcomes.iter().filter(move |o| o.formula == formula)
    }
}

/// Runs a [`SweepPlan`] against fixed separation measures.
#[derive(Debug, Clone, Copy, Default)]
pub struct SensitivityAnalyzer {
    rules: RankingRules,
    parallel: bool,
}

impl SensitivityAnalyzer {
    pub fn new(rules: RankingRules) -> Self {
        Self {
            rules,
            parallel: false,
        }
    }

    /// Evaluates sweep entries on the rayon pool. Output order is unchanged.
    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn run(
        &self,
        separation: &SeparationMeasures,
        baseline: &Ranking,
        plan: &SweepPlan,
    ) -> Result<SensitivityReport, AnalysisError> {
        plan.validate()?;
        let entries = plan.entries();

        let outcomes = if self.parallel {
            entries
                .par_iter()
                .map(|entry| self.evaluate(separation, baseline, *entry))
                .collect::<Result<Vec<_>, AnalysisError>>()?
        } else {
            entries
                .iter()
                .map(|entry| self.evaluate(separation, baseline, *entry))
                .collect::<Result<Vec<_>, AnalysisError>>()?
        };

        Ok(SensitivityReport { outcomes })
    }

    fn evaluate(
        &self,
        separation: &SeparationMeasures,
        baseline: &Ranking,
        (formula, parameter): (ScoringFormula, SweepParameter),
    ) -> Result<SweepOutcome, AnalysisError> {
        let scores = formula.score(separation, parameter)?;
        let ranking = Ranking::from_scores(&scores.scores, self.rules);
        let stable = ranking.same_ranks(baseline);
        Ok(SweepOutcome {
            formula,
            parameter,
            scores,
            ranking,
            stable,
        })
    }
}
