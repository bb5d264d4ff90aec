//! Closeness scores: turning separation measures into rankable numbers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{AnalysisError, SeparationMeasures};

/// Closeness assigned to an alternative whose score formula has a zero denominator.
pub const NEUTRAL_CLOSENESS: f64 = 0.5;

/// One score per alternative, plus the alternatives whose score had to be
/// substituted because the formula was undefined for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosenessScores {
    pub scores: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub degenerate: Vec<usize>,
}

impl ClosenessScores {
    pub fn new(scores: Vec<f64>) -> Self {
        Self {
            scores,
            degenerate: Vec::new(),
        }
    }

    pub fn has_degenerate(&self) -> bool {
        !self.degenerate.is_empty()
    }
}

/// Standard relative closeness `S⁻ / (S⁻ + S⁺)`.
///
/// An alternative with `S⁻ + S⁺ = 0` gets [`NEUTRAL_CLOSENESS`] and is listed
/// in `degenerate`.
pub fn relative_closeness(separation: &SeparationMeasures) -> ClosenessScores {
    let mut degenerate = Vec::new();
    let scores = separation
        .to_positive
        .iter()
        .zip(&separation.to_negative)
        .enumerate()
        .map(|(i, (s_plus, s_minus))| {
            let total = s_minus + s_plus;
            if total == 0.0 {
                degenerate.push(i);
                NEUTRAL_CLOSENESS
            } else {
                s_minus / total
            }
        })
        .collect();

    ClosenessScores { scores, degenerate }
}

/// Parameter of one sensitivity sweep entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepParameter {
    /// `(σ⁺, σ⁻)`: σ⁺ weights the distance to the negative ideal, σ⁻ the
    /// distance to the positive ideal.
    Sigma { positive: f64, negative: f64 },
    /// Penalty `λ` on the distance to the positive ideal.
    Lambda(f64),
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepParameter::Sigma { positive, negative } => {
                write!(f, "σ⁺={}, σ⁻={}", positive, negative)
            }
            SweepParameter::Lambda(lambda) => write!(f, "λ={}", lambda),
        }
    }
}

/// Alternative scoring formulas used to probe ranking robustness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoringFormula {
    /// V1: `σ⁺·S⁻ᵢ/ΣS⁻ − σ⁻·S⁺ᵢ/ΣS⁺`
    #[serde(rename = "v1", alias = "normalized_difference")]
    NormalizedDifference,
    /// V2: `σ⁺·S⁻ᵢ / (σ⁻·S⁺ᵢ + σ⁺·S⁻ᵢ)`
    #[serde(rename = "v2", alias = "weighted_ratio")]
    WeightedRatio,
    /// V3: `σ⁺·S⁻ᵢ + σ⁻·S⁺ᵢ`
    #[serde(rename = "v3", alias = "weighted_sum")]
    WeightedSum,
    /// V4: `S⁻ᵢ − λ·S⁺ᵢ`
    #[serde(rename = "v4", alias = "penalized_difference")]
    PenalizedDifference,
    /// V5: `σ⁺·S⁻ᵢ − σ⁻·S⁺ᵢ`
    #[serde(rename = "v5", alias = "weighted_difference")]
    WeightedDifference,
}

impl ScoringFormula {
    /// All formulas in V1..V5 order.
    pub const ALL: [ScoringFormula; 5] = [
        ScoringFormula::NormalizedDifference,
        ScoringFormula::WeightedRatio,
        ScoringFormula::WeightedSum,
        ScoringFormula::PenalizedDifference,
        ScoringFormula::WeightedDifference,
    ];

    /// Short label (`V1`..`V5`).
    pub fn label(&self) -> &'static str {
        match self {
            ScoringFormula::NormalizedDifference => "V1",
            ScoringFormula::WeightedRatio => "V2",
            ScoringFormula::WeightedSum => "V3",
            ScoringFormula::PenalizedDifference => "V4",
            ScoringFormula::WeightedDifference => "V5",
        }
    }

    /// True for the single-parameter formula (V4).
    pub fn uses_lambda(&self) -> bool {
        matches!(self, ScoringFormula::PenalizedDifference)
    }

    /// Scores every alternative.
    ///
    /// # Errors
    /// `ParameterMismatch` when a σ pair is given to V4 or a λ to the others.
    pub fn score(
        &self,
        separation: &SeparationMeasures,
        parameter: SweepParameter,
    ) -> Result<ClosenessScores, AnalysisError> {
        let d_plus = &separation.to_positive;
        let d_minus = &separation.to_negative;

        match (self, parameter) {
            (ScoringFormula::PenalizedDifference, SweepParameter::Lambda(lambda)) => Ok(
                ClosenessScores::new(pairwise(d_plus, d_minus, |p, m| m - lambda * p)),
            ),
            (ScoringFormula::PenalizedDifference, _) | (_, SweepParameter::Lambda(_)) => {
                Err(AnalysisError::ParameterMismatch { formula: *self })
            }
            (
                ScoringFormula::NormalizedDifference,
                SweepParameter::Sigma { positive, negative },
            ) => Ok(normalized_difference(d_plus, d_minus, positive, negative)),
            (ScoringFormula::WeightedRatio, SweepParameter::Sigma { positive, negative }) => {
                Ok(weighted_ratio(d_plus, d_minus, positive, negative))
            }
            (ScoringFormula::WeightedSum, SweepParameter::Sigma { positive, negative }) => Ok(
                ClosenessScores::new(pairwise(d_plus, d_minus, |p, m| positive * m + negative * p)),
            ),
            (ScoringFormula::WeightedDifference, SweepParameter::Sigma { positive, negative }) => Ok(
                ClosenessScores::new(pairwise(d_plus, d_minus, |p, m| positive * m - negative * p)),
            ),
        }
    }
}

impl fmt::Display for ScoringFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn pairwise(d_plus: &[f64], d_minus: &[f64], op: impl Fn(f64, f64) -> f64) -> Vec<f64> {
    d_plus.iter().zip(d_minus).map(|(p, m)| op(*p, *m)).collect()
}

/// A zero separation sum makes its ratio term 0 and flags every alternative.
fn normalized_difference(
    d_plus: &[f64],
    d_minus: &[f64],
    sigma_positive: f64,
    sigma_negative: f64,
) -> ClosenessScores {
    let sum_plus: f64 = d_plus.iter().sum();
    let sum_minus: f64 = d_minus.iter().sum();
    let ratio = |value: f64, total: f64| if total == 0.0 { 0.0 } else { value / total };

    let scores = pairwise(d_plus, d_minus, |p, m| {
        sigma_positive * ratio(m, sum_minus) - sigma_negative * ratio(p, sum_plus)
    });
    let degenerate = if sum_plus == 0.0 || sum_minus == 0.0 {
        (0..scores.len()).collect()
    } else {
        Vec::new()
    };

    ClosenessScores { scores, degenerate }
}

fn weighted_ratio(
    d_plus: &[f64],
    d_minus: &[f64],
    sigma_positive: f64,
    sigma_negative: f64,
) -> ClosenessScores {
    let mut degenerate = Vec::new();
    let scores = d_plus
        .iter()
        .zip(d_minus)
        .enumerate()
        .map(|(i, (p, m))| {
            let numerator = sigma_positive * m;
            let denominator = sigma_negative * p + numerator;
            if denominator == 0.0 {
                degenerate.push(i);
                NEUTRAL_CLOSENESS
            } else {
                numerator / denominator
            }
        })
        .collect();

    ClosenessScores { scores, degenerate }
}
