//! Decision-maker weights derived from fuzzy importance judgments.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Ifn;

use super::AnalysisError;

/// Crisp, normalized weight per decision maker. Non-negative and sums to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionMakerWeights(Vec<f64>);

impl DecisionMakerWeights {
    /// Derives weights from one importance judgment per decision maker.
    ///
    /// Each judgment is scored with `μ + π·μ/(μ+ν)` and the scores are
    /// normalized by their total.
    ///
    /// # Errors
    /// - `EmptyDimension` when no judgments are given
    /// - `DegenerateWeight` when a judgment has `μ + ν = 0`
    /// - `ZeroTotalWeight` when every judgment has zero membership
    pub fn derive(importance: &[Ifn]) -> Result<Self, AnalysisError> {
        if importance.is_empty() {
            return Err(AnalysisError::EmptyDimension {
                dimension: "decision makers",
            });
        }

        let scores = importance
            .iter()
            .enumerate()
            .map(|(index, ifn)| {
                crisp_score(ifn).ok_or(AnalysisError::DegenerateWeight {
                    decision_maker: index,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let total: f64 = scores.iter().sum();
        if total <= 0.0 {
            return Err(AnalysisError::ZeroTotalWeight);
        }

        Ok(Self(scores.into_iter().map(|s| s / total).collect()))
    }

    /// Wraps an explicit weight vector, e.g. for a single decision maker.
    pub fn from_weights(weights: Vec<f64>) -> Self {
        Self(weights)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

/// Crisp score `μ + π·μ/(μ+ν)` of an importance judgment.
///
/// Returns `None` when `μ + ν = 0`.
pub fn crisp_score(ifn: &Ifn) -> Option<f64> {
    let known = ifn.membership() + ifn.non_membership();
    if known <= 0.0 {
        return None;
    }
    Some(ifn.membership() + ifn.hesitation() * (ifn.membership() / known))
}
