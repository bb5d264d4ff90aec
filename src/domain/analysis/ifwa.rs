//! Intuitionistic Fuzzy Weighted Averaging (IFWA) operator.

use crate::domain::foundation::Ifn;

use super::{AnalysisError, DecisionMakerWeights};

/// Fuses one IFN per decision maker into a single IFN:
///
/// ```text
/// μ = 1 − Π (1 − μᵢ)^λᵢ
/// ν = Π νᵢ^λᵢ
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IfwaAggregator<'a> {
    weights: &'a DecisionMakerWeights,
}

impl<'a> IfwaAggregator<'a> {
    pub fn new(weights: &'a DecisionMakerWeights) -> Self {
        Self { weights }
    }

    /// Aggregates `values[i]` (decision maker `i`) with weight `λᵢ`.
    ///
    /// A zero weight contributes a neutral factor of 1, so `0^0 = 1`.
    pub fn aggregate(&self, values: &[Ifn]) -> Result<Ifn, AnalysisError> {
        self.check_decision_makers("opinions", values.len())?;

        let (complement_product, non_membership_product) = values
            .iter()
            .zip(self.weights.as_slice())
            .fold((1.0, 1.0), |(complement, non_membership), (value, weight)| {
                (
                    complement * weighted_power(1.0 - value.membership(), *weight),
                    non_membership * weighted_power(value.non_membership(), *weight),
                )
            });

        Ok(Ifn::from_parts(1.0 - complement_product, non_membership_product))
    }

    /// Fuses a `[decision maker][criterion]` importance table into one IFN
    /// per criterion.
    pub fn aggregate_criteria_weights(
        &self,
        importance: &[Vec<Ifn>],
    ) -> Result<Vec<Ifn>, AnalysisError> {
        self.check_decision_makers("criteria_importance", importance.len())?;
        let criteria = importance.first().map_or(0, Vec::len);
        for row in importance {
            if row.len() != criteria {
                return Err(AnalysisError::shape_mismatch(
                    "criteria_importance",
                    "criteria",
                    criteria,
                    row.len(),
                ));
            }
        }

        (0..criteria)
            .map(|j| {
                let column: Vec<Ifn> = importance.iter().map(|row| row[j]).collect();
                self.aggregate(&column)
            })
            .collect()
    }

    /// Fuses a `[decision maker][alternative][criterion]` rating table into
    /// an `[alternative][criterion]` matrix.
    pub fn aggregate_ratings(
        &self,
        ratings: &[Vec<Vec<Ifn>>],
    ) -> Result<Vec<Vec<Ifn>>, AnalysisError> {
        self.check_decision_makers("ratings", ratings.len())?;
        let alternatives = ratings.first().map_or(0, Vec::len);
        let criteria = ratings
            .first()
            .and_then(|dm| dm.first())
            .map_or(0, Vec::len);
        for dm in ratings {
            if dm.len() != alternatives {
                return Err(AnalysisError::shape_mismatch(
                    "ratings",
                    "alternatives",
                    alternatives,
                    dm.len(),
                ));
            }
            for row in dm {
                if row.len() != criteria {
                    return Err(AnalysisError::shape_mismatch(
                        "ratings",
                        "criteria",
                        criteria,
                        row.len(),
                    ));
                }
            }
        }

        (0..alternatives)
            .map(|i| {
                (0..criteria)
                    .map(|j| {
                        let opinions: Vec<Ifn> = ratings.iter().map(|dm| dm[i][j]).collect();
                        self.aggregate(&opinions)
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect()
    }

    fn check_decision_makers(&self, table: &str, actual: usize) -> Result<(), AnalysisError> {
        if actual != self.weights.len() {
            return Err(AnalysisError::shape_mismatch(
                table,
                "decision makers",
                self.weights.len(),
                actual,
            ));
        }
        Ok(())
    }
}

fn weighted_power(base: f64, weight: f64) -> f64 {
    if weight == 0.0 {
        1.0
    } else {
        base.powf(weight)
    }
}
