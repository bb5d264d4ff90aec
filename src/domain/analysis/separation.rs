//! Separation measures: distance of each alternative to the ideal solutions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Ifn;

use super::{AnalysisError, IdealSolutions, WeightedDecisionMatrix};

/// `S⁺` and `S⁻` per alternative, in alternative order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeparationMeasures {
    /// Distance to the positive ideal (`S⁺`).
    pub to_positive: Vec<f64>,
    /// Distance to the negative ideal (`S⁻`).
    pub to_negative: Vec<f64>,
}

impl SeparationMeasures {
    pub fn alternative_count(&self) -> usize {
        self.to_positive.len()
    }
}

/// Computes normalized Euclidean separation over all three IFN components.
pub struct SeparationCalculator;

impl SeparationCalculator {
    /// `S = sqrt( 1/(2C) · Σⱼ [(μ−μ*)² + (ν−ν*)² + (π−π*)²] )`
    pub fn compute(
        matrix: &WeightedDecisionMatrix,
        ideals: &IdealSolutions,
    ) -> Result<SeparationMeasures, AnalysisError> {
        let criteria = matrix.criterion_count();
        if criteria == 0 {
            return Err(AnalysisError::EmptyDimension { dimension: "criteria" });
        }
        for (table, ideal) in [("positive_ideal", &ideals.positive), ("negative_ideal", &ideals.negative)] {
            if ideal.len() != criteria {
                return Err(AnalysisError::shape_mismatch(table, "criteria", criteria, ideal.len()));
            }
        }

        let (to_positive, to_negative): (Vec<f64>, Vec<f64>) = matrix
            .rows()
            .iter()
            .map(|row| {
                (
                    Self::distance(row, &ideals.positive),
                    Self::distance(row, &ideals.negative),
                )
            })
            .unzip();

        Ok(SeparationMeasures {
            to_positive,
            to_negative,
        })
    }

    fn distance(row: &[Ifn], ideal: &[Ifn]) -> f64 {
        let sum: f64 = row
            .iter()
            .zip(ideal)
            .map(|(value, reference)| value.squared_distance(reference))
            .sum();
        (sum / (2.0 * ideal.len() as f64)).sqrt()
    }
}
