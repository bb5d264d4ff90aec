//! Weighted decision matrix: aggregated ratings combined with criteria weights.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Ifn;

use super::AnalysisError;

/// `[alternative][criterion]` matrix of weighted ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightedDecisionMatrix {
    rows: Vec<Vec<Ifn>>,
}

impl WeightedDecisionMatrix {
    /// Multiplies every cell of the aggregated rating matrix by the
    /// aggregated weight of its criterion.
    pub fn build(
        aggregated_ratings: &[Vec<Ifn>],
        criteria_weights: &[Ifn],
    ) -> Result<Self, AnalysisError> {
        let rows = aggregated_ratings
            .iter()
            .map(|row| {
                if row.len() != criteria_weights.len() {
                    return Err(AnalysisError::shape_mismatch(
                        "aggregated_ratings",
                        "criteria",
                        criteria_weights.len(),
                        row.len(),
                    ));
                }
                Ok(row
                    .iter()
                    .zip(criteria_weights)
                    .map(|(rating, weight)| rating.multiply(weight))
                    .collect())
            })
            .collect::<Result<Vec<Vec<Ifn>>, _>>()?;

        Ok(Self { rows })
    }

    /// Wraps an already-weighted matrix.
    pub fn from_rows(rows: Vec<Vec<Ifn>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Ifn>] {
        &self.rows
    }

    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    pub fn criterion_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Iterates the values of one criterion across all alternatives.
    pub fn column(&self, criterion: usize) -> impl Iterator<Item = &Ifn> + '_ {
        self.rows.iter().filter_map(move |row| row.get(criterion))
    }
}
