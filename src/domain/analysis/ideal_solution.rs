//! Positive and negative ideal solutions per criterion.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CriterionDirection, Ifn};

use super::{AnalysisError, WeightedDecisionMatrix};

/// Best-case and worst-case fuzzy profiles, one IFN per criterion each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealSolutions {
    pub positive: Vec<Ifn>,
    pub negative: Vec<Ifn>,
}

/// Resolves ideal solutions from a weighted decision matrix.
pub struct IdealSolutionResolver;

impl IdealSolutionResolver {
    /// For a benefit criterion the positive ideal takes `(max μ, min ν)` and the
    /// negative ideal `(min μ, max ν)`. A cost criterion swaps the two.
    ///
    /// # Errors
    /// - `ShapeMismatch` when `directions` does not have one entry per criterion
    /// - `EmptyDimension` when the matrix has no alternatives
    pub fn resolve(
        matrix: &WeightedDecisionMatrix,
        directions: &[CriterionDirection],
    ) -> Result<IdealSolutions, AnalysisError> {
        if matrix.alternative_count() == 0 {
            return Err(AnalysisError::EmptyDimension {
                dimension: "alternatives",
            });
        }
        if directions.len() != matrix.criterion_count() {
            return Err(AnalysisError::shape_mismatch(
                "criterion_directions",
                "criteria",
                matrix.criterion_count(),
                directions.len(),
            ));
        }

        let (positive, negative): (Vec<Ifn>, Vec<Ifn>) = directions
            .iter()
            .enumerate()
            .map(|(j, direction)| Self::resolve_criterion(matrix, j, *direction))
            .unzip();

        Ok(IdealSolutions { positive, negative })
    }

    fn resolve_criterion(
        matrix: &WeightedDecisionMatrix,
        criterion: usize,
        direction: CriterionDirection,
    ) -> (Ifn, Ifn) {
        let (mut mu_min, mut mu_max) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut nu_min, mut nu_max) = (f64::INFINITY, f64::NEG_INFINITY);
        for value in matrix.column(criterion) {
            mu_min = mu_min.min(value.membership());
            mu_max = mu_max.max(value.membership());
            nu_min = nu_min.min(value.non_membership());
            nu_max = nu_max.max(value.non_membership());
        }

        let best = Ifn::from_parts(mu_max, nu_min);
        let worst = Ifn::from_parts(mu_min, nu_max);
        match direction {
            CriterionDirection::Benefit => (best, worst),
            CriterionDirection::Cost => (worst, best),
        }
    }
}
