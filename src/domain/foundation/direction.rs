//! Criterion direction value object (benefit or cost).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether larger or smaller values are preferred on a criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionDirection {
    /// Larger is better.
    #[default]
    Benefit,
    /// Smaller is better.
    Cost,
}

impl CriterionDirection {
    /// Returns the opposite direction.
    pub fn flipped(&self) -> Self {
        match self {
            CriterionDirection::Benefit => CriterionDirection::Cost,
            CriterionDirection::Cost => CriterionDirection::Benefit,
        }
    }
}

impl fmt::Display for CriterionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriterionDirection::Benefit => write!(f, "benefit"),
            CriterionDirection::Cost => write!(f, "cost"),
        }
    }
}
