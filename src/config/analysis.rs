//! Analysis configuration

use serde::Deserialize;

use crate::domain::analysis::{RankingPipeline, RankingRules, TiePolicy, DEFAULT_TIE_TOLERANCE};

use super::error::ValidationError;

/// Tolerances at or above this would merge genuinely different scores.
const MAX_TIE_TOLERANCE: f64 = 1e-3;

/// Ranking pipeline configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub tie_policy: TiePolicy,

    /// Scores closer than this share a rank
    #[serde(default = "default_tie_tolerance")]
    pub tie_tolerance: f64,

    /// Evaluate sensitivity sweep entries on the rayon pool
    #[serde(default = "default_parallel_sweep")]
    pub parallel_sweep: bool,
}

impl AnalysisConfig {
    pub fn ranking_rules(&self) -> RankingRules {
        RankingRules {
            tie_policy: self.tie_policy,
            tie_tolerance: self.tie_tolerance,
        }
    }

    /// Pipeline configured with these rules
    pub fn pipeline(&self) -> RankingPipeline {
        RankingPipeline::new(self.ranking_rules()).with_parallel_sweep(self.parallel_sweep)
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let tolerance = self.tie_tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 || tolerance >= MAX_TIE_TOLERANCE {
            return Err(ValidationError::InvalidTieTolerance(tolerance));
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tie_policy: TiePolicy::default(),
            tie_tolerance: default_tie_tolerance(),
            parallel_sweep: default_parallel_sweep(),
        }
    }
}

fn default_tie_tolerance() -> f64 {
    DEFAULT_TIE_TOLERANCE
}

fn default_parallel_sweep() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.tie_policy, TiePolicy::Competition);
        assert_eq!(config.tie_tolerance, 1e-12);
        assert!(config.parallel_sweep);
        assert_eq!(config.ranking_rules(), RankingRules::default());
    }

    #[test]
    fn test_zero_tolerance_is_valid() {
        let config = AnalysisConfig {
            tie_tolerance: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_tolerances_rejected() {
        for tolerance in [-1e-12, 1e-3, 0.5, f64::NAN, f64::INFINITY] {
            let config = AnalysisConfig {
                tie_tolerance: tolerance,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(ValidationError::InvalidTieTolerance(_))),
                "tolerance {} should be rejected",
                tolerance
            );
        }
    }

    #[test]
    fn test_pipeline_uses_rules() {
        let config = AnalysisConfig {
            tie_policy: TiePolicy::Ordinal,
            ..Default::default()
        };
        assert_eq!(config.pipeline().rules().tie_policy, TiePolicy::Ordinal);
    }
}
