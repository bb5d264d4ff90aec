//! Analysis Module - Pure pipeline stages for intuitionistic fuzzy TOPSIS.
//!
//! Each stage is a stateless function over immutable inputs returning a new
//! value, so stages can be tested in isolation and independent indices
//! (criteria, alternatives, sweep entries) evaluated in any order.
//!
//! # Components
//!
//! - `DecisionMakerWeights` - Crisp decision-maker weights from importance IFNs
//! - `IfwaAggregator` - IFWA fusion of decision-maker opinions
//! - `WeightedDecisionMatrix` - Ratings multiplied by criteria weights
//! - `IdealSolutionResolver` - Positive/negative ideal per criterion
//! - `SeparationCalculator` - Distances to both ideals
//! - `relative_closeness`, `ScoringFormula`, `Ranking` - Scores and ranks
//! - `SensitivityAnalyzer` - Ranking stability under a parameter sweep
//! - `RankingPipeline` - Runs everything from `DecisionInputs`

mod closeness;
mod dm_weights;
mod errors;
mod ideal_solution;
mod ifwa;
mod pipeline;
mod ranking;
mod sensitivity;
mod separation;
mod weighted_matrix;

pub use closeness::{relative_closeness, ClosenessScores, ScoringFormula, SweepParameter, NEUTRAL_CLOSENESS};
pub use dm_weights::{crisp_score, DecisionMakerWeights};
pub use errors::AnalysisError;
pub use ideal_solution::{IdealSolutionResolver, IdealSolutions};
pub use ifwa::IfwaAggregator;
pub use pipeline::{DecisionInputs, PipelineOutcome, RankingPipeline};
pub use ranking::{Ranking, RankingRules, TiePolicy, DEFAULT_TIE_TOLERANCE};
pub use sensitivity::{SensitivityAnalyzer, SensitivityReport, SweepOutcome, SweepPlan};
pub use separation::{SeparationCalculator, SeparationMeasures};
pub use weighted_matrix::WeightedDecisionMatrix;
