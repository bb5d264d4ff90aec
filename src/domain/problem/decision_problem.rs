//! Decision Problem - Linguistic description of one group decision.
//!
//! A problem names its decision makers, criteria and alternatives, and
//! expresses every judgment as a vocabulary label. [`DecisionProblem::resolve`]
//! turns it into the numeric [`DecisionInputs`] the pipeline consumes.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{AnalysisError, DecisionInputs, SweepPlan};
use crate::domain::foundation::{CriterionDirection, Ifn};

use super::vocabulary::{ResolvedVocabulary, Vocabularies, VocabularyKind};

/// A decision maker and the label rating their importance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionMaker {
    pub name: String,
    pub importance: String,
}

impl DecisionMaker {
    pub fn new(name: impl Into<String>, importance: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            importance: importance.into(),
        }
    }
}

/// A criterion and whether larger values are better.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    #[serde(default)]
    pub direction: CriterionDirection,
}

impl Criterion {
    pub fn new(name: impl Into<String>, direction: CriterionDirection) -> Self {
        Self {
            name: name.into(),
            direction,
        }
    }
}

/// Complete linguistic problem description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionProblem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub vocabularies: Vocabularies,
    pub decision_makers: Vec<DecisionMaker>,
    pub criteria: Vec<Criterion>,
    pub alternatives: Vec<String>,
    /// `[decision maker][criterion]` criterion labels.
    pub criteria_importance: Vec<Vec<String>>,
    /// `[decision maker][alternative][criterion]` alternative labels.
    pub ratings: Vec<Vec<Vec<String>>>,
    #[serde(default)]
    pub sweep: SweepPlan,
}

impl DecisionProblem {
    /// Creates a builder for constructing a problem in code.
    pub fn builder() -> DecisionProblemBuilder {
        DecisionProblemBuilder::new()
    }

    pub fn decision_maker_names(&self) -> Vec<&str> {
        self.decision_makers.iter().map(|dm| dm.name.as_str()).collect()
    }

    pub fn criterion_names(&self) -> Vec<&str> {
        self.criteria.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn alternative_names(&self) -> Vec<&str> {
        self.alternatives.iter().map(String::as_str).collect()
    }

    /// Maps every label through its vocabulary.
    ///
    /// Tables are checked against the declared decision makers, alternatives
    /// and criteria before any label is looked up.
    pub fn resolve(&self) -> Result<DecisionInputs, AnalysisError> {
        self.check_shapes()?;

        let decision_maker = self.vocabularies.decision_maker.resolve(VocabularyKind::DecisionMaker)?;
        let criterion = self.vocabularies.criterion.resolve(VocabularyKind::Criterion)?;
        let alternative = self.vocabularies.alternative.resolve(VocabularyKind::Alternative)?;

        let decision_maker_importance = self
            .decision_makers
            .iter()
            .map(|dm| decision_maker.lookup(&dm.importance))
            .collect::<Result<Vec<_>, _>>()?;

        let criteria_importance = self
            .criteria_importance
            .iter()
            .map(|row| lookup_row(&criterion, row))
            .collect::<Result<Vec<_>, _>>()?;

        let ratings = self
            .ratings
            .iter()
            .map(|table| {
                table
                    .iter()
                    .map(|row| lookup_row(&alternative, row))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DecisionInputs {
            decision_maker_importance,
            criteria_importance,
            ratings,
            criterion_directions: self.criteria.iter().map(|c| c.direction).collect(),
            sweep: self.sweep.clone(),
        })
    }

    fn check_shapes(&self) -> Result<(), AnalysisError> {
        let decision_makers = self.decision_makers.len();
        let alternatives = self.alternatives.len();
        let criteria = self.criteria.len();

        if decision_makers == 0 {
            return Err(AnalysisError::EmptyDimension {
                dimension: "decision makers",
            });
        }
        if alternatives == 0 {
            return Err(AnalysisError::EmptyDimension {
                dimension: "alternatives",
            });
        }
        if criteria == 0 {
            return Err(AnalysisError::EmptyDimension { dimension: "criteria" });
        }

        check_len("criteria_importance", "decision makers", decision_makers, self.criteria_importance.len())?;
        for row in &self.criteria_importance {
            check_len("criteria_importance", "criteria", criteria, row.len())?;
        }

        check_len("ratings", "decision makers", decision_makers, self.ratings.len())?;
        for table in &self.ratings {
            check_len("ratings", "alternatives", alternatives, table.len())?;
            for row in table {
                check_len("ratings", "criteria", criteria, row.len())?;
            }
        }
        Ok(())
    }
}

fn lookup_row(
    vocabulary: &ResolvedVocabulary,
    labels: &[String],
) -> Result<Vec<Ifn>, AnalysisError> {
    labels.iter().map(|label| vocabulary.lookup(label)).collect()
}

fn check_len(
    table: &str,
    dimension: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), AnalysisError> {
    if expected != actual {
        return Err(AnalysisError::shape_mismatch(table, dimension, expected, actual));
    }
    Ok(())
}

/// Builder for constructing DecisionProblem instances.
#[derive(Debug, Default)]
pub struct DecisionProblemBuilder {
    problem: DecisionProblem,
}

impl DecisionProblemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.problem.name = Some(name.into());
        self
    }

    pub fn vocabularies(mut self, vocabularies: Vocabularies) -> Self {
        self.problem.vocabularies = vocabularies;
        self
    }

    pub fn decision_maker(mut self, name: impl Into<String>, importance: impl Into<String>) -> Self {
        self.problem.decision_makers.push(DecisionMaker::new(name, importance));
        self
    }

    pub fn criterion(mut self, name: impl Into<String>, direction: CriterionDirection) -> Self {
        self.problem.criteria.push(Criterion::new(name, direction));
        self
    }

    pub fn alternatives(mut self, names: Vec<impl Into<String>>) -> Self {
        self.problem.alternatives = names.into_iter().map(Into::into).collect();
        self
    }

    /// Appends the criterion-importance row of the next decision maker.
    pub fn criteria_importance(mut self, labels: Vec<impl Into<String>>) -> Self {
        self.problem
            .criteria_importance
            .push(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Appends the `[alternative][criterion]` table of the next decision maker.
    pub fn ratings(mut self, table: Vec<Vec<&str>>) -> Self {
        self.problem.ratings.push(
            table
                .into_iter()
                .map(|row| row.into_iter().map(String::from).collect())
                .collect(),
        );
        self
    }

    pub fn sweep(mut self, sweep: SweepPlan) -> Self {
        self.problem.sweep = sweep;
        self
    }

    pub fn build(self) -> DecisionProblem {
        self.problem
    }
}
