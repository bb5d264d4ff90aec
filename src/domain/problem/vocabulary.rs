//! Linguistic vocabularies mapping labels to fuzzy values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::analysis::AnalysisError;
use crate::domain::foundation::{Ifn, ValidationError};

/// Which vocabulary a label is looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VocabularyKind {
    DecisionMaker,
    Criterion,
    Alternative,
}

impl VocabularyKind {
    pub fn name(&self) -> &'static str {
        match self {
            VocabularyKind::DecisionMaker => "decision_maker",
            VocabularyKind::Criterion => "criterion",
            VocabularyKind::Alternative => "alternative",
        }
    }
}

impl fmt::Display for VocabularyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Raw `[μ, ν]` or `[μ, ν, π]` term value. A supplied π is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct TermValue {
    pub membership: f64,
    pub non_membership: f64,
}

impl TermValue {
    pub fn new(membership: f64, non_membership: f64) -> Self {
        Self {
            membership,
            non_membership,
        }
    }

    pub fn to_ifn(&self) -> Result<Ifn, ValidationError> {
        Ifn::try_new(self.membership, self.non_membership)
    }
}

impl TryFrom<Vec<f64>> for TermValue {
    type Error = ValidationError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        match values.as_slice() {
            [membership, non_membership] | [membership, non_membership, _] => {
                Ok(Self::new(*membership, *non_membership))
            }
            _ => Err(ValidationError::invalid_format(
                "term",
                format!("expected 2 or 3 numbers, got {}", values.len()),
            )),
        }
    }
}

impl From<TermValue> for Vec<f64> {
    fn from(value: TermValue) -> Self {
        vec![value.membership, value.non_membership]
    }
}

/// Label → term value table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    terms: BTreeMap<String, TermValue>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a term.
    pub fn with_term(mut self, label: impl Into<String>, membership: f64, non_membership: f64) -> Self {
        self.terms
            .insert(label.into(), TermValue::new(membership, non_membership));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.terms.contains_key(label)
    }

    /// Validates every term and returns the label → IFN lookup.
    pub fn resolve(&self, kind: VocabularyKind) -> Result<ResolvedVocabulary, AnalysisError> {
        let terms = self
            .terms
            .iter()
            .map(|(label, value)| {
                value
                    .to_ifn()
                    .map(|ifn| (label.clone(), ifn))
                    .map_err(|e| {
                        AnalysisError::invalid_fuzzy_number(
                            format!("vocabularies.{}.{}", kind, label),
                            e,
                        )
                    })
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        Ok(ResolvedVocabulary { kind, terms })
    }
}

/// A validated vocabulary.
#[derive(Debug, Clone)]
pub struct ResolvedVocabulary {
    kind: VocabularyKind,
    terms: BTreeMap<String, Ifn>,
}

impl ResolvedVocabulary {
    pub fn lookup(&self, label: &str) -> Result<Ifn, AnalysisError> {
        self.terms
            .get(label)
            .copied()
            .ok_or_else(|| AnalysisError::unknown_term(self.kind.name(), label))
    }
}

/// The three vocabularies of a problem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vocabularies {
    /// Rates how much each decision maker's opinion counts.
    pub decision_maker: Vocabulary,
    /// Rates criterion importance.
    pub criterion: Vocabulary,
    /// Rates alternatives against criteria.
    pub alternative: Vocabulary,
}
