//! Problem Module - Linguistic problem descriptions and their vocabularies.

mod decision_problem;
mod vocabulary;

pub use decision_problem::{Criterion, DecisionMaker, DecisionProblem, DecisionProblemBuilder};
pub use vocabulary::{ResolvedVocabulary, TermValue, Vocabularies, Vocabulary, VocabularyKind};
