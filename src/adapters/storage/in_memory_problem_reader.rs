//! In-Memory Problem Reader Adapter
//!
//! Serves problems registered under a source name.
//! Useful for testing and embedding.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::domain::problem::DecisionProblem;
use crate::ports::{ProblemReader, ProblemReaderError};

/// In-memory problem store
#[derive(Debug, Clone, Default)]
pub struct InMemoryProblemReader {
    problems: Arc<RwLock<HashMap<String, DecisionProblem>>>,
}

impl InMemoryProblemReader {
    /// Create an empty reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a problem under `source`, replacing any previous one
    pub fn insert(&self, source: impl Into<String>, problem: DecisionProblem) {
        if let Ok(mut problems) = self.problems.write() {
            problems.insert(source.into(), problem);
        }
    }

    /// Get the number of stored problems
    pub fn len(&self) -> usize {
        self.problems.read().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProblemReader for InMemoryProblemReader {
    fn read(&self, source: &str) -> Result<DecisionProblem, ProblemReaderError> {
        let problems = self
            .problems
            .read()
            .map_err(|e| ProblemReaderError::IoError(e.to_string()))?;

        problems
            .get(source)
            .cloned()
            .ok_or_else(|| ProblemReaderError::NotFound(PathBuf::from(source)))
    }
}
