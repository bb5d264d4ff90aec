//! File-based Problem Reader Adapter
//!
//! Loads problem descriptions from YAML (`.yaml`, `.yml`) or JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::problem::DecisionProblem;
use crate::ports::{ProblemReader, ProblemReaderError};

/// Document syntax, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentSyntax {
    Yaml,
    Json,
}

impl DocumentSyntax {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                DocumentSyntax::Yaml
            }
            _ => DocumentSyntax::Json,
        }
    }
}

/// Reads problems from the filesystem
#[derive(Debug, Clone, Default)]
pub struct FileProblemReader {
    base_path: Option<PathBuf>,
}

impl FileProblemReader {
    /// Create a reader resolving sources against the working directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader resolving relative sources against `base_path`
    ///
    /// # Example
    /// ```ignore
    /// let reader = FileProblemReader::rooted_at("./problems");
    /// let problem = reader.read("suppliers.yaml")?;
    /// ```
    pub fn rooted_at<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: Some(base_path.as_ref().to_path_buf()),
        }
    }

    fn resolve_path(&self, source: &str) -> PathBuf {
        match &self.base_path {
            Some(base) => base.join(source),
            None => PathBuf::from(source),
        }
    }
}

impl ProblemReader for FileProblemReader {
    fn read(&self, source: &str) -> Result<DecisionProblem, ProblemReaderError> {
        let path = self.resolve_path(source);

        if !path.is_file() {
            return Err(ProblemReaderError::NotFound(path));
        }

        let contents =
            fs::read_to_string(&path).map_err(|e| ProblemReaderError::IoError(e.to_string()))?;

        let syntax = DocumentSyntax::for_path(&path);
        debug!(path = %path.display(), ?syntax, "Parsing problem file");

        match syntax {
            DocumentSyntax::Yaml => serde_yaml::from_str(&contents)
                .map_err(|e| ProblemReaderError::ParseFailed(e.to_string())),
            DocumentSyntax::Json => serde_json::from_str(&contents)
                .map_err(|e| ProblemReaderError::ParseFailed(e.to_string())),
        }
    }
}
