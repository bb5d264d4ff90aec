//! Storage Adapters
//!
//! Implementations of the ProblemReader port.
//!
//! ## Available Adapters
//!
//! - **FileProblemReader** - Reads YAML or JSON problem files from disk
//! - **InMemoryProblemReader** - Serves problems from memory (testing/embedding)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileProblemReader, InMemoryProblemReader};
//!
//! // Production: file-based reader
//! let reader = FileProblemReader::new();
//!
//! // Testing: in-memory reader
//! let reader = InMemoryProblemReader::new();
//! reader.insert("demo", problem);
//! ```

mod file_problem_reader;
mod in_memory_problem_reader;

pub use file_problem_reader::FileProblemReader;
pub use in_memory_problem_reader::InMemoryProblemReader;
