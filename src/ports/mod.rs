//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ProblemReader` - Loads problem descriptions
//! - `ReportWriter` - Emits ranking reports

mod problem_reader;
mod report_writer;

pub use problem_reader::{ProblemReader, ProblemReaderError};
pub use report_writer::{ReportWriter, ReportWriterError};
