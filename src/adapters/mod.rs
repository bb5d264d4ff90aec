//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Problem readers (filesystem, in-memory)
//! - `report` - Report writers (JSON/YAML streams)

pub mod report;
pub mod storage;

pub use report::{ReportFormat, StreamReportWriter};
pub use storage::{FileProblemReader, InMemoryProblemReader};
