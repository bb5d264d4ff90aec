//! Report Adapters
//!
//! Implementations of the ReportWriter port.

mod stream_report_writer;

pub use stream_report_writer::{ReportFormat, StreamReportWriter};
