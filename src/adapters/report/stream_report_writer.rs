//! Stream Report Writer Adapter
//!
//! Serializes reports as JSON or YAML onto any `io::Write`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

use crate::domain::report::RankingReport;
use crate::ports::{ReportWriter, ReportWriterError};

/// Serialization format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Yaml,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Writes each report as one document
#[derive(Debug)]
pub struct StreamReportWriter<W: Write> {
    writer: W,
    format: ReportFormat,
    pretty: bool,
}

impl<W: Write> StreamReportWriter<W> {
    pub fn new(writer: W, format: ReportFormat) -> Self {
        Self {
            writer,
            format,
            pretty: true,
        }
    }

    /// Indent JSON output. YAML is always block style.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn render(&self, report: &RankingReport) -> Result<String, ReportWriterError> {
        let rendered = match (self.format, self.pretty) {
            (ReportFormat::Json, true) => serde_json::to_string_pretty(report)
                .map_err(|e| ReportWriterError::SerializationFailed(e.to_string()))?,
            (ReportFormat::Json, false) => serde_json::to_string(report)
                .map_err(|e| ReportWriterError::SerializationFailed(e.to_string()))?,
            (ReportFormat::Yaml, _) => serde_yaml::to_string(report)
                .map_err(|e| ReportWriterError::SerializationFailed(e.to_string()))?,
        };
        Ok(rendered)
    }
}

impl<W: Write> ReportWriter for StreamReportWriter<W> {
    fn write_report(&mut self, report: &RankingReport) -> Result<(), ReportWriterError> {
        let mut rendered = self.render(report)?;
        if !rendered.ends_with('\n') {
            rendered.push('\n');
        }

        self.writer
            .write_all(rendered.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|e| ReportWriterError::IoError(e.to_string()))
    }
}
