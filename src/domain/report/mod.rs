//! Report Module - Named, serialisable result of one ranking run.

mod ranking_report;

pub use ranking_report::{RankingReport, SensitivitySummary, Standing, UnstableEntry};
