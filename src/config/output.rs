//! Report output configuration

use serde::Deserialize;

use crate::adapters::ReportFormat;

/// Report output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: ReportFormat,

    /// Indent JSON reports
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            pretty: default_pretty(),
        }
    }
}

fn default_pretty() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_defaults() {
        let config = OutputConfig::default();
        assert_eq!(config.format, ReportFormat::Json);
        assert!(config.pretty);
    }
}
