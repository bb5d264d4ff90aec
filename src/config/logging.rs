//! Logging configuration

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::ValidationError;

/// Log output style
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, multi-line
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info,ifs_topsis=debug`
    #[serde(default = "default_filter")]
    pub filter: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Install the global subscriber. Logs go to stderr.
    ///
    /// Does nothing if a subscriber is already installed.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the filter does not parse.
    pub fn init(&self) -> Result<(), ValidationError> {
        let filter = self.env_filter()?;
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr);

        let _ = match self.format {
            LogFormat::Pretty => builder.pretty().try_init(),
            LogFormat::Json => builder.json().try_init(),
        };
        Ok(())
    }

    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.env_filter().map(|_| ())
    }

    fn env_filter(&self) -> Result<EnvFilter, ValidationError> {
        if self.filter.trim().is_empty() {
            return Err(ValidationError::EmptyLogFilter);
        }
        EnvFilter::try_new(&self.filter).map_err(|err| ValidationError::InvalidLogFilter {
            filter: self.filter.clone(),
            reason: err.to_string(),
        })
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
        }
    }
}

fn default_filter() -> String {
    "info,ifs_topsis=debug".to_string()
}
