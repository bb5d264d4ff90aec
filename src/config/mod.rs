//! Application configuration module
//!
//! This module provides type-safe configuration loading using the `config`
//! and `dotenvy` crates. Values come from an optional configuration file and
//! from environment variables with the `IFS_TOPSIS` prefix, nested values
//! separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use ifs_topsis::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Tie policy: {:?}", config.analysis.tie_policy);
//! ```

mod analysis;
mod error;
mod logging;
mod output;

pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use output::OutputConfig;

use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming an optional configuration file
pub const CONFIG_FILE_ENV: &str = "IFS_TOPSIS_CONFIG";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Tie handling and sweep parallelism
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Report serialization
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads the file named by `IFS_TOPSIS_CONFIG`, if set
    /// 3. Overlays environment variables with `IFS_TOPSIS` prefix
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `IFS_TOPSIS__ANALYSIS__TIE_POLICY=ordinal` -> `analysis.tie_policy = ordinal`
    /// - `IFS_TOPSIS__OUTPUT__FORMAT=yaml` -> `output.format = yaml`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the named file is missing or malformed, or
    /// values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let file = env::var_os(CONFIG_FILE_ENV).map(PathBuf::from);
        Self::load_from(file.as_deref())
    }

    /// Load configuration from an explicit file plus the environment
    ///
    /// The file format follows its extension (YAML, TOML or JSON).
    pub fn load_from(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("IFS_TOPSIS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration and validate it in one step
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationFailed` when loading succeeds but a
    /// value is out of range.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`AppConfig::load_from`], followed by [`AppConfig::validate`]
    pub fn load_validated_from(file: Option<&Path>) -> Result<Self, ConfigError> {
        let config = Self::load_from(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.analysis.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ReportFormat;
    use crate::domain::analysis::TiePolicy;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("IFS_TOPSIS__ANALYSIS__TIE_POLICY");
        env::remove_var("IFS_TOPSIS__ANALYSIS__TIE_TOLERANCE");
        env::remove_var("IFS_TOPSIS__ANALYSIS__PARALLEL_SWEEP");
        env::remove_var("IFS_TOPSIS__OUTPUT__FORMAT");
        env::remove_var("IFS_TOPSIS__LOGGING__FORMAT");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load_from(None);

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.analysis.tie_policy, TiePolicy::Competition);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_environment_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("IFS_TOPSIS__ANALYSIS__TIE_POLICY", "ordinal");
        env::set_var("IFS_TOPSIS__ANALYSIS__PARALLEL_SWEEP", "false");
        env::set_var("IFS_TOPSIS__OUTPUT__FORMAT", "yaml");
        let result = AppConfig::load_from(None);
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.analysis.tie_policy, TiePolicy::Ordinal);
        assert!(!config.analysis.parallel_sweep);
        assert_eq!(config.output.format, ReportFormat::Yaml);
    }

    #[test]
    fn test_file_values_are_overridden_by_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ifs-topsis.yaml");
        fs::write(
            &path,
            "analysis:\n  tie_policy: ordinal\n  tie_tolerance: 1.0e-9\noutput:\n  pretty: false\n",
        )
        .unwrap();

        env::set_var("IFS_TOPSIS__ANALYSIS__TIE_POLICY", "competition");
        let result = AppConfig::load_from(Some(&path));
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.analysis.tie_policy, TiePolicy::Competition);
        assert_eq!(config.analysis.tie_tolerance, 1.0e-9);
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_missing_file_fails() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let result = AppConfig::load_from(Some(&temp_dir.path().join("absent.yaml")));

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_load_validated_reports_out_of_range_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ifs-topsis.yaml");
        fs::write(&path, "analysis:\n  tie_tolerance: 0.5\n").unwrap();

        assert!(AppConfig::load_from(Some(&path)).is_ok());
        let result = AppConfig::load_validated_from(Some(&path));

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::InvalidTieTolerance(t))) if t == 0.5
        ));
    }

    #[test]
    fn test_load_validated_accepts_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        assert!(AppConfig::load_validated_from(None).is_ok());
    }

    #[test]
    fn test_validate_rejects_large_tolerance() {
        let mut config = AppConfig::default();
        config.analysis.tie_tolerance = 0.01;

        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidTieTolerance(0.01))
        );
    }
}
