//! Configuration management for the lead qualification engine
//!
//! Supports loading configuration from:
//! - YAML files under `config/` (`default`, then the environment overlay)
//! - Environment variables (`NESTIQ__` prefix, `__` between sections)
//! - A standalone scoring thresholds file
//!
//! Rate tables are statutory and compiled into the calculators; only tenant
//! defaults (jurisdiction code, currency, mortgage inputs, thresholds) are
//! configurable here.

pub mod constants;
pub mod observability;
pub mod scoring;
pub mod settings;

pub use observability::init_tracing;
pub use scoring::{QualificationThresholds, ScoringConfig};
pub use settings::{
    load_settings, load_settings_from, MortgageConfig, ObservabilityConfig, RuntimeEnvironment,
    Settings, TaxConfig, ToolsEnabled,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
