//! Main settings module

use config::{Config, Environment, File};
use nestiq_core::Jurisdiction;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{mortgage, tax};
use crate::{ConfigError, ScoringConfig};

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    #[default]
    Development,
    Staging,
    Production,
}

/// Main engine settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Logging configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Lead qualification thresholds
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Transfer tax defaults
    #[serde(default)]
    pub tax: TaxConfig,

    /// Mortgage estimate defaults
    #[serde(default)]
    pub mortgage: MortgageConfig,

    /// Which calculator tools the agent exposes
    #[serde(default)]
    pub tools: ToolsEnabled,
}

/// Transfer tax configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxConfig {
    /// Calculator code used when a request names none
    #[serde(default = "default_jurisdiction")]
    pub default_jurisdiction: String,

    /// ISO currency code for formatted amounts
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_jurisdiction() -> String {
    tax::DEFAULT_JURISDICTION.to_string()
}

fn default_currency() -> String {
    tax::DEFAULT_CURRENCY.to_string()
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            default_jurisdiction: default_jurisdiction(),
            currency: default_currency(),
        }
    }
}

/// Mortgage estimate configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageConfig {
    #[serde(default = "default_purchase_price")]
    pub purchase_price: f64,

    #[serde(default = "default_down_payment_percent")]
    pub down_payment_percent: f64,

    #[serde(default = "default_annual_rate_percent")]
    pub annual_rate_percent: f64,

    #[serde(default = "default_amortization_years")]
    pub amortization_years: u32,
}

fn default_purchase_price() -> f64 {
    mortgage::DEFAULT_PURCHASE_PRICE
}
fn default_down_payment_percent() -> f64 {
    mortgage::DEFAULT_DOWN_PAYMENT_PERCENT
}
fn default_annual_rate_percent() -> f64 {
    mortgage::DEFAULT_ANNUAL_RATE_PERCENT
}
fn default_amortization_years() -> u32 {
    mortgage::DEFAULT_AMORTIZATION_YEARS
}

impl Default for MortgageConfig {
    fn default() -> Self {
        Self {
            purchase_price: default_purchase_price(),
            down_payment_percent: default_down_payment_percent(),
            annual_rate_percent: default_annual_rate_percent(),
            amortization_years: default_amortization_years(),
        }
    }
}

/// Tool toggles per agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsEnabled {
    #[serde(default = "default_true")]
    pub property_tax: bool,

    #[serde(default = "default_true")]
    pub mortgage_calc: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ToolsEnabled {
    fn default() -> Self {
        Self {
            property_tax: true,
            mortgage_calc: true,
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level or full `EnvFilter` directive, e.g. `info,nestiq_agent=debug`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring.validate()?;
        self.validate_tax()?;
        self.validate_mortgage()?;
        Ok(())
    }

    /// Unknown jurisdiction codes are allowed; they select the generic estimator
    fn validate_tax(&self) -> Result<(), ConfigError> {
        if !Jurisdiction::is_known_code(&self.tax.default_jurisdiction) {
            tracing::warn!(
                code = %self.tax.default_jurisdiction,
                "Unknown default jurisdiction, transfer tax will use the generic estimate"
            );
        }

        let currency = &self.tax.currency;
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidValue {
                field: "tax.currency".to_string(),
                message: format!("Expected a 3-letter ISO code, got '{}'", currency),
            });
        }

        Ok(())
    }

    fn validate_mortgage(&self) -> Result<(), ConfigError> {
        let m = &self.mortgage;

        if !m.purchase_price.is_finite() || m.purchase_price < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "mortgage.purchase_price".to_string(),
                message: format!("Must be a non-negative amount, got {}", m.purchase_price),
            });
        }

        if !(0.0..=100.0).contains(&m.down_payment_percent) {
            return Err(ConfigError::InvalidValue {
                field: "mortgage.down_payment_percent".to_string(),
                message: format!("Must be between 0 and 100, got {}", m.down_payment_percent),
            });
        }

        if !(0.0..=100.0).contains(&m.annual_rate_percent) {
            return Err(ConfigError::InvalidValue {
                field: "mortgage.annual_rate_percent".to_string(),
                message: format!("Must be between 0 and 100, got {}", m.annual_rate_percent),
            });
        }

        if m.amortization_years == 0 || m.amortization_years > mortgage::MAX_AMORTIZATION_YEARS {
            return Err(ConfigError::InvalidValue {
                field: "mortgage.amortization_years".to_string(),
                message: format!(
                    "Must be between 1 and {}, got {}",
                    mortgage::MAX_AMORTIZATION_YEARS,
                    m.amortization_years
                ),
            });
        }

        Ok(())
    }
}

/// Load settings from `config/` and the environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (`NESTIQ__` prefix, `__` between sections)
/// 2. config/{env}.yaml (if env specified)
/// 3. config/default.yaml
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from("config", env)
}

/// Load settings from a specific config directory
pub fn load_settings_from<P: AsRef<Path>>(
    dir: P,
    env: Option<&str>,
) -> Result<Settings, ConfigError> {
    let dir = dir.as_ref();
    let mut builder = Config::builder();

    // Load default config
    builder = builder.add_source(File::from(dir.join("default")).required(false));

    // Load environment-specific config
    if let Some(env_name) = env {
        builder = builder.add_source(File::from(dir.join(env_name)).required(false));
    }

    // Load from environment variables
    builder = builder.add_source(
        Environment::with_prefix("NESTIQ")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    // Validate
    settings.validate()?;

    tracing::debug!(
        environment = ?settings.environment,
        jurisdiction = %settings.tax.default_jurisdiction,
        "Settings loaded"
    );

    Ok(settings)
}
