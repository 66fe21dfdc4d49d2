//! Lead Scoring Configuration
//!
//! Category point values are fixed by the extractor. What a tenant can tune
//! is where a score crosses into warm, hot and qualified.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::qualification;
use crate::ConfigError;

/// Scoring configuration, usually the `scoring` section of settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Qualification thresholds (score ranges)
    #[serde(default)]
    pub qualification_thresholds: QualificationThresholds,
}

/// Lowest score of each qualification level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualificationThresholds {
    #[serde(default = "default_warm")]
    pub warm: u32,
    #[serde(default = "default_hot")]
    pub hot: u32,
    #[serde(default = "default_qualified")]
    pub qualified: u32,
}

fn default_warm() -> u32 {
    qualification::WARM
}
fn default_hot() -> u32 {
    qualification::HOT
}
fn default_qualified() -> u32 {
    qualification::QUALIFIED
}

impl Default for QualificationThresholds {
    fn default() -> Self {
        Self {
            warm: default_warm(),
            hot: default_hot(),
            qualified: default_qualified(),
        }
    }
}

impl ScoringConfig {
    /// Load from a standalone YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileNotFound(format!("{}: {}", path.display(), e)))?;

        let config: Self =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Thresholds must strictly ascend and stay within the score range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.qualification_thresholds;
        if !(t.warm < t.hot && t.hot < t.qualified) {
            return Err(ConfigError::InvalidValue {
                field: "scoring.qualification_thresholds".to_string(),
                message: format!(
                    "must ascend warm < hot < qualified, got {} / {} / {}",
                    t.warm, t.hot, t.qualified
                ),
            });
        }
        if t.qualified > nestiq_core::MAX_LEAD_SCORE {
            return Err(ConfigError::InvalidValue {
                field: "scoring.qualification_thresholds.qualified".to_string(),
                message: format!(
                    "must not exceed {}, got {}",
                    nestiq_core::MAX_LEAD_SCORE,
                    t.qualified
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_thresholds() {
        let config = ScoringConfig::default();
        let t = &config.qualification_thresholds;
        assert_eq!((t.warm, t.hot, t.qualified), (30, 60, 80));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_unordered_thresholds() {
        let config = ScoringConfig {
            qualification_thresholds: QualificationThresholds {
                warm: 50,
                hot: 40,
                qualified: 80,
            },
        };
        assert!(config.validate().is_err());

        let config = ScoringConfig {
            qualification_thresholds: QualificationThresholds {
                warm: 30,
                hot: 60,
                qualified: 120,
            },
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_yaml_with_partial_thresholds() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "qualification_thresholds:\n  hot: 55").unwrap();

        let config = ScoringConfig::load(file.path()).unwrap();
        assert_eq!(config.qualification_thresholds.warm, 30);
        assert_eq!(config.qualification_thresholds.hot, 55);
        assert_eq!(config.qualification_thresholds.qualified, 80);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ScoringConfig::load("/nonexistent/scoring.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
