//! Configuration for the report generator

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::constants;
use crate::error::ReportError;

// =============================================================================
// File-based Configuration (config.toml)
// =============================================================================

/// Configuration loaded from config.toml. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub policy: PolicyConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// `[policy]` section
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    /// Admin priority flag threshold (strictly greater)
    #[serde(default)]
    pub priority_threshold: Option<f64>,
    /// Standard user visibility limit (inclusive)
    #[serde(default)]
    pub visibility_limit: Option<f64>,
}

/// `[render]` section
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    #[serde(default)]
    pub escaping: Option<Escaping>,
    /// Treat unknown roles and formats as errors
    #[serde(default)]
    pub strict: bool,
}

impl FileConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).with_context(|| {
            "Failed to parse config.toml. Check for:\n\
             - Unknown sections or keys (only [policy] and [render] are read)\n\
             - Numbers given as strings (priority_threshold = 1000, not \"1000\")\n\
             - escaping values other than \"escaped\" or \"literal\""
        })
    }

    /// Load the config file if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

// =============================================================================
// Runtime Configuration
// =============================================================================

/// How user-supplied text is embedded in the output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Escaping {
    /// Quote CSV fields and entity-escape HTML text where needed
    #[default]
    Escaped,
    /// Interpolate text exactly as given
    Literal,
}

/// Visibility thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Policy {
    pub priority_threshold: f64,
    pub visibility_limit: f64,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            priority_threshold: constants::PRIORITY_THRESHOLD,
            visibility_limit: constants::VISIBILITY_LIMIT,
        }
    }
}

impl Policy {
    /// Build a policy, rejecting thresholds that cannot be compared
    pub fn new(
        priority_threshold: f64,
        visibility_limit: f64,
    ) -> std::result::Result<Self, ReportError> {
        for (name, value) in [
            ("priority_threshold", priority_threshold),
            ("visibility_limit", visibility_limit),
        ] {
            if !value.is_finite() {
                return Err(ReportError::InvalidPolicy(format!(
                    "{} must be a finite number, got {}",
                    name, value
                )));
            }
        }

        Ok(Self {
            priority_threshold,
            visibility_limit,
        })
    }
}

/// Main configuration struct with defaults applied
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Config {
    pub policy: Policy,
    pub escaping: Escaping,
    pub strict: bool,
}

impl Config {
    /// Create config from file config, filling unset keys with defaults
    pub fn from_file(file_config: &FileConfig) -> Result<Self> {
        let defaults = Policy::default();
        let policy = Policy::new(
            file_config
                .policy
                .priority_threshold
                .unwrap_or(defaults.priority_threshold),
            file_config
                .policy
                .visibility_limit
                .unwrap_or(defaults.visibility_limit),
        )
        .context("Invalid [policy] section in config")?;

        Ok(Self {
            policy,
            escaping: file_config.render.escaping.unwrap_or_default(),
            strict: file_config.render.strict,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let file = FileConfig::parse("").unwrap();
        let config = Config::from_file(&file).unwrap();

        assert_eq!(config.policy.priority_threshold, 1000.0);
        assert_eq!(config.policy.visibility_limit, 500.0);
        assert_eq!(config.escaping, Escaping::Escaped);
        assert!(!config.strict);
    }

    #[test]
    fn test_overrides_are_applied() {
        let file = FileConfig::parse(
            r#"
            [policy]
            priority_threshold = 2500
            visibility_limit = 99.5

            [render]
            escaping = "literal"
            strict = true
            "#,
        )
        .unwrap();
        let config = Config::from_file(&file).unwrap();

        assert_eq!(config.policy.priority_threshold, 2500.0);
        assert_eq!(config.policy.visibility_limit, 99.5);
        assert_eq!(config.escaping, Escaping::Literal);
        assert!(config.strict);
    }

    #[test]
    fn test_partial_policy_keeps_other_default() {
        let file = FileConfig::parse("[policy]\nvisibility_limit = 10\n").unwrap();
        let config = Config::from_file(&file).unwrap();

        assert_eq!(config.policy.priority_threshold, 1000.0);
        assert_eq!(config.policy.visibility_limit, 10.0);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(FileConfig::parse("[policy]\nlimit = 10\n").is_err());
        assert!(FileConfig::parse("[render]\nescaping = \"html\"\n").is_err());
    }

    #[test]
    fn test_non_finite_threshold_is_rejected() {
        let err = Policy::new(f64::NAN, 500.0).unwrap_err();
        assert!(matches!(err, ReportError::InvalidPolicy(_)));
        assert!(Policy::new(1000.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let file = FileConfig::load_or_default(&dir.path().join("config.toml")).unwrap();
        assert_eq!(Config::from_file(&file).unwrap(), Config::default());
    }
}
