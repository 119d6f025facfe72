//! CLI configuration management.
//!
//! Handles loading of `dualdiff.toml` with environment variable override
//! support. A missing file is not an error: defaults apply.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Default evaluation points. Zero is excluded: it is a pole of the
/// reciprocal and negative-power checks.
const DEFAULT_POINTS: [f64; 4] = [0.5, 1.0, 2.0, 3.0];

/// CLI configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Points at which `eval` and `check` run when none are given
    #[serde(default = "default_points")]
    pub points: Vec<f64>,

    /// Relative tolerance for `check`
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_points() -> Vec<f64> {
    DEFAULT_POINTS.to_vec()
}

fn default_tolerance() -> f64 {
    1e-9
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            points: default_points(),
            tolerance: default_tolerance(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    ///
    /// - `DUALDIFF_LOG_LEVEL`
    /// - `DUALDIFF_TOLERANCE`
    /// - `DUALDIFF_POINTS` (comma-separated)
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup (environment in production).
    pub(crate) fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("DUALDIFF_LOG_LEVEL") {
            self.log_level = level;
        }

        if let Some(tolerance) = lookup("DUALDIFF_TOLERANCE") {
            self.tolerance = tolerance.trim().parse().map_err(|_| {
                ConfigError::Parse(format!("DUALDIFF_TOLERANCE: invalid number '{}'", tolerance))
            })?;
        }

        if let Some(points) = lookup("DUALDIFF_POINTS") {
            self.points = parse_points(&points)?;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            errors.push(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            ));
        }

        if self.points.is_empty() {
            errors.push("points cannot be empty".to_string());
        }
        for p in self.points.iter().filter(|p| !p.is_finite()) {
            errors.push(format!("points must be finite, got {}", p));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Apply command-line overrides and re-validate
    ///
    /// An empty `points` keeps the configured points.
    pub fn with_cli_overrides(
        mut self,
        tolerance: Option<f64>,
        points: Vec<f64>,
    ) -> Result<Self, ConfigError> {
        if let Some(tolerance) = tolerance {
            self.tolerance = tolerance;
        }
        if !points.is_empty() {
            self.points = points;
        }
        self.validate()?;
        Ok(self)
    }

    /// Load from file (or defaults) with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }
}

/// Parse a comma-separated list of points.
pub fn parse_points(s: &str) -> Result<Vec<f64>, ConfigError> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            p.parse::<f64>()
                .map_err(|_| ConfigError::Parse(format!("invalid point '{}'", p)))
        })
        .collect()
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file or environment
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.points, vec![0.5, 1.0, 2.0, 3.0]);
        assert_eq!(config.tolerance, 1e-9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = CliConfig::from_toml_str("tolerance = 1e-6\n").unwrap();
        assert_eq!(config.tolerance, 1e-6);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.points, default_points());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = CliConfig::from_toml_str("tolerence = 1e-6\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"debug\"").unwrap();
        writeln!(file, "points = [0.1, 0.2]").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.points, vec![0.1, 0.2]);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_overrides() {
        let lookup = lookup_from(&[
            ("DUALDIFF_LOG_LEVEL", "warn"),
            ("DUALDIFF_TOLERANCE", "1e-4"),
            ("DUALDIFF_POINTS", "1.5, -2, 4"),
        ]);
        let config = CliConfig::default().with_overrides(lookup).unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.tolerance, 1e-4);
        assert_eq!(config.points, vec![1.5, -2.0, 4.0]);
    }

    #[test]
    fn test_invalid_tolerance_override() {
        let lookup = lookup_from(&[("DUALDIFF_TOLERANCE", "tiny")]);
        let result = CliConfig::default().with_overrides(lookup);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = CliConfig {
            log_level: "loud".to_string(),
            points: vec![1.0, f64::NAN],
            tolerance: -1.0,
        };

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 3);
                assert!(errors.iter().any(|e| e.contains("log_level")));
                assert!(errors.iter().any(|e| e.contains("tolerance")));
                assert!(errors.iter().any(|e| e.contains("points must be finite")));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_empty_points() {
        let config = CliConfig {
            points: Vec::new(),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cli_overrides_applied() {
        let config = CliConfig::default()
            .with_cli_overrides(Some(1e-6), vec![-1.0, 4.0])
            .unwrap();
        assert_eq!(config.tolerance, 1e-6);
        assert_eq!(config.points, vec![-1.0, 4.0]);

        let config = CliConfig::default()
            .with_cli_overrides(None, Vec::new())
            .unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_cli_tolerance_override_validated() {
        for tolerance in [0.0, -1e-9, f64::NAN, f64::INFINITY] {
            match CliConfig::default().with_cli_overrides(Some(tolerance), Vec::new()) {
                Err(ConfigError::Validation(errors)) => {
                    assert!(errors.iter().any(|e| e.contains("tolerance")));
                }
                other => panic!("Expected validation error for {}, got {:?}", tolerance, other),
            }
        }
    }

    #[test]
    fn test_cli_points_override_validated() {
        let result = CliConfig::default().with_cli_overrides(None, vec![1.0, f64::NAN]);
        match result {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("points must be finite"));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_points_skips_blanks() {
        assert_eq!(parse_points("1, ,2,").unwrap(), vec![1.0, 2.0]);
        assert!(parse_points("1,x").is_err());
    }
}
