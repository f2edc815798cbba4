use crate::Result;
use crate::api::{DEFAULT_PAGE_SIZE, MAX_BATCH_SIZE, MAX_PAGE_SIZE};
use crate::metrics::MetricDef;
use camino::Utf8Path;
use ohno::{IntoAppError, app_err};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Page size sent with every request
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Number of projects whose measures are requested per call
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Metrics to collect, in report column order
    #[serde(default = "default_metrics")]
    pub metrics: Vec<MetricDef>,
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

const fn default_batch_size() -> usize {
    MAX_BATCH_SIZE
}

fn default_metrics() -> Vec<MetricDef> {
    Config::default().metrics
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation
    pub fn load(config_path: Option<&Utf8Path>) -> Result<Self> {
        let Some(path) = config_path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path).into_app_err_with(|| format!("reading sonar-report configuration file '{path}'"))?;
        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a limit is out of range or the metric catalog is empty or has duplicates
    fn validate(&self) -> Result<()> {
        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(app_err!("page_size must be between 1 and {MAX_PAGE_SIZE}, got {}", self.page_size));
        }

        if !(1..=MAX_BATCH_SIZE).contains(&self.batch_size) {
            return Err(app_err!("batch_size must be between 1 and {MAX_BATCH_SIZE}, got {}", self.batch_size));
        }

        if self.metrics.is_empty() {
            return Err(app_err!("metrics must list at least one metric"));
        }

        let mut seen = HashSet::new();
        for metric in &self.metrics {
            if metric.key.trim().is_empty() {
                return Err(app_err!("metric keys must not be empty"));
            }

            if !seen.insert(metric.key.as_str()) {
                return Err(app_err!("metric '{}' is listed more than once", metric.key));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MetricKind;
    use camino::Utf8PathBuf;

    fn write_config(dir: &tempfile::TempDir, text: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::from_path_buf(dir.path().join("sonar-report.toml")).unwrap();
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        config.validate().unwrap();
    }

    #[test]
    fn test_default_catalog() {
        let config = Config::default();
        let keys: Vec<&str> = config.metrics.iter().map(|m| m.key.as_str()).collect();
        assert_eq!(
            keys,
            [
                "alert_status",
                "bugs",
                "reliability_rating",
                "vulnerabilities",
                "security_rating",
                "security_hotspots_reviewed",
                "security_review_rating",
                "code_smells",
                "sqale_rating",
                "coverage",
                "duplicated_lines_density",
                "ncloc",
            ]
        );
        assert_eq!(config.metrics[0].kind, MetricKind::Status);
        assert_eq!(config.metrics[2].kind, MetricKind::Rating);
        assert_eq!(config.page_size, 500);
        assert_eq!(config.batch_size, 50);
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.metrics, Config::default().metrics);
    }

    #[test]
    fn test_load_partial_file_keeps_default_metrics() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "batch_size = 10\n");

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.batch_size, 10);
        assert_eq!(config.page_size, 500);
        assert_eq!(config.metrics.len(), 12);
    }

    #[test]
    fn test_load_custom_metrics() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
[[metrics]]
key = "ncloc"
kind = "count"

[[metrics]]
key = "coverage"
description = "Line and branch coverage"
kind = "percent"
"#,
        );

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.metrics.len(), 2);
        assert_eq!(config.metrics[1], MetricDef::new("coverage", "Line and branch coverage", MetricKind::Percent));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("absent.toml")).unwrap();
        assert!(Config::load(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_load_rejects_unknown_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "retries = 3\n");
        assert!(Config::load(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_validate_batch_size_out_of_range() {
        let config = Config { batch_size: 0, ..Config::default() };
        assert!(config.validate().is_err());

        let config = Config { batch_size: 51, ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_page_size_out_of_range() {
        let config = Config { page_size: 0, ..Config::default() };
        assert!(config.validate().is_err());

        let config = Config { page_size: 501, ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_catalog() {
        let config = Config { metrics: Vec::new(), ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_duplicate_metric() {
        let mut config = Config::default();
        config.metrics.push(MetricDef::new("bugs", "Number of bugs", MetricKind::Count));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_blank_metric_key() {
        let config = Config {
            metrics: vec![MetricDef::new(" ", "", MetricKind::Count)],
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
