//! Configuration for harvesting
//!
//! Defines the source tree, the scan period and the extraction backend.

use crate::scanner::DEFAULT_EXTENSION;
use crate::HarvestError;
use lessonbeat_extractor::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Configuration for the harvester service
///
/// # Examples
///
/// ```
/// use lessonbeat_harvester::HarvestConfig;
///
/// let config = HarvestConfig::from_toml(r#"path = "/srv/plans""#).unwrap();
/// assert_eq!(config.period_secs, 60);
/// assert!(!config.scan_all);
/// assert_eq!(config.extension, "docx");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Root of the document tree
    pub path: PathBuf,

    /// Seconds between scan cycles
    /// Default: 60
    #[serde(default = "default_period_secs")]
    pub period_secs: u64,

    /// Harvest every existing document on the first cycle
    /// Default: false (only files changed after startup)
    #[serde(default)]
    pub scan_all: bool,

    /// File extension of candidate documents, without the dot
    /// Default: "docx"
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Text extraction settings
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

fn default_period_secs() -> u64 {
    60
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl HarvestConfig {
    /// Default settings for the tree at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            period_secs: default_period_secs(),
            scan_all: false,
            extension: default_extension(),
            extractor: ExtractorConfig::default(),
        }
    }

    /// Preset that re-harvests the whole tree on the first cycle
    pub fn backfill(path: impl Into<PathBuf>) -> Self {
        Self {
            scan_all: true,
            ..Self::new(path)
        }
    }

    /// Get scan period as Duration
    pub fn period(&self) -> Duration {
        Duration::from_secs(self.period_secs)
    }

    /// Cutoff for the first cycle, given the process start time
    pub fn initial_cutoff(&self, started_at: SystemTime) -> SystemTime {
        if self.scan_all {
            SystemTime::UNIX_EPOCH
        } else {
            started_at
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.path.as_os_str().is_empty() {
            return Err("path must not be empty".to_string());
        }
        if self.period_secs == 0 {
            return Err("period_secs must be at least 1".to_string());
        }
        let extension = self.extension.trim();
        if extension.is_empty() || extension.starts_with('.') {
            return Err("extension must be non-empty and given without a leading dot".to_string());
        }
        self.extractor.validate().map_err(|e| format!("extractor: {}", e))
    }

    /// Load and validate configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, HarvestError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate().map_err(HarvestError::Config)?;
        Ok(config)
    }

    /// Load and validate configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, HarvestError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, HarvestError> {
        toml::to_string_pretty(self).map_err(|e| HarvestError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lessonbeat_extractor::ExtractorBackend;

    #[test]
    fn test_default_config() {
        let config = HarvestConfig::new("/srv/plans");
        assert_eq!(config.period_secs, 60);
        assert!(!config.scan_all);
        assert_eq!(config.extension, "docx");
        assert_eq!(config.extractor.backend, ExtractorBackend::Native);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_backfill_preset() {
        let config = HarvestConfig::backfill("/srv/plans");
        assert!(config.scan_all);
        assert_eq!(config.period_secs, HarvestConfig::new("/srv/plans").period_secs);
    }

    #[test]
    fn test_initial_cutoff() {
        let started = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);

        assert_eq!(HarvestConfig::new("/p").initial_cutoff(started), started);
        assert_eq!(
            HarvestConfig::backfill("/p").initial_cutoff(started),
            SystemTime::UNIX_EPOCH
        );
    }

    #[test]
    fn test_period_conversion() {
        let mut config = HarvestConfig::new("/p");
        config.period_secs = 5;
        assert_eq!(config.period(), Duration::from_secs(5));
    }

    #[test]
    fn test_validation_failures() {
        let mut config = HarvestConfig::new("/p");
        config.period_secs = 0;
        assert!(config.validate().is_err());

        let mut config = HarvestConfig::new("/p");
        config.extension = ".docx".to_string();
        assert!(config.validate().is_err());

        let mut config = HarvestConfig::new("");
        config.extension = "docx".to_string();
        assert!(config.validate().is_err());

        let mut config = HarvestConfig::new("/p");
        config.extractor.body_member.clear();
        assert!(config.validate().unwrap_err().starts_with("extractor:"));
    }

    #[test]
    fn test_full_toml() {
        let config = HarvestConfig::from_toml(
            r#"
            path = "/srv/plans"
            period_secs = 300
            scan_all = true
            extension = "DOCX"

            [extractor]
            backend = "command"
            sed_program = "/usr/bin/sed"
            "#,
        )
        .unwrap();

        assert_eq!(config.path, PathBuf::from("/srv/plans"));
        assert_eq!(config.period(), Duration::from_secs(300));
        assert!(config.scan_all);
        assert_eq!(config.extractor.backend, ExtractorBackend::Command);
        assert_eq!(config.extractor.sed_program, "/usr/bin/sed");
        assert_eq!(config.extractor.unzip_program, "unzip");
    }

    #[test]
    fn test_missing_path_rejected() {
        let err = HarvestConfig::from_toml("period_secs = 10").unwrap_err();
        assert!(matches!(err, HarvestError::Toml(_)));
    }

    #[test]
    fn test_invalid_values_rejected_on_load() {
        let err = HarvestConfig::from_toml("path = \"/p\"\nperiod_secs = 0").unwrap_err();
        assert!(matches!(err, HarvestError::Config(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = HarvestConfig::backfill("/srv/plans");
        let parsed = HarvestConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("config.toml");
        std::fs::write(&file, "path = \"/srv/plans\"\nscan_all = true\n").unwrap();

        let config = HarvestConfig::from_file(&file).unwrap();
        assert!(config.scan_all);

        let err = HarvestConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, HarvestError::Io(_)));
    }
}
