//! Configuration for [`Geohasher`](crate::Geohasher).
//!
//! Configuration can be built in code, taken from a preset, parsed from
//! JSON, or read from `LIGHTNING_GEOHASH_*` environment variables.

use crate::error::{Error, Result};
use crate::geohash::MAX_PRECISION;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::Level;

pub const ENV_PRECISION: &str = "LIGHTNING_GEOHASH_PRECISION";
pub const ENV_FAN_OUT: &str = "LIGHTNING_GEOHASH_FAN_OUT";
pub const ENV_LOG_LEVEL: &str = "LIGHTNING_GEOHASH_LOG_LEVEL";
pub const ENV_JSON_LOGS: &str = "LIGHTNING_GEOHASH_JSON_LOGS";

/// How the eight-way neighbor lookup is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FanOutMode {
    /// Resolve every direction on the calling thread.
    Sequential,
    /// Resolve each phase with `rayon::join`.
    #[default]
    Parallel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(Error::Config(format!("Invalid log level: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeohashConfig {
    /// Characters produced by `Geohasher::encode`.
    pub default_precision: usize,
    pub fan_out: FanOutMode,
    pub log_level: LogLevel,
    pub json_logs: bool,
}

impl Default for GeohashConfig {
    fn default() -> Self {
        Self {
            default_precision: 9, // ~4.8m x 4.8m cells
            fan_out: FanOutMode::Parallel,
            log_level: LogLevel::Info,
            json_logs: false,
        }
    }
}

impl GeohashConfig {
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| Error::Config(format!("JSON parse error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Start from defaults and apply any `LIGHTNING_GEOHASH_*` overrides.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(precision) = std::env::var(ENV_PRECISION) {
            config.default_precision = precision
                .parse()
                .map_err(|_| Error::Config(format!("Invalid precision: {}", precision)))?;
        }

        if let Ok(fan_out) = std::env::var(ENV_FAN_OUT) {
            config.fan_out = match fan_out.as_str() {
                "sequential" => FanOutMode::Sequential,
                "parallel" => FanOutMode::Parallel,
                _ => return Err(Error::Config(format!("Invalid fan-out mode: {}", fan_out))),
            };
        }

        if let Ok(level) = std::env::var(ENV_LOG_LEVEL) {
            config.log_level = level.parse()?;
        }

        if let Ok(json) = std::env::var(ENV_JSON_LOGS) {
            config.json_logs = json
                .parse()
                .map_err(|_| Error::Config(format!("Invalid JSON logs flag: {}", json)))?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("JSON serialize error: {}", e)))
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_precision == 0 {
            return Err(Error::Config("Precision must be greater than 0".into()));
        }

        if self.default_precision > MAX_PRECISION {
            return Err(Error::Config(format!(
                "Precision too large (max {})",
                MAX_PRECISION
            )));
        }

        Ok(())
    }
}

/// Ready-made configurations by cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// ~39km cells, regional bucketing
    Coarse,
    /// ~1.2km cells
    City,
    /// ~150m cells
    Street,
    /// ~4.8m cells
    Building,
    /// Sequential fan-out with debug logging
    Development,
}

impl ConfigPreset {
    pub fn to_config(self) -> GeohashConfig {
        let base = GeohashConfig::default();
        match self {
            ConfigPreset::Coarse => GeohashConfig {
                default_precision: 4,
                ..base
            },
            ConfigPreset::City => GeohashConfig {
                default_precision: 6,
                ..base
            },
            ConfigPreset::Street => GeohashConfig {
                default_precision: 7,
                ..base
            },
            ConfigPreset::Building => GeohashConfig {
                default_precision: 9,
                ..base
            },
            ConfigPreset::Development => GeohashConfig {
                fan_out: FanOutMode::Sequential,
                log_level: LogLevel::Debug,
                ..base
            },
        }
    }
}

pub struct ConfigBuilder {
    config: GeohashConfig,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GeohashConfig::default(),
        }
    }

    pub fn from_preset(preset: ConfigPreset) -> Self {
        Self {
            config: preset.to_config(),
        }
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.config.default_precision = precision;
        self
    }

    pub fn fan_out(mut self, mode: FanOutMode) -> Self {
        self.config.fan_out = mode;
        self
    }

    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.config.log_level = level;
        self
    }

    pub fn json_logs(mut self, enabled: bool) -> Self {
        self.config.json_logs = enabled;
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<GeohashConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = ConfigBuilder::new()
            .precision(6)
            .fan_out(FanOutMode::Sequential)
            .log_level(LogLevel::Warn)
            .json_logs(true)
            .build()
            .unwrap();

        assert_eq!(config.default_precision, 6);
        assert_eq!(config.fan_out, FanOutMode::Sequential);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(config.json_logs);
    }

    #[test]
    fn test_config_validation() {
        assert!(GeohashConfig::default().validate().is_ok());
        assert!(ConfigBuilder::new().precision(0).build().is_err());
        assert!(ConfigBuilder::new()
            .precision(MAX_PRECISION + 1)
            .build()
            .is_err());
        assert!(ConfigBuilder::new().precision(MAX_PRECISION).build().is_ok());
    }

    #[test]
    fn test_presets_are_valid() {
        for preset in [
            ConfigPreset::Coarse,
            ConfigPreset::City,
            ConfigPreset::Street,
            ConfigPreset::Building,
            ConfigPreset::Development,
        ] {
            assert!(preset.to_config().validate().is_ok(), "{:?}", preset);
        }
        let dev = ConfigBuilder::from_preset(ConfigPreset::Development)
            .build()
            .unwrap();
        assert_eq!(dev.fan_out, FanOutMode::Sequential);
    }

    #[test]
    fn test_json_round_trip() {
        let config = ConfigPreset::City.to_config();
        let json = config.to_json().unwrap();
        assert!(json.contains("\"fan_out\": \"parallel\""));
        assert_eq!(GeohashConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_json_partial_and_invalid() {
        let config = GeohashConfig::from_json_str(r#"{"default_precision": 5}"#).unwrap();
        assert_eq!(config.default_precision, 5);
        assert_eq!(config.fan_out, FanOutMode::Parallel);

        assert!(matches!(
            GeohashConfig::from_json_str(r#"{"default_precision": 0}"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            GeohashConfig::from_json_str("not json"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert!("loud".parse::<LogLevel>().is_err());
        assert_eq!(Level::from(LogLevel::Trace), Level::TRACE);
    }
}
