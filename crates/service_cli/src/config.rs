//! Harness configuration management
//!
//! Loads settings from a TOML file, `RNGBENCH_*` environment variables and
//! CLI flags.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "rngbench.toml";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unrecognised log level name
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Sample count of zero
    #[error("Invalid sample count: {0}. Must be at least 1")]
    InvalidSamples(usize),

    /// Histogram bin count out of range
    #[error("Invalid bin count: {0}. Must be between 1 and 200")]
    InvalidBins(usize),

    /// File could not be read or parsed
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Environment variable could not be parsed
    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Upper bound on histogram bins
pub const MAX_BINS: usize = 200;

/// Verbosity of the harness's tracing output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Every event, including per-analysis traces
    Trace,
    /// Generator lifecycle events
    Debug,
    /// Command progress
    #[default]
    Info,
    /// Warnings only
    Warn,
    /// Errors only
    Error,
}

impl LogLevel {
    /// Every level, most verbose first
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// `EnvFilter` directive for this level
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    /// Case-insensitive; `warning` is accepted for `warn`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("warning") {
            return Ok(LogLevel::Warn);
        }
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_filter_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigError::InvalidLogLevel(s.to_string()))
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// Harness configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Seed used when a command gets no `--seed`; 0 seeds from the clock
    pub default_seed: u64,
    /// Values drawn per command
    pub samples: usize,
    /// Histogram bins
    pub bins: usize,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            default_seed: 0,
            samples: 100_000,
            bins: 20,
            log_level: LogLevel::Info,
        }
    }
}

const ENV_SEED: &str = "RNGBENCH_SEED";
const ENV_SAMPLES: &str = "RNGBENCH_SAMPLES";
const ENV_BINS: &str = "RNGBENCH_BINS";
const ENV_LOG_LEVEL: &str = "RNGBENCH_LOG_LEVEL";

fn parse_var<T: FromStr>(name: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{} has unparsable value '{}'", name, raw)))
}

impl BenchConfig {
    /// Overrides every field whose variable `lookup` returns
    fn apply_vars<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup(ENV_SEED) {
            self.default_seed = parse_var(ENV_SEED, &seed)?;
        }
        if let Some(samples) = lookup(ENV_SAMPLES) {
            self.samples = parse_var(ENV_SAMPLES, &samples)?;
        }
        if let Some(bins) = lookup(ENV_BINS) {
            self.bins = parse_var(ENV_BINS, &bins)?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        Ok(())
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: BenchConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples == 0 {
            return Err(ConfigError::InvalidSamples(self.samples));
        }
        if self.bins == 0 || self.bins > MAX_BINS {
            return Err(ConfigError::InvalidBins(self.bins));
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(seed) = cli.seed {
            self.default_seed = seed;
        }
        if let Some(samples) = cli.samples {
            self.samples = samples;
        }
        if let Some(bins) = cli.bins {
            self.bins = bins;
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        Ok(())
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Seed override
    pub seed: Option<u64>,
    /// Sample count override
    pub samples: Option<usize>,
    /// Histogram bin override
    pub bins: Option<usize>,
    /// Log level override
    pub log_level: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file (explicit path, else `rngbench.toml` if present)
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<BenchConfig, ConfigError> {
    build_config_with(cli, |name| std::env::var(name).ok())
}

fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<BenchConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => BenchConfig::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            BenchConfig::from_file(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => BenchConfig::default(),
    };

    config.apply_vars(lookup)?;
    config.merge_with_cli(cli)?;

    // Final validation
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();
        assert_eq!(config.default_seed, 0);
        assert_eq!(config.samples, 100_000);
        assert_eq!(config.bins, 20);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("verbose").is_err());
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Trace), "trace");
        assert_eq!(format!("{}", LogLevel::Warn), "warn");
    }

    #[test]
    fn test_log_level_alias_and_round_trip() {
        assert_eq!(LogLevel::from_str(" Warning ").unwrap(), LogLevel::Warn);
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_str(&level.to_string()).unwrap(), level);
        }
    }

    #[test]
    fn test_validate() {
        let mut config = BenchConfig::default();
        config.samples = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSamples(0))
        ));

        config.samples = 10;
        config.bins = MAX_BINS + 1;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidBins(_))));

        config.bins = MAX_BINS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            default_seed = 42
            samples = 5000
            bins = 10
            log_level = "debug"
        "#;

        let config = BenchConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.default_seed, 42);
        assert_eq!(config.samples, 5000);
        assert_eq!(config.bins, 10);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config = BenchConfig::from_toml("bins = 40").unwrap();
        // Should use defaults for unspecified fields
        assert_eq!(config.bins, 40);
        assert_eq!(config.samples, 100_000);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_toml_rejects_bad_values() {
        assert!(BenchConfig::from_toml("log_level = \"loud\"").is_err());
        assert!(BenchConfig::from_toml("samples = 0").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = BenchConfig::default();
        config
            .apply_vars(vars(&[("RNGBENCH_SEED", "7"), ("RNGBENCH_LOG_LEVEL", "warn")]))
            .unwrap();
        assert_eq!(config.default_seed, 7);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.samples, 100_000);
    }

    #[test]
    fn test_env_parse_error() {
        let mut config = BenchConfig::default();
        let err = config
            .apply_vars(vars(&[("RNGBENCH_SAMPLES", "lots")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::EnvError(_)));
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = BenchConfig::default();
        let cli = CliArgs {
            seed: Some(99),
            samples: Some(123),
            bins: None,
            log_level: Some("trace".to_string()),
            config_file: None,
        };

        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.default_seed, 99);
        assert_eq!(config.samples, 123);
        assert_eq!(config.bins, 20);
        assert_eq!(config.log_level, LogLevel::Trace);
    }

    #[test]
    fn test_precedence_cli_over_env() {
        let cli = CliArgs {
            samples: Some(10),
            ..Default::default()
        };
        let config = build_config_with(
            &cli,
            vars(&[("RNGBENCH_SAMPLES", "500"), ("RNGBENCH_BINS", "8")]),
        )
        .unwrap();
        assert_eq!(config.samples, 10);
        assert_eq!(config.bins, 8);
    }

    #[test]
    fn test_missing_config_file() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/rngbench.toml")),
            ..Default::default()
        };
        assert!(matches!(
            build_config_with(&cli, vars(&[])),
            Err(ConfigError::FileError(_))
        ));
    }
}
