//! Structured logging initialization
//!
//! Converters log through `tracing`; this module installs the subscriber the
//! `jdl-convert` binary uses. Output always goes to stderr so converted JSON on
//! stdout stays machine-readable.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `JDL_LOG_LEVEL` | `info` | trace/debug/info/warn/error |
//! | `JDL_LOG_FORMAT` | `pretty` | `json` or `pretty` |
//! | `JDL_LOG_TARGET_FILTER` | unset | extra comma-separated filter directives |
//! | `JDL_LOG_INCLUDE_LOCATION` | `false` | add file:line to every event |
//!
//! `RUST_LOG`, when set, replaces the level entirely.

use anyhow::{Context, Result};
use std::env;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Log format: JSON for pipelines, pretty-print for terminals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty, // Default to pretty
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level: trace/debug/info/warn/error
    pub log_level: String,
    /// Log format: json/pretty
    pub format: LogFormat,
    /// Module filter (comma-separated)
    pub target_filter: Option<String>,
    /// Include file:line location
    pub include_location: bool,
}

impl LogConfig {
    /// Parse configuration from environment variables with defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`LogConfig::from_env`], reading through `lookup`.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            log_level: lookup("JDL_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            format: LogFormat::parse(
                &lookup("JDL_LOG_FORMAT").unwrap_or_else(|| "pretty".to_string()),
            ),
            target_filter: lookup("JDL_LOG_TARGET_FILTER"),
            include_location: lookup("JDL_LOG_INCLUDE_LOCATION")
                .and_then(|s| s.parse().ok())
                .unwrap_or(false),
        }
    }

    /// Create a default configuration for testing
    #[must_use]
    pub fn default_dev() -> Self {
        Self {
            log_level: "debug".to_string(),
            format: LogFormat::Pretty,
            target_filter: None,
            include_location: true,
        }
    }

    /// Raise the level to at least `debug` (the CLI's `--verbose`).
    #[must_use]
    pub fn verbose(mut self) -> Self {
        // tracing orders levels by verbosity: TRACE > DEBUG > INFO
        if self.level() < Level::DEBUG {
            self.log_level = "debug".to_string();
        }
        self
    }

    /// The configured level; unknown names fall back to `info`.
    #[must_use]
    pub fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }

    fn env_filter(&self) -> EnvFilter {
        let mut env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level().as_str()));

        if let Some(target_filter) = &self.target_filter {
            for filter in target_filter.split(',') {
                let filter = filter.trim();
                if filter.is_empty() {
                    continue;
                }
                if let Ok(directive) = filter.parse() {
                    env_filter = env_filter.add_directive(directive);
                } else {
                    eprintln!("Warning: Invalid log filter directive: {}", filter);
                }
            }
        }
        env_filter
    }
}

/// Initialize logging from the environment
pub fn init_logging() -> Result<()> {
    init_logging_with_config(&LogConfig::from_env())
}

/// Initialize logging with an explicit configuration
///
/// Fails when a global subscriber is already installed.
pub fn init_logging_with_config(config: &LogConfig) -> Result<()> {
    let fmt_layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("anything"), LogFormat::Pretty);
    }

    #[test]
    fn test_log_config_defaults() {
        let config = LogConfig::from_lookup(|_| None);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.target_filter, None);
        assert!(!config.include_location);
    }

    #[test]
    fn test_log_config_from_lookup() {
        let env: HashMap<&str, &str> = [
            ("JDL_LOG_LEVEL", "warn"),
            ("JDL_LOG_FORMAT", "json"),
            ("JDL_LOG_TARGET_FILTER", "jdl_converter::convert=trace"),
            ("JDL_LOG_INCLUDE_LOCATION", "true"),
        ]
        .into_iter()
        .collect();
        let config = LogConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.level(), Level::WARN);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(
            config.target_filter.as_deref(),
            Some("jdl_converter::convert=trace")
        );
        assert!(config.include_location);
    }

    #[test]
    fn test_verbose_only_raises() {
        assert_eq!(LogConfig::from_lookup(|_| None).verbose().level(), Level::DEBUG);
        let trace = LogConfig {
            log_level: "trace".to_string(),
            ..LogConfig::default_dev()
        };
        assert_eq!(trace.verbose().level(), Level::TRACE);
        assert_eq!(LogConfig::default_dev().level(), Level::DEBUG);
    }
}
