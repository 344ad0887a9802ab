//! Severity levels and deployment environments
//!
//! Both types are closed enumerations. Tags coming from configuration are
//! mapped with `from_tag`, which never fails: an unrecognized level becomes
//! `info` and an unrecognized environment is treated as non-dev (`prod`).
//! The strict `FromStr` impls exist for callers that want to reject typos.

use crate::HeraldError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record, ordered from most verbose to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Fatal,
    Panic,
}

impl LogLevel {
    /// All levels in increasing severity
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
        LogLevel::Panic,
    ];

    /// Lossy mapping from a level tag; anything unrecognized is `Info`
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }

    /// Tag used in structured output
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
            LogLevel::Panic => "panic",
        }
    }

    /// Three-letter label used by the console format
    pub fn abbrev(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRC",
            LogLevel::Debug => "DBG",
            LogLevel::Info => "INF",
            LogLevel::Warn => "WRN",
            LogLevel::Error => "ERR",
            LogLevel::Fatal => "FTL",
            LogLevel::Panic => "PNC",
        }
    }

    /// Most verbose `tracing` filter that still admits nothing below `self`.
    ///
    /// `tracing` has no fatal/panic levels, so those filter out every
    /// `tracing` event.
    pub fn tracing_filter(&self) -> tracing::level_filters::LevelFilter {
        use tracing::level_filters::LevelFilter;
        match self {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Fatal | LogLevel::Panic => LevelFilter::OFF,
        }
    }
}

impl FromStr for LogLevel {
    type Err = HeraldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            "panic" => Ok(LogLevel::Panic),
            other => Err(HeraldError::UnknownLevel(other.to_string())),
        }
    }
}

impl From<String> for LogLevel {
    fn from(tag: String) -> Self {
        LogLevel::from_tag(&tag)
    }
}

impl From<tracing::Level> for LogLevel {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE => LogLevel::Trace,
            tracing::Level::DEBUG => LogLevel::Debug,
            tracing::Level::INFO => LogLevel::Info,
            tracing::Level::WARN => LogLevel::Warn,
            tracing::Level::ERROR => LogLevel::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deployment environment; only `Dev` changes logger behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Environment {
    #[default]
    Prod,
    Stage,
    Qa,
    Dev,
}

impl Environment {
    /// Lossy mapping from an environment tag; anything unrecognized is `Prod`
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Prod => "prod",
            Environment::Stage => "stage",
            Environment::Qa => "qa",
            Environment::Dev => "dev",
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Environment::Dev)
    }
}

impl FromStr for Environment {
    type Err = HeraldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prod" => Ok(Environment::Prod),
            "stage" => Ok(Environment::Stage),
            "qa" => Ok(Environment::Qa),
            "dev" => Ok(Environment::Dev),
            other => Err(HeraldError::UnknownEnvironment(other.to_string())),
        }
    }
}

impl From<String> for Environment {
    fn from(tag: String) -> Self {
        Environment::from_tag(&tag)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_round_trip() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_tag(level.as_str()), level);
        }
    }

    #[test]
    fn test_unrecognized_levels_fall_back_to_info() {
        let inputs = ["", "INFO", "verbose", "warning", "err", "critical", " debug"];
        for input in inputs {
            assert_eq!(
                LogLevel::from_tag(input),
                LogLevel::Info,
                "'{}' should resolve to info",
                input
            );
        }
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        assert!(matches!(
            "loud".parse::<LogLevel>(),
            Err(HeraldError::UnknownLevel(tag)) if tag == "loud"
        ));
        assert!("stage".parse::<Environment>().is_ok());
        assert!("production".parse::<Environment>().is_err());
    }

    #[test]
    fn test_levels_ordered_by_severity() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Fatal);
        assert!(LogLevel::Fatal < LogLevel::Panic);
    }

    #[test]
    fn test_only_dev_is_dev() {
        assert!(Environment::Dev.is_dev());
        assert!(!Environment::Prod.is_dev());
        assert!(!Environment::Stage.is_dev());
        assert!(!Environment::Qa.is_dev());
        assert_eq!(Environment::from_tag("development"), Environment::Prod);
    }

    #[test]
    fn test_tracing_level_conversion() {
        assert_eq!(LogLevel::from(tracing::Level::WARN), LogLevel::Warn);
        assert_eq!(
            LogLevel::Fatal.tracing_filter(),
            tracing::level_filters::LevelFilter::OFF
        );
        assert_eq!(
            LogLevel::Debug.tracing_filter(),
            tracing::level_filters::LevelFilter::DEBUG
        );
    }

    #[test]
    fn test_serde_lossy_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            level: LogLevel,
            env: Environment,
        }

        let parsed: Wrapper = toml::from_str("level = \"loud\"\nenv = \"dev\"").unwrap();
        assert_eq!(parsed.level, LogLevel::Info);
        assert_eq!(parsed.env, Environment::Dev);

        let parsed: Wrapper = toml::from_str("level = \"warn\"\nenv = \"nope\"").unwrap();
        assert_eq!(parsed.level, LogLevel::Warn);
        assert_eq!(parsed.env, Environment::Prod);
    }
}
