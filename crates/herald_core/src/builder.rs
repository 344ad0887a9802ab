//! Logger construction
//!
//! Building runs the configuration steps in order:
//! 1. resolve the minimum level and the output (format + stream) from the environment
//! 2. capture the working directory for caller paths
//! 3. probe the host IP (unless one was supplied)
//! 4. assemble the base context: `time`, `host_ip`, `caller`

use crate::caller::CallerFormatter;
use crate::context::Context;
use crate::format::Format;
use crate::host::probe_host_ip;
use crate::logger::{Logger, Sink};
use herald_common::{Environment, LogLevel, Result};
use herald_config::{LogConfig, ProbeFailure, DEFAULT_PROBE_ADDR};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;

/// Standard stream a logger writes to when no custom writer is given
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Effective settings derived from the requested level and environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub level: LogLevel,
    pub format: Format,
    pub stream: Stream,
}

/// Dev forces trace level and console output on stdout; every other
/// environment keeps the requested level and writes JSON lines to stderr.
pub fn resolve(level: LogLevel, env: Environment) -> Resolved {
    if env.is_dev() {
        Resolved {
            level: LogLevel::Trace,
            format: Format::Console,
            stream: Stream::Stdout,
        }
    } else {
        Resolved {
            level,
            format: Format::Json,
            stream: Stream::Stderr,
        }
    }
}

pub struct LoggerBuilder {
    level: LogLevel,
    env: Environment,
    probe_addr: String,
    on_probe_failure: ProbeFailure,
    host_ip: Option<IpAddr>,
    writer: Option<BoxMakeWriter>,
    ansi: Option<bool>,
    working_dir: Option<PathBuf>,
}

impl LoggerBuilder {
    pub fn new(level: LogLevel, env: Environment) -> Self {
        Self {
            level,
            env,
            probe_addr: DEFAULT_PROBE_ADDR.to_string(),
            on_probe_failure: ProbeFailure::default(),
            host_ip: None,
            writer: None,
            ansi: None,
            working_dir: None,
        }
    }

    pub fn from_config(config: &LogConfig) -> Self {
        Self::new(config.level, config.env)
            .probe_addr(config.probe_addr.clone())
            .on_probe_failure(config.on_probe_failure)
    }

    /// Address connected to when learning the host IP
    pub fn probe_addr(mut self, addr: impl Into<String>) -> Self {
        self.probe_addr = addr.into();
        self
    }

    pub fn on_probe_failure(mut self, policy: ProbeFailure) -> Self {
        self.on_probe_failure = policy;
        self
    }

    /// Use a known host IP and skip the probe
    pub fn host_ip(mut self, ip: IpAddr) -> Self {
        self.host_ip = Some(ip);
        self
    }

    /// Write to `writer` instead of stdout/stderr; the format still follows the environment
    pub fn writer<W>(mut self, writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        self.writer = Some(BoxMakeWriter::new(writer));
        self
    }

    /// Force ANSI colors on or off for the console format
    pub fn ansi(mut self, ansi: bool) -> Self {
        self.ansi = Some(ansi);
        self
    }

    /// Root stripped from caller paths instead of the current directory
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn resolved(&self) -> Resolved {
        resolve(self.level, self.env)
    }

    pub fn build(self) -> Result<Logger> {
        let resolved = self.resolved();

        let caller = match self.working_dir {
            Some(dir) => CallerFormatter::new(dir),
            None => CallerFormatter::from_current_dir(),
        };

        let mut probe_error = None;
        let host_ip = match self.host_ip {
            Some(ip) => ip,
            None => match probe_host_ip(&self.probe_addr) {
                Ok(ip) => ip,
                Err(e) if self.on_probe_failure == ProbeFailure::Unknown => {
                    probe_error = Some(e);
                    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
                }
                Err(e) => return Err(e),
            },
        };

        let custom_writer = self.writer.is_some();
        let writer = self.writer.unwrap_or_else(|| match resolved.stream {
            Stream::Stdout => BoxMakeWriter::new(std::io::stdout),
            Stream::Stderr => BoxMakeWriter::new(std::io::stderr),
        });
        let ansi = self
            .ansi
            .unwrap_or(resolved.format == Format::Console && !custom_writer);

        let context = Context::new().timestamp().ip("host_ip", host_ip).caller();

        tracing::debug!(
            level = %resolved.level,
            env = %self.env,
            host_ip = %host_ip,
            "logger initialized"
        );

        let logger = Logger::from_parts(
            Sink {
                level: resolved.level,
                format: resolved.format,
                ansi,
                writer,
                caller,
                host_ip,
            },
            context,
        );

        // Reported through the new logger; no subscriber may be listening yet
        if let Some(e) = probe_error {
            logger.warn().err(&e).msg("host ip probe failed; using 0.0.0.0");
        }

        Ok(logger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_common::HeraldError;
    use herald_test_helpers::prelude::*;
    use predicates::prelude::*;

    #[test]
    fn test_dev_forces_trace_console_stdout() {
        for level in LogLevel::ALL {
            let resolved = resolve(level, Environment::Dev);
            assert_eq!(resolved.level, LogLevel::Trace);
            assert_eq!(resolved.format, Format::Console);
            assert_eq!(resolved.stream, Stream::Stdout);
        }
    }

    #[test]
    fn test_non_dev_keeps_level_json_stderr() {
        for env in [Environment::Prod, Environment::Stage, Environment::Qa] {
            for level in LogLevel::ALL {
                let resolved = resolve(level, env);
                assert_eq!(resolved.level, level);
                assert_eq!(resolved.format, Format::Json);
                assert_eq!(resolved.stream, Stream::Stderr);
            }
        }
    }

    #[test]
    fn test_build_with_loopback_probe() {
        let capture = CaptureWriter::new();
        let logger = LoggerBuilder::new(LogLevel::Info, Environment::Prod)
            .probe_addr("127.0.0.1:9")
            .writer(capture.clone())
            .build()
            .unwrap();

        logger.info().msg("ready");

        let record = &capture.records_with_message("ready")[0];
        assert_eq!(record["level"], "info");
        let host_ip = record["host_ip"].as_str().unwrap();
        assert!(is_ip_literal().eval(host_ip));
        assert!(logger.host_ip().is_loopback());
    }

    #[test]
    fn test_probe_failure_aborts_build() {
        let result = LoggerBuilder::new(LogLevel::Info, Environment::Prod)
            .probe_addr("no-port-here")
            .build();
        assert!(matches!(result, Err(HeraldError::HostProbe { .. })));
    }

    #[test]
    fn test_probe_failure_unknown_uses_unspecified() {
        let capture = CaptureWriter::new();
        let logger = LoggerBuilder::new(LogLevel::Info, Environment::Prod)
            .probe_addr("no-port-here")
            .on_probe_failure(ProbeFailure::Unknown)
            .writer(capture.clone())
            .build()
            .unwrap();
        assert_eq!(logger.host_ip(), IpAddr::V4(Ipv4Addr::UNSPECIFIED));

        let warnings = capture.records_with_message("host ip probe failed; using 0.0.0.0");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0]["level"], "warn");
        assert_eq!(warnings[0]["host_ip"], "0.0.0.0");
        assert!(warnings[0]["error"].as_str().unwrap().contains("no-port-here"));
    }

    #[test]
    fn test_successful_probe_writes_nothing() {
        let capture = CaptureWriter::new();
        LoggerBuilder::new(LogLevel::Trace, Environment::Prod)
            .probe_addr("127.0.0.1:9")
            .writer(capture.clone())
            .build()
            .unwrap();
        assert!(capture.contents().is_empty());
    }

    #[test]
    fn test_dev_build_emits_debug_despite_warn_request() {
        let capture = CaptureWriter::new();
        let logger = LoggerBuilder::new(LogLevel::Warn, Environment::Dev)
            .host_ip(IpAddr::V4(Ipv4Addr::LOCALHOST))
            .writer(capture.clone())
            .build()
            .unwrap();

        assert_eq!(logger.level(), LogLevel::Trace);
        logger.debug().msg("trace-me");

        let lines = capture.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("DBG"));
        assert!(lines[0].contains("trace-me"));
        assert!(!lines[0].contains('\u{1b}'), "custom writers default to no color");
    }

    #[test]
    fn test_working_dir_is_per_logger() {
        let first = LoggerBuilder::new(LogLevel::Info, Environment::Prod)
            .host_ip(IpAddr::V4(Ipv4Addr::LOCALHOST))
            .working_dir("/srv/one")
            .writer(CaptureWriter::new())
            .build()
            .unwrap();
        let second = LoggerBuilder::new(LogLevel::Info, Environment::Prod)
            .host_ip(IpAddr::V4(Ipv4Addr::LOCALHOST))
            .working_dir("/srv/two")
            .writer(CaptureWriter::new())
            .build()
            .unwrap();

        assert_eq!(first.caller_formatter().root(), Some(std::path::Path::new("/srv/one")));
        assert_eq!(second.caller_formatter().root(), Some(std::path::Path::new("/srv/two")));
    }

    #[test]
    fn test_from_config() {
        let config = LogConfig {
            level: LogLevel::Error,
            env: Environment::Stage,
            probe_addr: "127.0.0.1:9".to_string(),
            on_probe_failure: ProbeFailure::Unknown,
        };
        let builder = LoggerBuilder::from_config(&config);
        assert_eq!(builder.resolved().level, LogLevel::Error);
        assert_eq!(builder.probe_addr, "127.0.0.1:9");
        assert_eq!(builder.on_probe_failure, ProbeFailure::Unknown);
    }
}
