//! Process-wide logger
//!
//! The first `init*` call builds the logger; every other call, concurrent or
//! later, blocks until that build has finished and then returns the same
//! `&'static Logger`. Arguments of the losing callers are ignored.
//!
//! ```no_run
//! use herald_core::{Environment, LogLevel};
//!
//! herald_core::init(LogLevel::Info, Environment::Prod);
//! herald_core::info().str("port", "8080").msg("listening");
//! ```

use crate::builder::LoggerBuilder;
use crate::context::Context;
use crate::event::Event;
use crate::logger::Logger;
use herald_common::{Environment, HeraldError, LogLevel, EXIT_ERROR, EXIT_PROBE_FAILURE};
use herald_config::LogConfig;
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Initialize the process-wide logger from a level and an environment
pub fn init(level: LogLevel, env: Environment) -> &'static Logger {
    init_with(&LogConfig::new(level, env))
}

/// Initialize the process-wide logger from a full configuration
pub fn init_with(config: &LogConfig) -> &'static Logger {
    init_from(LoggerBuilder::from_config(config))
}

/// Initialize the process-wide logger from a prepared builder
///
/// If the build fails (the host IP probe failed under `ProbeFailure::Abort`)
/// a diagnostic is printed on stderr and the process exits with
/// `EXIT_PROBE_FAILURE`.
pub fn init_from(builder: LoggerBuilder) -> &'static Logger {
    LOGGER.get_or_init(|| match builder.build() {
        Ok(logger) => logger,
        Err(err) => abort(&err),
    })
}

fn abort(err: &HeraldError) -> ! {
    eprintln!("herald: logger initialization failed: {}", err);
    let code = match err {
        HeraldError::HostProbe { .. } => EXIT_PROBE_FAILURE,
        _ => EXIT_ERROR,
    };
    std::process::exit(code)
}

/// The published logger, if initialization has completed
pub fn logger() -> Option<&'static Logger> {
    LOGGER.get()
}

/// Update the base context of the published logger; does nothing before init
pub fn update_context(update: impl FnOnce(Context) -> Context) {
    if let Some(logger) = LOGGER.get() {
        logger.update_context(update);
    }
}

/// Start a record on the published logger; disabled before init
#[track_caller]
pub fn with_level(level: LogLevel) -> Event<'static> {
    match LOGGER.get() {
        Some(logger) => logger.with_level(level),
        None => Event::disabled(level),
    }
}

/// Starts a new record with trace level.
///
/// Call `msg` or `send` on the returned event to write it.
#[track_caller]
pub fn trace() -> Event<'static> {
    with_level(LogLevel::Trace)
}

/// Starts a new record with debug level.
///
/// Call `msg` or `send` on the returned event to write it.
#[track_caller]
pub fn debug() -> Event<'static> {
    with_level(LogLevel::Debug)
}

/// Starts a new record with info level.
///
/// Call `msg` or `send` on the returned event to write it.
#[track_caller]
pub fn info() -> Event<'static> {
    with_level(LogLevel::Info)
}

/// Starts a new record with warn level.
///
/// Call `msg` or `send` on the returned event to write it.
#[track_caller]
pub fn warn() -> Event<'static> {
    with_level(LogLevel::Warn)
}

/// Starts a new record with error level.
///
/// Call `msg` or `send` on the returned event to write it.
#[track_caller]
pub fn error() -> Event<'static> {
    with_level(LogLevel::Error)
}

/// Starts a new record with fatal level.
///
/// Finalizing it exits the process with status 1.
#[track_caller]
pub fn fatal() -> Event<'static> {
    with_level(LogLevel::Fatal)
}

/// Starts a new record with panic level.
///
/// Finalizing it panics with the record's message.
#[track_caller]
pub fn panic() -> Event<'static> {
    with_level(LogLevel::Panic)
}
