//! Herald core
//!
//! Structured logger configured once per process from a level and a
//! deployment environment. Every record carries `time`, `host_ip` and a
//! workspace-relative `caller`.
//!
//! Non-dev environments write JSON lines to stderr at the requested level;
//! `dev` forces trace level and human-readable console lines on stdout.
//!
//! # Example
//!
//! ```rust
//! use herald_core::{Environment, LogLevel, LoggerBuilder};
//! use std::net::{IpAddr, Ipv4Addr};
//!
//! let logger = LoggerBuilder::new(LogLevel::Info, Environment::Prod)
//!     .host_ip(IpAddr::V4(Ipv4Addr::LOCALHOST))
//!     .writer(std::io::sink)
//!     .build()
//!     .unwrap();
//!
//! logger.info().str("foo", "bar").msg("hello world");
//! logger.update_context(|c| c.str("some_default_key", "some_default_value"));
//! ```

mod fields;

pub mod bridge;
pub mod builder;
pub mod caller;
pub mod context;
pub mod event;
pub mod format;
pub mod global;
pub mod host;
pub mod logger;

pub use builder::{resolve, LoggerBuilder, Resolved, Stream};
pub use caller::{CallSite, CallerFormatter};
pub use context::Context;
pub use event::Event;
pub use format::Format;
pub use global::{
    debug, error, fatal, info, init, init_from, init_with, logger, panic, trace, update_context,
    warn, with_level,
};
pub use logger::Logger;

pub use herald_common::{Environment, HeraldError, LogLevel, Result};
pub use herald_config::{LogConfig, ProbeFailure};
