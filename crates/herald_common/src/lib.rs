//! Common types and errors for Herald
//!
//! This crate provides the vocabulary shared by all Herald components:
//! severity levels, deployment environments and the error type.

pub mod level;

pub use level::{Environment, LogLevel};

use thiserror::Error;

/// Core error types for Herald operations
#[derive(Error, Debug)]
pub enum HeraldError {
    #[error("Unknown log level: {0}")]
    UnknownLevel(String),

    #[error("Unknown environment: {0}")]
    UnknownEnvironment(String),

    #[error("Host IP probe to {target} failed: {source}")]
    HostProbe {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to install tracing subscriber: {0}")]
    Subscriber(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, HeraldError>;

/// Exit code constants
pub const EXIT_ERROR: i32 = 1;
/// Status used when a fatal-level record has been emitted
pub const EXIT_FATAL: i32 = 1;
/// Status used when the host IP probe fails during initialization
pub const EXIT_PROBE_FAILURE: i32 = 78;
pub const EXIT_CONFIG_ERROR: i32 = 101;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_probe_error_message() {
        let err = HeraldError::HostProbe {
            target: "1.1.1.1:53".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "network unreachable"),
        };
        let msg = err.to_string();
        assert!(msg.contains("1.1.1.1:53"));
        assert!(msg.contains("network unreachable"));
    }

    #[test]
    fn test_probe_exit_code_is_distinct() {
        assert_ne!(EXIT_PROBE_FAILURE, EXIT_FATAL);
        assert_ne!(EXIT_PROBE_FAILURE, EXIT_ERROR);
        assert_ne!(EXIT_PROBE_FAILURE, 0);
    }
}
