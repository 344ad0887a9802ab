//! Shared test utilities for Herald test suites
//!
//! # Modules
//!
//! - [`capture`]: In-memory writer for inspecting emitted log lines
//! - [`cli`]: Command builders with pre-configured environments
//! - [`workspace`]: Temporary config files
//! - [`assertions`]: Predicates over rendered log lines
//!
//! # Example
//!
//! ```rust
//! use herald_test_helpers::prelude::*;
//!
//! let capture = CaptureWriter::new();
//! // hand `capture.clone()` to a logger builder, emit, then:
//! assert!(capture.lines().is_empty());
//! ```

pub mod assertions;
pub mod capture;
pub mod cli;
pub mod workspace;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::capture::CaptureWriter;
    pub use crate::cli::{command_for, herald_command};
    pub use crate::workspace::{config_file, temp_dir};
}
