//! Caller location rendering
//!
//! Each logger owns its own formatter, so two loggers built from different
//! working directories never affect each other's `caller` field.

use std::path::{Path, PathBuf};

/// Source location of the call that started a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    pub fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of the caller of the enclosing `#[track_caller]` function
    #[track_caller]
    pub fn here() -> Self {
        let location = std::panic::Location::caller();
        Self::new(location.file(), location.line())
    }
}

/// Renders call sites as `file:line` relative to a root directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerFormatter {
    root: Option<PathBuf>,
}

impl CallerFormatter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// Capture the process's current directory; paths stay untouched if it cannot be read
    pub fn from_current_dir() -> Self {
        Self {
            root: std::env::current_dir().ok(),
        }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn format(&self, site: &CallSite) -> String {
        let path = Path::new(site.file);
        let short = self
            .root
            .as_deref()
            .and_then(|root| path.strip_prefix(root).ok())
            .unwrap_or(path);
        format!("{}:{}", short.display(), site.line)
    }
}
