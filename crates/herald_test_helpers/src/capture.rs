//! In-memory log capture
//!
//! `CaptureWriter` implements `tracing_subscriber::fmt::MakeWriter`, so it can
//! stand in for stderr/stdout wherever a logger accepts a writer. Clones share
//! the same buffer.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Clone, Default)]
pub struct CaptureWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CaptureWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buf.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer()).into_owned()
    }

    /// Non-empty lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Lines parsed as JSON objects
    ///
    /// # Panics
    ///
    /// Panics if any line is not valid JSON.
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.lines()
            .iter()
            .map(|l| {
                serde_json::from_str(l).unwrap_or_else(|e| panic!("not a JSON line ({}): {}", e, l))
            })
            .collect()
    }

    /// JSON lines whose `message` equals `message`
    pub fn records_with_message(&self, message: &str) -> Vec<serde_json::Value> {
        self.json_lines()
            .into_iter()
            .filter(|v| v.get("message").and_then(|m| m.as_str()) == Some(message))
            .collect()
    }

    pub fn clear(&self) {
        self.buffer().clear();
    }
}

/// Handle returned by [`CaptureWriter::make_writer`]
pub struct CaptureGuard {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Write for CaptureGuard {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureGuard;

    fn make_writer(&'a self) -> Self::Writer {
        CaptureGuard {
            buf: Arc::clone(&self.buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() {
        let capture = CaptureWriter::new();
        let clone = capture.clone();
        writeln!(clone.make_writer(), "{{\"message\":\"a\"}}").unwrap();
        writeln!(capture.make_writer(), "{{\"message\":\"b\"}}").unwrap();

        assert_eq!(capture.lines().len(), 2);
        assert_eq!(capture.records_with_message("b").len(), 1);

        capture.clear();
        assert!(clone.lines().is_empty());
    }
}
