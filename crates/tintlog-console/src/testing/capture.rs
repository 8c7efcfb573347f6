//! CaptureSink for capturing log lines in tests
//!
//! Provides a [`LineSink`] that records every line for assertion instead of
//! writing to stderr, and an [`ExitHandler`] that records exit requests
//! instead of ending the process.

use std::sync::{Arc, Mutex};

use strip_ansi_escapes::strip;

use crate::sink::{ExitHandler, LineSink};

/// A sink that captures rendered lines
///
/// Clones share the same buffer, so keep one clone for assertions and hand
/// the other to the logger builder.
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    buffer: Arc<Mutex<CaptureBuffer>>,
}

#[derive(Debug, Default)]
struct CaptureBuffer {
    /// Lines with ANSI codes stripped
    lines: Vec<String>,
    /// Lines with ANSI codes preserved
    raw_lines: Vec<String>,
    flushes: usize,
}

impl CaptureSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured output (ANSI codes stripped)
    #[must_use]
    pub fn output(&self) -> Vec<String> {
        self.buffer
            .lock()
            .map(|b| b.lines.clone())
            .unwrap_or_default()
    }

    /// Get all captured output (with ANSI codes)
    #[must_use]
    pub fn raw_output(&self) -> Vec<String> {
        self.buffer
            .lock()
            .map(|b| b.raw_lines.clone())
            .unwrap_or_default()
    }

    /// Get output as a single string
    #[must_use]
    pub fn output_string(&self) -> String {
        self.output().join("\n")
    }

    /// Number of captured lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.lock().map(|b| b.lines.len()).unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of flush calls received
    #[must_use]
    pub fn flushes(&self) -> usize {
        self.buffer.lock().map(|b| b.flushes).unwrap_or_default()
    }

    /// Check if output contains a string (case-insensitive)
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        let output = self.output_string().to_lowercase();
        output.contains(&needle.to_lowercase())
    }

    /// Check if output contains all of the given strings
    #[must_use]
    pub fn contains_all(&self, needles: &[&str]) -> bool {
        needles.iter().all(|n| self.contains(n))
    }

    /// Check if output matches a regex pattern
    #[must_use]
    pub fn matches(&self, pattern: &str) -> bool {
        match regex::Regex::new(pattern) {
            Ok(re) => re.is_match(&self.output_string()),
            Err(_) => false,
        }
    }

    /// Assert that output contains a string
    ///
    /// # Panics
    ///
    /// Panics if the output does not contain the needle string.
    pub fn assert_contains(&self, needle: &str) {
        assert!(
            self.contains(needle),
            "Output did not contain '{}'. Actual output:\n{}",
            needle,
            self.output_string()
        );
    }

    /// Assert that output does not contain a string
    ///
    /// # Panics
    ///
    /// Panics if the output contains the needle string.
    pub fn assert_not_contains(&self, needle: &str) {
        assert!(
            !self.contains(needle),
            "Output unexpectedly contained '{}'. Actual output:\n{}",
            needle,
            self.output_string()
        );
    }

    /// Clear captured output
    pub fn clear(&self) {
        if let Ok(mut b) = self.buffer.lock() {
            b.lines.clear();
            b.raw_lines.clear();
        }
    }
}

impl LineSink for CaptureSink {
    fn write_line(&self, line: &str) {
        let stripped = String::from_utf8_lossy(&strip(line.as_bytes())).into_owned();
        if let Ok(mut b) = self.buffer.lock() {
            b.lines.push(stripped);
            b.raw_lines.push(line.to_string());
        }
    }

    fn flush(&self) {
        if let Ok(mut b) = self.buffer.lock() {
            b.flushes += 1;
        }
    }
}

/// Records exit requests instead of ending the process
#[derive(Debug, Clone, Default)]
pub struct RecordingExit {
    codes: Arc<Mutex<Vec<i32>>>,
}

impl RecordingExit {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Exit codes requested so far
    #[must_use]
    pub fn codes(&self) -> Vec<i32> {
        self.codes.lock().map(|c| c.clone()).unwrap_or_default()
    }

    #[must_use]
    pub fn exited(&self) -> bool {
        !self.codes().is_empty()
    }
}

impl ExitHandler for RecordingExit {
    fn exit(&self, code: i32) {
        if let Ok(mut codes) = self.codes.lock() {
            codes.push(code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_strips_ansi() {
        let sink = CaptureSink::new();
        sink.write_line("\x1b[31;21mboom\x1b[0m");
        assert_eq!(sink.output(), vec!["boom".to_string()]);
        assert_eq!(sink.raw_output(), vec!["\x1b[31;21mboom\x1b[0m".to_string()]);
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let sink = CaptureSink::new();
        sink.write_line("Hello World");
        assert!(sink.contains("hello"));
        assert!(sink.contains_all(&["hello", "WORLD"]));
        assert!(!sink.contains("goodbye"));
    }

    #[test]
    fn test_matches_regex() {
        let sink = CaptureSink::new();
        sink.write_line("0042:worker");
        assert!(sink.matches(r"\d{4}:worker"));
        assert!(!sink.matches("[invalid"));
    }

    #[test]
    fn test_clones_share_buffer() {
        let sink = CaptureSink::new();
        let other = sink.clone();
        other.write_line("shared");
        other.flush();
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.flushes(), 1);

        sink.clear();
        assert!(other.is_empty());
    }

    #[test]
    fn test_recording_exit() {
        let exit = RecordingExit::new();
        assert!(!exit.exited());
        exit.exit(0);
        assert_eq!(exit.codes(), vec![0]);
    }
}
