//! Testing utilities for tintlog
//!
//! Provides tools for capturing and asserting on logger output in tests.

mod capture;

pub use capture::{CaptureSink, RecordingExit};
