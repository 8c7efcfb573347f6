//! Output destinations and the process-exit seam.

use std::io::{self, Write};

/// Destination for rendered lines.
pub trait LineSink: Send + Sync {
    /// Write one rendered line; the sink appends the newline.
    fn write_line(&self, line: &str);

    fn flush(&self) {}
}

/// Writes lines to standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl LineSink for StderrSink {
    fn write_line(&self, line: &str) {
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{line}");
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Writes lines to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn write_line(&self, line: &str) {
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{line}");
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

/// What happens after a terminating level is emitted.
pub trait ExitHandler: Send + Sync {
    fn exit(&self, code: i32);
}

/// Ends the process immediately; no destructors or cleanup run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl ExitHandler for ProcessExit {
    fn exit(&self, code: i32) {
        std::process::exit(code);
    }
}
