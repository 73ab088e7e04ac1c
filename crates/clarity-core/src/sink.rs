//! ---
//! clarity_section: "02-print-pipeline"
//! clarity_subsection: "module"
//! clarity_type: "source"
//! clarity_scope: "code"
//! clarity_description: "Destinations for rendered print lines."
//! clarity_version: "v0.0.0-prealpha"
//! clarity_owner: "tbd"
//! ---
use std::io::Write;
use std::sync::Arc;

use clarity_logging::clarity_debug;
use parking_lot::Mutex;

/// Receives rendered lines in call order.
pub trait LineSink: Send + Sync {
    fn write_line(&self, line: &str);
}

/// Writes each line to stdout. A failed write is logged at debug level and
/// the line is dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn write_line(&self, line: &str) {
        write_logged(&mut std::io::stdout().lock(), line);
    }
}

fn write_logged(out: &mut impl Write, line: &str) -> bool {
    match writeln!(out, "{line}") {
        Ok(()) => true,
        Err(err) => {
            clarity_debug!("dropped print line: {err}");
            false
        }
    }
}

/// Keeps lines in memory; clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Drain the buffer.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }
}

impl LineSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines.lock().push(line.to_owned());
    }
}
