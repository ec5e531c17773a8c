//! Diagnostic trace sinks.
//!
//! The decoder builds a human-readable line per message and hands it to a
//! [`TraceSink`]. Nothing about the trace influences decoding.

use std::sync::Mutex;

/// `tracing` target used by [`TracingSink`].
pub const UNSOL_TRACE_TARGET: &str = "rilstar::unsol";

/// Receiver for per-message diagnostic traces.
pub trait TraceSink: Send + Sync {
    /// Whether traces should be built at all.
    fn enabled(&self) -> bool {
        true
    }

    /// Accepts the trace for one unsolicited message.
    fn print_unsol(&self, message: &str, trace: &str);
}

/// Forwards traces to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn enabled(&self) -> bool {
        tracing::enabled!(target: UNSOL_TRACE_TARGET, tracing::Level::DEBUG)
    }

    fn print_unsol(&self, message: &str, trace: &str) {
        tracing::debug!(target: UNSOL_TRACE_TARGET, "[UNSOL]< {} {}", message, trace);
    }
}

/// Discards every trace.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn enabled(&self) -> bool {
        false
    }

    fn print_unsol(&self, _message: &str, _trace: &str) {}
}

/// Keeps traces in memory, mainly for inspection in tests and tools.
#[derive(Debug, Default)]
pub struct CollectingSink {
    lines: Mutex<Vec<String>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns and clears the collected lines.
    pub fn take(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(mut lines) => std::mem::take(&mut *lines),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl TraceSink for CollectingSink {
    fn print_unsol(&self, message: &str, trace: &str) {
        let line = format!("{} {}", message, trace);
        match self.lines.lock() {
            Ok(mut lines) => lines.push(line),
            Err(poisoned) => poisoned.into_inner().push(line),
        }
    }
}
