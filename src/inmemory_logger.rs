//SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Logger
//!
//! This module provides an in-memory [`Logger`] for testing and debugging purposes.
//! The `InMemoryLogger` captures lines in memory rather than writing them to stderr,
//! making it ideal for:
//!
//! - Unit testing code that uses `debug_log!`
//! - Capturing logs in environments where stderr is redirected or unavailable
//! - Programmatically examining log output

use crate::logger::Logger;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// An in-memory logger that stores log lines in a `Vec<String>`.
///
/// # Example
///
/// ```rust
/// use checkwise::{Config, DebugLogger, InMemoryLogger};
/// use std::sync::Arc;
///
/// let sink = Arc::new(InMemoryLogger::new());
/// let logger = DebugLogger::new(Config::default(), sink.clone());
/// checkwise::debug_log_to!(logger, "value =", 42);
///
/// let logs = sink.drain_logs();
/// assert!(logs.ends_with("value = 42"));
/// // the buffer is now empty
/// assert_eq!(sink.drain_logs(), "");
/// ```
#[derive(Debug)]
pub struct InMemoryLogger {
    logs: Mutex<Vec<String>>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: Derived for diagnostic purposes and required by Logger trait
// - Default: Implemented with obvious zero-value (empty log buffer)
// - Clone: NOT implemented - loggers are shared through Arc instead
// - PartialEq/Eq/Hash: NOT implemented - equality semantics unclear for loggers
// - Send/Sync: Automatically implemented due to Mutex usage (required for Logger trait)

impl Default for InMemoryLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLogger {
    /// Creates a new `InMemoryLogger` with an empty log buffer.
    pub fn new() -> Self {
        Self {
            logs: Mutex::new(Vec::new()),
        }
    }

    /// A poisoned buffer is still a valid list of lines.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.logs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Drains all lines into a single string joined by newlines, clearing the buffer.
    pub fn drain_logs(&self) -> String {
        self.drain_lines().join("\n")
    }

    /// Drains all lines, clearing the buffer.
    pub fn drain_lines(&self) -> Vec<String> {
        std::mem::take(&mut *self.lock())
    }

    /// Flushes all lines to the console, clearing the buffer.
    ///
    /// On native platforms lines are written to stderr; on wasm32 to `console.log`.
    pub fn drain_to_console(&self) {
        for log in self.drain_lines() {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::log_1(&log.into());
            #[cfg(not(target_arch = "wasm32"))]
            eprintln!("{}", log);
        }
    }
}

impl Logger for InMemoryLogger {
    fn write_line(&self, line: &str) {
        self.lock().push(line.to_string());
    }

    fn prepare_to_die(&self) {
        // No-op since we're storing in memory, no flushing needed
    }
}
