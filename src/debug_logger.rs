//SPDX-License-Identifier: MIT OR Apache-2.0

//! The debug logger.
//!
//! A [`DebugLogger`] turns log calls into timestamped, call-site tagged lines and writes them
//! to a [`Logger`] sink.  Each logger carries its own [`Mode`]: in production mode every log
//! call returns immediately, without resolving the call site or formatting anything.
//!
//! Most code logs through the `debug_log!` macro, which uses the process-wide logger in
//! [`global_logger`](crate::global_logger); `debug_log_to!` and [`DebugLogger::log`] take an
//! explicit logger.
//!
//! ```
//! use checkwise::{Config, DebugLogger, InMemoryLogger, Mode};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(InMemoryLogger::new());
//! let logger = DebugLogger::new(Config::default(), sink.clone());
//! logger.log("starting");
//! assert!(sink.drain_logs().ends_with(": starting"));
//!
//! logger.set_mode(Mode::Production);
//! logger.log("dropped");
//! assert_eq!(sink.drain_logs(), "");
//! ```

use crate::callsite::StackFrame;
use crate::config::{Config, LineLimit, Mode};
use crate::log_record::LogRecord;
use crate::logger::Logger;
use crate::stderror_logger::StdErrorLogger;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug)]
pub struct DebugLogger {
    production: AtomicBool,
    line_limit: LineLimit,
    sink: Arc<dyn Logger>,
}

impl DebugLogger {
    pub fn new(config: Config, sink: Arc<dyn Logger>) -> Self {
        Self {
            production: AtomicBool::new(config.mode.is_production()),
            line_limit: config.line_limit,
            sink,
        }
    }

    /// A logger writing to stderr.
    pub fn stderr(config: Config) -> Self {
        Self::new(config, Arc::new(StdErrorLogger::new()))
    }

    /// A stderr logger configured from the environment, see [`Config::from_env`].
    ///
    /// An invalid configuration is reported with one line on stderr, and the defaults are
    /// used instead.
    pub fn from_env() -> Self {
        match Config::from_env() {
            Ok(config) => Self::stderr(config),
            Err(e) => {
                let logger = Self::stderr(Config::default());
                logger
                    .sink
                    .write_line(&format!("checkwise: {e}; using the default configuration"));
                logger
            }
        }
    }

    pub fn mode(&self) -> Mode {
        if self.production.load(Ordering::Relaxed) {
            Mode::Production
        } else {
            Mode::Development
        }
    }

    /// Switches the mode at run time.  Affects log calls that start afterwards.
    pub fn set_mode(&self, mode: Mode) {
        self.production
            .store(mode.is_production(), Ordering::Relaxed);
    }

    pub fn is_production(&self) -> bool {
        self.production.load(Ordering::Relaxed)
    }

    pub fn is_development(&self) -> bool {
        !self.is_production()
    }

    pub fn line_limit(&self) -> LineLimit {
        self.line_limit
    }

    pub fn sink(&self) -> &Arc<dyn Logger> {
        &self.sink
    }

    /// Starts a record for `frame`.
    pub fn begin(&self, frame: &StackFrame) -> LogRecord {
        LogRecord::new(frame)
    }

    /// Writes the lines of `record`, one sink write per line.
    pub fn finish(&self, record: LogRecord) {
        if self.is_production() {
            return;
        }
        for line in record.lines(self.line_limit) {
            self.sink.write_line(&line);
        }
    }

    /// Logs `message`, attributed to the caller.
    ///
    /// The enclosing function is resolved from a captured backtrace, which makes this
    /// noticeably slower than `debug_log_to!`.  In production mode this returns before
    /// resolving anything.
    #[track_caller]
    pub fn log(&self, message: impl AsRef<str>) {
        if self.is_production() {
            return;
        }
        let frame = StackFrame::caller();
        let mut record = self.begin(&frame);
        record.log(message.as_ref());
        self.finish(record);
    }

    /// See [`Logger::prepare_to_die`].
    pub fn prepare_to_die(&self) {
        self.sink.prepare_to_die();
    }
}

impl Default for DebugLogger {
    fn default() -> Self {
        Self::stderr(Config::default())
    }
}

/*
Boilerplate notes.

Clone: no, the mode is shared state and a copy would silently stop following set_mode.
PartialEq/Eq/Hash: no, loggers have identity.
Default: development mode on stderr.
*/
