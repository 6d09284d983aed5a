//SPDX-License-Identifier: MIT OR Apache-2.0

//! Log record type for the debug logger.
//!
//! A [`LogRecord`] accumulates the parts of one log call.  It is created when the call starts
//! (which fixes its timestamp and call site), filled argument by argument, and finally turned
//! into output lines by [`LogRecord::lines`].
//!
//! # Output format
//!
//! The parts are joined with single spaces and split on newlines.  Every resulting line is
//! trimmed of surrounding spaces, cut to the line limit, has its remaining control
//! characters (`\r`, `\t`) escaped, and is written as
//!
//! ```text
//! 2024-05-01 09:30:12 src/net.rs:42@connect(): connecting to primary
//! ```
//!
//! # Example
//!
//! ```rust
//! use checkwise::{LineLimit, LogRecord};
//!
//! let mut record = LogRecord::with_timestamp("2024-05-01 09:30:12", "src/net.rs:42");
//! record.log("first line\nsecond");
//! record.log_owned(format!("{:?}", [1, 2]));
//! assert_eq!(
//!     record.lines(LineLimit::default()),
//!     vec![
//!         "2024-05-01 09:30:12 src/net.rs:42: first line",
//!         "2024-05-01 09:30:12 src/net.rs:42: second [1, 2]",
//!     ]
//! );
//! ```

use crate::callsite::StackFrame;
use crate::config::LineLimit;
use std::fmt::Display;

/// `YYYY-MM-DD HH:MM:SS`, local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The current local time, formatted with [`TIMESTAMP_FORMAT`].
pub fn timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/**
A log record.

1.  Create a new [LogRecord] for a call site.
2.  Progressively write the message parts to it.
3.  Hand it to [crate::DebugLogger::finish], which writes [LogRecord::lines].
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogRecord {
    timestamp: String,
    location: String,
    parts: Vec<String>,
}

impl LogRecord {
    /// Starts a record for `frame`, stamped with the current time.
    pub fn new(frame: &StackFrame) -> Self {
        Self::with_timestamp(timestamp(), frame.log_location())
    }

    pub fn with_timestamp(timestamp: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            location: location.into(),
            parts: Vec::new(),
        }
    }

    /**
    Append a part to the record.
    */
    pub fn log(&mut self, message: &str) {
        self.parts.push(message.to_string());
    }

    /**
    Append a part to the record, taking ownership of it.
    */
    pub fn log_owned(&mut self, message: String) {
        self.parts.push(message);
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// The call site, as `file[:line][@function()]`.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// The parts joined with single spaces.
    pub fn message(&self) -> String {
        self.parts.join(" ")
    }

    /// The output lines for this record.
    pub fn lines(&self, limit: LineLimit) -> Vec<String> {
        self.message()
            .split('\n')
            .map(|line| {
                let line = limit.truncate(line.trim_matches(' '));
                format!("{} {}: {}", self.timestamp, self.location, escape(&line))
            })
            .collect()
    }
}

fn escape(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for c in line.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

impl Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.timestamp, self.location, self.message())
    }
}
/*
Boilerplate notes for LogRecord:

IMPLEMENTED:
- Debug, Clone, PartialEq/Eq, Hash: Derived, records are plain data
- Display: the unsplit, untruncated message with its prefix

NOT IMPLEMENTED:
- Default: a record always belongs to a call site
- Copy: owns strings
- Ord/PartialOrd: No meaningful ordering for log records
*/
