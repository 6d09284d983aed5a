//SPDX-License-Identifier: MIT OR Apache-2.0

//! Call-site resolution.
//!
//! Both the assertion chains and the debug logger attribute their messages to the code that
//! called them.  A call site is described by a [`StackFrame`]: a file, a line and the name of
//! the enclosing function, any of which may be unknown.
//!
//! There are two ways to obtain one:
//!
//! - At compile time, through the [`here!`](crate::here) macro (and everything built on
//!   it, like [`assert_that!`](crate::assert_that) and `debug_log!`).  The file and line
//!   come from `file!()`/`line!()` and the function from
//!   [`function_name!`](crate::function_name).  This costs nothing at run time.
//! - At run time, through [`StackFrame::caller`].  The file and line come from the
//!   compiler-provided caller location (`#[track_caller]`), and the function name is
//!   resolved by capturing and interpreting the native stack with [`capture_stack`].
//!
//! Stack capture is best effort.  When the platform can't capture a backtrace, or the binary
//! has no symbols, [`capture_stack`] returns an empty vector and the function is simply
//! unknown.

use crate::names::function_display_name;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::borrow::Cow;
use std::panic::Location;

/// A snapshot of one frame of the call stack.
///
/// Frames are immutable once built.  The function is stored as the path the compiler (or
/// the backtrace) reported; [`function_name`](Self::function_name) turns it into the short
/// name used in messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackFrame {
    file: Cow<'static, str>,
    line: Option<u32>,
    function: Option<Cow<'static, str>>,
}

impl StackFrame {
    /// Creates a frame from compile-time information.
    ///
    /// `function` is a function path such as the one produced by
    /// [`function_name!`](crate::function_name).
    pub const fn new(file: &'static str, line: u32, function: Option<&'static str>) -> Self {
        let function = match function {
            Some(f) => Some(Cow::Borrowed(f)),
            None => None,
        };
        Self {
            file: Cow::Borrowed(file),
            line: Some(line),
            function,
        }
    }

    /// Creates a frame from owned parts, as read from a backtrace.
    pub fn from_parts(
        file: impl Into<String>,
        line: Option<u32>,
        function: Option<impl Into<String>>,
    ) -> Self {
        Self {
            file: Cow::Owned(file.into()),
            line,
            function: function.map(|f| Cow::Owned(f.into())),
        }
    }

    /// A frame with nothing resolved: file `"unknown"`, no line, no function.
    pub const fn unknown() -> Self {
        Self {
            file: Cow::Borrowed("unknown"),
            line: None,
            function: None,
        }
    }

    /// Resolves the frame of the code calling this function.
    ///
    /// File and line are exact.  The enclosing function is looked up in a captured native
    /// backtrace, by finding the frame that executes the call at that file and line; if
    /// none matches, the function is left unknown.
    #[track_caller]
    #[inline(never)]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: Cow::Borrowed(location.file()),
            line: Some(location.line()),
            function: resolve_function(location).map(Cow::Owned),
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> Option<u32> {
        self.line
    }

    /// The full function path, as reported by the compiler or the backtrace.
    pub fn function_path(&self) -> Option<&str> {
        self.function.as_deref()
    }

    /// The short display name of the enclosing function, see
    /// [`function_display_name`](crate::names::function_display_name).
    pub fn function_name(&self) -> Option<String> {
        self.function.as_deref().map(function_display_name)
    }

    /// The location as used in log lines: `file[:line][@function()]`.
    pub fn log_location(&self) -> String {
        let mut location = self.file.to_string();
        if let Some(line) = self.line {
            location.push_str(&format!(":{line}"));
        }
        if let Some(function) = self.function_name() {
            location.push_str(&format!("@{function}()"));
        }
        location
    }

    /// The last component of the file path.
    pub fn file_name(&self) -> &str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file())
    }

    /// The prefix of every assertion failure raised from this call site.
    ///
    /// `Argument passed to <function>()` when the function is known, otherwise
    /// `Assertion failed (at <file>:<line>)`, with `unknown` standing in for a missing line.
    pub fn assertion_prefix(&self) -> String {
        self.prefix_with_file(&self.file)
    }

    /// Like [`assertion_prefix`](Self::assertion_prefix), but names the file without its
    /// directory.
    pub fn short_assertion_prefix(&self) -> String {
        self.prefix_with_file(self.file_name())
    }

    fn prefix_with_file(&self, file: &str) -> String {
        match (self.function_name(), self.line) {
            (Some(function), _) => format!("Argument passed to {function}()"),
            (None, Some(line)) => format!("Assertion failed (at {file}:{line})"),
            (None, None) => format!("Assertion failed (at {file}:unknown)"),
        }
    }
}

impl Default for StackFrame {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Returns the line of the code calling this function.
///
/// This is a lightweight `line!()` for code that wants to report where it is without
/// formatting a whole log message.
#[track_caller]
pub fn current_line() -> u32 {
    Location::caller().line()
}

/// Captures the current call stack, innermost frame first.
///
/// Frame 0 is the capture point (`capture_stack` itself), frame 1 the function that called
/// it, frame 2 that function's caller, and so on.
/// Returns an empty vector if the platform can't capture a backtrace, or if the frames
/// can't be attributed (for example, because the binary was stripped).
#[inline(never)]
pub fn capture_stack() -> Vec<StackFrame> {
    let backtrace = Backtrace::force_capture();
    if backtrace.status() != BacktraceStatus::Captured {
        return Vec::new();
    }
    let frames = parse_backtrace(&backtrace.to_string());
    let own = frames.iter().position(|f| {
        f.function_path()
            .is_some_and(|p| p.ends_with("callsite::capture_stack"))
    });
    match own {
        Some(index) => frames.into_iter().skip(index).collect(),
        None => Vec::new(),
    }
}

/// Returns the frame `depth` levels above the caller of this function.
///
/// `frame_at(0)` describes the caller itself, `frame_at(1)` the caller's caller.  Frames
/// that can't be resolved are [`StackFrame::unknown`].
#[inline(never)]
pub fn frame_at(depth: usize) -> StackFrame {
    //frames 0 and 1 are capture_stack and frame_at
    capture_stack()
        .into_iter()
        .nth(depth + 2)
        .unwrap_or_default()
}

/// Parses the textual form of a [`Backtrace`] into frames.
///
/// Each frame starts with either a numbered symbol line (`  3: app::main`) or, for
/// inlined frames, an unnumbered symbol line; an optional `at file:line:column` line
/// follows.  Symbols printed as `<unknown>` produce frames without a function.
pub fn parse_backtrace(text: &str) -> Vec<StackFrame> {
    let mut frames = Vec::new();
    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with("note:") {
            continue;
        }
        if let Some(location) = line.strip_prefix("at ") {
            if let Some(frame) = frames.last_mut() {
                apply_location(frame, location);
            }
            continue;
        }
        let symbol = strip_frame_index(line);
        let function = match symbol {
            "<unknown>" | "" => None,
            name => Some(name.to_string()),
        };
        frames.push(StackFrame::from_parts("unknown", None, function));
    }
    frames
}

fn strip_frame_index(line: &str) -> &str {
    match line.split_once(": ") {
        Some((index, rest)) if index.chars().all(|c| c.is_ascii_digit()) => rest.trim(),
        _ => line,
    }
}

/// Reads `file:line:column` (column optional) into the frame.
fn apply_location(frame: &mut StackFrame, location: &str) {
    let mut parts = location.rsplitn(3, ':');
    let last = parts.next();
    let middle = parts.next();
    let rest = parts.next();
    let (file, line) = match (rest, middle, last) {
        (Some(file), Some(line), Some(_column)) => (file, line.parse().ok()),
        (None, Some(file), Some(line)) => (file, line.parse().ok()),
        _ => (location, None),
    };
    frame.file = Cow::Owned(file.to_string());
    frame.line = line;
}

/// Finds the function that executes the call at `location`.
fn resolve_function(location: &Location<'_>) -> Option<String> {
    capture_stack()
        .into_iter()
        .find(|frame| {
            frame.line == Some(location.line()) && same_file(frame.file(), location.file())
        })
        .and_then(|frame| frame.function.map(Cow::into_owned))
}

/// Backtraces report paths relative to the working directory (`./src/lib.rs`) or
/// absolute, while `file!()` is relative to the package root.
fn same_file(frame_file: &str, source_file: &str) -> bool {
    let frame_file = frame_file.strip_prefix("./").unwrap_or(frame_file);
    let source_file = source_file.strip_prefix("./").unwrap_or(source_file);
    frame_file.ends_with(source_file) || source_file.ends_with(frame_file)
}
