//SPDX-License-Identifier: MIT OR Apache-2.0

//! Implementation functions behind the logging macros, and the declarative macros.
//!
//! # Architecture
//!
//! The logging flow follows this pattern:
//! 1. The macro checks [`DebugLogger::is_development`]; in production nothing else runs.
//! 2. [`debug_log_pre`] creates a [`LogRecord`] for the call site.
//! 3. The procedural macro uses [`ArgFormatter`] to write every argument.
//! 4. [`debug_log_post`] hands the record to the logger.
//!
//! These functions are not intended to be called directly:
//!
//! ```rust
//! let attempts = 2;
//! checkwise::debug_log!("retrying after", attempts, "attempts");
//! ```

use crate::callsite::StackFrame;
use crate::debug_logger::DebugLogger;
use crate::log_record::LogRecord;

/// Starts the record of a `debug_log!` call.
pub fn debug_log_pre(file: &'static str, line: u32, function: &'static str) -> LogRecord {
    LogRecord::new(&StackFrame::new(file, line, Some(function)))
}

/// Finishes the record of a `debug_log!` call.
pub fn debug_log_post(logger: &DebugLogger, record: LogRecord) {
    logger.finish(record);
}

/// Writes log arguments into a record.
pub struct ArgFormatter<'r> {
    record: &'r mut LogRecord,
}

impl<'r> ArgFormatter<'r> {
    pub fn new(record: &'r mut LogRecord) -> Self {
        Self { record }
    }

    /// Writes a string literal from the macro call.
    pub fn write_literal(&mut self, literal: &str) {
        self.record.log(literal);
    }

    /// Writes an inspected argument.
    pub fn write_val(&mut self, value: String) {
        self.record.log_owned(value);
    }
}

/// Expands to the path of the enclosing function, as a `&'static str`.
///
/// Inside closures, the path ends in `{{closure}}`.
///
/// ```
/// fn connect() -> &'static str {
///     checkwise::function_name!()
/// }
/// assert!(connect().ends_with("::connect"));
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __checkwise_here() {}
        fn __checkwise_type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = __checkwise_type_name_of(__checkwise_here);
        match name.strip_suffix("::__checkwise_here") {
            ::core::option::Option::Some(path) => path,
            ::core::option::Option::None => name,
        }
    }};
}

/// Expands to a [`StackFrame`](crate::StackFrame) for the current file, line and function.
///
/// ```
/// fn handler() -> checkwise::StackFrame {
///     checkwise::here!()
/// }
/// let frame = handler();
/// assert_eq!(frame.function_name().as_deref(), Some("handler"));
/// assert!(frame.line().is_some());
/// ```
#[macro_export]
macro_rules! here {
    () => {
        $crate::StackFrame::new(
            ::core::file!(),
            ::core::line!(),
            ::core::option::Option::Some($crate::function_name!()),
        )
    };
}

/// Starts an [`Assertion`](crate::Assertion) chain over `value`, attributed to the
/// enclosing function.
///
/// The value is borrowed; pass `*text` to check a `&str` as `str`.
///
/// ```
/// use checkwise::assert_that;
/// let ports = vec![80, 443];
/// assert_that!(ports).min_length(1).unwrap().prop(&0usize).unwrap().equals(&80).unwrap();
/// ```
#[macro_export]
macro_rules! assert_that {
    ($value:expr) => {
        $crate::Assertion::at(&$value, $crate::here!())
    };
}

/// Starts a one-shot [`Check`](crate::Check) over `value`, attributed to the enclosing
/// function.
///
/// ```
/// let name = "worker";
/// checkwise::check!(name).type_of("&str").unwrap();
/// ```
#[macro_export]
macro_rules! check {
    ($value:expr) => {
        $crate::Check::at(&$value, $crate::here!())
    };
}
