//SPDX-License-Identifier: MIT OR Apache-2.0

//! # Checkwise Procedural Macros
//!
//! This crate provides the variadic logging macros for the checkwise library. The macros
//! split their arguments at compile time and generate a sequence of formatter calls that
//! build a `LogRecord`, then hand the record to a `DebugLogger`.
//!
//! ## Architecture
//!
//! Each logging macro follows the same three-phase pattern:
//! 1. **Gate**: the logger is checked first.  In production mode nothing else runs.
//! 2. **Format phase**: `debug_log_pre()` opens a `LogRecord` for the call site
//!    (`file!()`, `line!()`, `function_name!()`), then every argument is written to it.
//! 3. **Post-phase**: `debug_log_post()` turns the record into output lines and writes them.
//!
//! ## Arguments
//!
//! - A string literal is already text and is written verbatim.
//! - Any other expression is inspected at run time: values that are text (`AsRef<str>`) are
//!   written as they are, everything else through its `Debug` representation.
//! - Expressions are evaluated in the calling function, so `?` works inside them.  Only the
//!   inspection is guarded: a panicking `Debug` impl drops that one log call.
//!
//! ## Usage Example
//!
//! ```rust
//! let retries = 3;
//! let name = "primary";
//! // This macro call:
//! checkwise::debug_log!("connecting to", name, "retries =", retries);
//!
//! // Expands to approximately:
//! // {
//! //     let logger = checkwise::global_logger::debug_logger();
//! //     if logger.is_development() {
//! //         let mut record = checkwise::hidden::debug_log_pre(file!(), line!(), checkwise::function_name!());
//! //         let mut formatter = checkwise::hidden::ArgFormatter::new(&mut record);
//! //         formatter.write_literal("connecting to");
//! //         formatter.write_val((&&checkwise::hidden::Arg(&(name))).inspect());
//! //         formatter.write_literal("retries =");
//! //         formatter.write_val((&&checkwise::hidden::Arg(&(retries))).inspect());
//! //         checkwise::hidden::debug_log_post(&logger, record);
//! //     }
//! // }
//! ```

use proc_macro::TokenStream;

mod debug_log;
mod parser;

/// Writes a debug log line tagged with a timestamp and the call site.
///
/// Arguments are joined with a single space.  String literals are written as-is, other
/// text values (`&str`, `String`, ...) are written as-is, and everything else is written
/// with its `Debug` representation.
///
/// The message goes to the process-wide logger (see `checkwise::global_logger`).  When that
/// logger is in production mode the macro does nothing, and the arguments are not evaluated.
///
/// # Examples
///
/// ```rust
/// let items = vec![1, 2, 3];
/// checkwise::debug_log!("items =", items);
/// checkwise::debug_log!("parsed", items.len(), "items");
/// ```
#[proc_macro]
pub fn debug_log(input: TokenStream) -> TokenStream {
    debug_log::debug_log_impl(input)
}

/// Like `debug_log!`, but writes through an explicit `DebugLogger`.
///
/// The first argument is the logger (a `DebugLogger`, a reference to one, or an
/// `Arc<DebugLogger>`), the rest are the message arguments.
///
/// # Examples
///
/// ```rust
/// use checkwise::{Config, DebugLogger, InMemoryLogger};
/// use std::sync::Arc;
///
/// let sink = Arc::new(InMemoryLogger::new());
/// let logger = DebugLogger::new(Config::default(), sink.clone());
/// checkwise::debug_log_to!(logger, "answer:", 42);
/// assert!(sink.drain_logs().ends_with(": answer: 42"));
/// ```
///
/// A logger expression is required:
///
/// ```compile_fail
/// checkwise::debug_log_to!("no logger here");
/// ```
#[proc_macro]
pub fn debug_log_to(input: TokenStream) -> TokenStream {
    debug_log::debug_log_to_impl(input)
}
