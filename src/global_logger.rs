//SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide debug logger.
//!
//! `debug_log!` writes through the logger returned by [`debug_logger`].  It is created on
//! first use from the environment (see [`Config::from_env`](crate::Config::from_env)),
//! writes to stderr, and can be replaced at any time with [`set_debug_logger`].
//!
//! # Examples
//!
//! ## Switching to production at run time
//!
//! ```
//! use checkwise::Mode;
//! use checkwise::global_logger::{is_production, set_mode};
//!
//! set_mode(Mode::Production);
//! assert!(is_production());
//! checkwise::debug_log!("never written");
//! set_mode(Mode::Development);
//! ```
//!
//! ## Capturing output
//!
//! ```
//! use checkwise::{Config, DebugLogger, InMemoryLogger};
//! use checkwise::global_logger::set_debug_logger;
//! use std::sync::Arc;
//!
//! let sink = Arc::new(InMemoryLogger::new());
//! let previous = set_debug_logger(Arc::new(DebugLogger::new(Config::default(), sink.clone())));
//! checkwise::debug_log!("captured");
//! assert!(sink.drain_logs().ends_with(": captured"));
//! set_debug_logger(previous);
//! ```
//!
//! # Implementation Notes
//!
//! The logger is stored behind a spinlock rather than a `std::sync::Mutex` for
//! compatibility with the wasm main thread.  The lock is only held to clone or swap the
//! `Arc`; log calls themselves run unlocked, so a replaced logger keeps serving the calls
//! that already hold it.

use crate::config::Mode;
use crate::debug_logger::DebugLogger;
use crate::spinlock::Spinlock;
use std::sync::{Arc, OnceLock};

static DEBUG_LOGGER: OnceLock<Spinlock<Arc<DebugLogger>>> = OnceLock::new();

fn slot() -> &'static Spinlock<Arc<DebugLogger>> {
    DEBUG_LOGGER.get_or_init(|| Spinlock::new(Arc::new(DebugLogger::from_env())))
}

/// The current process-wide logger.
pub fn debug_logger() -> Arc<DebugLogger> {
    slot().with(|logger| logger.clone())
}

/// Replaces the process-wide logger, returning the previous one.
pub fn set_debug_logger(logger: Arc<DebugLogger>) -> Arc<DebugLogger> {
    slot().with(|current| std::mem::replace(current, logger))
}

/// Sets the mode of the process-wide logger.
pub fn set_mode(mode: Mode) {
    debug_logger().set_mode(mode);
}

pub fn is_production() -> bool {
    debug_logger().is_production()
}

pub fn is_development() -> bool {
    debug_logger().is_development()
}
