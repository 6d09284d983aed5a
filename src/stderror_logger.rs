//SPDX-License-Identifier: MIT OR Apache-2.0
use crate::logger::Logger;

/**
A logger that writes to stderr.

On wasm32, lines go to `console.debug` instead.
 */
#[derive(Debug, Clone)]
pub struct StdErrorLogger {}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug/Clone: Already derived - appropriate for zero-sized struct
// - Copy: Implemented - safe for zero-sized struct with no heap allocation
// - PartialEq/Eq/Hash: Implemented - all instances are equivalent (zero-sized)
// - Default: Implemented - provides convenient zero-argument constructor
// - Display: NOT implemented - no meaningful string representation for stderr logger

impl Copy for StdErrorLogger {}

impl PartialEq for StdErrorLogger {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for StdErrorLogger {}

impl std::hash::Hash for StdErrorLogger {
    fn hash<H: std::hash::Hasher>(&self, _state: &mut H) {}
}

impl Default for StdErrorLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl StdErrorLogger {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Logger for StdErrorLogger {
    fn write_line(&self, line: &str) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            let mut buffer = String::with_capacity(line.len() + 1);
            buffer.push_str(line);
            buffer.push('\n');
            //one write per line, so concurrent lines don't interleave
            let _ = std::io::stderr().lock().write_all(buffer.as_bytes());
        }
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::debug_1(&line.into());
        }
    }

    fn prepare_to_die(&self) {
        //nothing to do since we are unbuffered
    }
}
