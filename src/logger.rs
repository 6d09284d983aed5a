//SPDX-License-Identifier: MIT OR Apache-2.0
use std::fmt::Debug;

/// Where a [`DebugLogger`](crate::DebugLogger) writes its lines.
///
/// This is a single synchronous write: one call per finished output line, already
/// timestamped and prefixed.
pub trait Logger: Debug + Send + Sync {
    /**
        Writes one formatted line.

        Loggers don't report failures; a line that can't be written is dropped.
    */
    fn write_line(&self, line: &str);

    /**
    The application may imminently exit.  Ensure all buffers are flushed and up to date.
    */
    fn prepare_to_die(&self);
}

/*
Boilerplate notes.

# Logger

I don't think Clone on Logger makes sense, so copy's out.
PartialEq and Eq are possible but it's a little unclear if we mean data equality or some kind of provenance-based thing.  Let's avoid that and not implement it.
Ord makes no sense
Default is not necessarily sensible since who knows how the logger is constructed.
Send/Sync is required, the process-wide debug logger is shared between threads.
*/
