//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# checkwise

checkwise is a runtime diagnostics toolkit: call-site aware debug logging, and chainable
in-line assertions whose failures say where they came from.

# Development status

checkwise is experimental and the API may change.

# Assertions

Start a chain with [`assert_that!`] and call verbs on it.  Each verb either passes, returning
the chain, or fails with an [`AssertionError`] whose message names the function that made
the assertion:

```rust
use checkwise::{AssertionError, assert_that};
use std::collections::HashMap;

fn start(config: &HashMap<&str, u16>) -> Result<(), AssertionError> {
    assert_that!(*config).prop("port")?.range(1024..=49151)?;
    Ok(())
}

let config = HashMap::from([("port", 80)]);
assert_eq!(
    start(&config).unwrap_err().to_string(),
    "Argument passed to start() value 80 not in range [1024, 49151]"
);
```

The verbs are `ignore`, `instance_of`, `type_of`, `prop`, `equals`, `range`, `length`,
`min_length`, `max_length`, `is`, `not` and `pattern`; see [`Assertion`].  [`check!`] starts a
one-shot [`Check`] carrying only `ignore`, `instance_of`, `type_of` and `equals`.

Calling [`Assertion::ignore`] with the subject's own value turns every later verb on that
chain into a no-op, which is the usual way to accept an optional value:

```rust
let timeout = 0u32; // 0 means "no timeout"
checkwise::assert_that!(timeout).ignore(&0).range(100..=60_000).unwrap();
```

# Debug logging

[`debug_log!`] writes its arguments, separated by spaces, with a timestamp and the call site:

```text
2024-05-01 09:30:12 src/net.rs:42@connect(): connecting to primary retries = 3
```

```rust
let name = "primary";
let retries = 3;
checkwise::debug_log!("connecting to", name, "retries =", retries);
```

Strings are written as they are; other values with their `Debug` representation.  Long lines
are cut to the line limit, and control characters are escaped.

In production mode (`CHECKWISE_ENV=production`, or [`global_logger::set_mode`]) logging does
nothing at all: the arguments aren't even evaluated.

# Call sites

Both halves share the [`callsite`] module.  Macros resolve the call site at compile time;
[`StackFrame::caller`] resolves it at run time from a captured backtrace, for code that can't
use a macro.
*/

mod assertion;
pub mod callsite;
mod check;
mod config;
mod debug_logger;
mod error;
pub mod global_logger;
mod inmemory_logger;
mod inspect;
mod log_record;
mod logger;
mod macros;
pub mod names;
mod predicate;
mod spinlock;
mod stderror_logger;
mod subject;

pub use assertion::Assertion;
pub use callsite::{StackFrame, capture_stack, current_line};
pub use check::Check;
pub use config::{Config, LineLimit, Mode};
pub use debug_logger::DebugLogger;
pub use error::{AssertionError, AssertionErrorKind, ConfigError};
pub use inmemory_logger::InMemoryLogger;
pub use log_record::LogRecord;
pub use logger::Logger;
pub use predicate::PredicateRegistry;
pub use stderror_logger::StdErrorLogger;
pub use subject::{Length, Properties};

pub use checkwise_proc::{debug_log, debug_log_to};

#[doc(hidden)]
pub mod hidden {
    pub use crate::inspect::{Arg, InspectDebug, InspectText, guard};
    pub use crate::macros::{ArgFormatter, debug_log_post, debug_log_pre};
}
extern crate self as checkwise;
