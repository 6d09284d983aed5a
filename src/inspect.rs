//SPDX-License-Identifier: MIT OR Apache-2.0

//! Argument inspection for the logging macros.
//!
//! Log arguments that are already text are written as they are; everything else is written
//! with its `Debug` representation.  The choice is made at compile time with autoref
//! specialization: the macros expand every argument to
//!
//! ```ignore
//! (&&Arg(&(value))).inspect()
//! ```
//!
//! Method lookup tries [`InspectText`] (implemented on `&Arg<T>`) before [`InspectDebug`]
//! (implemented on `Arg<T>`), so a value that is both `AsRef<str>` and `Debug` is written
//! as text.

use std::fmt::Debug;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Wraps a log argument for inspection.
pub struct Arg<'a, T: ?Sized>(pub &'a T);

pub trait InspectText {
    fn inspect(&self) -> String;
}

pub trait InspectDebug {
    fn inspect(&self) -> String;
}

impl<T: AsRef<str> + ?Sized> InspectText for &Arg<'_, T> {
    fn inspect(&self) -> String {
        self.0.as_ref().to_string()
    }
}

impl<T: Debug + ?Sized> InspectDebug for Arg<'_, T> {
    fn inspect(&self) -> String {
        format!("{:?}", self.0)
    }
}

/// Runs `f`, reporting whether it finished.
///
/// A panic while inspecting an argument aborts that log call only.
pub fn guard(f: impl FnOnce()) -> bool {
    catch_unwind(AssertUnwindSafe(f)).is_ok()
}
