//SPDX-License-Identifier: MIT OR Apache-2.0

//! The one-shot assertion.
//!
//! [`Check`] is a restricted view over [`Assertion`]: it carries only `ignore`,
//! `instance_of`, `type_of` and `equals`, with the same semantics.  Its failure prefix names
//! the file without its directory.
//!
//! ```
//! use checkwise::check;
//!
//! fn retries(count: u32) -> Result<u32, checkwise::AssertionError> {
//!     check!(count).ignore(&0).equals(&3)?;
//!     Ok(count)
//! }
//! assert!(retries(3).is_ok());
//! assert!(retries(0).is_ok());
//! assert_eq!(
//!     retries(5).unwrap_err().to_string(),
//!     "Argument passed to retries() does not equal: 5 !== 3"
//! );
//! ```

use crate::assertion::Assertion;
use crate::callsite::StackFrame;
use crate::error::AssertionError;
use std::any::Any;
use std::fmt::{Debug, Display};

#[derive(Debug)]
pub struct Check<'a, T: ?Sized> {
    inner: Assertion<'a, T>,
}

impl<'a, T: ?Sized> Check<'a, T> {
    /// Starts a check attributed to the caller.
    #[track_caller]
    pub fn new(subject: &'a T) -> Self {
        Self::at(subject, StackFrame::caller())
    }

    pub fn at(subject: &'a T, site: StackFrame) -> Self {
        Self {
            inner: Assertion::at(subject, site).with_short_file(),
        }
    }

    pub fn is_ignored(&self) -> bool {
        self.inner.is_ignored()
    }

    pub fn prefix(&self) -> &str {
        self.inner.prefix()
    }

    /// See [`Assertion::ignore`].
    pub fn ignore<U: ?Sized>(&self, value: &U) -> &Self
    where
        T: PartialEq<U>,
    {
        self.inner.ignore(value);
        self
    }
}

impl<T: Debug + ?Sized> Check<'_, T> {
    /// See [`Assertion::instance_of`].
    pub fn instance_of<U: Any + ?Sized>(&self) -> Result<&Self, AssertionError>
    where
        T: Any,
    {
        self.inner.instance_of::<U>()?;
        Ok(self)
    }

    /// See [`Assertion::type_of`].
    pub fn type_of(&self, name: impl Display) -> Result<&Self, AssertionError> {
        self.inner.type_of(name)?;
        Ok(self)
    }

    /// See [`Assertion::equals`].
    pub fn equals<U: Debug + ?Sized>(&self, value: &U) -> Result<&Self, AssertionError>
    where
        T: PartialEq<U>,
    {
        self.inner.equals(value)?;
        Ok(self)
    }
}
