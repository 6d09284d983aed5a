//SPDX-License-Identifier: MIT OR Apache-2.0

//! The assertion chain.
//!
//! An [`Assertion`] wraps one subject and exposes a set of verbs.  Each verb either passes,
//! returning the chain so that the next verb can be called, or fails with an
//! [`AssertionError`] whose message starts with the chain's call-site prefix:
//!
//! ```
//! use checkwise::{AssertionError, assert_that};
//!
//! fn connect(host: &str, port: u16) -> Result<(), AssertionError> {
//!     assert_that!(*host).min_length(1)?.max_length(253)?;
//!     assert_that!(port).range(1024..)?;
//!     Ok(())
//! }
//!
//! assert!(connect("localhost", 8080).is_ok());
//! let err = connect("localhost", 80).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Argument passed to connect() value 80 not in range [1024, +inf)"
//! );
//! ```
//!
//! # Ignoring
//!
//! [`ignore`](Assertion::ignore) marks the chain as ignored when the subject equals the
//! given value.  Every verb called on an ignored chain passes without looking at the
//! subject.  The flag can only be set once and never cleared; failures raised before it
//! was set are not affected.
//!
//! # Absent subjects
//!
//! [`prop`](Assertion::prop) on a missing key produces a chain without a subject, rendered
//! as `<absent>` in messages.  Checking verbs fail on it, `is` fails and `not` passes;
//! [`ignore_missing`](Assertion::ignore_missing) skips the rest of the chain instead.

use crate::callsite::StackFrame;
use crate::error::{AssertionError, AssertionErrorKind};
use crate::names::{callable_name, type_tag};
use crate::predicate::PredicateRegistry;
use crate::subject::{Length, Properties};
use regex::Regex;
use std::any::{Any, TypeId, type_name};
use std::cell::OnceCell;
use std::fmt::{Debug, Display};
use std::ops::{Bound, RangeBounds};

#[cfg(test)]
mod tests;

const ABSENT: &str = "<absent>";

/// A chain of checks over one subject.
///
/// Build one with [`assert_that!`](crate::assert_that) (the call site is resolved at
/// compile time) or [`Assertion::new`] (resolved at run time from the caller's location).
#[derive(Debug)]
pub struct Assertion<'a, T: ?Sized> {
    subject: Option<&'a T>,
    ignored: OnceCell<()>,
    site: StackFrame,
    short_file: bool,
    predicates: Option<&'a PredicateRegistry<T>>,
    prefix: OnceCell<String>,
}

impl<'a, T: ?Sized> Assertion<'a, T> {
    /// Starts a chain attributed to the caller.
    #[track_caller]
    pub fn new(subject: &'a T) -> Self {
        Self::at(subject, StackFrame::caller())
    }

    /// Starts a chain attributed to `site`.
    pub fn at(subject: &'a T, site: StackFrame) -> Self {
        Self::build(Some(subject), site)
    }

    /// Starts a chain without a subject.
    pub fn absent(site: StackFrame) -> Self {
        Self::build(None, site)
    }

    fn build(subject: Option<&'a T>, site: StackFrame) -> Self {
        Self {
            subject,
            ignored: OnceCell::new(),
            site,
            short_file: false,
            predicates: None,
            prefix: OnceCell::new(),
        }
    }

    /// Names the file without its directory in the prefix.
    pub(crate) fn with_short_file(mut self) -> Self {
        self.short_file = true;
        self
    }

    /// Attaches the registry used by [`is`](Self::is) and [`not`](Self::not).
    pub fn using(mut self, registry: &'a PredicateRegistry<T>) -> Self {
        self.predicates = Some(registry);
        self
    }

    pub fn subject(&self) -> Option<&'a T> {
        self.subject
    }

    pub fn site(&self) -> &StackFrame {
        &self.site
    }

    pub fn is_ignored(&self) -> bool {
        self.ignored.get().is_some()
    }

    /// The text every failure message of this chain starts with.
    pub fn prefix(&self) -> &str {
        self.prefix.get_or_init(|| {
            if self.short_file {
                self.site.short_assertion_prefix()
            } else {
                self.site.assertion_prefix()
            }
        })
    }

    /// Ignores the rest of the chain if the subject equals `value`.
    pub fn ignore<U: ?Sized>(&self, value: &U) -> &Self
    where
        T: PartialEq<U>,
    {
        if self.subject.is_some_and(|s| s == value) {
            let _ = self.ignored.set(());
        }
        self
    }

    /// Ignores the rest of the chain if there is no subject.
    pub fn ignore_missing(&self) -> &Self {
        if self.subject.is_none() {
            let _ = self.ignored.set(());
        }
        self
    }

    fn fail(&self, kind: AssertionErrorKind, detail: impl Display) -> AssertionError {
        AssertionError::new(kind, format!("{} {}", self.prefix(), detail))
    }
}

impl<'a, T: Debug + ?Sized> Assertion<'a, T> {
    fn rendered(&self) -> String {
        match self.subject {
            Some(s) => format!("{s:?}"),
            None => ABSENT.to_string(),
        }
    }

    /// Passes if the subject's type is `U`.
    pub fn instance_of<U: Any + ?Sized>(&self) -> Result<&Self, AssertionError>
    where
        T: Any,
    {
        if self.is_ignored() {
            return Ok(self);
        }
        if self
            .subject
            .is_some_and(|s| Any::type_id(s) == TypeId::of::<U>())
        {
            return Ok(self);
        }
        Err(self.fail(
            AssertionErrorKind::TypeMismatch,
            format_args!(
                "is not instance of {}: {}",
                callable_name(type_name::<U>()),
                self.rendered()
            ),
        ))
    }

    /// Passes if the subject's type tag is `name`.
    ///
    /// The tag is the type's name without module paths: `i32`, `String`, `Vec<u8>`, `&str`.
    pub fn type_of(&self, name: impl Display) -> Result<&Self, AssertionError> {
        if self.is_ignored() {
            return Ok(self);
        }
        let name = name.to_string();
        if self.subject.is_some() && type_tag(type_name::<T>()) == name {
            return Ok(self);
        }
        Err(self.fail(
            AssertionErrorKind::TypeMismatch,
            format_args!("is not type of {name}: {}", self.rendered()),
        ))
    }

    /// Passes if the subject equals `value`.
    pub fn equals<U: Debug + ?Sized>(&self, value: &U) -> Result<&Self, AssertionError>
    where
        T: PartialEq<U>,
    {
        if self.is_ignored() || self.subject.is_some_and(|s| s == value) {
            return Ok(self);
        }
        Err(self.fail(
            AssertionErrorKind::EqualityMismatch,
            format_args!("does not equal: {} !== {value:?}", self.rendered()),
        ))
    }

    /// Passes if the subject lies within `range`.  Unbounded sides accept anything.
    pub fn range<R: RangeBounds<T>>(&self, range: R) -> Result<&Self, AssertionError>
    where
        T: PartialOrd,
    {
        if self.is_ignored() {
            return Ok(self);
        }
        if let Some(s) = self.subject {
            let above = match range.start_bound() {
                Bound::Included(min) => s >= min,
                Bound::Excluded(min) => s > min,
                Bound::Unbounded => true,
            };
            let below = match range.end_bound() {
                Bound::Included(max) => s <= max,
                Bound::Excluded(max) => s < max,
                Bound::Unbounded => true,
            };
            if above && below {
                return Ok(self);
            }
        }
        Err(self.fail(
            AssertionErrorKind::RangeMismatch,
            format_args!(
                "value {} not in range {}",
                self.rendered(),
                interval::<T, R>(&range)
            ),
        ))
    }

    /// Reads property `key` and returns a chain over its value.
    ///
    /// The new chain is attributed to the same call site.  A missing property gives a chain
    /// without a subject.  On an ignored chain this returns an ignored chain.
    pub fn prop<K: Debug + ?Sized>(
        &self,
        key: &K,
    ) -> Result<Assertion<'a, T::Value>, AssertionError>
    where
        T: Properties<K>,
        T::Value: 'a,
    {
        let child = |subject| {
            let mut chain = Assertion::build(subject, self.site.clone());
            chain.short_file = self.short_file;
            chain
        };
        if self.is_ignored() {
            let skipped = child(None);
            let _ = skipped.ignored.set(());
            return Ok(skipped);
        }
        match self.subject {
            Some(s) if Properties::<K>::is_object(s) => {
                Ok(child(Properties::<K>::property(s, key)))
            }
            _ => Err(self.fail(
                AssertionErrorKind::PropertyAccess,
                format_args!(
                    "cannot read property {key:?} from non-object {}",
                    self.rendered()
                ),
            )),
        }
    }

    /// Passes if the registered predicate `name` holds for the subject.
    pub fn is(&self, name: &str) -> Result<&Self, AssertionError> {
        if self.is_ignored() {
            return Ok(self);
        }
        if self.predicate(name)? {
            return Ok(self);
        }
        Err(self.fail(
            AssertionErrorKind::PredicateFailed,
            format_args!("is not {name}: {}", self.rendered()),
        ))
    }

    /// Passes if the registered predicate `name` does not hold for the subject.
    pub fn not(&self, name: &str) -> Result<&Self, AssertionError> {
        if self.is_ignored() {
            return Ok(self);
        }
        if !self.predicate(name)? {
            return Ok(self);
        }
        Err(self.fail(
            AssertionErrorKind::PredicateFailed,
            format_args!("is {name}: {}", self.rendered()),
        ))
    }

    /// Evaluates predicate `name`; an absent subject satisfies no predicate.
    fn predicate(&self, name: &str) -> Result<bool, AssertionError> {
        let predicate = self
            .predicates
            .and_then(|registry| registry.get(name))
            .ok_or_else(|| {
                self.fail(
                    AssertionErrorKind::PredicateUnsupported,
                    format_args!("has no support for checking {name}"),
                )
            })?;
        Ok(self.subject.is_some_and(predicate))
    }
}

impl<'a, T: Length + Debug + ?Sized> Assertion<'a, T> {
    fn check_length(
        &self,
        passed: impl FnOnce(usize) -> bool,
        detail: impl FnOnce(String) -> String,
    ) -> Result<&Self, AssertionError> {
        if self.is_ignored() {
            return Ok(self);
        }
        let actual = self.subject.map(Length::length);
        if actual.is_some_and(passed) {
            return Ok(self);
        }
        let actual = match actual {
            Some(length) => length.to_string(),
            None => ABSENT.to_string(),
        };
        Err(self.fail(AssertionErrorKind::LengthMismatch, detail(actual)))
    }

    pub fn length(&self, expected: usize) -> Result<&Self, AssertionError> {
        self.check_length(
            |actual| actual == expected,
            |actual| format!("length does not equal: {actual} !== {expected}"),
        )
    }

    pub fn min_length(&self, min: usize) -> Result<&Self, AssertionError> {
        self.check_length(
            |actual| actual >= min,
            |actual| format!("length less than: {actual} < {min}"),
        )
    }

    pub fn max_length(&self, max: usize) -> Result<&Self, AssertionError> {
        self.check_length(
            |actual| actual <= max,
            |actual| format!("length greater than: {actual} > {max}"),
        )
    }
}

impl<'a, T: AsRef<str> + Debug + ?Sized> Assertion<'a, T> {
    /// Passes if the subject matches `pattern`, which must be a [`Regex`].
    ///
    /// Any other argument fails with [`AssertionError::PatternType`], whatever the subject.
    pub fn pattern<P: Any + Debug>(&self, pattern: &P) -> Result<&Self, AssertionError> {
        if self.is_ignored() {
            return Ok(self);
        }
        let Some(regex) = (pattern as &dyn Any).downcast_ref::<Regex>() else {
            return Err(self.fail(
                AssertionErrorKind::PatternType,
                format_args!("has no support for other than regular expressions: {pattern:?}"),
            ));
        };
        if self.subject.is_some_and(|s| regex.is_match(s.as_ref())) {
            return Ok(self);
        }
        Err(self.fail(
            AssertionErrorKind::PatternMismatch,
            format_args!("does not match /{regex}/: {}", self.rendered()),
        ))
    }
}

/// Interval notation for a range: `[5, 10]`, `(-inf, 10)`, `[5, +inf)`.
fn interval<T: Debug + ?Sized, R: RangeBounds<T>>(range: &R) -> String {
    let start = match range.start_bound() {
        Bound::Included(min) => format!("[{min:?}"),
        Bound::Excluded(min) => format!("({min:?}"),
        Bound::Unbounded => "(-inf".to_string(),
    };
    let end = match range.end_bound() {
        Bound::Included(max) => format!("{max:?}]"),
        Bound::Excluded(max) => format!("{max:?})"),
        Bound::Unbounded => "+inf)".to_string(),
    };
    format!("{start}, {end}")
}
