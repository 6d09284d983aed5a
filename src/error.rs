//SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types.
//!
//! Assertion failures carry a message only: the call-site prefix followed by a description
//! of the failed check.  The variant tells callers *which* check failed, so code can react
//! to, say, an unsupported predicate differently from a predicate that returned `false`.

use std::num::ParseIntError;
use thiserror::Error;

/// A failed assertion verb.
///
/// Every variant holds the complete, human-readable message.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum AssertionError {
    /// `instance_of` or `type_of` failed.
    #[error("{0}")]
    TypeMismatch(String),
    /// `equals` failed.
    #[error("{0}")]
    EqualityMismatch(String),
    /// The subject is outside the bounds given to `range`.
    #[error("{0}")]
    RangeMismatch(String),
    /// `length`, `min_length` or `max_length` failed.
    #[error("{0}")]
    LengthMismatch(String),
    /// `prop` was used on a subject that can't be read as an object.
    #[error("{0}")]
    PropertyAccess(String),
    /// `is` or `not` named a predicate that isn't registered.
    #[error("{0}")]
    PredicateUnsupported(String),
    /// The predicate exists, but returned the wrong answer.
    #[error("{0}")]
    PredicateFailed(String),
    /// `pattern` was given something that isn't a regular expression.
    #[error("{0}")]
    PatternType(String),
    /// The subject doesn't match the pattern.
    #[error("{0}")]
    PatternMismatch(String),
}

/// The kind of an [`AssertionError`], without its message.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssertionErrorKind {
    TypeMismatch,
    EqualityMismatch,
    RangeMismatch,
    LengthMismatch,
    PropertyAccess,
    PredicateUnsupported,
    PredicateFailed,
    PatternType,
    PatternMismatch,
}

impl AssertionError {
    pub(crate) fn new(kind: AssertionErrorKind, message: String) -> Self {
        match kind {
            AssertionErrorKind::TypeMismatch => Self::TypeMismatch(message),
            AssertionErrorKind::EqualityMismatch => Self::EqualityMismatch(message),
            AssertionErrorKind::RangeMismatch => Self::RangeMismatch(message),
            AssertionErrorKind::LengthMismatch => Self::LengthMismatch(message),
            AssertionErrorKind::PropertyAccess => Self::PropertyAccess(message),
            AssertionErrorKind::PredicateUnsupported => Self::PredicateUnsupported(message),
            AssertionErrorKind::PredicateFailed => Self::PredicateFailed(message),
            AssertionErrorKind::PatternType => Self::PatternType(message),
            AssertionErrorKind::PatternMismatch => Self::PatternMismatch(message),
        }
    }

    pub fn kind(&self) -> AssertionErrorKind {
        match self {
            Self::TypeMismatch(_) => AssertionErrorKind::TypeMismatch,
            Self::EqualityMismatch(_) => AssertionErrorKind::EqualityMismatch,
            Self::RangeMismatch(_) => AssertionErrorKind::RangeMismatch,
            Self::LengthMismatch(_) => AssertionErrorKind::LengthMismatch,
            Self::PropertyAccess(_) => AssertionErrorKind::PropertyAccess,
            Self::PredicateUnsupported(_) => AssertionErrorKind::PredicateUnsupported,
            Self::PredicateFailed(_) => AssertionErrorKind::PredicateFailed,
            Self::PatternType(_) => AssertionErrorKind::PatternType,
            Self::PatternMismatch(_) => AssertionErrorKind::PatternMismatch,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::TypeMismatch(m)
            | Self::EqualityMismatch(m)
            | Self::RangeMismatch(m)
            | Self::LengthMismatch(m)
            | Self::PropertyAccess(m)
            | Self::PredicateUnsupported(m)
            | Self::PredicateFailed(m)
            | Self::PatternType(m)
            | Self::PatternMismatch(m) => m,
        }
    }
}

/// Invalid logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Three characters of every truncated line are taken by the ellipsis.
    #[error("line limit must be at least four (4) characters, got {0}")]
    LineLimitTooSmall(usize),
    #[error("invalid line limit {value:?}")]
    InvalidLineLimit {
        value: String,
        #[source]
        source: ParseIntError,
    },
}
