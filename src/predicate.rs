//SPDX-License-Identifier: MIT OR Apache-2.0

//! Named predicates for the `is` and `not` verbs.
//!
//! A [`PredicateRegistry`] maps names to boolean functions over a subject type.  Attach one
//! to a chain with [`Assertion::using`](crate::Assertion::using); a name the registry doesn't
//! know is reported as unsupported, which is a different failure than a predicate that
//! answers `false`.
//!
//! ```
//! use checkwise::{PredicateRegistry, assert_that};
//!
//! let registry = PredicateRegistry::<str>::text().with("greeting", |s: &str| s.starts_with("hello"));
//! let subject = "hello world";
//! assert_that!(*subject).using(&registry).is("greeting").unwrap();
//! assert_that!(*subject).using(&registry).not("empty").unwrap();
//! ```

use crate::subject::Length;
use std::collections::HashMap;
use std::fmt::Debug;

type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

pub struct PredicateRegistry<T: ?Sized> {
    predicates: HashMap<String, Predicate<T>>,
}

impl<T: ?Sized> PredicateRegistry<T> {
    pub fn new() -> Self {
        Self {
            predicates: HashMap::new(),
        }
    }

    /// Registers `predicate` under `name`, replacing any predicate already registered there.
    pub fn register<F>(&mut self, name: impl Into<String>, predicate: F)
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.predicates.insert(name.into(), Box::new(predicate));
    }

    /// Builder form of [`register`](Self::register).
    pub fn with<F>(mut self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.register(name, predicate);
        self
    }

    pub fn get(&self, name: &str) -> Option<&(dyn Fn(&T) -> bool + Send + Sync)> {
        self.predicates.get(name).map(|p| p.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.predicates.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.predicates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<T: AsRef<str> + ?Sized + 'static> PredicateRegistry<T> {
    /// Predicates over text: `empty`, `blank`, `ascii`, `alphanumeric`, `numeric`,
    /// `lowercase`, `uppercase`.
    pub fn text() -> Self {
        Self::new()
            .with("empty", |s: &T| s.as_ref().is_empty())
            .with("blank", |s: &T| s.as_ref().trim().is_empty())
            .with("ascii", |s: &T| s.as_ref().is_ascii())
            .with("alphanumeric", |s: &T| {
                let s = s.as_ref();
                !s.is_empty() && s.chars().all(char::is_alphanumeric)
            })
            .with("numeric", |s: &T| {
                let s = s.as_ref();
                !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
            })
            .with("lowercase", |s: &T| {
                s.as_ref().chars().all(|c| !c.is_uppercase())
            })
            .with("uppercase", |s: &T| {
                s.as_ref().chars().all(|c| !c.is_lowercase())
            })
    }
}

impl<T: PartialOrd + Default + 'static> PredicateRegistry<T> {
    /// Sign predicates for ordered values: `positive`, `negative`, `zero`, `non_negative`.
    ///
    /// "Zero" is the type's default value.
    pub fn ordered() -> Self {
        Self::new()
            .with("positive", |v: &T| *v > T::default())
            .with("negative", |v: &T| *v < T::default())
            .with("zero", |v: &T| *v == T::default())
            .with("non_negative", |v: &T| *v >= T::default())
    }
}

impl<T: Length + ?Sized + 'static> PredicateRegistry<T> {
    /// Predicates for collections: `empty`.
    pub fn collection() -> Self {
        Self::new().with("empty", |v: &T| v.length() == 0)
    }
}

impl<T: ?Sized> Default for PredicateRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Debug for PredicateRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredicateRegistry")
            .field("names", &self.names())
            .finish()
    }
}

/*
Boilerplate notes.

Clone is not possible, the predicates are boxed closures.
PartialEq/Eq/Hash would have to compare closures, no.
Default is the empty registry.
Debug lists the names only.
Send/Sync are automatic since every predicate is Send + Sync.
*/
