//SPDX-License-Identifier: MIT OR Apache-2.0

//! Capabilities an assertion subject can have.
//!
//! Verbs like `length` and `prop` only make sense for some subjects.  Rather than inspecting
//! values at run time, the chain requires the matching trait: [`Length`] for the length
//! verbs and [`Properties`] for property access.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

/// A subject with a length.
///
/// Text counts characters; collections count elements.
pub trait Length {
    fn length(&self) -> usize;
}

impl Length for str {
    fn length(&self) -> usize {
        self.chars().count()
    }
}

impl Length for String {
    fn length(&self) -> usize {
        self.as_str().length()
    }
}

impl<V> Length for [V] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<V, const N: usize> Length for [V; N] {
    fn length(&self) -> usize {
        N
    }
}

impl<V> Length for Vec<V> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<V> Length for VecDeque<V> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Length for HashMap<K, V, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> Length for BTreeMap<K, V> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<V, S> Length for HashSet<V, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<V> Length for BTreeSet<V> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<L: Length + ?Sized> Length for &L {
    fn length(&self) -> usize {
        (**self).length()
    }
}

impl<L: Length + ?Sized> Length for Box<L> {
    fn length(&self) -> usize {
        (**self).length()
    }
}

/// A subject whose properties can be read by key.
///
/// A missing property is `None`.  A subject that isn't an object at all (an `Option` that is
/// `None`, for instance) reports so through [`is_object`](Self::is_object), and reading a
/// property from it is an error rather than a missing property.
pub trait Properties<K: ?Sized> {
    type Value: ?Sized;

    fn is_object(&self) -> bool {
        true
    }

    fn property(&self, key: &K) -> Option<&Self::Value>;
}

impl<Q, K, V, S> Properties<Q> for HashMap<K, V, S>
where
    Q: Hash + Eq + ?Sized,
    K: Borrow<Q> + Hash + Eq,
    S: BuildHasher,
{
    type Value = V;
    fn property(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<Q, K, V> Properties<Q> for BTreeMap<K, V>
where
    Q: Ord + ?Sized,
    K: Borrow<Q> + Ord,
{
    type Value = V;
    fn property(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<V> Properties<usize> for [V] {
    type Value = V;
    fn property(&self, key: &usize) -> Option<&V> {
        self.get(*key)
    }
}

impl<V, const N: usize> Properties<usize> for [V; N] {
    type Value = V;
    fn property(&self, key: &usize) -> Option<&V> {
        self.get(*key)
    }
}

impl<V> Properties<usize> for Vec<V> {
    type Value = V;
    fn property(&self, key: &usize) -> Option<&V> {
        self.get(*key)
    }
}

impl<K: ?Sized, P: Properties<K>> Properties<K> for Option<P> {
    type Value = P::Value;

    fn is_object(&self) -> bool {
        self.as_ref().is_some_and(Properties::is_object)
    }

    fn property(&self, key: &K) -> Option<&Self::Value> {
        self.as_ref().and_then(|p| p.property(key))
    }
}

impl<K: ?Sized, P: Properties<K> + ?Sized> Properties<K> for &P {
    type Value = P::Value;

    fn is_object(&self) -> bool {
        (**self).is_object()
    }

    fn property(&self, key: &K) -> Option<&Self::Value> {
        (**self).property(key)
    }
}

impl<K: ?Sized, P: Properties<K> + ?Sized> Properties<K> for Box<P> {
    type Value = P::Value;

    fn is_object(&self) -> bool {
        (**self).is_object()
    }

    fn property(&self, key: &K) -> Option<&Self::Value> {
        (**self).property(key)
    }
}
