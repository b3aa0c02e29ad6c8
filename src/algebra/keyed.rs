//! The pair-shaped traversal core for key-to-value mappings.

use crate::capability::{Keyed, KeyedBuildable};

/// The uniform traversal operations for [`Keyed`] containers.
///
/// These mirror [`Traverse`](crate::algebra::Traverse) with `(key, value)`
/// pairs in place of `(element, index)` pairs. Enumeration order is
/// unspecified but stable for an unchanged receiver.
///
/// # Examples
///
/// ```rust
/// use argentum::prelude::*;
///
/// let mapping = Mapping::from_pairs([("one", 1), ("two", 2), ("three", 3)]);
///
/// assert!(mapping.any(|_, value| *value > 2));
/// assert!(mapping.all(|key, _| !key.is_empty()));
/// assert_eq!(mapping.find(|_, value| *value == 2), Some(&2));
///
/// let odd = mapping.filter(|_, value| value % 2 == 1);
/// assert_eq!(odd.len(), 2);
/// ```
pub trait KeyedTraverse: Keyed {
    /// Invokes `callback` once per key-value pair.
    fn each<F>(&self, mut callback: F)
    where
        F: FnMut(&Self::Key, &Self::Value),
    {
        for (key, value) in self.pairs() {
            callback(key, value);
        }
    }

    /// Returns the value of the first pair for which `predicate` is true,
    /// or `None` when nothing matches.
    fn find<P>(&self, mut predicate: P) -> Option<&Self::Value>
    where
        P: FnMut(&Self::Key, &Self::Value) -> bool,
    {
        self.pairs()
            .find(|&(key, value)| predicate(key, value))
            .map(|(_, value)| value)
    }

    /// Returns the first matching pair as `(key, value)`, or `None`.
    fn find_with_key<P>(&self, mut predicate: P) -> Option<(&Self::Key, &Self::Value)>
    where
        P: FnMut(&Self::Key, &Self::Value) -> bool,
    {
        self.pairs().find(|&(key, value)| predicate(key, value))
    }

    /// Returns `true` if `predicate` holds for any pair.
    fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Key, &Self::Value) -> bool,
    {
        self.pairs().any(|(key, value)| predicate(key, value))
    }

    /// Returns `true` if `predicate` holds for every pair; vacuously `true`
    /// on an empty mapping.
    fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Key, &Self::Value) -> bool,
    {
        self.pairs().all(|(key, value)| predicate(key, value))
    }

    /// Returns `true` if `predicate` holds for no pair.
    fn none<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Key, &Self::Value) -> bool,
    {
        !self.any(predicate)
    }

    /// Folds the pairs into an accumulator.
    ///
    /// `start` may be absent; the combiner receives `None` on its first
    /// invocation in that case. The result is `None` only when `start` is
    /// absent and the mapping is empty.
    fn reduce<B, F>(&self, start: Option<B>, mut function: F) -> Option<B>
    where
        F: FnMut(Option<B>, &Self::Key, &Self::Value) -> B,
    {
        let mut accumulator = start;
        for (key, value) in self.pairs() {
            accumulator = Some(function(accumulator.take(), key, value));
        }
        accumulator
    }

    /// Float-typed convenience wrapper over
    /// [`reduce`](KeyedTraverse::reduce).
    fn reduce_float<F>(&self, start: f64, mut function: F) -> f64
    where
        F: FnMut(f64, &Self::Key, &Self::Value) -> f64,
    {
        self.reduce(Some(start), |accumulator, key, value| {
            function(accumulator.unwrap_or(start), key, value)
        })
        .unwrap_or(start)
    }

    /// Integer-typed convenience wrapper over
    /// [`reduce`](KeyedTraverse::reduce).
    fn reduce_integer<F>(&self, start: i64, mut function: F) -> i64
    where
        F: FnMut(i64, &Self::Key, &Self::Value) -> i64,
    {
        self.reduce(Some(start), |accumulator, key, value| {
            function(accumulator.unwrap_or(start), key, value)
        })
        .unwrap_or(start)
    }

    /// Returns a new mapping holding the pairs for which `predicate` is
    /// true.
    fn filter<P>(&self, mut predicate: P) -> Self
    where
        Self: KeyedBuildable,
        Self::Key: Clone,
        Self::Value: Clone,
        P: FnMut(&Self::Key, &Self::Value) -> bool,
    {
        Self::build_pairs(
            self.pairs()
                .filter(|&(key, value)| predicate(key, value))
                .map(|(key, value)| (key.clone(), value.clone())),
        )
    }

    /// Returns a new mapping holding the pairs for which `predicate` is
    /// false — the complement of [`filter`](KeyedTraverse::filter).
    fn reject<P>(&self, mut predicate: P) -> Self
    where
        Self: KeyedBuildable,
        Self::Key: Clone,
        Self::Value: Clone,
        P: FnMut(&Self::Key, &Self::Value) -> bool,
    {
        self.filter(|key, value| !predicate(key, value))
    }
}

impl<M: Keyed> KeyedTraverse for M {}
