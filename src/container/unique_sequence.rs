//! Ordered unique sequence adapter: insertion order, duplicates dropped at
//! construction.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::nested::UniqueNested;
use crate::algebra::{map_into, zip_into};
use crate::capability::{Buildable, Enumerable, Ordered};

/// An ordered sequence of unique elements.
///
/// Uniqueness is an invariant of construction, not of the algebra: every
/// way of building a `UniqueSequence` — `build`, `collect`, `From<Vec>`,
/// deserialization — keeps the first occurrence of each element and drops
/// later duplicates. Enumeration order is insertion order, so the ordered
/// algebra operations (take, drop, zip, ...) all apply.
///
/// # Examples
///
/// ```rust
/// use argentum::prelude::*;
///
/// let unique = UniqueSequence::build([3, 1, 3, 2]);
/// assert_eq!(unique, UniqueSequence::build([3, 1, 2]));
/// assert_eq!(unique.take(2), UniqueSequence::build([3, 1]));
///
/// // Mapped results may collide; collisions collapse to the first
/// // occurrence.
/// let parities = unique.map(|element, _| element % 2);
/// assert_eq!(parities, UniqueSequence::build([1, 0]));
/// ```
#[derive(Clone)]
pub struct UniqueSequence<T> {
    items: Vec<T>,
}

impl<T> UniqueSequence<T> {
    /// Creates an empty unique sequence.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns `true` if the sequence contains `element`.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(element)
    }

    /// Returns a new unique sequence holding `function(element, index)` for
    /// every element, in order. Colliding results collapse to the first
    /// occurrence.
    pub fn map<U, F>(&self, function: F) -> UniqueSequence<U>
    where
        U: Clone + Eq + Hash,
        F: FnMut(&T, usize) -> U,
    {
        map_into(self, function)
    }

    /// Pairs this sequence with another ordered container, index by index.
    ///
    /// The result holds `min(|self|, |other|)` pairs; surplus elements of
    /// the longer side are silently discarded. Pairs are necessarily unique
    /// because the left components are.
    pub fn zip<O>(&self, other: &O) -> UniqueSequence<(T, O::Element)>
    where
        T: Clone + Eq + Hash,
        O: Ordered,
        O::Element: Clone + Eq + Hash,
    {
        zip_into(self, other)
    }
}

impl<T: Clone + Eq + Hash> UniqueSequence<UniqueNested<T>> {
    /// Recursively inlines nested unique sequences into a single flat
    /// unique sequence. Scalars pass through; duplicates surfacing from
    /// different nesting levels collapse to the first occurrence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argentum::prelude::*;
    ///
    /// let nested = UniqueSequence::build([
    ///     UniqueNested::Scalar(1),
    ///     UniqueNested::from(UniqueSequence::build([
    ///         UniqueNested::Scalar(2),
    ///         UniqueNested::Scalar(1),
    ///     ])),
    /// ]);
    /// assert_eq!(nested.flatten(), UniqueSequence::build([1, 2]));
    /// ```
    #[must_use]
    pub fn flatten(&self) -> UniqueSequence<T> {
        let mut flattened = Vec::new();
        for element in &self.items {
            element.pour(&mut flattened);
        }
        UniqueSequence::build(flattened)
    }

    /// Flattens, then maps over the flat result.
    pub fn flatten_map<U, F>(&self, function: F) -> UniqueSequence<U>
    where
        U: Clone + Eq + Hash,
        F: FnMut(&T, usize) -> U,
    {
        self.flatten().map(function)
    }
}

// =============================================================================
// Capability Implementations
// =============================================================================

impl<T> Enumerable for UniqueSequence<T> {
    type Element = T;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        self.items.iter()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Ordered for UniqueSequence<T> {}

impl<T: Clone + Eq + Hash> Buildable for UniqueSequence<T> {
    /// Builds from the given elements, keeping the first occurrence of each
    /// and dropping later duplicates.
    fn build<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut seen = HashSet::new();
        let mut items = Vec::new();
        for element in elements {
            if seen.insert(element.clone()) {
                items.push(element);
            }
        }
        Self { items }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for UniqueSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash> From<Vec<T>> for UniqueSequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::build(items)
    }
}

impl<T: Clone + Eq + Hash> FromIterator<T> for UniqueSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(elements: I) -> Self {
        Self::build(elements)
    }
}

impl<T> IntoIterator for UniqueSequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a UniqueSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: PartialEq> PartialEq for UniqueSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for UniqueSequence<T> {}

impl<T: Hash> Hash for UniqueSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for UniqueSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(&self.items).finish()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for UniqueSequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.items.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for UniqueSequence<T>
where
    T: serde::Deserialize<'de> + Clone + Eq + Hash,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::deserialize(deserializer).map(Self::build)
    }
}
