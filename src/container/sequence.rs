//! Ordered sequence adapter: insertion order, duplicates allowed.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::nested::Nested;
use crate::algebra::{map_into, zip_into};
use crate::capability::{Buildable, Enumerable, Ordered};

/// An ordered sequence of elements, duplicates allowed.
///
/// `Sequence` adapts `Vec` to the container algebra: insertion order is the
/// enumeration order and is preserved by every transforming operation. All
/// operations return new sequences; the receiver is never mutated.
///
/// The same-type operations (filter, reject, take, reduce, ...) come from
/// the blanket algebra traits; this type adds the type-changing operations
/// whose results need their own element type: [`map`](Sequence::map),
/// [`zip`](Sequence::zip), and the flatten family.
///
/// # Examples
///
/// ```rust
/// use argentum::prelude::*;
///
/// let sequence = Sequence::from(vec![1, 2, 2, 3]);
///
/// let labels = sequence.map(|element, index| format!("{index}:{element}"));
/// assert_eq!(
///     labels,
///     Sequence::from(vec![
///         "0:1".to_string(),
///         "1:2".to_string(),
///         "2:2".to_string(),
///         "3:3".to_string(),
///     ]),
/// );
///
/// // The receiver is unchanged.
/// assert_eq!(sequence.len(), 4);
/// ```
#[derive(Clone)]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argentum::prelude::*;
    ///
    /// let sequence: Sequence<i32> = Sequence::new();
    /// assert!(sequence.is_empty());
    /// ```
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

    /// Returns a new sequence holding `function(element, index)` for every
    /// element, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argentum::prelude::*;
    ///
    /// let sequence = Sequence::from(vec![1, 2, 3]);
    /// assert_eq!(
    ///     sequence.map(|element, _| element * element),
    ///     Sequence::from(vec![1, 4, 9]),
    /// );
    /// ```
    pub fn map<U, F>(&self, function: F) -> Sequence<U>
    where
        F: FnMut(&T, usize) -> U,
    {
        map_into(self, function)
    }

    /// Pairs this sequence with another ordered container, index by index.
    ///
    /// The result holds `min(|self|, |other|)` pairs; surplus elements of
    /// the longer side are silently discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argentum::prelude::*;
    ///
    /// let left = Sequence::from(vec![1, 2, 3]);
    /// let right = Sequence::from(vec![4, 5]);
    /// assert_eq!(left.zip(&right), Sequence::from(vec![(1, 4), (2, 5)]));
    /// ```
    pub fn zip<O>(&self, other: &O) -> Sequence<(T, O::Element)>
    where
        T: Clone,
        O: Ordered,
        O::Element: Clone,
    {
        zip_into(self, other)
    }
}

impl<T: Clone> Sequence<Nested<T>> {
    /// Recursively inlines nested sequences into a single flat sequence.
    ///
    /// Scalars pass through unchanged at their nesting level; nesting depth
    /// is unbounded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argentum::prelude::*;
    ///
    /// let nested = Sequence::from(vec![
    ///     Nested::from(Sequence::from(vec![Nested::Scalar(1), Nested::Scalar(2)])),
    ///     Nested::Scalar(3),
    ///     Nested::from(Sequence::from(vec![Nested::from(Sequence::from(vec![
    ///         Nested::Scalar(4),
    ///         Nested::Scalar(5),
    ///     ]))])),
    /// ]);
    /// assert_eq!(nested.flatten(), Sequence::from(vec![1, 2, 3, 4, 5]));
    /// ```
    #[must_use]
    pub fn flatten(&self) -> Sequence<T> {
        let mut flattened = Vec::new();
        for element in &self.items {
            element.pour(&mut flattened);
        }
        Sequence::from(flattened)
    }

    /// Flattens, then maps over the flat result.
    ///
    /// Equivalent to `self.flatten().map(function)`.
    pub fn flatten_map<U, F>(&self, function: F) -> Sequence<U>
    where
        F: FnMut(&T, usize) -> U,
    {
        self.flatten().map(function)
    }

    /// Flattens, formats every element, and joins with `join_string`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argentum::prelude::*;
    ///
    /// let nested = Sequence::from(vec![
    ///     Nested::Scalar("a"),
    ///     Nested::from(Sequence::from(vec![Nested::Scalar("b"), Nested::Scalar("c")])),
    /// ]);
    /// assert_eq!(nested.flatten_strings("-"), "a-b-c");
    /// ```
    #[must_use]
    pub fn flatten_strings(&self, join_string: &str) -> String
    where
        T: fmt::Display,
    {
        self.flatten()
            .items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(join_string)
    }
}

// =============================================================================
// Capability Implementations
// =============================================================================

impl<T> Enumerable for Sequence<T> {
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

impl<T> Ordered for Sequence<T> {}

impl<T> Buildable for Sequence<T> {
    fn build<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            items: elements.into_iter().collect(),
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(elements: I) -> Self {
        Self {
            items: elements.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(&self.items).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in &self.items {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Sequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.items.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Sequence<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let sequence = Sequence::from(vec![1, 2, 3]);
        assert_eq!(format!("{sequence}"), "[1, 2, 3]");

        let empty: Sequence<i32> = Sequence::new();
        assert_eq!(format!("{empty}"), "[]");
    }

    #[test]
    fn test_debug_matches_backing_vec() {
        let sequence = Sequence::from(vec!["a", "b"]);
        assert_eq!(format!("{sequence:?}"), "[\"a\", \"b\"]");
    }

    #[test]
    fn test_round_trip_through_iterators() {
        let sequence: Sequence<i32> = (1..=4).collect();
        let collected: Vec<i32> = sequence.into_iter().collect();
        assert_eq!(collected, vec![1, 2, 3, 4]);
    }
}
