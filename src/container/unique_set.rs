//! Unordered unique set adapter.

use std::collections::HashSet;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::nested::SetNested;
use crate::algebra::map_into;
use crate::capability::{Buildable, Enumerable};

/// An unordered set of unique elements.
///
/// `UniqueSet` adapts `HashSet` to the container algebra. Enumeration order
/// is unspecified and must not be relied upon beyond set equality; the
/// index passed to traversal callbacks is only the visit position. The
/// positional operations (take, drop, zip, ...) do not exist for this type
/// — it implements no [`Ordered`](crate::capability::Ordered) capability,
/// so calling them is a compile error.
///
/// # Examples
///
/// ```rust
/// use argentum::prelude::*;
///
/// let set = UniqueSet::build([3, 1, 2, 3]);
/// assert_eq!(set.len(), 3);
///
/// let even = set.filter(|element, _| element % 2 == 0);
/// assert_eq!(even, UniqueSet::build([2]));
///
/// assert_eq!(set.maximum(), Ok(3));
/// ```
#[derive(Clone)]
pub struct UniqueSet<T> {
    items: HashSet<T>,
}

impl<T> UniqueSet<T> {
    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: HashSet::new(),
        }
    }
}

impl<T: Eq + Hash> UniqueSet<T> {
    /// Returns `true` if the set contains `element`.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.items.contains(element)
    }

    /// Returns a new set holding `function(element, index)` for every
    /// element. Colliding results collapse; the index is only the visit
    /// position in an unspecified enumeration order.
    pub fn map<U, F>(&self, function: F) -> UniqueSet<U>
    where
        U: Eq + Hash,
        F: FnMut(&T, usize) -> U,
    {
        map_into(self, function)
    }
}

impl<T: Clone + Eq + Hash> UniqueSet<SetNested<T>> {
    /// Recursively unions nested sets into a single flat set. Scalars pass
    /// through unchanged at their nesting level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argentum::prelude::*;
    ///
    /// let nested = UniqueSet::build([
    ///     SetNested::Scalar(1),
    ///     SetNested::from(UniqueSet::build([
    ///         SetNested::Scalar(2),
    ///         SetNested::Scalar(1),
    ///     ])),
    /// ]);
    /// assert_eq!(nested.flatten(), UniqueSet::build([1, 2]));
    /// ```
    #[must_use]
    pub fn flatten(&self) -> UniqueSet<T> {
        let mut flattened = Vec::new();
        for element in &self.items {
            element.pour(&mut flattened);
        }
        UniqueSet::build(flattened)
    }

    /// Flattens, then maps over the flat result.
    pub fn flatten_map<U, F>(&self, function: F) -> UniqueSet<U>
    where
        U: Eq + Hash,
        F: FnMut(&T, usize) -> U,
    {
        self.flatten().map(function)
    }
}

// =============================================================================
// Capability Implementations
// =============================================================================

impl<T> Enumerable for UniqueSet<T> {
    type Element = T;
    type Iter<'a>
        = std::collections::hash_set::Iter<'a, T>
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

impl<T: Eq + Hash> Buildable for UniqueSet<T> {
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

impl<T> Default for UniqueSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<HashSet<T>> for UniqueSet<T> {
    fn from(items: HashSet<T>) -> Self {
        Self { items }
    }
}

impl<T: Eq + Hash> FromIterator<T> for UniqueSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(elements: I) -> Self {
        Self {
            items: elements.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for UniqueSet<T> {
    type Item = T;
    type IntoIter = std::collections::hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a UniqueSet<T> {
    type Item = &'a T;
    type IntoIter = std::collections::hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Eq + Hash> PartialEq for UniqueSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq + Hash> Eq for UniqueSet<T> {}

/// Order-independent hash, so sets can nest inside sets.
///
/// Per-element hashes are combined with XOR, which is commutative — two
/// equal sets hash identically regardless of enumeration order.
impl<T: Hash> Hash for UniqueSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut combined: u64 = 0;
        for element in &self.items {
            let mut element_hasher = DefaultHasher::new();
            element.hash(&mut element_hasher);
            combined ^= element_hasher.finish();
        }
        state.write_usize(self.items.len());
        state.write_u64(combined);
    }
}

impl<T: fmt::Debug> fmt::Debug for UniqueSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(&self.items).finish()
    }
}

// Windowing and pairing require a defined enumeration order; this type
// must never grow one.
static_assertions::assert_not_impl_any!(UniqueSet<i32>: crate::capability::Ordered);
static_assertions::assert_not_impl_any!(UniqueSet<String>: crate::capability::Ordered);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize + Eq + Hash> serde::Serialize for UniqueSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.items.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for UniqueSet<T>
where
    T: serde::Deserialize<'de> + Eq + Hash,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        HashSet::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_of(value: &impl Hash) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equal_sets_hash_identically() {
        let forward = UniqueSet::build([1, 2, 3, 4]);
        let backward = UniqueSet::build([4, 3, 2, 1]);
        assert_eq!(forward, backward);
        assert_eq!(hash_of(&forward), hash_of(&backward));
    }

    #[test]
    fn test_sets_nest_inside_sets() {
        let inner = UniqueSet::build([SetNested::Scalar(1)]);
        let outer = UniqueSet::build([SetNested::from(inner)]);
        assert_eq!(outer.len(), 1);
    }
}
