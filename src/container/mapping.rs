//! Key-to-value mapping adapter.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use super::nested::MappingValue;
use crate::algebra::AlgebraError;
use crate::capability::{Keyed, KeyedBuildable};

/// An unordered collection of key-to-value pairs with unique keys.
///
/// `Mapping` adapts `HashMap` to the container algebra's pair-shaped
/// operations: callbacks receive `(key, value)` instead of
/// `(element, index)`, and enumeration order is unspecified. Transforming
/// operations return new mappings; the receiver is never mutated.
///
/// A map callback returning `Option<U>` produces a `Mapping<K, Option<U>>`
/// whose `None` values stand in for absent results — keys are never
/// omitted, so the result always has the same key set as the receiver.
///
/// # Examples
///
/// ```rust
/// use argentum::prelude::*;
///
/// let mapping = Mapping::from_pairs([("a", 1), ("b", 2)]);
///
/// let doubled = mapping.map(|_, value| value * 2);
/// assert_eq!(doubled, Mapping::from_pairs([("a", 2), ("b", 4)]));
///
/// let absent_for_b = mapping.map(|key, value| {
///     if *key == "b" { None } else { Some(*value) }
/// });
/// assert_eq!(absent_for_b.len(), mapping.len());
/// assert_eq!(absent_for_b.get(&"b"), Some(&None));
/// ```
#[derive(Clone)]
pub struct Mapping<K, V> {
    entries: HashMap<K, V>,
}

impl<K, V> Mapping<K, V> {
    /// Creates an empty mapping.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, V> Mapping<K, V> {
    /// Creates a mapping from key-value pairs. Later pairs with an
    /// already-seen key replace the earlier value.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    /// Returns the value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Returns `true` if the mapping holds a value under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns a new mapping with the same key set and
    /// `function(key, value)` as each value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argentum::prelude::*;
    ///
    /// let mapping = Mapping::from_pairs([(1, "one"), (2, "two")]);
    /// let lengths = mapping.map(|_, value| value.len());
    /// assert_eq!(lengths, Mapping::from_pairs([(1, 3), (2, 3)]));
    /// ```
    pub fn map<U, F>(&self, mut function: F) -> Mapping<K, U>
    where
        K: Clone,
        F: FnMut(&K, &V) -> U,
    {
        Mapping {
            entries: self
                .entries
                .iter()
                .map(|(key, value)| (key.clone(), function(key, value)))
                .collect(),
        }
    }

    /// Returns the keys as a set.
    #[must_use]
    pub fn keys(&self) -> super::UniqueSet<K>
    where
        K: Clone,
    {
        self.entries.keys().cloned().collect()
    }

    /// Returns the values as a sequence, in unspecified order.
    #[must_use]
    pub fn values(&self) -> super::Sequence<V>
    where
        V: Clone,
    {
        self.entries.values().cloned().collect()
    }
}

impl<K: Clone + Eq + Hash, V: Clone> Mapping<K, MappingValue<K, V>> {
    /// Recursively merges nested mappings into a single flat mapping.
    ///
    /// Every top-level value must be a nested mapping; a scalar top-level
    /// value fails with [`AlgebraError::TypeMismatch`] and no partial
    /// result is returned. Within nested mappings, scalar leaves become
    /// pairs of the result and mapping values recurse with key union. A key
    /// written by several sources resolves last-writer-wins in enumeration
    /// order, which for mappings is unspecified.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::TypeMismatch`] when any top-level value is a scalar.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argentum::prelude::*;
    ///
    /// let nested = Mapping::from_pairs([(
    ///     "inner",
    ///     MappingValue::from(Mapping::from_pairs([
    ///         ("a", MappingValue::Scalar(1)),
    ///         ("b", MappingValue::Scalar(2)),
    ///     ])),
    /// )]);
    /// assert_eq!(
    ///     nested.flatten(),
    ///     Ok(Mapping::from_pairs([("a", 1), ("b", 2)])),
    /// );
    ///
    /// let scalar_at_top = Mapping::from_pairs([("a", MappingValue::Scalar(1))]);
    /// assert!(scalar_at_top.flatten().is_err());
    /// ```
    pub fn flatten(&self) -> Result<Mapping<K, V>, AlgebraError> {
        let mut merged = HashMap::new();
        for (_, value) in &self.entries {
            match value {
                MappingValue::Mapping(nested) => nested.merge_into(&mut merged),
                MappingValue::Scalar(_) => {
                    return Err(AlgebraError::TypeMismatch {
                        operation: "flatten",
                        expected: "a nested mapping value",
                    });
                }
            }
        }
        Ok(Mapping { entries: merged })
    }

    /// Flattens, then maps over the flat result.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::TypeMismatch`] when any top-level value is a scalar.
    pub fn flatten_map<U, F>(&self, function: F) -> Result<Mapping<K, U>, AlgebraError>
    where
        F: FnMut(&K, &V) -> U,
    {
        Ok(self.flatten()?.map(function))
    }

    /// Merges this mapping's pairs into `sink`: scalar leaves as pairs,
    /// nested mappings recursively.
    fn merge_into(&self, sink: &mut HashMap<K, V>) {
        for (key, value) in &self.entries {
            match value {
                MappingValue::Scalar(scalar) => {
                    sink.insert(key.clone(), scalar.clone());
                }
                MappingValue::Mapping(nested) => nested.merge_into(sink),
            }
        }
    }
}

// =============================================================================
// Capability Implementations
// =============================================================================

impl<K, V> Keyed for Mapping<K, V> {
    type Key = K;
    type Value = V;
    type Pairs<'a>
        = std::collections::hash_map::Iter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn pairs(&self) -> Self::Pairs<'_> {
        self.entries.iter()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: Eq + Hash, V> KeyedBuildable for Mapping<K, V> {
    fn build_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::from_pairs(pairs)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for Mapping<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> From<HashMap<K, V>> for Mapping<K, V> {
    fn from(entries: HashMap<K, V>) -> Self {
        Self { entries }
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for Mapping<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        Self::from_pairs(pairs)
    }
}

impl<K, V> IntoIterator for Mapping<K, V> {
    type Item = (K, V);
    type IntoIter = std::collections::hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Mapping<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = std::collections::hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for Mapping<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq + Hash, V: Eq> Eq for Mapping<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Mapping<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(&self.entries).finish()
    }
}

// Pair enumeration has no caller-meaningful order; the positional algebra
// must never apply here.
static_assertions::assert_not_impl_any!(Mapping<i32, i32>: crate::capability::Ordered);
static_assertions::assert_not_impl_any!(Mapping<String, i32>: crate::capability::Enumerable);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for Mapping<K, V>
where
    K: serde::Serialize + Eq + Hash,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.entries.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for Mapping<K, V>
where
    K: serde::Deserialize<'de> + Eq + Hash,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        HashMap::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_pairs_win_on_construction() {
        let mapping = Mapping::from_pairs([("a", 1), ("a", 2)]);
        assert_eq!(mapping.get(&"a"), Some(&2));
    }

    #[test]
    fn test_debug_matches_backing_map() {
        let mapping = Mapping::from_pairs([(1, "one")]);
        assert_eq!(format!("{mapping:?}"), "{1: \"one\"}");
    }
}
