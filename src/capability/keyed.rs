//! Pair-traversal capability for key-to-value mappings.

/// Capability for containers that enumerate key-value pairs.
///
/// `Keyed` is the mapping-shaped analog of
/// [`Enumerable`](super::Enumerable): the traversal core drives it with a
/// `(key, value)` pair per step instead of an `(element, index)` pair.
/// Enumeration order is unspecified, but stable across repeated calls on an
/// unchanged container.
///
/// # Examples
///
/// ```rust
/// use argentum::capability::Keyed;
/// use argentum::container::Mapping;
///
/// let mapping = Mapping::from_pairs([("one", 1), ("two", 2)]);
/// assert_eq!(mapping.len(), 2);
///
/// let mut total = 0;
/// for (_, value) in mapping.pairs() {
///     total += value;
/// }
/// assert_eq!(total, 3);
/// ```
pub trait Keyed {
    /// The key type.
    type Key;

    /// The value type.
    type Value;

    /// The iterator yielded by [`pairs`](Keyed::pairs).
    type Pairs<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)>
    where
        Self: 'a,
        Self::Key: 'a,
        Self::Value: 'a;

    /// Enumerates the key-value pairs by reference.
    fn pairs(&self) -> Self::Pairs<'_>;

    /// Returns the number of pairs in the container.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no pairs.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
