//! Traversal capability: by-reference enumeration and a size query.

/// Capability for containers whose elements can be enumerated by reference.
///
/// `Enumerable` is the minimal surface the traversal and aggregate cores
/// drive: an iterator over element references and an exact size. The order
/// in which `iter` yields elements is the container's *enumeration order* —
/// insertion order for the sequence kinds, unspecified for unordered sets.
/// For a given unchanged container the enumeration order is stable across
/// repeated calls.
///
/// # Examples
///
/// ```rust
/// use argentum::capability::Enumerable;
/// use argentum::container::Sequence;
///
/// let sequence = Sequence::from(vec![10, 20, 30]);
/// assert_eq!(sequence.len(), 3);
/// assert_eq!(sequence.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
/// ```
pub trait Enumerable {
    /// The element type stored in the container.
    type Element;

    /// The iterator yielded by [`iter`](Enumerable::iter).
    type Iter<'a>: Iterator<Item = &'a Self::Element>
    where
        Self: 'a,
        Self::Element: 'a;

    /// Enumerates the elements by reference, in enumeration order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns the number of elements in the container.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Marker capability: the enumeration order is defined and preserved.
///
/// A container implementing `Ordered` promises that [`Enumerable::iter`]
/// yields elements in a caller-meaningful order (insertion order) that
/// transforming operations preserve. Windowing (`take`, `drop`,
/// `take_while`, `drop_while`), positional search (`find_with_index`), and
/// pairing (`zip`) are only available on `Ordered` containers — on an
/// unordered set or a mapping those operations do not exist at all.
///
/// # Examples
///
/// ```rust
/// use argentum::prelude::*;
///
/// fn first_two<C>(container: &C) -> C
/// where
///     C: Ordered + Buildable,
///     C::Element: Clone,
/// {
///     container.take(2)
/// }
///
/// let sequence = Sequence::from(vec![1, 2, 3]);
/// assert_eq!(first_two(&sequence), Sequence::from(vec![1, 2]));
/// ```
pub trait Ordered: Enumerable {}
