//! The traversal core: enumerate-with-index driving the uniform operations.

use crate::capability::{Buildable, Enumerable};

/// Builds a container of a possibly different kind by mapping every element
/// of `container` through `function`.
///
/// This is the re-wrapping half of the traversal core: adapters normalize
/// themselves into an ordered enumeration, feed it through here, and the
/// target kind applies its own construction rules (sequences keep
/// duplicates, unique kinds collapse them, sets drop order).
pub(crate) fn map_into<C, D, F>(container: &C, mut function: F) -> D
where
    C: Enumerable,
    D: Buildable,
    F: FnMut(&C::Element, usize) -> D::Element,
{
    D::build(
        container
            .iter()
            .enumerate()
            .map(|(index, element)| function(element, index)),
    )
}

/// The uniform traversal operations, available on every
/// [`Enumerable`](crate::capability::Enumerable) container.
///
/// All callbacks receive the element together with its enumeration index.
/// For ordered containers the index is the element's position; for
/// unordered sets it is only the visit position in an unspecified
/// enumeration order and carries no further meaning.
///
/// # Examples
///
/// ```rust
/// use argentum::prelude::*;
///
/// let sequence = Sequence::from(vec![1, 2, 3, 4]);
///
/// assert_eq!(sequence.find(|element, _| element % 2 == 0), Some(&2));
/// assert!(sequence.any(|element, _| *element > 3));
/// assert!(!sequence.all(|element, _| *element > 3));
/// assert_eq!(
///     sequence.reduce(Some(0), |accumulator, element, _| {
///         accumulator.unwrap_or(0) + element
///     }),
///     Some(10),
/// );
/// ```
pub trait Traverse: Enumerable {
    /// Invokes `callback` once per element, in enumeration order.
    ///
    /// Side effects of the callback are the caller's responsibility; the
    /// container itself is never touched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argentum::prelude::*;
    ///
    /// let sequence = Sequence::from(vec!["a", "b"]);
    /// let mut seen = Vec::new();
    /// sequence.each(|element, index| seen.push((index, *element)));
    /// assert_eq!(seen, vec![(0, "a"), (1, "b")]);
    /// ```
    fn each<F>(&self, mut callback: F)
    where
        F: FnMut(&Self::Element, usize),
    {
        for (index, element) in self.iter().enumerate() {
            callback(element, index);
        }
    }

    /// Returns the first element for which `predicate` is true, or `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argentum::prelude::*;
    ///
    /// let sequence = Sequence::from(vec![1, 3, 4, 6]);
    /// assert_eq!(sequence.find(|element, _| element % 2 == 0), Some(&4));
    /// assert_eq!(sequence.find(|element, _| *element > 10), None);
    /// ```
    fn find<P>(&self, mut predicate: P) -> Option<&Self::Element>
    where
        P: FnMut(&Self::Element, usize) -> bool,
    {
        self.iter()
            .enumerate()
            .find(|&(index, element)| predicate(element, index))
            .map(|(_, element)| element)
    }

    /// Returns `true` if `predicate` holds for any element.
    ///
    /// Short-circuits on the first match; `false` on an empty container.
    fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Element, usize) -> bool,
    {
        self.iter()
            .enumerate()
            .any(|(index, element)| predicate(element, index))
    }

    /// Returns `true` if `predicate` holds for every element.
    ///
    /// Short-circuits on the first non-match; vacuously `true` on an empty
    /// container.
    fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Element, usize) -> bool,
    {
        self.iter()
            .enumerate()
            .all(|(index, element)| predicate(element, index))
    }

    /// Returns `true` if `predicate` holds for no element.
    fn none<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Element, usize) -> bool,
    {
        !self.any(predicate)
    }

    /// Folds the elements into an accumulator, in enumeration order.
    ///
    /// `start` may be absent; the combiner receives `None` on its first
    /// invocation in that case and is responsible for handling it. The
    /// result is `None` only when `start` is absent and the container is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argentum::prelude::*;
    ///
    /// let sequence = Sequence::from(vec![1, 2, 3]);
    /// let total = sequence.reduce(Some(0), |accumulator, element, _| {
    ///     accumulator.unwrap_or(0) + element
    /// });
    /// assert_eq!(total, Some(6));
    ///
    /// let absent_start = sequence.reduce(None, |accumulator, element, _| {
    ///     accumulator.map_or(*element, |sum: i32| sum + element)
    /// });
    /// assert_eq!(absent_start, Some(6));
    /// ```
    fn reduce<B, F>(&self, start: Option<B>, mut function: F) -> Option<B>
    where
        F: FnMut(Option<B>, &Self::Element, usize) -> B,
    {
        let mut accumulator = start;
        for (index, element) in self.iter().enumerate() {
            accumulator = Some(function(accumulator.take(), element, index));
        }
        accumulator
    }

    /// Float-typed convenience wrapper over [`reduce`](Traverse::reduce).
    ///
    /// Spares callers the accumulator boxing; introduces no new semantics.
    fn reduce_float<F>(&self, start: f64, mut function: F) -> f64
    where
        F: FnMut(f64, &Self::Element, usize) -> f64,
    {
        self.reduce(Some(start), |accumulator, element, index| {
            function(accumulator.unwrap_or(start), element, index)
        })
        .unwrap_or(start)
    }

    /// Integer-typed convenience wrapper over [`reduce`](Traverse::reduce).
    fn reduce_integer<F>(&self, start: i64, mut function: F) -> i64
    where
        F: FnMut(i64, &Self::Element, usize) -> i64,
    {
        self.reduce(Some(start), |accumulator, element, index| {
            function(accumulator.unwrap_or(start), element, index)
        })
        .unwrap_or(start)
    }

    /// Returns a new container holding the elements for which `predicate`
    /// is true, preserving enumeration order where order exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argentum::prelude::*;
    ///
    /// let sequence = Sequence::from(vec![1, 2, 3, 4]);
    /// assert_eq!(
    ///     sequence.filter(|element, _| element % 2 == 1),
    ///     Sequence::from(vec![1, 3]),
    /// );
    /// ```
    fn filter<P>(&self, mut predicate: P) -> Self
    where
        Self: Buildable,
        Self::Element: Clone,
        P: FnMut(&Self::Element, usize) -> bool,
    {
        Self::build(
            self.iter()
                .enumerate()
                .filter(|&(index, element)| predicate(element, index))
                .map(|(_, element)| element.clone()),
        )
    }

    /// Returns a new container holding the elements for which `predicate`
    /// is false — the complement of [`filter`](Traverse::filter).
    fn reject<P>(&self, mut predicate: P) -> Self
    where
        Self: Buildable,
        Self::Element: Clone,
        P: FnMut(&Self::Element, usize) -> bool,
    {
        self.filter(|element, index| !predicate(element, index))
    }
}

impl<C: Enumerable> Traverse for C {}
