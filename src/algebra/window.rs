//! Windowing and pairing: prefix/suffix operations on ordered containers.

use crate::capability::{Buildable, Enumerable, Ordered};

/// Builds an ordered container of pairs by walking `left` and `right` in
/// lockstep. Surplus elements of the longer side are discarded.
pub(crate) fn zip_into<A, B, D>(left: &A, right: &B) -> D
where
    A: Ordered,
    B: Ordered,
    A::Element: Clone,
    B::Element: Clone,
    D: Buildable + Enumerable<Element = (A::Element, B::Element)>,
{
    D::build(
        left.iter()
            .zip(right.iter())
            .map(|(first, second)| (first.clone(), second.clone())),
    )
}

/// Positional operations, available only on [`Ordered`] containers.
///
/// Unordered sets and mappings implement no [`Ordered`] capability, so
/// take, drop, and friends simply do not exist for them — the restriction
/// is enforced by the compiler, not checked at runtime.
///
/// # Examples
///
/// ```rust
/// use argentum::prelude::*;
///
/// let sequence = Sequence::from(vec![1, 2, 3, 4, 5]);
///
/// assert_eq!(sequence.take(2), Sequence::from(vec![1, 2]));
/// assert_eq!(sequence.drop(2), Sequence::from(vec![3, 4, 5]));
/// assert_eq!(
///     sequence.take_while(|element, _| *element < 3),
///     Sequence::from(vec![1, 2]),
/// );
/// assert_eq!(
///     sequence.drop_while(|element, _| *element < 3),
///     Sequence::from(vec![3, 4, 5]),
/// );
/// ```
pub trait Window: Ordered + Buildable {
    /// Returns the first element satisfying `predicate` together with its
    /// index, or `None` when nothing matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argentum::prelude::*;
    ///
    /// let sequence = Sequence::from(vec!["a", "b", "c"]);
    /// assert_eq!(
    ///     sequence.find_with_index(|element, _| *element == "b"),
    ///     Some((&"b", 1)),
    /// );
    /// ```
    fn find_with_index<P>(&self, mut predicate: P) -> Option<(&Self::Element, usize)>
    where
        P: FnMut(&Self::Element, usize) -> bool,
    {
        self.iter()
            .enumerate()
            .find(|&(index, element)| predicate(element, index))
            .map(|(index, element)| (element, index))
    }

    /// Returns a new container holding the first `count` elements.
    ///
    /// `take(0)` is empty; when `count` is at least the container's size
    /// the result is a copy of the whole container.
    fn take(&self, count: usize) -> Self
    where
        Self::Element: Clone,
    {
        Self::build(self.iter().take(count).cloned())
    }

    /// Returns a new container holding everything after the first `count`
    /// elements — the complement of [`take`](Window::take).
    fn drop(&self, count: usize) -> Self
    where
        Self::Element: Clone,
    {
        Self::build(self.iter().skip(count).cloned())
    }

    /// Returns the longest prefix on which `predicate` holds.
    ///
    /// The predicate is not consulted again past its first failure.
    fn take_while<P>(&self, mut predicate: P) -> Self
    where
        Self::Element: Clone,
        P: FnMut(&Self::Element, usize) -> bool,
    {
        Self::build(
            self.iter()
                .enumerate()
                .take_while(|&(index, element)| predicate(element, index))
                .map(|(_, element)| element.clone()),
        )
    }

    /// Returns the suffix starting at the first element on which
    /// `predicate` fails, inclusive — the complement of
    /// [`take_while`](Window::take_while).
    fn drop_while<P>(&self, mut predicate: P) -> Self
    where
        Self::Element: Clone,
        P: FnMut(&Self::Element, usize) -> bool,
    {
        Self::build(
            self.iter()
                .enumerate()
                .skip_while(|&(index, element)| predicate(element, index))
                .map(|(_, element)| element.clone()),
        )
    }
}

impl<C: Ordered + Buildable> Window for C {}
