//! Construction capability: re-wrapping an enumeration into a container.

use super::enumerable::Enumerable;
use super::keyed::Keyed;

/// Capability for containers that can be built from an enumeration of
/// elements.
///
/// The algebra's transforming operations produce their results through
/// `build`, so each container kind applies its own construction rules:
/// sequences keep every element in order, unique kinds drop duplicates
/// (first occurrence wins), sets ignore order entirely.
///
/// # Examples
///
/// ```rust
/// use argentum::capability::Buildable;
/// use argentum::container::UniqueSequence;
///
/// let unique = UniqueSequence::build([3, 1, 3, 2, 1]);
/// assert_eq!(unique, UniqueSequence::build([3, 1, 2]));
/// ```
pub trait Buildable: Enumerable + Sized {
    /// Builds a new container of this kind from the given elements.
    fn build<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Self::Element>;
}

/// Capability for mappings that can be built from an enumeration of pairs.
///
/// Later pairs with an already-seen key replace the earlier value, matching
/// the last-writer-wins collision rule of the flatten operation.
///
/// # Examples
///
/// ```rust
/// use argentum::capability::KeyedBuildable;
/// use argentum::container::Mapping;
///
/// let mapping = Mapping::build_pairs([("a", 1), ("a", 2)]);
/// assert_eq!(mapping.get(&"a"), Some(&2));
/// ```
pub trait KeyedBuildable: Keyed + Sized {
    /// Builds a new mapping of this kind from the given key-value pairs.
    fn build_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Self::Key, Self::Value)>;
}
