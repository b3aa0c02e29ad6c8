//! Closed variants modeling heterogeneous nesting for `flatten`.
//!
//! An element of a flattenable container is either a scalar or a nested
//! container of the same family — never anything else. Modeling that as an
//! enum per family lets the flatten algorithms pattern-match exhaustively
//! instead of type-testing at runtime, and makes "a sequence nested inside
//! a set" unrepresentable.

use std::hash::{Hash, Hasher};

use super::mapping::Mapping;
use super::sequence::Sequence;
use super::unique_sequence::UniqueSequence;
use super::unique_set::UniqueSet;
use crate::capability::{Number, Numeric};

/// An element of a flattenable [`Sequence`]: a scalar or a nested sequence.
///
/// # Examples
///
/// ```rust
/// use argentum::prelude::*;
///
/// let nested = Sequence::from(vec![
///     Nested::Scalar(1),
///     Nested::from(Sequence::from(vec![Nested::Scalar(2), Nested::Scalar(3)])),
/// ]);
/// assert_eq!(nested.flatten(), Sequence::from(vec![1, 2, 3]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    /// A scalar element; `flatten` passes it through unchanged.
    Scalar(T),
    /// A nested sequence; `flatten` inlines its elements recursively.
    Sequence(Sequence<Nested<T>>),
}

impl<T: Clone> Nested<T> {
    /// Appends this node's scalars to `sink` in enumeration order,
    /// recursing through nested sequences.
    pub(crate) fn pour(&self, sink: &mut Vec<T>) {
        match self {
            Self::Scalar(element) => sink.push(element.clone()),
            Self::Sequence(nested) => {
                for element in nested {
                    element.pour(sink);
                }
            }
        }
    }
}

impl<T> From<Sequence<Nested<T>>> for Nested<T> {
    fn from(nested: Sequence<Nested<T>>) -> Self {
        Self::Sequence(nested)
    }
}

impl<T: Numeric> Numeric for Nested<T> {
    /// A scalar surfaces its element's numeric value; a still-nested
    /// sequence has none.
    fn as_number(&self) -> Option<Number> {
        match self {
            Self::Scalar(element) => element.as_number(),
            Self::Sequence(_) => None,
        }
    }
}

/// An element of a flattenable [`UniqueSequence`]: a scalar or a nested
/// unique sequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum UniqueNested<T> {
    /// A scalar element.
    Scalar(T),
    /// A nested unique sequence, inlined recursively by `flatten`.
    Sequence(UniqueSequence<UniqueNested<T>>),
}

impl<T: Clone> UniqueNested<T> {
    pub(crate) fn pour(&self, sink: &mut Vec<T>) {
        match self {
            Self::Scalar(element) => sink.push(element.clone()),
            Self::Sequence(nested) => {
                for element in nested {
                    element.pour(sink);
                }
            }
        }
    }
}

impl<T> From<UniqueSequence<UniqueNested<T>>> for UniqueNested<T> {
    fn from(nested: UniqueSequence<UniqueNested<T>>) -> Self {
        Self::Sequence(nested)
    }
}

impl<T: Numeric> Numeric for UniqueNested<T> {
    fn as_number(&self) -> Option<Number> {
        match self {
            Self::Scalar(element) => element.as_number(),
            Self::Sequence(_) => None,
        }
    }
}

/// An element of a flattenable [`UniqueSet`]: a scalar or a nested set.
#[derive(Clone, Debug)]
pub enum SetNested<T> {
    /// A scalar element.
    Scalar(T),
    /// A nested set, unioned recursively by `flatten`.
    Set(UniqueSet<SetNested<T>>),
}

impl<T: Clone> SetNested<T> {
    pub(crate) fn pour(&self, sink: &mut Vec<T>) {
        match self {
            Self::Scalar(element) => sink.push(element.clone()),
            Self::Set(nested) => {
                for element in nested {
                    element.pour(sink);
                }
            }
        }
    }
}

impl<T> From<UniqueSet<SetNested<T>>> for SetNested<T> {
    fn from(nested: UniqueSet<SetNested<T>>) -> Self {
        Self::Set(nested)
    }
}

// Set elements must be Eq + Hash, so the derives' too-loose bounds cannot
// be used here; the impls mirror what derive would generate.
impl<T: Eq + Hash> PartialEq for SetNested<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Scalar(left), Self::Scalar(right)) => left == right,
            (Self::Set(left), Self::Set(right)) => left == right,
            _ => false,
        }
    }
}

impl<T: Eq + Hash> Eq for SetNested<T> {}

impl<T: Hash> Hash for SetNested<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Scalar(element) => {
                state.write_u8(0);
                element.hash(state);
            }
            Self::Set(nested) => {
                state.write_u8(1);
                nested.hash(state);
            }
        }
    }
}

impl<T: Numeric> Numeric for SetNested<T> {
    fn as_number(&self) -> Option<Number> {
        match self {
            Self::Scalar(element) => element.as_number(),
            Self::Set(_) => None,
        }
    }
}

/// A value of a flattenable [`Mapping`]: a scalar leaf or a nested mapping.
///
/// Mapping `flatten` requires every *top-level* value to be the
/// [`Mapping`](MappingValue::Mapping) variant; inside nested mappings,
/// scalar leaves terminate the recursion as ordinary pairs.
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
///
/// let flat = nested.flatten().unwrap();
/// assert_eq!(flat, Mapping::from_pairs([("a", 1), ("b", 2)]));
/// ```
#[derive(Clone, Debug)]
pub enum MappingValue<K, V> {
    /// A scalar leaf value.
    Scalar(V),
    /// A nested mapping, merged recursively by `flatten`.
    Mapping(Mapping<K, MappingValue<K, V>>),
}

impl<K, V> From<Mapping<K, MappingValue<K, V>>> for MappingValue<K, V> {
    fn from(nested: Mapping<K, MappingValue<K, V>>) -> Self {
        Self::Mapping(nested)
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for MappingValue<K, V> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Scalar(left), Self::Scalar(right)) => left == right,
            (Self::Mapping(left), Self::Mapping(right)) => left == right,
            _ => false,
        }
    }
}

impl<K: Eq + Hash, V: Eq> Eq for MappingValue<K, V> {}

impl<K, V: Numeric> Numeric for MappingValue<K, V> {
    fn as_number(&self) -> Option<Number> {
        match self {
            Self::Scalar(value) => value.as_number(),
            Self::Mapping(_) => None,
        }
    }
}
