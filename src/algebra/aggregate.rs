//! The aggregate core: numeric and comparable reductions.
//!
//! One set of iterator-level routines serves every container kind; the
//! mapping projections (`sum_of_keys` and friends) delegate to the same
//! routines over a key or value projection — there is no independent
//! algorithm.

use super::error::AlgebraError;
use crate::capability::{Enumerable, Keyed, Number, Numeric};

pub(crate) fn sum<'a, T, I>(elements: I) -> Result<Number, AlgebraError>
where
    T: Numeric + 'a,
    I: Iterator<Item = &'a T>,
{
    fold_numeric(elements, "sum", Number::ZERO, Number::add)
}

pub(crate) fn product<'a, T, I>(elements: I) -> Result<Number, AlgebraError>
where
    T: Numeric + 'a,
    I: Iterator<Item = &'a T>,
{
    fold_numeric(elements, "product", Number::ONE, Number::multiply)
}

fn fold_numeric<'a, T, I>(
    elements: I,
    operation: &'static str,
    identity: Number,
    combine: fn(Number, Number) -> Number,
) -> Result<Number, AlgebraError>
where
    T: Numeric + 'a,
    I: Iterator<Item = &'a T>,
{
    let mut accumulator = identity;
    for element in elements {
        let value = element.as_number().ok_or(AlgebraError::TypeMismatch {
            operation,
            expected: "a numeric-coercible element",
        })?;
        accumulator = combine(accumulator, value);
    }
    Ok(accumulator)
}

pub(crate) fn maximum<'a, T, I>(elements: I) -> Result<T, AlgebraError>
where
    T: Ord + Clone + 'a,
    I: Iterator<Item = &'a T>,
{
    elements
        .max()
        .cloned()
        .ok_or(AlgebraError::EmptyContainer { operation: "maximum" })
}

pub(crate) fn minimum<'a, T, I>(elements: I) -> Result<T, AlgebraError>
where
    T: Ord + Clone + 'a,
    I: Iterator<Item = &'a T>,
{
    elements
        .min()
        .cloned()
        .ok_or(AlgebraError::EmptyContainer { operation: "minimum" })
}

/// Numeric and comparable aggregation, available on every
/// [`Enumerable`](crate::capability::Enumerable) container.
///
/// # Examples
///
/// ```rust
/// use argentum::prelude::*;
///
/// let sequence = Sequence::from(vec![3, 1, 2]);
///
/// assert_eq!(sequence.sum(), Ok(Number::Integer(6)));
/// assert_eq!(sequence.product(), Ok(Number::Integer(6)));
/// assert_eq!(sequence.maximum(), Ok(3));
/// assert_eq!(sequence.minimum(), Ok(1));
///
/// let empty: Sequence<i32> = Sequence::new();
/// assert_eq!(
///     empty.maximum(),
///     Err(AlgebraError::EmptyContainer { operation: "maximum" }),
/// );
/// ```
pub trait Aggregate: Enumerable {
    /// Sums the elements, seeded with the additive identity.
    ///
    /// An empty container sums to `Number::Integer(0)`. Fails with
    /// [`AlgebraError::TypeMismatch`] on the first element that has no
    /// numeric value; no partial result is returned.
    fn sum(&self) -> Result<Number, AlgebraError>
    where
        Self::Element: Numeric,
    {
        sum(self.iter())
    }

    /// Multiplies the elements, seeded with the multiplicative identity.
    ///
    /// An empty container multiplies to `Number::Integer(1)`.
    fn product(&self) -> Result<Number, AlgebraError>
    where
        Self::Element: Numeric,
    {
        product(self.iter())
    }

    /// Returns the largest element under the element type's total order.
    ///
    /// Fails with [`AlgebraError::EmptyContainer`] on an empty container.
    fn maximum(&self) -> Result<Self::Element, AlgebraError>
    where
        Self::Element: Ord + Clone,
    {
        maximum(self.iter())
    }

    /// Returns the smallest element under the element type's total order.
    ///
    /// Fails with [`AlgebraError::EmptyContainer`] on an empty container.
    fn minimum(&self) -> Result<Self::Element, AlgebraError>
    where
        Self::Element: Ord + Clone,
    {
        minimum(self.iter())
    }
}

impl<C: Enumerable> Aggregate for C {}

/// Key and value projections of the aggregation operations, for mappings.
///
/// Each projection delegates to the shared aggregate core over the
/// corresponding side of the pair enumeration.
///
/// # Examples
///
/// ```rust
/// use argentum::prelude::*;
///
/// let mapping = Mapping::from_pairs([(1, 10), (2, 20), (3, 30)]);
///
/// assert_eq!(mapping.sum_of_keys(), Ok(Number::Integer(6)));
/// assert_eq!(mapping.sum_of_values(), Ok(Number::Integer(60)));
/// assert_eq!(mapping.maximum_key(), Ok(3));
/// assert_eq!(mapping.minimum_value(), Ok(10));
/// ```
pub trait KeyedAggregate: Keyed {
    /// Sums the keys.
    fn sum_of_keys(&self) -> Result<Number, AlgebraError>
    where
        Self::Key: Numeric,
    {
        sum(self.pairs().map(|(key, _)| key))
    }

    /// Sums the values.
    fn sum_of_values(&self) -> Result<Number, AlgebraError>
    where
        Self::Value: Numeric,
    {
        sum(self.pairs().map(|(_, value)| value))
    }

    /// Multiplies the keys.
    fn product_of_keys(&self) -> Result<Number, AlgebraError>
    where
        Self::Key: Numeric,
    {
        product(self.pairs().map(|(key, _)| key))
    }

    /// Multiplies the values.
    fn product_of_values(&self) -> Result<Number, AlgebraError>
    where
        Self::Value: Numeric,
    {
        product(self.pairs().map(|(_, value)| value))
    }

    /// Returns the largest key; fails on an empty mapping.
    fn maximum_key(&self) -> Result<Self::Key, AlgebraError>
    where
        Self::Key: Ord + Clone,
    {
        maximum(self.pairs().map(|(key, _)| key))
    }

    /// Returns the largest value; fails on an empty mapping.
    fn maximum_value(&self) -> Result<Self::Value, AlgebraError>
    where
        Self::Value: Ord + Clone,
    {
        maximum(self.pairs().map(|(_, value)| value))
    }

    /// Returns the smallest key; fails on an empty mapping.
    fn minimum_key(&self) -> Result<Self::Key, AlgebraError>
    where
        Self::Key: Ord + Clone,
    {
        minimum(self.pairs().map(|(key, _)| key))
    }

    /// Returns the smallest value; fails on an empty mapping.
    fn minimum_value(&self) -> Result<Self::Value, AlgebraError>
    where
        Self::Value: Ord + Clone,
    {
        minimum(self.pairs().map(|(_, value)| value))
    }
}

impl<M: Keyed> KeyedAggregate for M {}
