//! Numeric-coercion capability and the [`Number`] value type.
//!
//! Sum and product aggregation operate on elements that can surface a
//! numeric value. The element type supplies that capability through
//! [`Numeric`]; the algebra itself defines no arithmetic beyond the
//! identity-seeded folds over [`Number`].

use std::cmp::Ordering;
use std::fmt;

/// A numeric value produced by aggregation.
///
/// `Number` is either an exact integer or a float. Arithmetic promotes to
/// `Float` as soon as a float is involved, and integer overflow promotes to
/// float rather than wrapping. Comparison uses a total order: two integers
/// compare exactly, mixed operands compare as floats with
/// [`f64::total_cmp`] semantics, so `Number` values can be sorted and
/// compared even when a float payload is NaN.
///
/// # Examples
///
/// ```rust
/// use argentum::capability::Number;
///
/// let total = Number::Integer(2).add(Number::Integer(3));
/// assert_eq!(total, Number::Integer(5));
///
/// let scaled = total.multiply(Number::Float(0.5));
/// assert_eq!(scaled, Number::Float(2.5));
/// assert_eq!(scaled.as_float(), 2.5);
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// An exact integer value.
    Integer(i64),
    /// A floating point value.
    Float(f64),
}

impl Number {
    /// The additive identity.
    pub const ZERO: Self = Self::Integer(0);

    /// The multiplicative identity.
    pub const ONE: Self = Self::Integer(1);

    /// Adds two numbers, promoting to float on mixed operands or integer
    /// overflow.
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left
                .checked_add(right)
                .map_or_else(|| Self::Float(left as f64 + right as f64), Self::Integer),
            (left, right) => Self::Float(left.as_float() + right.as_float()),
        }
    }

    /// Multiplies two numbers, promoting to float on mixed operands or
    /// integer overflow.
    #[must_use]
    pub fn multiply(self, other: Self) -> Self {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left
                .checked_mul(right)
                .map_or_else(|| Self::Float(left as f64 * right as f64), Self::Integer),
            (left, right) => Self::Float(left.as_float() * right.as_float()),
        }
    }

    /// Returns the value as a float, converting an integer payload.
    #[must_use]
    pub const fn as_float(self) -> f64 {
        match self {
            Self::Integer(value) => value as f64,
            Self::Float(value) => value,
        }
    }

    /// Returns the value as an integer, truncating a float payload.
    #[must_use]
    pub const fn as_integer(self) -> i64 {
        match self {
            Self::Integer(value) => value,
            Self::Float(value) => value as i64,
        }
    }

    fn compare(self, other: Self) -> Ordering {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left.cmp(&right),
            (left, right) => left.as_float().total_cmp(&right.as_float()),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.compare(*other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(*other)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value}"),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Capability for elements that can surface a numeric value.
///
/// Sum and product require it; an element for which `as_number` returns
/// `None` makes the aggregation fail with
/// [`TypeMismatch`](crate::algebra::AlgebraError::TypeMismatch). The
/// primitive numeric types always succeed; the scalar arms of the nesting
/// variants succeed while their container arms do not.
///
/// # Examples
///
/// ```rust
/// use argentum::capability::{Number, Numeric};
///
/// assert_eq!(3_i32.as_number(), Some(Number::Integer(3)));
/// assert_eq!(0.5_f64.as_number(), Some(Number::Float(0.5)));
/// ```
pub trait Numeric {
    /// Extracts the numeric value, or `None` if this element has no numeric
    /// interpretation.
    fn as_number(&self) -> Option<Number>;
}

impl Numeric for Number {
    fn as_number(&self) -> Option<Number> {
        Some(*self)
    }
}

macro_rules! impl_numeric_integer {
    ($($kind:ty),+) => {
        $(
            impl Numeric for $kind {
                fn as_number(&self) -> Option<Number> {
                    Some(Number::Integer(i64::from(*self)))
                }
            }
        )+
    };
}

impl_numeric_integer!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_numeric_wide_integer {
    ($($kind:ty),+) => {
        $(
            impl Numeric for $kind {
                fn as_number(&self) -> Option<Number> {
                    // Values outside the i64 range promote to float.
                    Some(
                        i64::try_from(*self)
                            .map_or_else(|_| Number::Float(*self as f64), Number::Integer),
                    )
                }
            }
        )+
    };
}

impl_numeric_wide_integer!(i128, u64, u128, isize, usize);

impl Numeric for f32 {
    fn as_number(&self) -> Option<Number> {
        Some(Number::Float(f64::from(*self)))
    }
}

impl Numeric for f64 {
    fn as_number(&self) -> Option<Number> {
        Some(Number::Float(*self))
    }
}
