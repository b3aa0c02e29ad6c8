//! Error types for the container algebra.
//!
//! Every failure is reported synchronously at the violating call site; no
//! error is recovered, retried, or silently defaulted. The third arm of the
//! contract's error taxonomy — a missing callback, comparator, or second
//! container — cannot occur here: closures, `Ord` bounds, and reference
//! arguments are enforced by the type system, so only the two
//! runtime-reachable failures remain.

/// An error surfaced by an algebra operation.
///
/// # Examples
///
/// ```rust
/// use argentum::algebra::AlgebraError;
///
/// let error = AlgebraError::EmptyContainer { operation: "maximum" };
/// assert_eq!(
///     format!("{}", error),
///     "maximum: the container is empty"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// The operation has no meaningful result on an empty container.
    EmptyContainer {
        /// The name of the operation that failed.
        operation: &'static str,
    },
    /// An element does not satisfy the operation's structural requirement,
    /// such as a non-numeric element under `sum` or a scalar value under
    /// mapping `flatten`.
    TypeMismatch {
        /// The name of the operation that failed.
        operation: &'static str,
        /// What the operation required of the element.
        expected: &'static str,
    },
}

impl std::fmt::Display for AlgebraError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContainer { operation } => {
                write!(formatter, "{operation}: the container is empty")
            }
            Self::TypeMismatch {
                operation,
                expected,
            } => {
                write!(formatter, "{operation}: expected {expected}")
            }
        }
    }
}

impl std::error::Error for AlgebraError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_empty_container() {
        let error = AlgebraError::EmptyContainer { operation: "minimum" };
        assert_eq!(error.to_string(), "minimum: the container is empty");
    }

    #[test]
    fn test_display_type_mismatch() {
        let error = AlgebraError::TypeMismatch {
            operation: "sum",
            expected: "a numeric-coercible element",
        };
        assert_eq!(error.to_string(), "sum: expected a numeric-coercible element");
    }
}
