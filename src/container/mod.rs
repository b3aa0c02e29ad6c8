//! The four container adapters and the closed nesting variants.
//!
//! Each adapter wraps a standard library container and exposes it to the
//! algebra through the capability traits, plus the type-changing operations
//! (map, zip, flatten) whose result bounds differ per kind:
//!
//! - [`Sequence`]: ordered, duplicates allowed; backed by `Vec`.
//! - [`UniqueSequence`]: ordered, duplicates dropped at construction
//!   (first occurrence wins); backed by `Vec`.
//! - [`UniqueSet`]: unordered, unique; backed by `HashSet`.
//! - [`Mapping`]: key-to-value pairs, keys unique; backed by `HashMap`.
//!
//! Heterogeneous nesting for `flatten` is modeled as closed variants
//! ([`Nested`], [`UniqueNested`], [`SetNested`], [`MappingValue`]) instead
//! of runtime type tests: an element is either a scalar or a nested
//! container of the same family, and the flatten algorithms match on that
//! exhaustively.
//!
//! # Examples
//!
//! ```rust
//! use argentum::prelude::*;
//!
//! let nested = Sequence::from(vec![
//!     Nested::from(Sequence::from(vec![Nested::Scalar(1), Nested::Scalar(2)])),
//!     Nested::Scalar(3),
//! ]);
//! assert_eq!(nested.flatten(), Sequence::from(vec![1, 2, 3]));
//! ```

mod mapping;
mod nested;
mod sequence;
mod unique_sequence;
mod unique_set;

pub use mapping::Mapping;
pub use nested::{MappingValue, Nested, SetNested, UniqueNested};
pub use sequence::Sequence;
pub use unique_sequence::UniqueSequence;
pub use unique_set::UniqueSet;
