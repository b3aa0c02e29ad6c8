//! # argentum
//!
//! Uniform functional operations over four container kinds: ordered
//! sequences, ordered unique sequences, unordered unique sets, and
//! key-to-value mappings.
//!
//! ## Overview
//!
//! The crate provides one algebra — map, filter, reject, find, reduce,
//! flatten, zip, take/drop, the quantifiers any/all/none, and numeric
//! aggregation — applied consistently across container kinds that differ in
//! ordering, uniqueness, and pairing semantics. Every operation is eager,
//! non-destructive, and returns a new container or a scalar; receivers are
//! never mutated.
//!
//! The algebra is parameterized over a small capability trait set rather
//! than repeated per container kind:
//!
//! - **Capabilities** ([`capability`]): [`Enumerable`](capability::Enumerable)
//!   (traversal and size), [`Ordered`](capability::Ordered) (stable
//!   enumeration order), [`Keyed`](capability::Keyed) (pair traversal),
//!   [`Buildable`](capability::Buildable) (construction from an
//!   enumeration), and [`Numeric`](capability::Numeric) (numeric value
//!   extraction).
//! - **Algebra** ([`algebra`]): [`Traverse`](algebra::Traverse),
//!   [`Window`](algebra::Window), [`KeyedTraverse`](algebra::KeyedTraverse),
//!   [`Aggregate`](algebra::Aggregate), and
//!   [`KeyedAggregate`](algebra::KeyedAggregate), blanket-implemented over
//!   the capabilities. Operations that only make sense with a stable order
//!   (take, drop, zip, ...) are gated on [`Ordered`](capability::Ordered),
//!   so calling them on an unordered kind is a compile error rather than a
//!   runtime convention.
//! - **Containers** ([`container`]): [`Sequence`](container::Sequence),
//!   [`UniqueSequence`](container::UniqueSequence),
//!   [`UniqueSet`](container::UniqueSet), and
//!   [`Mapping`](container::Mapping), thin adapters over the standard
//!   library's `Vec`, `HashSet`, and `HashMap`.
//! - **Text helpers** ([`text`]): character-based take/drop on `str`.
//!
//! ## Example
//!
//! ```rust
//! use argentum::prelude::*;
//!
//! let sequence = Sequence::from(vec![1, 2, 3, 4]);
//!
//! let doubled = sequence.map(|element, _| element * 2);
//! assert_eq!(doubled, Sequence::from(vec![2, 4, 6, 8]));
//!
//! let even = sequence.filter(|element, _| element % 2 == 0);
//! assert_eq!(even, Sequence::from(vec![2, 4]));
//!
//! assert_eq!(sequence.sum(), Ok(Number::Integer(10)));
//! assert_eq!(sequence.take(2), Sequence::from(vec![1, 2]));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` implementations for the four
//!   container adapters.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the capability traits, the algebra traits, the container
/// adapters, and the supporting value types.
///
/// # Usage
///
/// ```rust
/// use argentum::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algebra::{
        Aggregate, AlgebraError, KeyedAggregate, KeyedTraverse, Traverse, Window,
    };
    pub use crate::capability::{
        Buildable, Enumerable, Keyed, KeyedBuildable, Number, Numeric, Ordered,
    };
    pub use crate::container::{
        Mapping, MappingValue, Nested, Sequence, SetNested, UniqueNested, UniqueSequence,
        UniqueSet,
    };
    pub use crate::text::Text;
}

pub mod algebra;
pub mod capability;
pub mod container;
pub mod text;
