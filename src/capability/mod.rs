//! Capability traits the algebra is parameterized over.
//!
//! Each container kind implements only the capabilities it actually
//! supports, and every algebra operation is bounded by the capabilities it
//! needs — nothing more. This turns contracts like "take and drop are
//! defined only for ordered containers" into compile-time restrictions:
//!
//! - [`Enumerable`]: by-reference traversal and a size query. All four
//!   container kinds implement it.
//! - [`Ordered`]: a marker refining [`Enumerable`] — the enumeration order
//!   is defined (insertion order) and stable. Only the two sequence kinds
//!   implement it; windowing and pairing operations require it.
//! - [`Keyed`]: pair traversal for key-to-value mappings.
//! - [`Buildable`] / [`KeyedBuildable`]: construction of a new container
//!   from an enumeration of elements or pairs. The algebra re-wraps its
//!   results through these.
//! - [`Numeric`]: numeric value extraction, supplied by the element type,
//!   required only by sum/product aggregation.
//!
//! # Examples
//!
//! Generic code can target capabilities instead of concrete containers:
//!
//! ```rust
//! use argentum::capability::Enumerable;
//!
//! fn total_characters<C>(container: &C) -> usize
//! where
//!     C: Enumerable<Element = String>,
//! {
//!     container.iter().map(String::len).sum()
//! }
//! ```

mod buildable;
mod enumerable;
mod keyed;
mod numeric;

pub use buildable::{Buildable, KeyedBuildable};
pub use enumerable::{Enumerable, Ordered};
pub use keyed::Keyed;
pub use numeric::{Number, Numeric};
