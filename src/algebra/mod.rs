//! The shared algebra: traversal, windowing, pairing, and aggregation.
//!
//! Every operation here is written once against the capability traits and
//! blanket-implemented, so the four container adapters share a single
//! traversal core and a single aggregate core instead of repeating the
//! operation set per kind:
//!
//! - [`Traverse`]: each, find, any/all/none, reduce and its typed numeric
//!   wrappers, filter, reject — for every
//!   [`Enumerable`](crate::capability::Enumerable).
//! - [`Window`]: find_with_index, take, drop, take_while, drop_while — only
//!   for [`Ordered`](crate::capability::Ordered) containers; unordered kinds
//!   do not have these operations at all.
//! - [`KeyedTraverse`]: the pair-shaped traversal for mappings.
//! - [`Aggregate`] and [`KeyedAggregate`]: sum, product, maximum, minimum
//!   and the mapping key/value projections of them, all delegating to one
//!   aggregate core.
//!
//! Failures surface synchronously as [`AlgebraError`]; nothing is retried
//! or deferred.

mod aggregate;
mod error;
mod keyed;
mod traverse;
mod window;

pub use aggregate::{Aggregate, KeyedAggregate};
pub use error::AlgebraError;
pub use keyed::KeyedTraverse;
pub use traverse::Traverse;
pub use window::Window;

pub(crate) use traverse::map_into;
pub(crate) use window::zip_into;
