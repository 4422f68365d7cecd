//! Search-argument interval algebra.
//!
//! Trees are built bottom-up through a [`SargFactory`]: endpoints and
//! intervals are mutated in place, combined under set operators, and
//! evaluated into a canonical sequence of disjoint, ascending intervals.
//!
//! The value line is extended with a null marker below negative infinity.
//! Null is only ever matched by a null point (or by the unconstrained
//! interval), and complements are taken over the non-null values.

mod coordinate;
mod endpoint;
mod expr;
mod factory;
mod interval;
mod sequence;
mod set;

#[cfg(test)]
mod tests;

// re-exports
pub use coordinate::Coordinate;
pub use endpoint::{BoundType, SargEndpoint, Strictness};
pub use expr::SargExpr;
pub use factory::SargFactory;
pub use interval::{NullSemantics, SargIntervalExpr};
pub use sequence::{SargAccess, SargIntervalSequence};
pub use set::{SargSetExpr, SetOperator};
