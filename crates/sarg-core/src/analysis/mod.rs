//! Predicate analysis: lowering single-column predicates into search
//! arguments.
//!
//! Predicates follow SQL three-valued logic. A lowered search argument
//! matches exactly the values for which the predicate is TRUE; values that
//! make it FALSE or UNKNOWN are excluded.

mod ast;
mod lower;
mod normalize;


// re-exports
pub use ast::{CompareOp, ComparePredicate, SargPredicate};
pub use lower::lower_predicate;
pub use normalize::negate;
