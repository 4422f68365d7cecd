//! Core runtime for search-argument (SARG) analysis: literal values, value
//! domains, the interval algebra itself, predicate lowering and explain.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod analysis;
pub mod domain;
pub mod error;
pub mod explain;
pub mod obs;
pub mod sarg;
pub mod types;
pub mod value;

///
/// Prelude
///
/// Prelude contains only algebra vocabulary.
/// No errors, sinks, or explain helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        domain::{Domain, ScalarDomain},
        sarg::{
            BoundType, SargExpr, SargFactory, SargIntervalExpr, SargIntervalSequence,
            SargSetExpr, SetOperator, Strictness,
        },
        value::Value,
    };
}
