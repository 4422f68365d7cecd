//! Deterministic, read-only explanation of evaluated search arguments.

use crate::{
    sarg::{Coordinate, SargAccess, SargEndpoint, SargIntervalSequence},
    value::Value,
};
use std::ops::Bound;

///
/// ExplainSarg
///
/// Stable projection of a canonical sequence onto plain bounds, in the
/// shape an index range planner consumes. The null marker is reported
/// separately from the non-null ranges.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExplainSarg {
    pub access: SargAccess,
    pub matches_null: bool,
    pub ranges: Vec<ExplainRange>,
}

///
/// ExplainRange
///
/// One range over non-null values, in ascending order.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExplainRange {
    pub lower: Bound<Value>,
    pub upper: Bound<Value>,
}

impl SargIntervalSequence<'_> {
    /// Produce a stable, deterministic explanation of this sequence.
    #[must_use]
    pub fn explain(&self) -> ExplainSarg {
        let matches_null = self.contains(&Value::Null);

        let ranges = self
            .intervals()
            .iter()
            .filter(|term| !term.upper().is_null())
            .map(|term| ExplainRange {
                lower: explain_bound(term.lower()),
                upper: explain_bound(term.upper()),
            })
            .collect();

        ExplainSarg {
            access: self.access_shape(),
            matches_null,
            ranges,
        }
    }
}

// The null marker and both infinities leave the non-null range unbounded.
fn explain_bound(endpoint: &SargEndpoint<'_>) -> Bound<Value> {
    match endpoint.coordinate() {
        Coordinate::Finite(value) if endpoint.is_closed() => Bound::Included(value.clone()),
        Coordinate::Finite(value) => Bound::Excluded(value.clone()),
        Coordinate::Null | Coordinate::NegativeInfinity | Coordinate::PositiveInfinity => {
            Bound::Unbounded
        }
    }
}
