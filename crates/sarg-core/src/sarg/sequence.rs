use crate::{
    domain::DomainRef,
    sarg::{
        SargExpr, SargIntervalExpr, SargSetExpr, SetOperator,
        set::{complement_terms, merge_union},
    },
    value::Value,
};
use std::fmt;

///
/// SargAccess
///
/// Index access shape implied by a canonical sequence.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SargAccess {
    /// Nothing can match; no access needed.
    Empty,

    /// Every row matches, nulls included.
    FullScan,

    /// One key lookup.
    Point,

    /// Several key lookups.
    MultiPoint,

    /// One contiguous range scan.
    Range,

    /// Several disjoint ranges merged in key order.
    MergeRange,
}

///
/// SargIntervalSequence
///
/// Evaluated, canonical output: terms are non-empty, pairwise disjoint,
/// non-touching and in ascending order.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SargIntervalSequence<'a> {
    domain: DomainRef<'a>,
    intervals: Vec<SargIntervalExpr<'a>>,
}

impl<'a> SargIntervalSequence<'a> {
    /// Canonicalize evaluated terms.
    #[must_use]
    pub(crate) fn from_terms(domain: DomainRef<'a>, terms: Vec<SargIntervalExpr<'a>>) -> Self {
        Self::from_canonical(domain, merge_union(domain, terms))
    }

    // Terms already union-merged.
    #[must_use]
    pub(crate) const fn from_canonical(
        domain: DomainRef<'a>,
        intervals: Vec<SargIntervalExpr<'a>>,
    ) -> Self {
        Self { domain, intervals }
    }

    #[must_use]
    pub(crate) fn unconstrained(domain: DomainRef<'a>) -> Self {
        Self::from_canonical(domain, vec![SargIntervalExpr::new(domain)])
    }

    /// Canonical complement over the non-null value line.
    #[must_use]
    pub(crate) fn complement(&self) -> Self {
        Self::from_canonical(self.domain, complement_terms(self.domain, &self.intervals))
    }

    #[must_use]
    pub const fn domain(&self) -> DomainRef<'a> {
        self.domain
    }

    #[must_use]
    pub fn intervals(&self) -> &[SargIntervalExpr<'a>] {
        &self.intervals
    }

    #[must_use]
    pub fn into_intervals(self) -> Vec<SargIntervalExpr<'a>> {
        self.intervals
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.intervals.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        matches!(self.intervals.as_slice(), [only] if only.is_unconstrained())
    }

    #[must_use]
    pub const fn is_single_interval(&self) -> bool {
        self.intervals.len() == 1
    }

    #[must_use]
    pub fn is_point(&self) -> bool {
        matches!(self.intervals.as_slice(), [only] if only.is_point())
    }

    #[must_use]
    pub fn is_multi_point(&self) -> bool {
        self.intervals.len() > 1 && self.intervals.iter().all(SargIntervalExpr::is_point)
    }

    #[must_use]
    pub fn is_range(&self) -> bool {
        matches!(self.intervals.as_slice(), [only] if only.is_range())
    }

    /// Membership of one probe value, the null marker included.
    #[must_use]
    pub fn contains(&self, probe: &Value) -> bool {
        self.intervals.iter().any(|term| term.contains(probe))
    }

    #[must_use]
    pub fn access_shape(&self) -> SargAccess {
        if self.is_empty() {
            SargAccess::Empty
        } else if self.is_unconstrained() {
            SargAccess::FullScan
        } else if self.is_point() {
            SargAccess::Point
        } else if self.is_single_interval() {
            SargAccess::Range
        } else if self.is_multi_point() {
            SargAccess::MultiPoint
        } else {
            SargAccess::MergeRange
        }
    }

    /// Render back into an expression tree: the empty term, the single
    /// term, or a union of the terms.
    #[must_use]
    pub fn into_expr(self) -> SargExpr<'a> {
        let domain = self.domain;
        let mut intervals = self.intervals;

        match intervals.len() {
            0 => SargExpr::Interval(SargIntervalExpr::empty(domain)),
            1 => SargExpr::Interval(intervals.remove(0)),
            _ => SargExpr::Set(SargSetExpr::from_children(
                domain,
                SetOperator::Union,
                intervals.into_iter().map(SargExpr::Interval).collect(),
            )),
        }
    }
}

impl fmt::Display for SargIntervalSequence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.intervals.as_slice() {
            [] => f.write_str("()"),
            [only] => write!(f, "{only}"),
            many => {
                write!(f, "{}(", SetOperator::Union)?;
                for term in many {
                    write!(f, " {term}")?;
                }
                f.write_str(" )")
            }
        }
    }
}
