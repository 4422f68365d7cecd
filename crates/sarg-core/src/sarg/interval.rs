use crate::{
    domain::{Admission, DomainRef},
    error::SargError,
    obs::sink::{self, EvalKind, MetricsEvent},
    sarg::{BoundType, Coordinate, SargEndpoint, Strictness},
    value::Value,
};
use std::{cmp::Ordering, fmt};

///
/// NullSemantics
///
/// Whether a raw null point matches the null marker.
/// Only `set_null` produces `NullMatchesNull`.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum NullSemantics {
    #[default]
    NullMatchesNothing,
    NullMatchesNull,
}

impl fmt::Display for NullSemantics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NullMatchesNothing => "NULL_MATCHES_NOTHING",
            Self::NullMatchesNull => "NULL_MATCHES_NULL",
        };
        write!(f, "{label}")
    }
}

///
/// SargIntervalExpr
///
/// One contiguous range `{lower, upper}` over a domain, or the explicit
/// empty term. A fresh term is unconstrained.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SargIntervalExpr<'a> {
    lower: SargEndpoint<'a>,
    upper: SargEndpoint<'a>,
    empty: bool,
    null_semantics: NullSemantics,
}

impl<'a> SargIntervalExpr<'a> {
    #[must_use]
    pub(crate) const fn new(domain: DomainRef<'a>) -> Self {
        Self {
            lower: SargEndpoint::negative_infinity(domain),
            upper: SargEndpoint::positive_infinity(domain),
            empty: false,
            null_semantics: NullSemantics::NullMatchesNothing,
        }
    }

    #[must_use]
    pub(crate) const fn empty(domain: DomainRef<'a>) -> Self {
        let mut term = Self::new(domain);
        term.empty = true;

        term
    }

    #[must_use]
    pub(crate) const fn from_endpoints(lower: SargEndpoint<'a>, upper: SargEndpoint<'a>) -> Self {
        Self {
            lower,
            upper,
            empty: false,
            null_semantics: NullSemantics::NullMatchesNothing,
        }
    }

    // Any mutation other than set_null leaves the empty state and drops
    // the null annotation.
    const fn touch(&mut self) {
        self.empty = false;
        self.null_semantics = NullSemantics::NullMatchesNothing;
    }

    ///
    /// MUTATION
    ///

    /// Restrict to a single value. A null literal yields the null point.
    pub fn set_point(&mut self, literal: &Value) -> Result<(), SargError> {
        if literal.is_null() {
            self.set_null();
            return Ok(());
        }

        let domain = self.domain();
        let lower = SargEndpoint::finite(domain, BoundType::Lower, Strictness::Closed, literal)?;
        let upper = SargEndpoint::finite(domain, BoundType::Upper, Strictness::Closed, literal)?;

        self.lower = lower;
        self.upper = upper;
        self.touch();

        Ok(())
    }

    pub fn set_lower(&mut self, literal: &Value, strictness: Strictness) -> Result<(), SargError> {
        self.lower = SargEndpoint::finite(self.domain(), BoundType::Lower, strictness, literal)?;
        self.touch();

        Ok(())
    }

    pub fn set_upper(&mut self, literal: &Value, strictness: Strictness) -> Result<(), SargError> {
        self.upper = SargEndpoint::finite(self.domain(), BoundType::Upper, strictness, literal)?;
        self.touch();

        Ok(())
    }

    /// Install a caller-built endpoint as the lower bound.
    ///
    /// The endpoint must share this term's domain and cut from below.
    pub fn set_lower_endpoint(&mut self, endpoint: SargEndpoint<'a>) -> Result<(), SargError> {
        endpoint.check_domain(self.domain())?;
        if matches!(endpoint.coordinate(), Coordinate::PositiveInfinity)
            || (!endpoint.is_infinite() && endpoint.bound_type() != BoundType::Lower)
        {
            return Err(SargError::endpoint_invariant(format!(
                "'{endpoint}' cannot be used as a lower bound"
            )));
        }

        self.lower = endpoint;
        self.touch();

        Ok(())
    }

    /// Install a caller-built endpoint as the upper bound.
    pub fn set_upper_endpoint(&mut self, endpoint: SargEndpoint<'a>) -> Result<(), SargError> {
        endpoint.check_domain(self.domain())?;
        if matches!(endpoint.coordinate(), Coordinate::NegativeInfinity)
            || (!endpoint.is_infinite() && endpoint.bound_type() != BoundType::Upper)
        {
            return Err(SargError::endpoint_invariant(format!(
                "'{endpoint}' cannot be used as an upper bound"
            )));
        }

        self.upper = endpoint;
        self.touch();

        Ok(())
    }

    pub fn unset_lower(&mut self) {
        self.lower.set_negative_infinity();
        self.touch();
    }

    pub fn unset_upper(&mut self) {
        self.upper.set_positive_infinity();
        self.touch();
    }

    /// Restrict to the null marker only.
    pub fn set_null(&mut self) {
        let domain = self.domain();
        self.lower = SargEndpoint::null(domain, BoundType::Lower, Strictness::Closed);
        self.upper = SargEndpoint::null(domain, BoundType::Upper, Strictness::Closed);
        self.empty = false;
        self.null_semantics = NullSemantics::NullMatchesNull;
    }

    pub const fn set_empty(&mut self) {
        self.empty = true;
        self.null_semantics = NullSemantics::NullMatchesNothing;
    }

    pub fn set_unconstrained(&mut self) {
        self.lower.set_negative_infinity();
        self.upper.set_positive_infinity();
        self.touch();
    }

    ///
    /// ACCESSORS
    ///

    #[must_use]
    pub const fn domain(&self) -> DomainRef<'a> {
        self.lower.domain()
    }

    #[must_use]
    pub const fn lower(&self) -> &SargEndpoint<'a> {
        &self.lower
    }

    #[must_use]
    pub const fn upper(&self) -> &SargEndpoint<'a> {
        &self.upper
    }

    #[must_use]
    pub const fn null_semantics(&self) -> NullSemantics {
        self.null_semantics
    }

    ///
    /// CLASSIFICATION
    ///

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.empty
    }

    #[must_use]
    pub const fn is_unconstrained(&self) -> bool {
        !self.empty
            && matches!(self.lower.coordinate(), Coordinate::NegativeInfinity)
            && matches!(self.upper.coordinate(), Coordinate::PositiveInfinity)
    }

    /// Single value (the null marker included): both bounds closed on the
    /// same coordinate.
    #[must_use]
    pub fn is_point(&self) -> bool {
        !self.empty
            && !self.lower.is_infinite()
            && self.lower.compare(&self.upper) == Ordering::Equal
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.is_point() && self.lower.is_null()
    }

    /// Neither empty, unconstrained nor a point.
    #[must_use]
    pub fn is_range(&self) -> bool {
        !self.empty && !self.is_unconstrained() && !self.is_point()
    }

    // Lower position strictly past the upper one.
    pub(crate) fn is_inverted(&self) -> bool {
        self.lower.compare(&self.upper) == Ordering::Greater
    }

    // Widen the upper bound when `upper` sits past the current one.
    pub(crate) fn extend_upper(&mut self, upper: &SargEndpoint<'a>) {
        if upper.compare(&self.upper) == Ordering::Greater {
            self.upper = upper.clone();
        }
    }

    /// Membership of one probe value, the null marker included.
    ///
    /// Non-null probes are admitted through the domain first; a probe the
    /// domain rejects or rounds is not a member.
    #[must_use]
    pub fn contains(&self, probe: &Value) -> bool {
        if self.empty {
            return false;
        }

        let point = if probe.is_null() {
            Coordinate::Null
        } else {
            match self.domain().admit(probe) {
                Ok(Admission::Member(value)) => Coordinate::Finite(value),
                _ => return false,
            }
        };

        // the unconstrained term matches everything, null included
        if self.is_unconstrained() {
            return true;
        }

        // a bare -infinity lower bound excludes null
        if point.is_null() && self.lower.coordinate().is_infinite() {
            return false;
        }

        self.lower.compare_point(&point) != Ordering::Greater
            && self.upper.compare_point(&point) != Ordering::Less
    }

    ///
    /// EVALUATION
    ///

    /// Canonical form of this single term.
    #[must_use]
    pub fn evaluate(&self) -> Self {
        sink::record(MetricsEvent::Evaluate {
            kind: EvalKind::Interval,
        });

        let domain = self.domain();
        if self.empty || self.is_inverted() {
            sink::record(MetricsEvent::EmptyResult);
            return Self::empty(domain);
        }

        // "[null, +infinity)" covers everything
        if self.is_unconstrained()
            || (self.lower.is_null()
                && self.lower.is_closed()
                && matches!(self.upper.coordinate(), Coordinate::PositiveInfinity))
        {
            return Self::new(domain);
        }

        let lower = if self.lower.is_infinite() {
            SargEndpoint::null(domain, BoundType::Lower, Strictness::Open)
        } else {
            self.lower.clone()
        };

        Self::from_endpoints(lower, self.upper.clone())
    }

    /// Order terms by lower position, then upper position.
    /// The empty term sorts first.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.empty, other.empty) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self
                .lower
                .compare(&other.lower)
                .then_with(|| self.upper.compare(&other.upper)),
        }
    }
}

impl fmt::Display for SargIntervalExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.empty {
            return f.write_str("()");
        }

        if self.is_point() {
            write!(f, "[{}]", self.lower.coordinate())?;
        } else {
            let open = if self.lower.is_closed() && !self.lower.is_infinite() {
                '['
            } else {
                '('
            };
            let close = if self.upper.is_closed() && !self.upper.is_infinite() {
                ']'
            } else {
                ')'
            };

            write!(
                f,
                "{open}{}, {}{close}",
                self.lower.coordinate(),
                self.upper.coordinate()
            )?;
        }

        if self.null_semantics != NullSemantics::NullMatchesNothing {
            write!(f, " {}", self.null_semantics)?;
        }

        Ok(())
    }
}
