use crate::{
    domain::{Admission, DomainRef},
    error::SargError,
    obs::sink::{self, MetricsEvent},
    sarg::Coordinate,
    value::Value,
};
use std::{cmp::Ordering, fmt};

///
/// BoundType
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BoundType {
    Lower,
    Upper,
}

impl BoundType {
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Lower => Self::Upper,
            Self::Upper => Self::Lower,
        }
    }
}

///
/// Strictness
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Strictness {
    Open,
    Closed,
}

impl Strictness {
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }
}

///
/// SargEndpoint
///
/// Directional cut point on the value line.
///
/// Infinities always behave as the outermost cut for their side; their
/// bound type and strictness are fixed. The null coordinate keeps the bound
/// type and strictness it was set with.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SargEndpoint<'a> {
    domain: DomainRef<'a>,
    coordinate: Coordinate,
    bound: BoundType,
    strictness: Strictness,
}

impl<'a> SargEndpoint<'a> {
    /// Default endpoint: negative infinity.
    #[must_use]
    pub(crate) const fn new(domain: DomainRef<'a>) -> Self {
        Self::negative_infinity(domain)
    }

    #[must_use]
    pub(crate) const fn negative_infinity(domain: DomainRef<'a>) -> Self {
        Self {
            domain,
            coordinate: Coordinate::NegativeInfinity,
            bound: BoundType::Lower,
            strictness: Strictness::Open,
        }
    }

    #[must_use]
    pub(crate) const fn positive_infinity(domain: DomainRef<'a>) -> Self {
        Self {
            domain,
            coordinate: Coordinate::PositiveInfinity,
            bound: BoundType::Upper,
            strictness: Strictness::Open,
        }
    }

    #[must_use]
    pub(crate) const fn null(domain: DomainRef<'a>, bound: BoundType, strictness: Strictness) -> Self {
        Self {
            domain,
            coordinate: Coordinate::Null,
            bound,
            strictness,
        }
    }

    /// Build a finite (or null) endpoint, rounding onto the domain.
    pub(crate) fn finite(
        domain: DomainRef<'a>,
        bound: BoundType,
        strictness: Strictness,
        literal: &Value,
    ) -> Result<Self, SargError> {
        if literal.is_null() {
            return Ok(Self::null(domain, bound, strictness));
        }

        let (value, strictness) = match domain.admit(literal)? {
            Admission::Member(value) => (value, strictness),

            // Over a discrete domain "> 8.5" and ">= 8.5" both mean ">= 9",
            // "< 8.5" and "<= 8.5" both mean "< 9".
            Admission::Ceiling(value) => {
                if !domain.is_discrete() {
                    return Err(SargError::endpoint_invariant(format!(
                        "continuous domain '{}' rounded literal '{literal}'",
                        domain.name()
                    )));
                }

                sink::record(MetricsEvent::BoundDiscretized);
                let strictness = match bound {
                    BoundType::Lower => Strictness::Closed,
                    BoundType::Upper => Strictness::Open,
                };

                (value, strictness)
            }
        };

        Ok(Self {
            domain,
            coordinate: Coordinate::Finite(value),
            bound,
            strictness,
        })
    }

    ///
    /// MUTATION
    ///

    pub fn set_negative_infinity(&mut self) {
        *self = Self::negative_infinity(self.domain);
    }

    pub fn set_positive_infinity(&mut self) {
        *self = Self::positive_infinity(self.domain);
    }

    /// Set a finite bound; a null literal yields the null coordinate.
    ///
    /// The endpoint is left untouched when the literal is rejected.
    pub fn set_finite(
        &mut self,
        bound: BoundType,
        strictness: Strictness,
        literal: &Value,
    ) -> Result<(), SargError> {
        *self = Self::finite(self.domain, bound, strictness, literal)?;

        Ok(())
    }

    ///
    /// ACCESSORS
    ///

    #[must_use]
    pub const fn domain(&self) -> DomainRef<'a> {
        self.domain
    }

    #[must_use]
    pub const fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    #[must_use]
    pub const fn bound_type(&self) -> BoundType {
        self.bound
    }

    #[must_use]
    pub const fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// Finite value of this endpoint, if it has one.
    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        self.coordinate.value()
    }

    #[must_use]
    pub const fn is_infinite(&self) -> bool {
        self.coordinate.is_infinite()
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.coordinate.is_null()
    }

    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self.strictness, Strictness::Closed)
    }

    ///
    /// ORDERING
    ///

    // Infinitesimal offset relative to the coordinate:
    // upper open -1, closed 0, lower open +1.
    const fn offset(&self) -> i8 {
        if self.coordinate.is_infinite() {
            return 0;
        }

        match (self.bound, self.strictness) {
            (BoundType::Upper, Strictness::Open) => -1,
            (_, Strictness::Closed) => 0,
            (BoundType::Lower, Strictness::Open) => 1,
        }
    }

    /// Total order over endpoint positions.
    ///
    /// `<= 7` and `>= 7` compare equal; `< 7` sorts before `> 7`.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.coordinate
            .compare(&other.coordinate, self.domain)
            .then_with(|| self.offset().cmp(&other.offset()))
    }

    /// Position of this endpoint relative to a closed probe point.
    #[must_use]
    pub(crate) fn compare_point(&self, point: &Coordinate) -> Ordering {
        self.coordinate
            .compare(point, self.domain)
            .then_with(|| self.offset().cmp(&0))
    }

    /// True when the ranges cut by `self` and `other` leave no gap:
    /// same finite value and at least one side closed.
    ///
    /// Infinities and the null marker never touch anything.
    #[must_use]
    pub fn is_touching(&self, other: &Self) -> bool {
        match (&self.coordinate, &other.coordinate) {
            (Coordinate::Finite(left), Coordinate::Finite(right)) => {
                self.domain.compare(left, right) == Ordering::Equal
                    && (self.is_closed() || other.is_closed())
            }
            _ => false,
        }
    }

    /// Endpoint cutting the same point from the other side.
    ///
    /// Infinities have no opposite cut and are returned unchanged.
    #[must_use]
    pub(crate) fn flipped(&self) -> Self {
        if self.coordinate.is_infinite() {
            return self.clone();
        }

        Self {
            domain: self.domain,
            coordinate: self.coordinate.clone(),
            bound: self.bound.flip(),
            strictness: self.strictness.flip(),
        }
    }

    /// Reject an endpoint built under a different domain.
    pub(crate) fn check_domain(&self, domain: DomainRef<'_>) -> Result<(), SargError> {
        if self.domain.same_domain(&domain) {
            Ok(())
        } else {
            Err(SargError::endpoint_invariant(format!(
                "endpoint domain mismatch: expected '{}', found '{}'",
                domain.name(),
                self.domain.name()
            )))
        }
    }
}

impl fmt::Display for SargEndpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coordinate.is_infinite() {
            return write!(f, "{}", self.coordinate);
        }

        let op = match (self.bound, self.strictness) {
            (BoundType::Lower, Strictness::Open) => ">",
            (BoundType::Lower, Strictness::Closed) => ">=",
            (BoundType::Upper, Strictness::Open) => "<",
            (BoundType::Upper, Strictness::Closed) => "<=",
        };

        write!(f, "{op} {}", self.coordinate)
    }
}
