use crate::{domain::DomainRef, value::Value};
use std::{cmp::Ordering, fmt};

///
/// Coordinate
///
/// Point on the extended value line of one domain.
///
/// Order, lowest first: Null < NegativeInfinity < Finite(..) < PositiveInfinity.
/// Null sorts below every other coordinate but is never adjacent to one.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Coordinate {
    Null,
    NegativeInfinity,
    Finite(Value),
    PositiveInfinity,
}

impl Coordinate {
    const fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::NegativeInfinity => 1,
            Self::Finite(_) => 2,
            Self::PositiveInfinity => 3,
        }
    }

    #[must_use]
    pub const fn is_infinite(&self) -> bool {
        matches!(self, Self::NegativeInfinity | Self::PositiveInfinity)
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Finite value carried by this coordinate, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        match self {
            Self::Finite(value) => Some(value),
            _ => None,
        }
    }

    /// Total order over coordinates; finite values defer to the domain.
    #[must_use]
    pub fn compare(&self, other: &Self, domain: DomainRef<'_>) -> Ordering {
        match (self, other) {
            (Self::Finite(left), Self::Finite(right)) => domain.compare(left, right),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::NegativeInfinity => f.write_str("-infinity"),
            Self::Finite(value) => write!(f, "{value}"),
            Self::PositiveInfinity => f.write_str("+infinity"),
        }
    }
}
