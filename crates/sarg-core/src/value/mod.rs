mod compare;
mod family;

#[cfg(test)]
mod tests;

use crate::types::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// re-exports
pub use compare::canonical_cmp;
pub use family::CoercionFamily;

///
/// Value
/// literal bound handed to the algebra by the predicate-analysis collaborator
///
/// Null        → SQL NULL; becomes the null coordinate, never a finite one.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Value {
    Bool(bool),
    Decimal(Decimal),
    Int(i64),
    Null,
    Text(String),
    Uint(u64),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the coercion-routing family for this value.
    #[must_use]
    pub const fn coercion_family(&self) -> CoercionFamily {
        match self {
            Self::Bool(_) => CoercionFamily::Bool,
            Self::Decimal(_) | Self::Int(_) | Self::Uint(_) => CoercionFamily::Numeric,
            Self::Null => CoercionFamily::Null,
            Self::Text(_) => CoercionFamily::Textual,
        }
    }

    /// Numeric view used for cross-variant numeric admission.
    #[must_use]
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Decimal(d) => Some(*d),
            Self::Int(i) => Some(Decimal::from(*i)),
            Self::Uint(u) => Some(Decimal::from(*u)),
            _ => None,
        }
    }

    /// Stable variant rank used for cross-variant ordering.
    #[must_use]
    pub(crate) const fn canonical_rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Decimal(_) => 2,
            Self::Int(_) => 3,
            Self::Text(_) => 4,
            Self::Uint(_) => 5,
        }
    }
}

// Literals render the way explain output quotes them: text single-quoted
// with embedded quotes doubled, everything else bare.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Decimal(d) => write!(f, "{d}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Null => f.write_str("null"),
            Self::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Self::Uint(u) => write!(f, "{u}"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Self::Decimal(d)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Self::Uint(u)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
