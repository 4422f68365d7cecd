//! Value domains: the ordered, possibly discrete value sets a search
//! argument ranges over.
//!
//! A domain decides which literals may bound an interval, how they compare,
//! and how a non-member literal is rounded onto the value set. It never
//! sees the null marker; null handling belongs to the coordinate layer.

mod scalar;


use crate::{
    error::SargError,
    value::{Value, canonical_cmp},
};
use std::{cmp::Ordering, fmt};

// re-exports
pub use scalar::ScalarDomain;

///
/// Admission
///
/// Outcome of admitting a non-null literal into a domain.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Admission {
    /// The literal (possibly re-typed) is a member of the value set.
    Member(Value),

    /// The literal falls between members; carries the smallest member
    /// greater than it. Only discrete domains produce this.
    Ceiling(Value),
}

///
/// Domain
///
/// Ordered value set bound to a factory for one search-argument analysis.
/// Implementations are read-only and shared across threads.
///

pub trait Domain: Send + Sync {
    /// Stable name used in diagnostics and cross-domain checks.
    fn name(&self) -> &str;

    /// Whether the value set is discrete (integer-like).
    fn is_discrete(&self) -> bool;

    /// Admit one non-null literal, re-typing or rounding it onto the value set.
    fn admit(&self, literal: &Value) -> Result<Admission, SargError>;

    /// Order two admitted members.
    fn compare(&self, left: &Value, right: &Value) -> Ordering {
        canonical_cmp(left, right)
    }
}

///
/// DomainRef
///
/// Borrowed handle to the domain a structure was built under.
/// Equality is by domain name; the handle never outlives its factory.
///

#[derive(Clone, Copy)]
pub struct DomainRef<'a>(&'a dyn Domain);

impl<'a> DomainRef<'a> {
    #[must_use]
    pub const fn new(domain: &'a dyn Domain) -> Self {
        Self(domain)
    }

    #[must_use]
    pub fn name(&self) -> &'a str {
        self.0.name()
    }

    #[must_use]
    pub fn is_discrete(&self) -> bool {
        self.0.is_discrete()
    }

    pub fn admit(&self, literal: &Value) -> Result<Admission, SargError> {
        self.0.admit(literal)
    }

    #[must_use]
    pub fn compare(&self, left: &Value, right: &Value) -> Ordering {
        self.0.compare(left, right)
    }

    #[must_use]
    pub fn same_domain(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl fmt::Debug for DomainRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DomainRef").field(&self.name()).finish()
    }
}

impl PartialEq for DomainRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.same_domain(other)
    }
}

impl Eq for DomainRef<'_> {}
