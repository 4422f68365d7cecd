use crate::{
    domain::{Domain, DomainRef},
    error::SargError,
    sarg::{SargEndpoint, SargExpr, SargIntervalExpr, SargSetExpr, SetOperator},
    value::Value,
};

///
/// SargFactory
///
/// Entry point for building search arguments over one domain.
///
/// Every endpoint, interval and set borrows the factory, so nothing it
/// creates can outlive it. The factory itself is read-only and can be
/// shared across threads when the domain can.
///

#[derive(Clone, Debug, Default)]
pub struct SargFactory<D: Domain> {
    domain: D,
}

impl<D: Domain> SargFactory<D> {
    #[must_use]
    pub const fn new(domain: D) -> Self {
        Self { domain }
    }

    #[must_use]
    pub const fn domain(&self) -> &D {
        &self.domain
    }

    #[must_use]
    pub fn domain_ref(&self) -> DomainRef<'_> {
        DomainRef::new(&self.domain)
    }

    ///
    /// CONSTRUCTORS
    ///

    /// New endpoint at negative infinity.
    #[must_use]
    pub fn new_endpoint(&self) -> SargEndpoint<'_> {
        SargEndpoint::new(self.domain_ref())
    }

    /// New unconstrained interval.
    #[must_use]
    pub fn new_interval_expr(&self) -> SargIntervalExpr<'_> {
        SargIntervalExpr::new(self.domain_ref())
    }

    /// New set expression with no children.
    #[must_use]
    pub fn new_set_expr(&self, op: SetOperator) -> SargSetExpr<'_> {
        SargSetExpr::new(self.domain_ref(), op)
    }

    #[must_use]
    pub const fn new_null_literal(&self) -> Value {
        Value::Null
    }

    /// Check that a literal can bound an interval of this domain.
    ///
    /// The literal is returned as given; rounding onto a discrete domain
    /// happens when it is installed in an endpoint.
    pub fn new_literal(&self, literal: impl Into<Value>) -> Result<Value, SargError> {
        let literal = literal.into();
        if !literal.is_null() {
            self.domain.admit(&literal)?;
        }

        Ok(literal)
    }

    ///
    /// SHORTHANDS
    ///

    /// Interval holding exactly one value.
    pub fn point(&self, literal: impl Into<Value>) -> Result<SargIntervalExpr<'_>, SargError> {
        let mut term = self.new_interval_expr();
        term.set_point(&literal.into())?;

        Ok(term)
    }

    /// Interval matching only the null marker.
    #[must_use]
    pub fn null(&self) -> SargIntervalExpr<'_> {
        let mut term = self.new_interval_expr();
        term.set_null();

        term
    }

    #[must_use]
    pub fn empty(&self) -> SargIntervalExpr<'_> {
        let mut term = self.new_interval_expr();
        term.set_empty();

        term
    }

    pub fn union<'f, I>(&'f self, children: I) -> Result<SargSetExpr<'f>, SargError>
    where
        I: IntoIterator,
        I::Item: Into<SargExpr<'f>>,
    {
        self.set_of(SetOperator::Union, children)
    }

    pub fn intersection<'f, I>(&'f self, children: I) -> Result<SargSetExpr<'f>, SargError>
    where
        I: IntoIterator,
        I::Item: Into<SargExpr<'f>>,
    {
        self.set_of(SetOperator::Intersection, children)
    }

    pub fn complement<'f>(
        &'f self,
        child: impl Into<SargExpr<'f>>,
    ) -> Result<SargSetExpr<'f>, SargError> {
        self.set_of(SetOperator::Complement, [child])
    }

    fn set_of<'f, I>(&'f self, op: SetOperator, children: I) -> Result<SargSetExpr<'f>, SargError>
    where
        I: IntoIterator,
        I::Item: Into<SargExpr<'f>>,
    {
        let mut set = self.new_set_expr(op);
        for child in children {
            set.add_child(child)?;
        }

        Ok(set)
    }
}
