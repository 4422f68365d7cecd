use crate::{
    domain::DomainRef,
    error::SargError,
    obs::sink::{self, EvalKind, MetricsEvent},
    sarg::{SargIntervalExpr, SargIntervalSequence, SargSetExpr},
};
use derive_more::From;
use std::fmt;

///
/// SargExpr
///
/// Node of a search-argument tree: an interval leaf or a set operator.
///

#[derive(Clone, Debug, Eq, From, PartialEq)]
pub enum SargExpr<'a> {
    Interval(SargIntervalExpr<'a>),
    Set(SargSetExpr<'a>),
}

impl<'a> SargExpr<'a> {
    #[must_use]
    pub const fn domain(&self) -> DomainRef<'a> {
        match self {
            Self::Interval(term) => term.domain(),
            Self::Set(set) => set.domain(),
        }
    }

    /// Evaluate into canonical form.
    pub fn evaluate(&self) -> Result<Self, SargError> {
        Ok(self.evaluate_sequence()?.into_expr())
    }

    /// Evaluate into the canonical interval sequence.
    pub fn evaluate_sequence(&self) -> Result<SargIntervalSequence<'a>, SargError> {
        match self {
            Self::Interval(term) => Ok(SargIntervalSequence::from_terms(
                term.domain(),
                vec![term.evaluate()],
            )),
            Self::Set(set) => set.evaluate_sequence(),
        }
    }

    /// Evaluate the complement of this expression into canonical form.
    pub fn evaluate_complemented(&self) -> Result<Self, SargError> {
        let sequence = self.evaluate_sequence()?;
        sink::record(MetricsEvent::Evaluate {
            kind: EvalKind::Complement,
        });

        let complement = sequence.complement();
        if complement.is_empty() {
            sink::record(MetricsEvent::EmptyResult);
        }

        Ok(complement.into_expr())
    }
}

impl fmt::Display for SargExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interval(term) => write!(f, "{term}"),
            Self::Set(set) => write!(f, "{set}"),
        }
    }
}
