use crate::value::Value;
use std::ops::{BitAnd, BitOr, Not};

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum CompareOp {
    Eq = 0x01,
    Ne = 0x02,
    Lt = 0x03,
    Lte = 0x04,
    Gt = 0x05,
    Gte = 0x06,
}

impl CompareOp {
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Operator whose result is the logical negation of this one for any
    /// two non-null operands.
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Self::Eq => Self::Ne,
            Self::Ne => Self::Eq,
            Self::Lt => Self::Gte,
            Self::Lte => Self::Gt,
            Self::Gt => Self::Lte,
            Self::Gte => Self::Lt,
        }
    }
}

///
/// ComparePredicate
///
/// `column <op> literal`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ComparePredicate {
    pub op: CompareOp,
    pub value: Value,
}

impl ComparePredicate {
    #[must_use]
    pub fn new(op: CompareOp, value: impl Into<Value>) -> Self {
        Self {
            op,
            value: value.into(),
        }
    }
}

///
/// SargPredicate
///
/// Predicate over a single implicit column.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SargPredicate {
    True,
    False,
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
    Compare(ComparePredicate),
    In(Vec<Value>),
    NotIn(Vec<Value>),
    IsNull,
    IsNotNull,
}

impl SargPredicate {
    #[must_use]
    pub fn eq(value: impl Into<Value>) -> Self {
        Self::Compare(ComparePredicate::new(CompareOp::Eq, value))
    }

    #[must_use]
    pub fn ne(value: impl Into<Value>) -> Self {
        Self::Compare(ComparePredicate::new(CompareOp::Ne, value))
    }

    #[must_use]
    pub fn lt(value: impl Into<Value>) -> Self {
        Self::Compare(ComparePredicate::new(CompareOp::Lt, value))
    }

    #[must_use]
    pub fn lte(value: impl Into<Value>) -> Self {
        Self::Compare(ComparePredicate::new(CompareOp::Lte, value))
    }

    #[must_use]
    pub fn gt(value: impl Into<Value>) -> Self {
        Self::Compare(ComparePredicate::new(CompareOp::Gt, value))
    }

    #[must_use]
    pub fn gte(value: impl Into<Value>) -> Self {
        Self::Compare(ComparePredicate::new(CompareOp::Gte, value))
    }

    #[must_use]
    pub fn in_<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::In(values.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn not_in<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::NotIn(values.into_iter().map(Into::into).collect())
    }

    /// `lo <= column AND column <= hi`.
    #[must_use]
    pub fn between(lo: impl Into<Value>, hi: impl Into<Value>) -> Self {
        Self::gte(lo) & Self::lte(hi)
    }
}

impl BitAnd for SargPredicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}

impl BitOr for SargPredicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::Or(vec![self, rhs])
    }
}

impl Not for SargPredicate {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::Not(Box::new(self))
    }
}
