use crate::{
    domain::{Admission, Domain},
    error::SargError,
    types::Decimal,
    value::{CoercionFamily, Value},
};

///
/// ScalarDomain
///
/// Built-in domains over the scalar literal variants.
/// Integer-typed domains are discrete; Decimal and Text are continuous.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScalarDomain {
    Bool,
    Decimal,
    Int,
    Text,
    Uint,
}

impl ScalarDomain {
    const fn family(self) -> CoercionFamily {
        match self {
            Self::Bool => CoercionFamily::Bool,
            Self::Decimal | Self::Int | Self::Uint => CoercionFamily::Numeric,
            Self::Text => CoercionFamily::Textual,
        }
    }

    fn admit_int(literal: &Value) -> Result<Admission, SargError> {
        match literal {
            Value::Int(i) => Ok(Admission::Member(Value::Int(*i))),
            Value::Uint(u) => i64::try_from(*u)
                .map(|i| Admission::Member(Value::Int(i)))
                .map_err(|_| out_of_range("int", literal)),
            Value::Decimal(d) => admit_decimal_rounded(*d, "int", literal, |d| {
                d.to_i64().map(Value::Int)
            }),
            _ => Err(family_mismatch("int", literal)),
        }
    }

    fn admit_uint(literal: &Value) -> Result<Admission, SargError> {
        match literal {
            Value::Uint(u) => Ok(Admission::Member(Value::Uint(*u))),
            Value::Int(i) => u64::try_from(*i)
                .map(|u| Admission::Member(Value::Uint(u)))
                .map_err(|_| out_of_range("uint", literal)),
            Value::Decimal(d) => admit_decimal_rounded(*d, "uint", literal, |d| {
                d.to_u64().map(Value::Uint)
            }),
            _ => Err(family_mismatch("uint", literal)),
        }
    }
}

impl Domain for ScalarDomain {
    fn name(&self) -> &str {
        match self {
            Self::Bool => "bool",
            Self::Decimal => "decimal",
            Self::Int => "int",
            Self::Text => "text",
            Self::Uint => "uint",
        }
    }

    fn is_discrete(&self) -> bool {
        matches!(self, Self::Bool | Self::Int | Self::Uint)
    }

    fn admit(&self, literal: &Value) -> Result<Admission, SargError> {
        if literal.is_null() {
            return Err(SargError::domain_unsupported(format!(
                "null literal cannot be admitted into domain '{}'",
                self.name()
            )));
        }
        if literal.coercion_family() != self.family() {
            return Err(family_mismatch(self.name(), literal));
        }

        match self {
            Self::Bool | Self::Text => Ok(Admission::Member(literal.clone())),
            Self::Decimal => literal
                .to_decimal()
                .map(|d| Admission::Member(Value::Decimal(d)))
                .ok_or_else(|| family_mismatch("decimal", literal)),
            Self::Int => Self::admit_int(literal),
            Self::Uint => Self::admit_uint(literal),
        }
    }
}

// Round a decimal literal onto an integer domain.
// Integral decimals are members; anything else rounds up to its ceiling.
fn admit_decimal_rounded(
    decimal: Decimal,
    domain: &str,
    literal: &Value,
    convert: impl Fn(Decimal) -> Option<Value>,
) -> Result<Admission, SargError> {
    if decimal.is_integral() {
        return convert(decimal)
            .map(Admission::Member)
            .ok_or_else(|| out_of_range(domain, literal));
    }

    convert(decimal.ceil())
        .map(Admission::Ceiling)
        .ok_or_else(|| out_of_range(domain, literal))
}

fn family_mismatch(domain: &str, literal: &Value) -> SargError {
    SargError::domain_unsupported(format!(
        "literal {literal} does not belong to domain '{domain}'"
    ))
}

fn out_of_range(domain: &str, literal: &Value) -> SargError {
    SargError::domain_unsupported(format!(
        "literal {literal} is out of range for domain '{domain}'"
    ))
}
