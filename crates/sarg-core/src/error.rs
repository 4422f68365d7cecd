use std::fmt;
use thiserror::Error as ThisError;

///
/// SargError
///
/// Structured construction-contract error with a stable classification.
/// Raised for malformed trees and out-of-domain literals; evaluation of a
/// well-formed tree never produces one.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{message}")]
pub struct SargError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl SargError {
    /// Construct a SargError from its classification and message.
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
        }
    }

    /// Construct a domain-origin error for a literal the domain cannot admit.
    pub(crate) fn domain_unsupported(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Unsupported, ErrorOrigin::Domain, message)
    }

    /// Construct an endpoint-origin invariant violation.
    pub(crate) fn endpoint_invariant(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::InvariantViolation, ErrorOrigin::Endpoint, message)
    }

    /// Construct a set-expression invariant violation.
    pub(crate) fn set_invariant(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::InvariantViolation, ErrorOrigin::SetExpr, message)
    }

    /// Construct a standardized cross-domain mixing error.
    pub(crate) fn domain_mismatch(expected: &str, found: &str) -> Self {
        Self::set_invariant(format!(
            "sarg child domain mismatch: expected '{expected}', found '{found}'"
        ))
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

///
/// ErrorClass
/// Error taxonomy for caller-side classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Unsupported,
    InvariantViolation,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unsupported => "unsupported",
            Self::InvariantViolation => "invariant_violation",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Origin taxonomy: which construction surface rejected the input.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Domain,
    Endpoint,
    SetExpr,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Domain => "domain",
            Self::Endpoint => "endpoint",
            Self::SetExpr => "set_expr",
        };
        write!(f, "{label}")
    }
}
