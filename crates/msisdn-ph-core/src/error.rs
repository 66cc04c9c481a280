use crate::domain::operator::Operator;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("the supplied mobile number is invalid: {raw:?}")]
    InvalidMsisdn { raw: String },
    #[error("invalid operator prefix: {0:?}")]
    InvalidPrefix(String),
    #[error("prefix {prefix:?} is assigned to both {first} and {second}")]
    OverlappingPrefix {
        prefix: String,
        first: Operator,
        second: Operator,
    },
    #[error("prefix lists may not be keyed by the unknown operator")]
    UnknownOperatorEntry,
}

impl CoreError {
    /// Status-like code for callers that map errors to HTTP semantics.
    pub fn status_code(&self) -> u16 {
        400
    }
}
