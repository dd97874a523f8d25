//! Error types for the fallible operations.

use thiserror::Error;

/// Fatal per-call failures: invalid arguments and formatting defects.
/// These are detected and reported at the point of the offending call;
/// nothing is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("zero cannot be raised to the zeroth power")]
    ZeroPowZero,
    #[error("logarithm of a non-positive value")]
    NonPositiveLog,
    #[error("digit extraction could not scale the value into [1, 10)")]
    CannotComputeExponent,
    #[error("digit extraction produced a non-positive leading digit")]
    NonPositiveLeadingDigit,
    #[error("re-rounding unsuccessful in the fixed-point magnitude check")]
    Rerounding,
}

/// Malformed decimal literal. Parsing externally supplied text is an
/// expected failure mode, so this is an ordinary value for the caller
/// to inspect, distinct from [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseDDoubleError {
    #[error("no mantissa digits")]
    NoDigits,
    #[error("more than one decimal point")]
    DuplicatePoint,
    #[error("sign not at the start of the literal")]
    MisplacedSign,
    #[error("malformed exponent")]
    InvalidExponent,
    #[error("unrecognized character {0:?}")]
    InvalidCharacter(char),
}
