//! Error types.

use core::fmt;

/// Error type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Division by the zero element, which has no multiplicative inverse.
    DivisionByZero,

    /// Encoded integer is not less than the field modulus.
    Overflow,

    /// Encoded field element is not exactly 32 bytes.
    InvalidLength,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DivisionByZero => write!(f, "field error: division by zero"),
            Error::Overflow => write!(f, "field error: value overflows modulus"),
            Error::InvalidLength => write!(f, "field error: invalid encoding length"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
