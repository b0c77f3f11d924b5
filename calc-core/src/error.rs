use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when a calculation is handed input it cannot work with.
///
/// Both engines return one of these instead of a partially filled result.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidInputError {
    /// A floating-point input was NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    /// An amount that must be zero or more was negative.
    #[error("{field} must not be negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    /// An amount that must be strictly positive was zero or negative.
    #[error("{field} must be greater than zero, got {value}")]
    NonPositiveAmount { field: &'static str, value: Decimal },

    /// The loan term does not convert to a whole number of monthly periods.
    #[error("loan term of {0} years is not a whole number of months")]
    FractionalTerm(Decimal),

    /// A filing status string did not match any known status.
    #[error("unknown filing status '{0}'")]
    UnknownFilingStatus(String),

    /// An intermediate value does not fit in a decimal.
    #[error("{0} is out of range for decimal arithmetic")]
    Overflow(&'static str),
}
