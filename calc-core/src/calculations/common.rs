//! Common utility functions for tax and loan calculations.
//!
//! Rounding for display, clamping, and conversion of floating-point inputs.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::error::InvalidInputError;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero. The engines keep full
/// precision; this is for presenting results in cents.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(1122.6117195)), dec!(1122.61));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::calculations::common::max;
///
/// assert_eq!(max(dec!(-4600.00), dec!(0)), dec!(0));
/// assert_eq!(max(dec!(35400.00), dec!(0)), dec!(35400.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Converts a floating-point input into a [`Decimal`].
///
/// # Errors
///
/// * [`InvalidInputError::NonFinite`] for NaN and infinities.
/// * [`InvalidInputError::Overflow`] for finite values beyond `Decimal`'s range.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::InvalidInputError;
/// use calc_core::calculations::common::finite_decimal;
///
/// assert_eq!(finite_decimal("principal", 1200.0), Ok(dec!(1200)));
/// assert_eq!(
///     finite_decimal("principal", f64::NAN),
///     Err(InvalidInputError::NonFinite { field: "principal" })
/// );
/// ```
pub fn finite_decimal(
    field: &'static str,
    value: f64,
) -> Result<Decimal, InvalidInputError> {
    if !value.is_finite() {
        return Err(InvalidInputError::NonFinite { field });
    }
    Decimal::from_f64(value).ok_or(InvalidInputError::Overflow(field))
}
