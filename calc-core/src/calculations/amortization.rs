//! Fixed-payment loan amortization.
//!
//! The monthly payment uses the standard annuity formula
//!
//! ```text
//! M = P × r(1 + r)^n / ((1 + r)^n − 1)
//! ```
//!
//! where `P` is the principal, `r` the monthly rate (annual percentage / 100 / 12)
//! and `n` the number of monthly periods. An interest-free loan is repaid in
//! equal slices of `P / n`.
//!
//! Each period's interest is charged on the opening balance; the rest of the
//! payment retires principal. Once the balance drops below one cent it is
//! set to zero, absorbing the rounding drift of the last period.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use calc_core::{AmortizationEngine, LoanInputs};
//! use calc_core::calculations::common::round_half_up;
//!
//! let schedule = AmortizationEngine::default()
//!     .compute_amortization(&LoanInputs::new(dec!(250000), dec!(3.5), dec!(30)))
//!     .unwrap();
//!
//! assert_eq!(schedule.period_count(), 360);
//! assert_eq!(round_half_up(schedule.monthly_payment), dec!(1122.61));
//! assert_eq!(round_half_up(schedule.total_interest), dec!(154140.22));
//! assert_eq!(schedule.final_balance(), dec!(0));
//! ```

use std::iter::FusedIterator;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use tracing::{debug, warn};

use crate::error::InvalidInputError;
use crate::models::{AmortizationPeriod, AmortizationSchedule, LoanInputs};

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

/// Balances below this are treated as fully repaid.
pub const DEFAULT_BALANCE_TOLERANCE: Decimal = dec!(0.01);

/// Builds amortization schedules for fixed-rate monthly loans.
#[derive(Debug, Clone)]
pub struct AmortizationEngine {
    balance_tolerance: Decimal,
}

impl Default for AmortizationEngine {
    fn default() -> Self {
        Self {
            balance_tolerance: DEFAULT_BALANCE_TOLERANCE,
        }
    }
}

impl AmortizationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `inputs` and derives the monthly payment without walking the
    /// schedule.
    ///
    /// # Errors
    ///
    /// * [`InvalidInputError::NonPositiveAmount`] if principal or term is zero or less.
    /// * [`InvalidInputError::NegativeAmount`] if the rate is negative.
    /// * [`InvalidInputError::FractionalTerm`] if the term is not a whole number of months.
    /// * [`InvalidInputError::Overflow`] if the payment or the lifetime totals
    ///   cannot be represented.
    pub fn plan(
        &self,
        inputs: &LoanInputs,
    ) -> Result<PaymentPlan, InvalidInputError> {
        if inputs.principal <= Decimal::ZERO {
            return Err(InvalidInputError::NonPositiveAmount {
                field: "principal",
                value: inputs.principal,
            });
        }
        if inputs.annual_rate_percent < Decimal::ZERO {
            return Err(InvalidInputError::NegativeAmount {
                field: "annual rate",
                value: inputs.annual_rate_percent,
            });
        }
        if inputs.term_years <= Decimal::ZERO {
            return Err(InvalidInputError::NonPositiveAmount {
                field: "term",
                value: inputs.term_years,
            });
        }

        let period_count = self.period_count(inputs.term_years)?;
        let monthly_rate = inputs.annual_rate_percent / PERCENT / MONTHS_PER_YEAR;
        let monthly_payment = self.monthly_payment(inputs.principal, monthly_rate, period_count)?;
        let total_payment = monthly_payment
            .checked_mul(Decimal::from(period_count))
            .ok_or(InvalidInputError::Overflow("total payment"))?;
        let total_interest = total_payment
            .checked_sub(inputs.principal)
            .ok_or(InvalidInputError::Overflow("total interest"))?;

        debug!(
            principal = %inputs.principal,
            %monthly_rate,
            period_count,
            %monthly_payment,
            "planned loan"
        );

        Ok(PaymentPlan {
            principal: inputs.principal,
            monthly_rate,
            period_count,
            monthly_payment,
            total_payment,
            total_interest,
            balance_tolerance: self.balance_tolerance,
        })
    }

    /// Computes the payment summary and the full per-month schedule.
    ///
    /// # Errors
    ///
    /// Same as [`AmortizationEngine::plan`].
    pub fn compute_amortization(
        &self,
        inputs: &LoanInputs,
    ) -> Result<AmortizationSchedule, InvalidInputError> {
        let plan = self.plan(inputs)?;

        Ok(AmortizationSchedule {
            monthly_payment: plan.monthly_payment,
            total_payment: plan.total_payment(),
            total_interest: plan.total_interest(),
            periods: plan.periods().collect(),
        })
    }

    /// Number of monthly periods in `term_years`, which must be whole.
    fn period_count(
        &self,
        term_years: Decimal,
    ) -> Result<u32, InvalidInputError> {
        let months = term_years
            .checked_mul(MONTHS_PER_YEAR)
            .ok_or(InvalidInputError::Overflow("loan term"))?;
        if !months.fract().is_zero() {
            return Err(InvalidInputError::FractionalTerm(term_years));
        }
        months
            .to_u32()
            .ok_or(InvalidInputError::Overflow("loan term"))
    }

    /// Level payment that retires `principal` over `period_count` months.
    fn monthly_payment(
        &self,
        principal: Decimal,
        monthly_rate: Decimal,
        period_count: u32,
    ) -> Result<Decimal, InvalidInputError> {
        let straight_line = principal / Decimal::from(period_count);
        if monthly_rate.is_zero() {
            return Ok(straight_line);
        }

        let growth = (Decimal::ONE + monthly_rate)
            .checked_powu(u64::from(period_count))
            .ok_or(InvalidInputError::Overflow("monthly payment"))?;
        // Rates too small to register in 28 digits behave like no interest.
        if growth == Decimal::ONE {
            return Ok(straight_line);
        }

        monthly_rate
            .checked_mul(growth)
            .and_then(|factor| principal.checked_mul(factor))
            .and_then(|numerator| numerator.checked_div(growth - Decimal::ONE))
            .ok_or(InvalidInputError::Overflow("monthly payment"))
    }
}

/// A validated loan with its level payment, ready to be walked period by period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentPlan {
    principal: Decimal,
    monthly_rate: Decimal,
    period_count: u32,
    monthly_payment: Decimal,
    total_payment: Decimal,
    total_interest: Decimal,
    balance_tolerance: Decimal,
}

impl PaymentPlan {
    pub fn principal(&self) -> Decimal {
        self.principal
    }

    pub fn monthly_rate(&self) -> Decimal {
        self.monthly_rate
    }

    pub fn period_count(&self) -> u32 {
        self.period_count
    }

    pub fn monthly_payment(&self) -> Decimal {
        self.monthly_payment
    }

    pub fn total_payment(&self) -> Decimal {
        self.total_payment
    }

    pub fn total_interest(&self) -> Decimal {
        self.total_interest
    }

    /// Iterates the schedule from month 1 to the last month.
    pub fn periods(&self) -> Periods<'_> {
        Periods {
            plan: self,
            next_index: 1,
            balance: self.principal,
        }
    }
}

/// Iterator over the months of a [`PaymentPlan`].
#[derive(Debug, Clone)]
pub struct Periods<'a> {
    plan: &'a PaymentPlan,
    next_index: u32,
    balance: Decimal,
}

impl Iterator for Periods<'_> {
    type Item = AmortizationPeriod;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_index > self.plan.period_count {
            return None;
        }
        let index = self.next_index;
        self.next_index += 1;

        // The balance never exceeds the principal, so these stay below the
        // checked payment.
        let interest_portion = self.balance * self.plan.monthly_rate;
        let principal_portion = self.plan.monthly_payment - interest_portion;
        let mut remaining_balance = self.balance - principal_portion;

        if remaining_balance < self.plan.balance_tolerance {
            if remaining_balance <= -self.plan.balance_tolerance {
                warn!(
                    index,
                    %remaining_balance,
                    "schedule overpaid by more than the balance tolerance"
                );
            }
            remaining_balance = Decimal::ZERO;
        }
        self.balance = remaining_balance;

        Some(AmortizationPeriod {
            index,
            payment: self.plan.monthly_payment,
            principal_portion,
            interest_portion,
            remaining_balance,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining =
            (self.plan.period_count as usize + 1).saturating_sub(self.next_index as usize);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Periods<'_> {}

impl FusedIterator for Periods<'_> {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::calculations::common::round_half_up;

    fn loan(
        principal: Decimal,
        rate: Decimal,
        years: Decimal,
    ) -> LoanInputs {
        LoanInputs::new(principal, rate, years)
    }

    fn assert_close(
        actual: Decimal,
        expected: Decimal,
        tolerance: Decimal,
    ) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected} ± {tolerance}, got {actual}"
        );
    }

    // =========================================================================
    // validation tests
    // =========================================================================

    #[test]
    fn plan_rejects_zero_principal() {
        let engine = AmortizationEngine::new();

        let result = engine.plan(&loan(dec!(0), dec!(5), dec!(10)));

        assert_eq!(
            result,
            Err(InvalidInputError::NonPositiveAmount {
                field: "principal",
                value: dec!(0),
            })
        );
    }

    #[test]
    fn plan_rejects_negative_term() {
        let engine = AmortizationEngine::new();

        let result = engine.plan(&loan(dec!(1000), dec!(5), dec!(-1)));

        assert_eq!(
            result,
            Err(InvalidInputError::NonPositiveAmount {
                field: "term",
                value: dec!(-1),
            })
        );
    }

    #[test]
    fn plan_rejects_negative_rate() {
        let engine = AmortizationEngine::new();

        let result = engine.plan(&loan(dec!(1000), dec!(-0.5), dec!(1)));

        assert_eq!(
            result,
            Err(InvalidInputError::NegativeAmount {
                field: "annual rate",
                value: dec!(-0.5),
            })
        );
    }

    #[test]
    fn plan_rejects_fractional_months() {
        let engine = AmortizationEngine::new();

        let result = engine.plan(&loan(dec!(1000), dec!(5), dec!(1.3)));

        assert_eq!(result, Err(InvalidInputError::FractionalTerm(dec!(1.3))));
    }

    #[test]
    fn plan_accepts_fractional_years_covering_whole_months() {
        let engine = AmortizationEngine::new();

        let plan = engine.plan(&loan(dec!(1000), dec!(6), dec!(2.5))).unwrap();

        assert_eq!(plan.period_count(), 30);
        assert_eq!(plan.principal(), dec!(1000));
        assert_eq!(plan.monthly_rate(), dec!(0.005));
    }

    #[test]
    fn plan_reports_overflow_of_lifetime_total() {
        let engine = AmortizationEngine::new();

        // The payment fits, but 360 of them do not.
        let result = engine.plan(&loan(dec!(70000000000000000000000000000), dec!(1), dec!(30)));

        assert_eq!(result, Err(InvalidInputError::Overflow("total payment")));
    }

    // =========================================================================
    // monthly_payment tests
    // =========================================================================

    #[test]
    fn monthly_payment_without_interest_is_straight_line() {
        let engine = AmortizationEngine::new();

        let payment = engine.monthly_payment(dec!(1200), dec!(0), 12).unwrap();

        assert_eq!(payment, dec!(100));
    }

    #[test]
    fn monthly_payment_one_percent_per_month() {
        let engine = AmortizationEngine::new();

        let payment = engine.monthly_payment(dec!(1000), dec!(0.01), 12).unwrap();

        assert_eq!(round_half_up(payment), dec!(88.85));
    }

    #[test]
    fn monthly_payment_reports_overflow() {
        let engine = AmortizationEngine::new();

        let result = engine.monthly_payment(dec!(1000), dec!(10), 1200);

        assert_eq!(result, Err(InvalidInputError::Overflow("monthly payment")));
    }

    // =========================================================================
    // schedule tests
    // =========================================================================

    #[test]
    fn first_period_charges_interest_on_full_principal() {
        let engine = AmortizationEngine::new();
        let plan = engine.plan(&loan(dec!(1000), dec!(12), dec!(1))).unwrap();

        let first = plan.periods().next().unwrap();

        assert_eq!(first.index, 1);
        assert_eq!(first.interest_portion, dec!(10));
        assert_eq!(round_half_up(first.principal_portion), dec!(78.85));
        assert_eq!(round_half_up(first.remaining_balance), dec!(921.15));
    }

    #[test]
    fn periods_are_numbered_from_one() {
        let engine = AmortizationEngine::new();
        let plan = engine.plan(&loan(dec!(5000), dec!(6), dec!(2))).unwrap();

        let indices: Vec<u32> = plan.periods().map(|p| p.index).collect();

        assert_eq!(indices, (1..=24).collect::<Vec<_>>());
    }

    #[test]
    fn periods_report_exact_size() {
        let engine = AmortizationEngine::new();
        let plan = engine.plan(&loan(dec!(5000), dec!(6), dec!(2))).unwrap();
        let mut periods = plan.periods();

        assert_eq!(periods.len(), 24);
        periods.next();
        assert_eq!(periods.len(), 23);
    }

    #[test]
    fn balances_decrease_every_month() {
        let engine = AmortizationEngine::new();
        let schedule = engine
            .compute_amortization(&loan(dec!(20000), dec!(7.25), dec!(5)))
            .unwrap();

        assert!(
            schedule
                .periods
                .windows(2)
                .all(|p| p[1].remaining_balance < p[0].remaining_balance)
        );
    }

    #[test]
    fn interest_share_shrinks_over_time() {
        let engine = AmortizationEngine::new();
        let schedule = engine
            .compute_amortization(&loan(dec!(250000), dec!(3.5), dec!(30)))
            .unwrap();

        let first = schedule.periods.first().unwrap();
        let last = schedule.periods.last().unwrap();

        assert!(first.interest_portion > first.principal_portion);
        assert!(last.interest_portion < last.principal_portion);
    }

    #[test]
    fn thirty_year_mortgage_matches_formula() {
        let engine = AmortizationEngine::new();

        let schedule = engine
            .compute_amortization(&loan(dec!(250000), dec!(3.5), dec!(30)))
            .unwrap();

        assert_eq!(schedule.period_count(), 360);
        assert_close(schedule.monthly_payment, dec!(1122.61), dec!(0.01));
        assert_close(schedule.total_interest, dec!(154140.22), dec!(0.01));
        assert_close(
            schedule.total_payment,
            schedule.monthly_payment * dec!(360),
            dec!(0),
        );
    }

    #[test]
    fn final_balance_is_exactly_zero() {
        let engine = AmortizationEngine::new();

        let schedule = engine
            .compute_amortization(&loan(dec!(250000), dec!(3.5), dec!(30)))
            .unwrap();

        assert_eq!(schedule.final_balance(), Decimal::ZERO);
    }

    #[test]
    fn principal_portions_sum_to_principal() {
        let engine = AmortizationEngine::new();

        let schedule = engine
            .compute_amortization(&loan(dec!(250000), dec!(3.5), dec!(30)))
            .unwrap();

        assert_close(schedule.total_principal_paid(), dec!(250000), dec!(0.01));
    }

    #[test]
    fn interest_free_loan() {
        let engine = AmortizationEngine::new();

        let schedule = engine
            .compute_amortization(&loan(dec!(1200), dec!(0), dec!(1)))
            .unwrap();

        assert_eq!(schedule.monthly_payment, dec!(100));
        assert_eq!(schedule.total_interest, dec!(0));
        assert!(schedule.periods.iter().all(|p| p.interest_portion.is_zero()));
        assert_eq!(schedule.periods[5].remaining_balance, dec!(600));
        assert_eq!(schedule.final_balance(), dec!(0));
    }

    #[test]
    fn half_year_interest_free_loan() {
        let engine = AmortizationEngine::new();

        let schedule = engine
            .compute_amortization(&loan(dec!(600), dec!(0), dec!(0.5)))
            .unwrap();

        assert_eq!(schedule.period_count(), 6);
        assert_eq!(schedule.monthly_payment, dec!(100));
        assert_eq!(schedule.final_balance(), dec!(0));
    }
}
