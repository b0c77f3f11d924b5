use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::finite_decimal;
use crate::error::InvalidInputError;

/// Terms of a fixed-rate loan repaid monthly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanInputs {
    pub principal: Decimal,
    /// Annual interest rate as a percentage (3.5 means 3.5%).
    pub annual_rate_percent: Decimal,
    /// Loan term in years. Must cover a whole number of months.
    pub term_years: Decimal,
}

impl LoanInputs {
    pub fn new(
        principal: Decimal,
        annual_rate_percent: Decimal,
        term_years: Decimal,
    ) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_years,
        }
    }

    /// Builds inputs from floating-point values, rejecting NaN and infinities.
    ///
    /// Range checks happen later, in the engine.
    pub fn from_f64(
        principal: f64,
        annual_rate_percent: f64,
        term_years: f64,
    ) -> Result<Self, InvalidInputError> {
        Ok(Self {
            principal: finite_decimal("principal", principal)?,
            annual_rate_percent: finite_decimal("annual rate", annual_rate_percent)?,
            term_years: finite_decimal("term", term_years)?,
        })
    }
}

/// One month of an amortization schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationPeriod {
    /// 1-based month number.
    pub index: u32,
    pub payment: Decimal,
    pub principal_portion: Decimal,
    pub interest_portion: Decimal,
    pub remaining_balance: Decimal,
}

/// Full repayment schedule of a loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub monthly_payment: Decimal,
    pub total_payment: Decimal,
    pub total_interest: Decimal,
    pub periods: Vec<AmortizationPeriod>,
}

impl AmortizationSchedule {
    pub fn period_count(&self) -> usize {
        self.periods.len()
    }

    /// Balance after the last payment; zero for any schedule the engine builds.
    pub fn final_balance(&self) -> Decimal {
        self.periods
            .last()
            .map_or(Decimal::ZERO, |p| p.remaining_balance)
    }

    pub fn total_principal_paid(&self) -> Decimal {
        self.periods.iter().map(|p| p.principal_portion).sum()
    }
}
