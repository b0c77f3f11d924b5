use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FilingStatus;
use crate::calculations::common::finite_decimal;
use crate::error::InvalidInputError;

/// Filer attributes for one tax calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInputs {
    /// Gross annual wages. Must not be negative.
    pub annual_income: Decimal,
    pub filing_status: FilingStatus,

    /// Two-letter state code. Carried for display only; the state tax is a
    /// flat placeholder rate.
    pub state: String,

    /// Number of dependents. Reserved; does not affect the result.
    pub dependents: u32,
    pub age: u32,
    pub blind: bool,
}

impl TaxInputs {
    /// Inputs for a sighted filer with no dependents and no state.
    pub fn new(
        annual_income: Decimal,
        filing_status: FilingStatus,
    ) -> Self {
        Self {
            annual_income,
            filing_status,
            state: String::new(),
            dependents: 0,
            age: 0,
            blind: false,
        }
    }

    /// Like [`TaxInputs::new`] but takes the income as an `f64`.
    ///
    /// # Errors
    ///
    /// [`InvalidInputError::NonFinite`] when `annual_income` is NaN or infinite.
    pub fn from_f64_income(
        annual_income: f64,
        filing_status: FilingStatus,
    ) -> Result<Self, InvalidInputError> {
        let annual_income = finite_decimal("annual income", annual_income)?;
        Ok(Self::new(annual_income, filing_status))
    }

    pub fn with_state(
        mut self,
        state: impl Into<String>,
    ) -> Self {
        self.state = state.into();
        self
    }

    pub fn with_dependents(
        mut self,
        dependents: u32,
    ) -> Self {
        self.dependents = dependents;
        self
    }

    pub fn with_age(
        mut self,
        age: u32,
    ) -> Self {
        self.age = age;
        self
    }

    pub fn with_blindness(
        mut self,
        blind: bool,
    ) -> Self {
        self.blind = blind;
        self
    }
}

/// Output of [`BracketTaxEngine::compute_tax`](crate::BracketTaxEngine::compute_tax).
///
/// All amounts are unrounded; rates are percentages (22 means 22%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationResult {
    pub gross_income: Decimal,
    /// Part of the standard deduction applied, never more than gross income.
    pub standard_deduction: Decimal,
    pub taxable_income: Decimal,
    pub federal_tax: Decimal,
    pub state_tax: Decimal,
    pub social_security_tax: Decimal,
    pub medicare_tax: Decimal,
    pub total_tax: Decimal,
    pub net_income: Decimal,
    pub effective_rate: Decimal,
    pub marginal_rate: Decimal,
}
