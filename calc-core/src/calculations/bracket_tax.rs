//! Progressive-bracket income and payroll tax.
//!
//! # Calculation Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Standard deduction: base for the filing status, plus the additional amount once for age 65+ and once for blindness |
//! | 2    | Taxable income: gross income minus the deduction, minimum 0 |
//! | 3    | Federal tax: each bracket's rate applied to the slice of taxable income inside it |
//! | 4    | Social security: gross income up to the wage base × 6.2% |
//! | 5    | Medicare: gross income × 1.45%, plus 0.9% on gross income above the threshold |
//! | 6    | State tax: taxable income × flat placeholder rate |
//! | 7    | Total, net income and effective rate |
//! | 8    | Marginal rate: rate of the bracket holding the top of taxable income |
//!
//! Amounts are kept at full decimal precision. Use
//! [`round_half_up`](super::common::round_half_up) when presenting them.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use calc_core::{BracketTaxEngine, FilingStatus, TaxInputs};
//!
//! let engine = BracketTaxEngine::default();
//! let inputs = TaxInputs::new(dec!(50000), FilingStatus::Single)
//!     .with_state("CA")
//!     .with_age(30);
//!
//! let result = engine.compute_tax(&inputs).unwrap();
//!
//! assert_eq!(result.federal_tax, dec!(4016));
//! assert_eq!(result.social_security_tax, dec!(3100));
//! assert_eq!(result.medicare_tax, dec!(725));
//! assert_eq!(result.marginal_rate, dec!(12));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::calculations::common::max;
use crate::error::InvalidInputError;
use crate::models::tax_tables::federal_brackets;
use crate::models::{
    FilingStatus, StandardDeduction, TaxBracket, TaxCalculationResult, TaxInputs, TaxYearConfig,
};

const PERCENT: Decimal = dec!(100);

/// Calculator for federal, payroll and placeholder state tax.
///
/// Holds the payroll parameters; bracket schedules and standard deductions
/// come from the fixed tables in [`tax_tables`](crate::models::tax_tables).
#[derive(Debug, Clone, Default)]
pub struct BracketTaxEngine {
    config: TaxYearConfig,
}

impl BracketTaxEngine {
    /// Creates an engine with custom payroll and state parameters.
    ///
    /// The configuration is used as given; call
    /// [`TaxYearConfig::validate`] first if it comes from user input.
    pub fn new(config: TaxYearConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TaxYearConfig {
        &self.config
    }

    /// Computes every tax line for `inputs`.
    ///
    /// # Errors
    ///
    /// * [`InvalidInputError::NegativeAmount`] if `annual_income` is negative.
    /// * [`InvalidInputError::Overflow`] if a tax line does not fit in a decimal,
    ///   which takes an income near the decimal range combined with high rates.
    pub fn compute_tax(
        &self,
        inputs: &TaxInputs,
    ) -> Result<TaxCalculationResult, InvalidInputError> {
        let income = inputs.annual_income;
        if income < Decimal::ZERO {
            return Err(InvalidInputError::NegativeAmount {
                field: "annual income",
                value: income,
            });
        }

        let brackets = federal_brackets(inputs.filing_status);

        let deduction = self.standard_deduction(inputs);
        let taxable_income = self.taxable_income(income, deduction);
        let federal_tax = self.federal_tax(taxable_income, brackets);
        let social_security_tax = self.social_security_tax(income)?;
        let medicare_tax = self.medicare_tax(income, inputs.filing_status)?;
        let state_tax = self.state_tax(taxable_income)?;

        let total_tax = [state_tax, social_security_tax, medicare_tax]
            .into_iter()
            .try_fold(federal_tax, Decimal::checked_add)
            .ok_or(InvalidInputError::Overflow("total tax"))?;
        let net_income = income
            .checked_sub(total_tax)
            .ok_or(InvalidInputError::Overflow("net income"))?;
        let effective_rate = self.effective_rate(total_tax, income)?;
        let marginal_rate = self.marginal_rate(income, taxable_income, brackets);

        debug!(
            filing_status = inputs.filing_status.as_str(),
            %income,
            %taxable_income,
            %total_tax,
            "computed tax"
        );

        Ok(TaxCalculationResult {
            gross_income: income,
            standard_deduction: income - taxable_income,
            taxable_income,
            federal_tax,
            state_tax,
            social_security_tax,
            medicare_tax,
            total_tax,
            net_income,
            effective_rate,
            marginal_rate,
        })
    }

    /// Standard deduction including the age and blindness increments.
    fn standard_deduction(
        &self,
        inputs: &TaxInputs,
    ) -> Decimal {
        StandardDeduction::for_status(inputs.filing_status).amount(inputs.age, inputs.blind)
    }

    /// Calculates taxable income.
    fn taxable_income(
        &self,
        income: Decimal,
        deduction: Decimal,
    ) -> Decimal {
        max(income - deduction, Decimal::ZERO)
    }

    /// Sums each bracket's rate over the slice of income inside it.
    fn federal_tax(
        &self,
        taxable_income: Decimal,
        brackets: &[TaxBracket],
    ) -> Decimal {
        brackets
            .iter()
            .map(|b| b.income_in_bracket(taxable_income) * b.tax_rate)
            .sum()
    }

    /// Social security on gross wages up to the wage base.
    fn social_security_tax(
        &self,
        income: Decimal,
    ) -> Result<Decimal, InvalidInputError> {
        income
            .min(self.config.ss_wage_max)
            .checked_mul(self.config.ss_tax_rate)
            .ok_or(InvalidInputError::Overflow("social security tax"))
    }

    /// Medicare on all gross wages plus the surcharge above the threshold.
    fn medicare_tax(
        &self,
        income: Decimal,
        status: FilingStatus,
    ) -> Result<Decimal, InvalidInputError> {
        let overflow = InvalidInputError::Overflow("medicare tax");
        let base = income
            .checked_mul(self.config.medicare_tax_rate)
            .ok_or(overflow.clone())?;
        let threshold = self.config.additional_medicare_threshold_for(status);
        if income <= threshold {
            return Ok(base);
        }
        income
            .checked_sub(threshold)
            .and_then(|excess| excess.checked_mul(self.config.additional_medicare_rate))
            .and_then(|surcharge| base.checked_add(surcharge))
            .ok_or(overflow)
    }

    /// Flat placeholder rate on taxable income, whatever the state.
    fn state_tax(
        &self,
        taxable_income: Decimal,
    ) -> Result<Decimal, InvalidInputError> {
        taxable_income
            .checked_mul(self.config.state_tax_rate)
            .ok_or(InvalidInputError::Overflow("state tax"))
    }

    /// Total tax as a percentage of gross income; zero when there is no income.
    fn effective_rate(
        &self,
        total_tax: Decimal,
        income: Decimal,
    ) -> Result<Decimal, InvalidInputError> {
        if income <= Decimal::ZERO {
            return Ok(Decimal::ZERO);
        }
        total_tax
            .checked_div(income)
            .and_then(|share| share.checked_mul(PERCENT))
            .ok_or(InvalidInputError::Overflow("effective rate"))
    }

    /// Rate of the first bracket containing `taxable_income`, as a percentage.
    ///
    /// A filer with no income reports zero.
    fn marginal_rate(
        &self,
        income: Decimal,
        taxable_income: Decimal,
        brackets: &[TaxBracket],
    ) -> Decimal {
        if income.is_zero() {
            return Decimal::ZERO;
        }
        brackets
            .iter()
            .find(|b| b.contains(taxable_income))
            .map_or(Decimal::ZERO, |b| b.tax_rate * PERCENT)
    }
}
