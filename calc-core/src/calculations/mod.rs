//! Tax and loan calculation engines.
//!
//! Both engines are pure: they read their inputs, consult constant tables,
//! and return a fresh result. They can be shared freely across threads.

pub mod amortization;
pub mod bracket_tax;
pub mod common;

pub use amortization::{AmortizationEngine, PaymentPlan, Periods};
pub use bracket_tax::BracketTaxEngine;

use crate::error::InvalidInputError;
use crate::models::{AmortizationSchedule, LoanInputs, TaxCalculationResult, TaxInputs};

/// Computes tax for `inputs` with the default 2024 parameters.
///
/// Shorthand for `BracketTaxEngine::default().compute_tax(inputs)`.
pub fn compute_tax(inputs: &TaxInputs) -> Result<TaxCalculationResult, InvalidInputError> {
    BracketTaxEngine::default().compute_tax(inputs)
}

/// Builds the amortization schedule for `inputs` with the default balance tolerance.
///
/// Shorthand for `AmortizationEngine::default().compute_amortization(inputs)`.
pub fn compute_amortization(
    inputs: &LoanInputs,
) -> Result<AmortizationSchedule, InvalidInputError> {
    AmortizationEngine::default().compute_amortization(inputs)
}
