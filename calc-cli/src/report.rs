//! Plain-text rendering of calculation results.

use std::fmt;

use calc_core::{AmortizationSchedule, TaxCalculationResult, TaxInputs};

use crate::utils::{format_currency, format_percent};

/// Number of schedule rows shown when no limit is given.
pub const DEFAULT_SCHEDULE_ROWS: usize = 12;

pub struct TaxReport<'a> {
    inputs: &'a TaxInputs,
    result: &'a TaxCalculationResult,
}

impl<'a> TaxReport<'a> {
    pub fn new(
        inputs: &'a TaxInputs,
        result: &'a TaxCalculationResult,
    ) -> Self {
        Self { inputs, result }
    }
}

impl fmt::Display for TaxReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let r = self.result;
        writeln!(f, "{:<24}{}", "Filing status:", self.inputs.filing_status)?;
        if !self.inputs.state.is_empty() {
            writeln!(f, "{:<24}{}", "State:", self.inputs.state)?;
        }
        let lines = [
            ("Gross income:", format_currency(r.gross_income)),
            ("Standard deduction:", format_currency(r.standard_deduction)),
            ("Taxable income:", format_currency(r.taxable_income)),
            ("Federal income tax:", format_currency(r.federal_tax)),
            ("State tax (flat est.):", format_currency(r.state_tax)),
            ("Social security tax:", format_currency(r.social_security_tax)),
            ("Medicare tax:", format_currency(r.medicare_tax)),
            ("Total tax:", format_currency(r.total_tax)),
            ("Net income:", format_currency(r.net_income)),
            ("Effective rate:", format_percent(r.effective_rate)),
            ("Marginal rate:", format_percent(r.marginal_rate)),
        ];
        for (label, value) in lines {
            writeln!(f, "{label:<24}{value}")?;
        }
        Ok(())
    }
}

/// Loan summary, optionally followed by the first rows of the schedule.
pub struct LoanReport<'a> {
    schedule: &'a AmortizationSchedule,
    rows: Option<usize>,
}

impl<'a> LoanReport<'a> {
    pub fn summary(schedule: &'a AmortizationSchedule) -> Self {
        Self {
            schedule,
            rows: None,
        }
    }

    pub fn with_schedule(
        schedule: &'a AmortizationSchedule,
        rows: usize,
    ) -> Self {
        Self {
            schedule,
            rows: Some(rows),
        }
    }
}

impl fmt::Display for LoanReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let s = self.schedule;
        writeln!(f, "{:<18}{}", "Monthly payment:", format_currency(s.monthly_payment))?;
        writeln!(f, "{:<18}{}", "Total payment:", format_currency(s.total_payment))?;
        writeln!(f, "{:<18}{}", "Total interest:", format_currency(s.total_interest))?;
        writeln!(f, "{:<18}{}", "Payments:", s.period_count())?;

        let Some(rows) = self.rows else {
            return Ok(());
        };

        writeln!(f)?;
        writeln!(
            f,
            "{:>5}  {:>14}  {:>14}  {:>14}  {:>16}",
            "Month", "Payment", "Principal", "Interest", "Balance"
        )?;
        for period in s.periods.iter().take(rows) {
            writeln!(
                f,
                "{:>5}  {:>14}  {:>14}  {:>14}  {:>16}",
                period.index,
                format_currency(period.payment),
                format_currency(period.principal_portion),
                format_currency(period.interest_portion),
                format_currency(period.remaining_balance),
            )?;
        }
        let hidden = s.period_count().saturating_sub(rows);
        if hidden > 0 {
            writeln!(f, "... and {hidden} more payments")?;
        }
        Ok(())
    }
}
