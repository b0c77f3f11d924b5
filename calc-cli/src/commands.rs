use std::path::PathBuf;

use anyhow::Context;
use calc_core::{AmortizationEngine, BracketTaxEngine, FilingStatus, LoanInputs, TaxInputs};
use clap::Args;
use rust_decimal::Decimal;
use tracing::info;

use crate::config::load_tax_year_config;
use crate::report::{DEFAULT_SCHEDULE_ROWS, LoanReport, TaxReport};
use crate::schedule_export::write_schedule_to_path;
use crate::utils::parse_decimal;

// ─── tax ─────────────────────────────────────────────────────────────────────

/// Estimate federal, state and payroll tax on annual wages.
#[derive(Debug, Clone, Args)]
pub struct TaxCommand {
    /// Gross annual income, e.g. `85000` or `$85,000`.
    #[arg(long, value_parser = parse_decimal, allow_negative_numbers = true)]
    pub income: Decimal,

    /// Filing status: single, mfj, mfs or hoh.
    #[arg(long, default_value = "single")]
    pub filing_status: FilingStatus,

    /// Two-letter state code, shown in the report.
    #[arg(long, default_value = "")]
    pub state: String,

    #[arg(long, default_value_t = 0)]
    pub dependents: u32,

    #[arg(long, default_value_t = 0)]
    pub age: u32,

    #[arg(long)]
    pub blind: bool,

    /// TOML file overriding payroll and state rates.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl TaxCommand {
    pub fn inputs(&self) -> TaxInputs {
        TaxInputs::new(self.income, self.filing_status)
            .with_state(self.state.trim().to_uppercase())
            .with_dependents(self.dependents)
            .with_age(self.age)
            .with_blindness(self.blind)
    }

    /// Runs the calculation and returns the rendered report.
    pub fn run(&self) -> anyhow::Result<String> {
        let config = load_tax_year_config(self.config.as_deref())
            .context("failed to load tax rates")?;
        let engine = BracketTaxEngine::new(config);

        let inputs = self.inputs();
        let result = engine
            .compute_tax(&inputs)
            .context("tax calculation failed")?;
        info!(
            filing_status = inputs.filing_status.as_str(),
            total_tax = %result.total_tax,
            "tax computed"
        );

        Ok(TaxReport::new(&inputs, &result).to_string())
    }
}

// ─── loan ────────────────────────────────────────────────────────────────────

/// Compute the monthly payment and amortization schedule of a fixed-rate loan.
#[derive(Debug, Clone, Args)]
pub struct LoanCommand {
    /// Amount borrowed.
    #[arg(long, value_parser = parse_decimal, allow_negative_numbers = true)]
    pub principal: Decimal,

    /// Annual interest rate in percent (3.5 means 3.5%).
    #[arg(long, value_parser = parse_decimal, allow_negative_numbers = true)]
    pub rate: Decimal,

    /// Term in years; must be a whole number of months.
    #[arg(long, value_parser = parse_decimal, allow_negative_numbers = true)]
    pub years: Decimal,

    /// Print the payment table after the summary.
    #[arg(long)]
    pub schedule: bool,

    /// Maximum number of table rows to print.
    #[arg(long, default_value_t = DEFAULT_SCHEDULE_ROWS)]
    pub limit: usize,

    /// Write the full schedule as CSV to this path.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

impl LoanCommand {
    pub fn inputs(&self) -> LoanInputs {
        LoanInputs::new(self.principal, self.rate, self.years)
    }

    pub fn run(&self) -> anyhow::Result<String> {
        let schedule = AmortizationEngine::new()
            .compute_amortization(&self.inputs())
            .context("amortization failed")?;
        info!(
            payments = schedule.period_count(),
            monthly_payment = %schedule.monthly_payment,
            "schedule built"
        );

        if let Some(path) = &self.csv {
            let rows = write_schedule_to_path(&schedule, path)
                .with_context(|| format!("failed to export schedule to {}", path.display()))?;
            info!("wrote {} rows to {}", rows, path.display());
        }

        let report = if self.schedule {
            LoanReport::with_schedule(&schedule, self.limit)
        } else {
            LoanReport::summary(&schedule)
        };
        Ok(report.to_string())
    }
}
