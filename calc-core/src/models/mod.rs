mod filing_status;
mod loan;
mod standard_deduction;
mod tax_bracket;
mod tax_inputs;
pub mod tax_tables;
mod tax_year_config;

pub use filing_status::FilingStatus;
pub use loan::{AmortizationPeriod, AmortizationSchedule, LoanInputs};
pub use standard_deduction::StandardDeduction;
pub use tax_bracket::TaxBracket;
pub use tax_inputs::{TaxCalculationResult, TaxInputs};
pub use tax_year_config::{TaxYearConfig, TaxYearConfigError};
