//! CSV export of an amortization schedule.

use std::io::Write;
use std::path::{Path, PathBuf};

use calc_core::AmortizationSchedule;
use calc_core::calculations::common::round_half_up;
use rust_decimal::Decimal;
use thiserror::Error;

pub const HEADER: [&str; 5] = ["month", "payment", "principal", "interest", "balance"];

#[derive(Debug, Error)]
pub enum ScheduleExportError {
    #[error("cannot create '{path}': {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write schedule: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush schedule: {0}")]
    Io(#[from] std::io::Error),
}

fn cents(amount: Decimal) -> String {
    format!("{:.2}", round_half_up(amount))
}

/// Writes one row per period, amounts rounded to cents.
///
/// Returns the number of data rows written.
pub fn write_schedule<W: Write>(
    schedule: &AmortizationSchedule,
    writer: W,
) -> Result<usize, ScheduleExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;

    for period in &schedule.periods {
        wtr.write_record([
            period.index.to_string(),
            cents(period.payment),
            cents(period.principal_portion),
            cents(period.interest_portion),
            cents(period.remaining_balance),
        ])?;
    }

    wtr.flush()?;
    Ok(schedule.periods.len())
}

pub fn write_schedule_to_path(
    schedule: &AmortizationSchedule,
    path: &Path,
) -> Result<usize, ScheduleExportError> {
    let file = std::fs::File::create(path).map_err(|source| ScheduleExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_schedule(schedule, file)
}
