//! 2024 federal rate schedules and standard deductions.
//!
//! The tables are immutable statics selected by a `match` on
//! [`FilingStatus`]. Each schedule is contiguous, sorted by `min_income`, and
//! only its last bracket is unbounded.

use rust_decimal_macros::dec;

use super::{FilingStatus, StandardDeduction, TaxBracket};

pub const TAX_YEAR: i32 = 2024;

static SINGLE_BRACKETS: [TaxBracket; 7] = [
    TaxBracket::new(dec!(0), Some(dec!(11600)), dec!(0.10)),
    TaxBracket::new(dec!(11600), Some(dec!(47150)), dec!(0.12)),
    TaxBracket::new(dec!(47150), Some(dec!(100525)), dec!(0.22)),
    TaxBracket::new(dec!(100525), Some(dec!(191625)), dec!(0.24)),
    TaxBracket::new(dec!(191625), Some(dec!(243725)), dec!(0.32)),
    TaxBracket::new(dec!(243725), Some(dec!(609350)), dec!(0.35)),
    TaxBracket::new(dec!(609350), None, dec!(0.37)),
];

static MARRIED_FILING_JOINTLY_BRACKETS: [TaxBracket; 7] = [
    TaxBracket::new(dec!(0), Some(dec!(23200)), dec!(0.10)),
    TaxBracket::new(dec!(23200), Some(dec!(94300)), dec!(0.12)),
    TaxBracket::new(dec!(94300), Some(dec!(201050)), dec!(0.22)),
    TaxBracket::new(dec!(201050), Some(dec!(383250)), dec!(0.24)),
    TaxBracket::new(dec!(383250), Some(dec!(487450)), dec!(0.32)),
    TaxBracket::new(dec!(487450), Some(dec!(731200)), dec!(0.35)),
    TaxBracket::new(dec!(731200), None, dec!(0.37)),
];

static MARRIED_FILING_SEPARATELY_BRACKETS: [TaxBracket; 7] = [
    TaxBracket::new(dec!(0), Some(dec!(11600)), dec!(0.10)),
    TaxBracket::new(dec!(11600), Some(dec!(47150)), dec!(0.12)),
    TaxBracket::new(dec!(47150), Some(dec!(100525)), dec!(0.22)),
    TaxBracket::new(dec!(100525), Some(dec!(191625)), dec!(0.24)),
    TaxBracket::new(dec!(191625), Some(dec!(243725)), dec!(0.32)),
    TaxBracket::new(dec!(243725), Some(dec!(365600)), dec!(0.35)),
    TaxBracket::new(dec!(365600), None, dec!(0.37)),
];

static HEAD_OF_HOUSEHOLD_BRACKETS: [TaxBracket; 7] = [
    TaxBracket::new(dec!(0), Some(dec!(16550)), dec!(0.10)),
    TaxBracket::new(dec!(16550), Some(dec!(63100)), dec!(0.12)),
    TaxBracket::new(dec!(63100), Some(dec!(100500)), dec!(0.22)),
    TaxBracket::new(dec!(100500), Some(dec!(191650)), dec!(0.24)),
    TaxBracket::new(dec!(191650), Some(dec!(243700)), dec!(0.32)),
    TaxBracket::new(dec!(243700), Some(dec!(609350)), dec!(0.35)),
    TaxBracket::new(dec!(609350), None, dec!(0.37)),
];

/// Federal rate schedule for `status`, ascending by `min_income`.
pub fn federal_brackets(status: FilingStatus) -> &'static [TaxBracket] {
    match status {
        FilingStatus::Single => &SINGLE_BRACKETS,
        FilingStatus::MarriedFilingJointly => &MARRIED_FILING_JOINTLY_BRACKETS,
        FilingStatus::MarriedFilingSeparately => &MARRIED_FILING_SEPARATELY_BRACKETS,
        FilingStatus::HeadOfHousehold => &HEAD_OF_HOUSEHOLD_BRACKETS,
    }
}

pub fn standard_deduction(status: FilingStatus) -> StandardDeduction {
    match status {
        FilingStatus::Single | FilingStatus::MarriedFilingSeparately => StandardDeduction {
            base: dec!(14600),
            additional: dec!(1950),
        },
        FilingStatus::MarriedFilingJointly => StandardDeduction {
            base: dec!(29200),
            additional: dec!(1550),
        },
        FilingStatus::HeadOfHousehold => StandardDeduction {
            base: dec!(21900),
            additional: dec!(1950),
        },
    }
}
