use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FilingStatus;
use super::tax_tables;

/// Age at which the additional standard deduction applies.
pub const SENIOR_AGE: u32 = 65;

/// Standard deduction for one filing status.
///
/// `additional` is added once for a filer aged [`SENIOR_AGE`] or older and
/// once more for a blind filer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardDeduction {
    pub base: Decimal,
    pub additional: Decimal,
}

impl StandardDeduction {
    pub fn for_status(status: FilingStatus) -> Self {
        tax_tables::standard_deduction(status)
    }

    /// Total deduction after the age and blindness increments.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use calc_core::{FilingStatus, StandardDeduction};
    ///
    /// let deduction = StandardDeduction::for_status(FilingStatus::Single);
    ///
    /// assert_eq!(deduction.amount(30, false), dec!(14600));
    /// assert_eq!(deduction.amount(70, true), dec!(18500));
    /// ```
    pub fn amount(
        &self,
        age: u32,
        blind: bool,
    ) -> Decimal {
        let mut amount = self.base;
        if age >= SENIOR_AGE {
            amount += self.additional;
        }
        if blind {
            amount += self.additional;
        }
        amount
    }
}
