use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One marginal-rate bracket of a federal schedule.
///
/// `max_income` of `None` marks the unbounded top bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
}

impl TaxBracket {
    pub const fn new(
        min_income: Decimal,
        max_income: Option<Decimal>,
        tax_rate: Decimal,
    ) -> Self {
        Self {
            min_income,
            max_income,
            tax_rate,
        }
    }

    /// Portion of `taxable_income` that falls inside this bracket.
    pub fn income_in_bracket(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        if taxable_income <= self.min_income {
            return Decimal::ZERO;
        }
        let upper = self.max_income.unwrap_or(taxable_income);
        (taxable_income - self.min_income).min(upper - self.min_income)
    }

    /// Whether `taxable_income` lies in `[min_income, max_income)`.
    pub fn contains(
        &self,
        taxable_income: Decimal,
    ) -> bool {
        taxable_income >= self.min_income
            && self.max_income.is_none_or(|max| taxable_income < max)
    }
}
