use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::FilingStatus;
use super::tax_tables::TAX_YEAR;

/// Errors reported by [`TaxYearConfig::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxYearConfigError {
    /// A rate fell outside `[0, 1]`. The first field names the rate.
    #[error("{0} must be between 0 and 1, got {1}")]
    RateOutOfRange(&'static str, Decimal),

    /// The social security wage base must be positive.
    #[error("social security wage maximum must be positive, got {0}")]
    InvalidSsWageMax(Decimal),

    /// An additional-Medicare threshold was negative.
    #[error("{0} must be non-negative, got {1}")]
    NegativeThreshold(&'static str, Decimal),
}

/// Payroll and state parameters for one tax year.
///
/// Bracket schedules and standard deductions are fixed tables; the values
/// here are the ones a caller may override (see `calc-cli`'s rates file).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearConfig {
    pub tax_year: i32,

    /// Wages above this amount are not subject to social security tax.
    pub ss_wage_max: Decimal,

    /// Employee share of social security tax.
    pub ss_tax_rate: Decimal,

    /// Employee share of Medicare tax, applied to all wages.
    pub medicare_tax_rate: Decimal,

    /// Surcharge applied to wages above the additional-Medicare threshold.
    pub additional_medicare_rate: Decimal,

    /// Additional-Medicare threshold for every status except joint filers.
    pub additional_medicare_threshold: Decimal,

    /// Additional-Medicare threshold for married filing jointly.
    pub additional_medicare_threshold_joint: Decimal,

    /// Flat rate applied to taxable income as a stand-in for state tax.
    ///
    /// This is a placeholder, not a per-state schedule.
    pub state_tax_rate: Decimal,
}

impl Default for TaxYearConfig {
    fn default() -> Self {
        Self {
            tax_year: TAX_YEAR,
            ss_wage_max: dec!(160200),
            ss_tax_rate: dec!(0.062),
            medicare_tax_rate: dec!(0.0145),
            additional_medicare_rate: dec!(0.009),
            additional_medicare_threshold: dec!(200000),
            additional_medicare_threshold_joint: dec!(250000),
            state_tax_rate: dec!(0.05),
        }
    }
}

impl TaxYearConfig {
    pub fn additional_medicare_threshold_for(
        &self,
        status: FilingStatus,
    ) -> Decimal {
        if status.is_joint() {
            self.additional_medicare_threshold_joint
        } else {
            self.additional_medicare_threshold
        }
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`TaxYearConfigError`] if any rate is outside `[0, 1]`, the
    /// wage base is not positive, or a threshold is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use calc_core::{TaxYearConfig, TaxYearConfigError};
    ///
    /// let config = TaxYearConfig {
    ///     state_tax_rate: dec!(1.5),
    ///     ..TaxYearConfig::default()
    /// };
    ///
    /// assert_eq!(
    ///     config.validate(),
    ///     Err(TaxYearConfigError::RateOutOfRange("state tax rate", dec!(1.5)))
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), TaxYearConfigError> {
        let rates = [
            ("social security tax rate", self.ss_tax_rate),
            ("medicare tax rate", self.medicare_tax_rate),
            ("additional medicare rate", self.additional_medicare_rate),
            ("state tax rate", self.state_tax_rate),
        ];
        for (name, rate) in rates {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(TaxYearConfigError::RateOutOfRange(name, rate));
            }
        }
        if self.ss_wage_max <= Decimal::ZERO {
            return Err(TaxYearConfigError::InvalidSsWageMax(self.ss_wage_max));
        }
        let thresholds = [
            (
                "additional medicare threshold",
                self.additional_medicare_threshold,
            ),
            (
                "joint additional medicare threshold",
                self.additional_medicare_threshold_joint,
            ),
        ];
        for (name, threshold) in thresholds {
            if threshold < Decimal::ZERO {
                return Err(TaxYearConfigError::NegativeThreshold(name, threshold));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(TaxYearConfig::default().validate(), Ok(()));
    }

    #[test]
    fn joint_filers_use_higher_threshold() {
        let config = TaxYearConfig::default();

        assert_eq!(
            config.additional_medicare_threshold_for(FilingStatus::MarriedFilingJointly),
            dec!(250000)
        );
        assert_eq!(
            config.additional_medicare_threshold_for(FilingStatus::HeadOfHousehold),
            dec!(200000)
        );
    }

    #[test]
    fn validate_rejects_negative_rate() {
        let config = TaxYearConfig {
            medicare_tax_rate: dec!(-0.01),
            ..TaxYearConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(TaxYearConfigError::RateOutOfRange(
                "medicare tax rate",
                dec!(-0.01)
            ))
        );
    }

    #[test]
    fn validate_rejects_zero_wage_base() {
        let config = TaxYearConfig {
            ss_wage_max: dec!(0),
            ..TaxYearConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(TaxYearConfigError::InvalidSsWageMax(dec!(0)))
        );
    }

    #[test]
    fn validate_rejects_negative_threshold() {
        let config = TaxYearConfig {
            additional_medicare_threshold_joint: dec!(-1),
            ..TaxYearConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(TaxYearConfigError::NegativeThreshold(
                "joint additional medicare threshold",
                dec!(-1)
            ))
        );
    }

    #[test]
    fn rate_of_exactly_one_is_allowed() {
        let config = TaxYearConfig {
            state_tax_rate: dec!(1),
            ..TaxYearConfig::default()
        };

        assert_eq!(config.validate(), Ok(()));
    }
}
