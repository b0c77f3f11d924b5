//! Optional TOML file overriding the payroll and state tax parameters.
//!
//! Every key is optional; missing keys keep the built-in 2024 values.
//! Amounts may be written as strings (`"0.062"`) or bare numbers.
//!
//! ```toml
//! [payroll]
//! ss_wage_max = "168600"
//! ss_tax_rate = "0.062"
//! medicare_tax_rate = "0.0145"
//! additional_medicare_rate = "0.009"
//! additional_medicare_threshold = "200000"
//! additional_medicare_threshold_joint = "250000"
//!
//! [state]
//! flat_rate = "0.0495"
//! ```

use std::io;
use std::path::{Path, PathBuf};

use calc_core::{TaxYearConfig, TaxYearConfigError};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading a rates file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read rates file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid rates file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid rates: {0}")]
    Invalid(#[from] TaxYearConfigError),
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PayrollOverrides {
    pub ss_wage_max: Option<Decimal>,
    pub ss_tax_rate: Option<Decimal>,
    pub medicare_tax_rate: Option<Decimal>,
    pub additional_medicare_rate: Option<Decimal>,
    pub additional_medicare_threshold: Option<Decimal>,
    pub additional_medicare_threshold_joint: Option<Decimal>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StateOverrides {
    pub flat_rate: Option<Decimal>,
}

/// Parsed contents of a rates file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RatesFile {
    #[serde(default)]
    pub payroll: PayrollOverrides,
    #[serde(default)]
    pub state: StateOverrides,
}

impl RatesFile {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Overlays the overrides on `base` and validates the result.
    pub fn apply(
        &self,
        base: TaxYearConfig,
    ) -> Result<TaxYearConfig, ConfigError> {
        let payroll = &self.payroll;
        let config = TaxYearConfig {
            ss_wage_max: payroll.ss_wage_max.unwrap_or(base.ss_wage_max),
            ss_tax_rate: payroll.ss_tax_rate.unwrap_or(base.ss_tax_rate),
            medicare_tax_rate: payroll.medicare_tax_rate.unwrap_or(base.medicare_tax_rate),
            additional_medicare_rate: payroll
                .additional_medicare_rate
                .unwrap_or(base.additional_medicare_rate),
            additional_medicare_threshold: payroll
                .additional_medicare_threshold
                .unwrap_or(base.additional_medicare_threshold),
            additional_medicare_threshold_joint: payroll
                .additional_medicare_threshold_joint
                .unwrap_or(base.additional_medicare_threshold_joint),
            state_tax_rate: self.state.flat_rate.unwrap_or(base.state_tax_rate),
            ..base
        };
        config.validate()?;
        Ok(config)
    }
}

/// Default parameters, overridden by the file at `path` when one is given.
pub fn load_tax_year_config(path: Option<&Path>) -> Result<TaxYearConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(TaxYearConfig::default());
    };
    debug!(path = %path.display(), "loading rates file");
    RatesFile::from_file(path)?.apply(TaxYearConfig::default())
}
