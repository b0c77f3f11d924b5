use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidInputError;

/// Filing status for a federal return.
///
/// Selects the bracket schedule, the standard deduction and the additional
/// Medicare threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilingStatus {
    #[default]
    Single,
    MarriedFilingJointly,
    MarriedFilingSeparately,
    HeadOfHousehold,
}

impl FilingStatus {
    pub fn all() -> &'static [FilingStatus] {
        &[
            FilingStatus::Single,
            FilingStatus::MarriedFilingJointly,
            FilingStatus::MarriedFilingSeparately,
            FilingStatus::HeadOfHousehold,
        ]
    }

    /// Short IRS-style code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "S",
            Self::MarriedFilingJointly => "MFJ",
            Self::MarriedFilingSeparately => "MFS",
            Self::HeadOfHousehold => "HOH",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::MarriedFilingJointly => "Married Filing Jointly",
            Self::MarriedFilingSeparately => "Married Filing Separately",
            Self::HeadOfHousehold => "Head of Household",
        }
    }

    pub fn is_joint(&self) -> bool {
        matches!(self, Self::MarriedFilingJointly)
    }

    /// Parses a code (`MFJ`) or a name in any casing and separator style
    /// (`married-filing-jointly`, `marriedFilingJointly`, `Married Filing Jointly`).
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "s" | "single" => Some(Self::Single),
            "mfj" | "marriedfilingjointly" => Some(Self::MarriedFilingJointly),
            "mfs" | "marriedfilingseparately" => Some(Self::MarriedFilingSeparately),
            "hoh" | "headofhousehold" => Some(Self::HeadOfHousehold),
            _ => None,
        }
    }
}

impl FromStr for FilingStatus {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InvalidInputError::UnknownFilingStatus(s.to_string()))
    }
}

impl fmt::Display for FilingStatus {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}
