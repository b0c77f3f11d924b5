use calc_core::calculations::common::round_half_up;
use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
pub enum ParseDecimalError {
    #[error("a number is required")]
    Empty,

    #[error("invalid decimal '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },
}

/// Normalizes input for decimal parsing: trims whitespace and removes
/// thousands separators and a leading dollar sign.
fn normalize_decimal_input(s: &str) -> String {
    s.trim().trim_start_matches('$').replace(',', "")
}

/// Parses a command-line amount into a [`Decimal`].
///
/// Accepts `1,234.56` and `$250,000`. Empty input is an error.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Err(ParseDecimalError::Empty);
    }
    normalized.parse().map_err(|e| {
        tracing::debug!(input = %s, "invalid decimal: {}", e);
        ParseDecimalError::Invalid {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Formats an amount as US dollars rounded to cents, e.g. `$1,234.56`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_half_up(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}.{cents}")
}

/// Formats a percentage value (22 means 22%) with two decimals.
pub fn format_percent(rate: Decimal) -> String {
    format!("{:.2}%", round_half_up(rate))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_decimal_accepts_comma_thousands_separator() {
        assert_eq!(parse_decimal("1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_decimal("1,234,567.89").unwrap(), dec!(1234567.89));
    }

    #[test]
    fn parse_decimal_accepts_dollar_sign() {
        assert_eq!(parse_decimal("$250,000").unwrap(), dec!(250000));
    }

    #[test]
    fn parse_decimal_trim_whitespace() {
        assert_eq!(parse_decimal("  123.45  ").unwrap(), dec!(123.45));
    }

    #[test]
    fn parse_decimal_empty_is_an_error() {
        assert!(matches!(parse_decimal("   "), Err(ParseDecimalError::Empty)));
    }

    #[test]
    fn parse_decimal_invalid_returns_error() {
        assert!(matches!(
            parse_decimal("NaN"),
            Err(ParseDecimalError::Invalid { .. })
        ));
        assert!(parse_decimal("abc").is_err());
    }

    #[test]
    fn format_currency_groups_thousands() {
        assert_eq!(format_currency(dec!(1122.611719)), "$1,122.61");
        assert_eq!(format_currency(dec!(154140.219)), "$154,140.22");
        assert_eq!(format_currency(dec!(1000000)), "$1,000,000.00");
    }

    #[test]
    fn format_currency_small_and_negative_amounts() {
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(7.5)), "$7.50");
        assert_eq!(format_currency(dec!(-1234.5)), "-$1,234.50");
        assert_eq!(format_currency(dec!(-0.001)), "$0.00");
    }

    #[test]
    fn format_percent_rounds_to_two_places() {
        assert_eq!(format_percent(dec!(19.222)), "19.22%");
        assert_eq!(format_percent(dec!(12)), "12.00%");
    }
}
