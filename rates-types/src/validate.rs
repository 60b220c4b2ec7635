//! Pure input-format validators shared by provider implementations.
//!
//! These are syntactic checks only: they never perform IO and never panic.

use chrono::NaiveDate;

/// Checks that a currency code is exactly 3 characters, all in the uppercase
/// Latin range `A`-`Z`.
///
/// This does not verify the code names a real or upstream-known currency;
/// that determination happens at the provider's filter step.
pub fn currency_code_format(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

/// Checks that a date string parses exactly under the given chrono format.
///
/// Strict: the parsed date must re-render to the identical string, so
/// non-padded variants like `2023-1-1` are rejected for `%Y-%m-%d`.
pub fn date_format(date: &str, format: &str) -> bool {
    NaiveDate::parse_from_str(date, format)
        .map(|parsed| parsed.format(format).to_string() == date)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_three_uppercase_letters() {
        assert!(currency_code_format("USD"));
        assert!(currency_code_format("EUR"));
        assert!(currency_code_format("AAA"));
        assert!(currency_code_format("ZZZ"));
    }

    #[test]
    fn rejects_wrong_length_codes() {
        assert!(!currency_code_format(""));
        assert!(!currency_code_format("US"));
        assert!(!currency_code_format("USDD"));
    }

    #[test]
    fn rejects_non_uppercase_latin_codes() {
        assert!(!currency_code_format("usd"));
        assert!(!currency_code_format("UsD"));
        assert!(!currency_code_format("U$D"));
        assert!(!currency_code_format("US1"));
        assert!(!currency_code_format("ÜSD"));
    }

    #[test]
    fn accepts_valid_calendar_dates() {
        assert!(date_format("2023-01-01", "%Y-%m-%d"));
        assert!(date_format("2024-02-29", "%Y-%m-%d"));
        assert!(date_format("1999-12-31", "%Y-%m-%d"));
    }

    #[test]
    fn rejects_invalid_calendar_dates() {
        assert!(!date_format("2023-13-01", "%Y-%m-%d"));
        assert!(!date_format("2023-02-30", "%Y-%m-%d"));
        assert!(!date_format("2023-00-10", "%Y-%m-%d"));
    }

    #[test]
    fn rejects_alternate_or_partial_formats() {
        assert!(!date_format("01-01-2023", "%Y-%m-%d"));
        assert!(!date_format("2023/01/01", "%Y-%m-%d"));
        assert!(!date_format("2023-1-1", "%Y-%m-%d"));
        assert!(!date_format("2023-01-01T00:00:00", "%Y-%m-%d"));
        assert!(!date_format("invalid-date", "%Y-%m-%d"));
        assert!(!date_format("", "%Y-%m-%d"));
    }
}
