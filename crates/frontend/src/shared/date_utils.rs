//! Conversions between `<input type="date">` values and `NaiveDate`.

use chrono::NaiveDate;

const INPUT_FORMAT: &str = "%Y-%m-%d";

/// Parses the `yyyy-mm-dd` value of a native date input; blank or malformed
/// input clears the bound.
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, INPUT_FORMAT).ok()
}

/// Renders a bound back into the value a date input expects.
pub fn format_input_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_date() {
        assert_eq!(
            parse_input_date("2024-03-15"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(parse_input_date(" "), None);
        assert_eq!(parse_input_date("15.03.2024"), None);
    }

    #[test]
    fn test_format_input_date() {
        assert_eq!(
            format_input_date(NaiveDate::from_ymd_opt(2024, 12, 31)),
            "2024-12-31"
        );
        assert_eq!(format_input_date(None), "");
    }
}
