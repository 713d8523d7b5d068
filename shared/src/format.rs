//! Display formatting for currency, dates, and export filenames

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Format an amount in Kenyan Shillings: `KSh 12,500` / `-KSh 1,234.5`
///
/// Trailing zero decimals are dropped so a zero value renders as
/// `KSh 0`, matching how the dashboard displays stock values.
pub fn format_ksh(amount: Decimal) -> String {
    let negative = amount.is_sign_negative() && !amount.is_zero();
    let normalized = amount.abs().normalize();
    let text = normalized.to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let grouped = group_thousands(int_part);
    let body = match frac_part {
        Some(f) => format!("{}.{}", grouped, f),
        None => grouped,
    };

    if negative {
        format!("-KSh {}", body)
    } else {
        format!("KSh {}", body)
    }
}

/// Insert thousands separators into a bare digit string
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Long display format with en-US month names: `August 24, 2026`
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// ISO format for date-input form fields: `2026-08-24`
pub fn format_input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Filename for an exported report blob:
/// `{report_type}-report-{start}-to-{end}.{ext}`
pub fn export_filename(report_type: &str, range: &crate::DateRange, extension: &str) -> String {
    format!(
        "{}-report-{}-to-{}.{}",
        report_type,
        format_input_date(range.start),
        format_input_date(range.end),
        extension
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_ksh_groups_thousands() {
        assert_eq!(format_ksh(dec("1500")), "KSh 1,500");
        assert_eq!(format_ksh(dec("1234567")), "KSh 1,234,567");
        assert_eq!(format_ksh(dec("999")), "KSh 999");
    }

    #[test]
    fn test_format_ksh_zero_and_decimals() {
        assert_eq!(format_ksh(Decimal::ZERO), "KSh 0");
        assert_eq!(format_ksh(dec("0.00")), "KSh 0");
        assert_eq!(format_ksh(dec("2500.50")), "KSh 2,500.5");
    }

    #[test]
    fn test_format_ksh_negative() {
        assert_eq!(format_ksh(dec("-1234")), "-KSh 1,234");
    }

    #[test]
    fn test_date_formats() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 4).unwrap();
        assert_eq!(format_display_date(date), "August 4, 2026");
        assert_eq!(format_input_date(date), "2026-08-04");
    }

    #[test]
    fn test_export_filename() {
        let range = crate::DateRange {
            start: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
        };
        assert_eq!(
            export_filename("revenue", &range, "pdf"),
            "revenue-report-2026-01-01-to-2026-01-31.pdf"
        );
    }
}
