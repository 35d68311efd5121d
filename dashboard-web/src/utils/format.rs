//! # Formatting Utilities
//!
//! Number and timestamp formatting for the cost and dashboard cards.
//!
//! - [`format_number`] - comma-grouped numbers
//! - [`format_usd`] - dollar amounts
//! - [`format_pct`] - signed percentages
//! - [`format_timestamp`] / [`format_date`] - backend timestamps for tables

use chrono::{DateTime, Utc};

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// # Examples
///
/// ```rust
/// use dashboard_web::utils::format::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(100.0, 2), "100.00");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals);
    let parts: Vec<&str> = formatted.split('.').collect();

    let integer_part = parts[0];
    let decimal_part = if parts.len() > 1 { parts[1] } else { "" };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    let integer_with_commas: String = result.chars().rev().collect();

    if decimal_part.is_empty() {
        format!("{}{}", sign, integer_with_commas)
    } else {
        format!("{}{}.{}", sign, integer_with_commas, decimal_part)
    }
}

/// Format a dollar amount for cards and tables.
pub fn format_usd(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${}", format_number(-amount, 2))
    } else {
        format!("${}", format_number(amount, 2))
    }
}

/// Format a percentage change with explicit sign.
pub fn format_pct(pct: f64) -> String {
    if pct >= 0.0 {
        format!("+{:.1}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}

/// Format a whole count with comma grouping.
pub fn format_count(count: u64) -> String {
    format_number(count as f64, 0)
}

/// Backend timestamps rendered to minute precision.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// Backend timestamps rendered as a calendar date.
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
        assert_eq!(format_number(100.0, 2), "100.00");
        assert_eq!(format_number(-4200.5, 2), "-4,200.50");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(12999.9), "$12,999.90");
        assert_eq!(format_usd(-37.25), "-$37.25");
    }

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(12.34), "+12.3%");
        assert_eq!(format_pct(-3.0), "-3.0%");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(1042), "1,042");
    }

    #[test]
    fn test_format_timestamp() {
        use chrono::TimeZone;
        let ts = Utc.with_ymd_and_hms(2026, 7, 14, 9, 5, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "2026-07-14 09:05");
        assert_eq!(format_date(&ts), "2026-07-14");
    }
}
