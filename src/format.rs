//! Display formatting
//!
//! Pure, locale-fixed (`,` grouping, `.` decimal point) number and date
//! formatting shared by every renderer.

use chrono::{DateTime, Local, NaiveDateTime};

/// Shown wherever a value is absent or not displayable
pub const PLACEHOLDER: &str = "N/A";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const NAIVE_INPUT_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Fixed 2-decimal, thousands-grouped: `1234.5` -> `"1,234.50"`
pub fn format_number(value: f64) -> String {
    format_fixed(value, 2)
}

/// 8-decimal amount with its currency code: `"0.00012345 BTC"`
pub fn format_currency8(value: f64, currency: &str) -> String {
    format!("{} {currency}", format_fixed(value, 8))
}

/// KRW cash amount, 2 decimals
pub fn format_krw(value: f64) -> String {
    format!("{} KRW", format_fixed(value, 2))
}

/// Rate for chart tooltips: `"3.25%"`
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    format!("{value:.2}%")
}

/// Render a server timestamp as `YYYY-MM-DD HH:MM:SS`.
///
/// Timestamps carrying an offset are shown in the viewer's time zone;
/// naive ones are shown as sent. Anything unparseable is shown verbatim
/// rather than dropped.
pub fn format_timestamp(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string();
    }
    NAIVE_INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map_or_else(|| raw.to_string(), |dt| dt.format(TIMESTAMP_FORMAT).to_string())
}

/// Trade reason with one sentence per line; `N/A` when absent
pub fn format_reason(reason: Option<&str>) -> String {
    match reason.map(str::trim) {
        None | Some("") => PLACEHOLDER.to_string(),
        Some(text) => text.replace(". ", ".\n"),
    }
}

fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }

    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut grouped = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    // "-0.00" would be noise; only sign values that survive rounding
    if value.is_sign_negative() && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        grouped.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if !frac_part.is_empty() {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_number(1234.5), "1,234.50");
        assert_eq!(format_number(0.0), "0.00");
        assert_eq!(format_number(999.999), "1,000.00");
        assert_eq!(format_number(1_234_567.891), "1,234,567.89");
        assert_eq!(format_number(-98765.4), "-98,765.40");
    }

    #[test]
    fn test_format_number_is_stable() {
        let once = format_number(1234.5);
        let parsed: f64 = once.replace(',', "").parse().unwrap();
        assert_eq!(format_number(parsed), once);
        assert_eq!(format_number(1234.5), once);
    }

    #[test]
    fn test_format_number_negative_zero() {
        assert_eq!(format_number(-0.0), "0.00");
        assert_eq!(format_number(-0.001), "0.00");
    }

    #[test]
    fn test_format_number_non_finite() {
        assert_eq!(format_number(f64::NAN), PLACEHOLDER);
        assert_eq!(format_number(f64::INFINITY), PLACEHOLDER);
    }

    #[test]
    fn test_format_currency8() {
        assert_eq!(format_currency8(0.000_123_45, "BTC"), "0.00012345 BTC");
        assert_eq!(format_currency8(1.5, "ETH"), "1.50000000 ETH");
        assert_eq!(format_currency8(50000.0, "KRW"), "50,000.00000000 KRW");
    }

    #[test]
    fn test_format_krw() {
        assert_eq!(format_krw(1_500_000.0), "1,500,000.00 KRW");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2024-12-01 09:30:00"), "2024-12-01 09:30:00");
        assert_eq!(format_timestamp("2024-12-01T09:30:00.123456"), "2024-12-01 09:30:00");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn test_format_timestamp_in_viewer_zone() {
        for raw in ["2024-12-01T00:30:00Z", "2024-12-01T09:30:00+09:00"] {
            let expected = DateTime::parse_from_rfc3339(raw)
                .unwrap()
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string();
            assert_eq!(format_timestamp(raw), expected);
        }
        // Same instant, different offsets
        assert_eq!(
            format_timestamp("2024-12-01T00:30:00Z"),
            format_timestamp("2024-12-01T09:30:00+09:00")
        );
    }

    #[test]
    fn test_format_reason() {
        assert_eq!(format_reason(None), "N/A");
        assert_eq!(format_reason(Some("  ")), "N/A");
        assert_eq!(
            format_reason(Some("RSI oversold. Volume rising.")),
            "RSI oversold.\nVolume rising."
        );
        let once = format_reason(Some("A. B."));
        assert_eq!(format_reason(Some(&once)), once);
    }
}
