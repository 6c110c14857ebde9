//! Utility helpers shared across the WASM frontend.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde_json::Number;

const DATE_FORMAT: &str = "%d %b %Y";
const TIME_FORMAT: &str = "%H:%M";
const DATE_TIME_FORMAT: &str = "%d %b %Y, %H:%M";

/// Coerce a typed value into a JSON number the way the browser's `Number()`
/// does: surrounding whitespace is ignored, a blank string is `0`, and
/// anything unparseable or non-finite becomes `None` (serialised as `null`).
/// Whole values are kept as integers so the backend sees `4`, not `4.0`.
pub fn coerce_number(raw: &str) -> Option<Number> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(Number::from(0));
    }
    let value: f64 = trimmed.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    // 2^53: beyond this f64 can no longer represent every integer.
    if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        Some(Number::from(value as i64))
    } else {
        Number::from_f64(value)
    }
}

/// Escape text for interpolation into HTML markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Parse a backend timestamp. The backend emits naive ISO-8601 values which
/// are already restaurant-local; values carrying an offset are converted to
/// the browser's local time.
pub fn parse_timestamp(iso: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(iso, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn format_with(iso: &str, fmt: &str) -> String {
    match parse_timestamp(iso) {
        Some(dt) => dt.format(fmt).to_string(),
        // Show whatever the backend sent rather than nothing.
        None => iso.to_string(),
    }
}

/// `"01 Mar 2025"`
pub fn format_date(iso: &str) -> String {
    format_with(iso, DATE_FORMAT)
}

/// `"19:30"`
pub fn format_time(iso: &str) -> String {
    format_with(iso, TIME_FORMAT)
}

/// `"01 Mar 2025, 19:30"`
pub fn format_date_time(iso: &str) -> String {
    format_with(iso, DATE_TIME_FORMAT)
}

/// Render a price the way a JS template literal would: `500`, `12.5`.
pub fn format_price(price: f64) -> String {
    format!("{}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_number_follows_browser_rules() {
        assert_eq!(coerce_number("4"), Some(Number::from(4)));
        assert_eq!(coerce_number("  12 "), Some(Number::from(12)));
        assert_eq!(coerce_number(""), Some(Number::from(0)));
        assert_eq!(coerce_number("   "), Some(Number::from(0)));
        assert_eq!(coerce_number("2.5"), Number::from_f64(2.5));
        assert_eq!(coerce_number("4.0"), Some(Number::from(4)));
        assert_eq!(coerce_number("abc"), None);
        assert_eq!(coerce_number("inf"), None);
    }

    #[test]
    fn escape_html_neutralises_markup() {
        assert_eq!(
            escape_html(r#"<b onclick="x">Tom & 'Jerry'</b>"#),
            "&lt;b onclick=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn formats_naive_backend_timestamps() {
        assert_eq!(format_date("2025-03-01T19:30:00"), "01 Mar 2025");
        assert_eq!(format_time("2025-03-01T19:30:00"), "19:30");
        assert_eq!(format_date_time("2025-03-01T19:30:00.123456"), "01 Mar 2025, 19:30");
        assert_eq!(format_time("2025-03-01T07:05"), "07:05");
        assert_eq!(format_date("2025-03-01"), "01 Mar 2025");
    }

    #[test]
    fn unparseable_timestamp_is_shown_verbatim() {
        assert_eq!(format_date("next tuesday"), "next tuesday");
    }

    #[test]
    fn prices_render_without_trailing_zeroes() {
        assert_eq!(format_price(500.0), "500");
        assert_eq!(format_price(12.5), "12.5");
    }
}
