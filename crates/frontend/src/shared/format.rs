use chrono::{DateTime, Utc};

/// Table-cell timestamp: `2025-03-14 09:30`.
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Date-only form of a timestamp: `2025-03-14`.
pub fn format_date(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// Money cells; the catalog prices are plain decimals with two places.
pub fn format_price(value: f64) -> String {
    format!("{:.2}", value)
}

/// Truncate long text for table cells, appending an ellipsis.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}\u{2026}", cut.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        let dt = Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 12).unwrap();
        assert_eq!(format_timestamp(dt), "2025-03-14 09:30");
        assert_eq!(format_date(dt), "2025-03-14");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1499.0), "1499.00");
        assert_eq!(format_price(12.345), "12.35");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer description", 8), "a longer\u{2026}");
    }
}
