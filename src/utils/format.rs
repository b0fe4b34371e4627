//! Formatting utilities for timestamps, dates, and counts.

const MS_PER_SECOND: u64 = 1000;
const SECONDS_PER_DAY: u64 = 86400;

/// Format a Unix timestamp in milliseconds as an ISO-8601 UTC string
/// (`YYYY-MM-DDTHH:MM:SS.mmmZ`), the shape `Date.toISOString()` produces.
pub fn format_timestamp_iso(ms: u64) -> String {
    let secs = ms / MS_PER_SECOND;
    let millis = ms % MS_PER_SECOND;
    let time_of_day = secs % SECONDS_PER_DAY;

    format!(
        "{}T{:02}:{:02}:{:02}.{:03}Z",
        format_date_iso(secs),
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60,
        millis
    )
}

/// Format Unix timestamp (seconds) as ISO date (YYYY-MM-DD).
///
/// Properly calculates year/month/day accounting for leap years.
pub fn format_date_iso(timestamp: u64) -> String {
    let days = timestamp / SECONDS_PER_DAY;
    let mut year = 1970i64;
    let mut remaining_days = days as i64;

    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining_days < days_in_year {
            break;
        }
        remaining_days -= days_in_year;
        year += 1;
    }

    let days_in_months: [i64; 12] = if is_leap_year(year) {
        [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    } else {
        [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    };

    let mut month = 1;
    for days_in_month in days_in_months.iter() {
        if remaining_days < *days_in_month {
            break;
        }
        remaining_days -= days_in_month;
        month += 1;
    }

    let day = remaining_days + 1;
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Check if a year is a leap year.
fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Date part of an ISO-8601 timestamp ("2024-03-05T10:00:00Z" -> "2024-03-05").
///
/// Strings that don't look like ISO timestamps are returned unchanged.
pub fn display_date(iso: &str) -> &str {
    match iso.split_once('T') {
        Some((date, _)) if date.len() == 10 => date,
        _ => iso,
    }
}

/// Compact count for stat badges (e.g., 950, "1.2k", "3.4m").
pub fn format_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}m", count as f64 / 1_000_000.0)
    } else if count >= 10_000 {
        format!("{}k", count / 1_000)
    } else if count >= 1_000 {
        format!("{:.1}k", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_iso() {
        // Unix epoch
        assert_eq!(format_date_iso(0), "1970-01-01");
        // 2024-01-01 00:00:00 UTC = 1704067200
        assert_eq!(format_date_iso(1704067200), "2024-01-01");
        // Leap day
        assert_eq!(format_date_iso(1709164800), "2024-02-29");
    }

    #[test]
    fn test_format_timestamp_iso() {
        assert_eq!(format_timestamp_iso(0), "1970-01-01T00:00:00.000Z");
        // 2024-01-01 13:45:30.250 UTC
        assert_eq!(
            format_timestamp_iso(1_704_116_730_250),
            "2024-01-01T13:45:30.250Z"
        );
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2024-03-05T10:00:00Z"), "2024-03-05");
        assert_eq!(display_date("2024-03-05T10:00:00.123Z"), "2024-03-05");
        assert_eq!(display_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_234), "1.2k");
        assert_eq!(format_count(45_678), "45k");
        assert_eq!(format_count(2_500_000), "2.5m");
    }
}
