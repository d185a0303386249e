/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Utc};

/// Format an order timestamp for the history view.
/// Example: 2025-12-05T14:02:26Z -> "Dec 5, 2025, 02:02 PM"
///
/// Orders rehydrated from a corrupt blob may have no usable date; those
/// render as "No date" instead of crashing the view.
pub fn format_order_date(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(dt) => dt.format("%b %-d, %Y, %I:%M %p").to_string(),
        None => "No date".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_order_date() {
        let dt = Utc.with_ymd_and_hms(2025, 12, 5, 14, 2, 26).unwrap();
        assert_eq!(format_order_date(Some(dt)), "Dec 5, 2025, 02:02 PM");

        let morning = Utc.with_ymd_and_hms(2024, 3, 9, 8, 30, 0).unwrap();
        assert_eq!(format_order_date(Some(morning)), "Mar 9, 2024, 08:30 AM");
    }

    #[test]
    fn test_missing_date() {
        assert_eq!(format_order_date(None), "No date");
    }
}
