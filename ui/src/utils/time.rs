use jiff::Timestamp;

/// Format a timestamp as a short date for table cells, e.g. "Aug 28, 2026".
pub fn format_date(timestamp: &Timestamp) -> String {
    timestamp.strftime("%b %d, %Y").to_string()
}

/// Format a timestamp with time of day for detail views.
pub fn format_datetime(timestamp: &Timestamp) -> String {
    timestamp.strftime("%b %d, %Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_format_for_display() {
        let ts: Timestamp = "2026-08-28T14:30:00Z".parse().unwrap();
        assert_eq!(format_date(&ts), "Aug 28, 2026");
        assert_eq!(format_datetime(&ts), "Aug 28, 2026 14:30");
    }
}
