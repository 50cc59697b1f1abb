use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Renders "KSh 5,000": whole shillings with thousands separators.
pub fn format_price(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0 {
        format!("KSh -{grouped}")
    } else {
        format!("KSh {grouped}")
    }
}

/// Renders "Aug 22, 2026", the listing display form.
pub fn format_event_date(date: &DateTime<Utc>) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Accepts RFC 3339, the `datetime-local` input shapes with and without
/// seconds (T or space separated), and a bare date (taken as midnight UTC).
pub fn parse_event_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_price_groups_thousands() {
        assert_eq!(format_price(5000.0), "KSh 5,000");
        assert_eq!(format_price(15000.0), "KSh 15,000");
        assert_eq!(format_price(1234567.0), "KSh 1,234,567");
        assert_eq!(format_price(0.0), "KSh 0");
        assert_eq!(format_price(999.0), "KSh 999");
    }

    #[test]
    fn test_format_price_rounds_to_whole_shillings() {
        assert_eq!(format_price(999.6), "KSh 1,000");
        assert_eq!(format_price(2500.4), "KSh 2,500");
    }

    #[test]
    fn test_format_event_date() {
        let date = Utc.with_ymd_and_hms(2026, 8, 22, 18, 30, 0).unwrap();
        assert_eq!(format_event_date(&date), "Aug 22, 2026");
    }

    #[test]
    fn test_parse_event_date_accepted_shapes() {
        let expected = Utc.with_ymd_and_hms(2026, 9, 1, 18, 30, 0).unwrap();
        assert_eq!(parse_event_date("2026-09-01T18:30:00Z"), Some(expected));
        assert_eq!(parse_event_date("2026-09-01T18:30:00"), Some(expected));
        assert_eq!(parse_event_date("2026-09-01T18:30"), Some(expected));
        assert_eq!(parse_event_date("2026-09-01 18:30:00"), Some(expected));

        let midnight = Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_event_date("2026-09-01"), Some(midnight));
    }

    #[test]
    fn test_parse_event_date_rejects_garbage() {
        assert_eq!(parse_event_date(""), None);
        assert_eq!(parse_event_date("next friday"), None);
        assert_eq!(parse_event_date("2026-13-40"), None);
    }
}
