//! Display dates printed on certificates

use chrono::{DateTime, Duration, Utc};

/// Completion is recorded this many days before issue
pub const COMPLETION_OFFSET_DAYS: i64 = 5;

/// Issue and completion dates rendered as "Month D, YYYY"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateDates {
    pub issue_date: String,
    pub completion_date: String,
}

/// Long-form US calendar date, e.g. "January 5, 2024"
pub fn format_long_date(instant: DateTime<Utc>) -> String {
    instant.format("%B %-d, %Y").to_string()
}

pub fn certificate_dates(now: DateTime<Utc>) -> CertificateDates {
    let completed = now - Duration::days(COMPLETION_OFFSET_DAYS);
    CertificateDates {
        issue_date: format_long_date(now),
        completion_date: format_long_date(completed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_long_date_has_no_padding() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap();
        assert_eq!(format_long_date(instant), "January 5, 2024");
    }

    #[test]
    fn test_completion_crosses_month_boundary() {
        let now = Utc.with_ymd_and_hms(2024, 3, 3, 12, 0, 0).unwrap();
        let dates = certificate_dates(now);
        assert_eq!(dates.issue_date, "March 3, 2024");
        // 2024 is a leap year
        assert_eq!(dates.completion_date, "February 27, 2024");
    }

    #[test]
    fn test_completion_crosses_year_boundary() {
        let now = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap();
        let dates = certificate_dates(now);
        assert_eq!(dates.completion_date, "December 28, 2024");
    }
}
