//! Human-friendly timestamps for note cards.

use chrono::{DateTime, Local, TimeZone, Utc};

/// Format a modification time relative to `now`, in the local timezone.
#[must_use]
pub fn format_last_modified(modified: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format_last_modified_in(modified, now, &Local)
}

/// Format a modification time relative to `now`.
///
/// Elapsed time is floored to whole hours. Anything two days or older is
/// shown as a `M/D/YYYY` date in `tz`.
#[must_use]
pub fn format_last_modified_in<Tz: TimeZone>(
    modified: DateTime<Utc>,
    now: DateTime<Utc>,
    tz: &Tz,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let hours = (now - modified).num_hours();

    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if hours < 48 {
        "Yesterday".to_string()
    } else {
        modified.with_timezone(tz).format("%-m/%-d/%Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    fn ago(delta: Duration) -> String {
        format_last_modified_in(now() - delta, now(), &Utc)
    }

    #[test]
    fn under_an_hour_is_just_now() {
        assert_eq!(ago(Duration::minutes(0)), "Just now");
        assert_eq!(ago(Duration::minutes(59)), "Just now");
    }

    #[test]
    fn future_timestamps_are_just_now() {
        assert_eq!(ago(Duration::hours(-3)), "Just now");
    }

    #[test]
    fn hours_are_floored() {
        assert_eq!(ago(Duration::minutes(60)), "1h ago");
        assert_eq!(ago(Duration::minutes(179)), "2h ago");
        assert_eq!(ago(Duration::hours(23)), "23h ago");
    }

    #[test]
    fn second_day_is_yesterday() {
        assert_eq!(ago(Duration::hours(24)), "Yesterday");
        assert_eq!(ago(Duration::hours(47)), "Yesterday");
    }

    #[test]
    fn older_dates_use_calendar_format() {
        assert_eq!(ago(Duration::hours(48)), "3/13/2024");
        assert_eq!(ago(Duration::days(7)), "3/8/2024");
    }
}
