//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Creates a new timestamp by adding the specified number of days.
    ///
    /// Negative values subtract days.
    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Creates a new timestamp by subtracting the specified number of hours.
    pub fn minus_hours(&self, hours: i64) -> Self {
        Self(self.0 - Duration::hours(hours))
    }

    /// Returns the timestamp as Unix milliseconds.
    pub fn as_unix_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Creates a new timestamp by adding calendar years.
    ///
    /// Feb 29 in a non-leap target year rolls over to Mar 1.
    pub fn add_calendar_years(&self, years: i32) -> Self {
        let target_year = self.0.year() + years;
        match self.0.with_year(target_year) {
            Some(dt) => Self(dt),
            None => Self(
                self.0
                    .with_day(1)
                    .and_then(|dt| dt.with_month(3))
                    .and_then(|dt| dt.with_year(target_year))
                    .unwrap_or(self.0),
            ),
        }
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use std::thread::sleep;
    use std::time::Duration;

    fn ts(rfc3339: &str) -> Timestamp {
        let dt = DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc);
        Timestamp::from_datetime(dt)
    }

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let t = Timestamp::now();
        let after = Utc::now();

        assert!(t.as_datetime() >= &before);
        assert!(t.as_datetime() <= &after);
    }

    #[test]
    fn timestamp_from_datetime_preserves_value() {
        let dt = Utc::now();
        let t = Timestamp::from_datetime(dt);
        assert_eq!(t.as_datetime(), &dt);
    }

    #[test]
    fn timestamp_is_before_works_correctly() {
        let t1 = Timestamp::now();
        sleep(Duration::from_millis(10));
        let t2 = Timestamp::now();

        assert!(t1.is_before(&t2));
        assert!(!t2.is_before(&t1));
    }

    #[test]
    fn timestamp_is_after_works_correctly() {
        let t1 = Timestamp::now();
        sleep(Duration::from_millis(10));
        let t2 = Timestamp::now();

        assert!(t2.is_after(&t1));
        assert!(!t1.is_after(&t2));
    }

    #[test]
    fn timestamp_serializes_to_json() {
        let t = ts("2024-01-15T10:30:00Z");
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("2024-01-15"));
    }

    #[test]
    fn timestamp_deserializes_from_json() {
        let json = "\"2024-01-15T10:30:00Z\"";
        let t: Timestamp = serde_json::from_str(json).unwrap();
        assert_eq!(t.as_datetime().year(), 2024);
    }

    #[test]
    fn timestamp_add_calendar_years_preserves_month_and_day() {
        let t = ts("2024-06-15T10:30:00Z").add_calendar_years(2);
        assert_eq!(t.as_datetime().year(), 2026);
        assert_eq!(t.as_datetime().month(), 6);
        assert_eq!(t.as_datetime().day(), 15);
    }

    #[test]
    fn timestamp_add_calendar_years_rolls_leap_day_forward() {
        let t = ts("2024-02-29T00:00:00Z").add_calendar_years(1);
        assert_eq!(t.as_datetime().year(), 2025);
        assert_eq!(t.as_datetime().month(), 3);
        assert_eq!(t.as_datetime().day(), 1);
    }

    #[test]
    fn timestamp_minus_hours_subtracts() {
        let t1 = ts("2024-01-15T10:30:00Z");
        let t2 = t1.minus_hours(24);
        assert_eq!(t2.as_datetime().day(), 14);
    }

    #[test]
    fn timestamp_as_unix_millis_matches_known_value() {
        // 2024-01-15T00:00:00Z
        let t = ts("2024-01-15T00:00:00Z");
        assert_eq!(t.as_unix_millis(), 1705276800000);
    }
}
