use chrono::{Local, SecondsFormat, Utc};

pub struct TimeUtil;

impl TimeUtil {
    /// Current local time as ISO-8601 with offset, microsecond precision.
    #[inline]
    pub fn now_iso8601() -> String {
        Local::now().to_rfc3339_opts(SecondsFormat::Micros, false)
    }

    /// Whole seconds since the Unix epoch.
    #[inline]
    pub fn unix_seconds() -> i64 {
        Utc::now().timestamp()
    }

    /// Seconds elapsed since `epoch_secs`, never negative.
    pub fn seconds_since(epoch_secs: u64) -> f64 {
        let now = Utc::now().timestamp_micros() as f64 / 1e6;
        (now - epoch_secs as f64).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn iso_timestamp_parses_back() {
        let ts = TimeUtil::now_iso8601();
        assert!(DateTime::parse_from_rfc3339(&ts).is_ok(), "not ISO-8601: {ts}");
    }

    #[test]
    fn seconds_since_future_is_zero() {
        let future = (TimeUtil::unix_seconds() + 3600) as u64;
        assert_eq!(TimeUtil::seconds_since(future), 0.0);
    }

    #[test]
    fn seconds_since_keeps_sub_second_precision() {
        let now = TimeUtil::unix_seconds() as u64;
        let elapsed = TimeUtil::seconds_since(now);
        assert!((0.0..2.0).contains(&elapsed));
    }

    #[test]
    fn seconds_since_past_is_positive() {
        let an_hour_ago = (TimeUtil::unix_seconds() - 3600) as u64;
        let elapsed = TimeUtil::seconds_since(an_hour_ago);
        assert!((3599.0..3700.0).contains(&elapsed));
    }
}
