//! Front desk local time

use std::sync::Arc;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Current time as seen from the front desk's fixed UTC offset
#[derive(Clone)]
pub struct DeskTime {
    offset: FixedOffset,
    clock: Arc<dyn Clock>,
}

impl DeskTime {
    pub fn new(offset: FixedOffset, clock: Arc<dyn Clock>) -> Self {
        Self { offset, clock }
    }

    pub fn system(offset: FixedOffset) -> Self {
        Self::new(offset, Arc::new(SystemClock))
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn local(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&self.offset)
    }

    /// Calendar date in the configured offset
    pub fn today(&self) -> NaiveDate {
        self.local(self.now()).date_naive()
    }

    /// Local midnight of today, as an instant
    pub fn start_of_today(&self) -> DateTime<Utc> {
        let midnight = self.today().and_time(NaiveTime::MIN);
        let offset = Duration::seconds(i64::from(self.offset.local_minus_utc()));
        Utc.from_utc_datetime(&(midnight - offset))
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FixedClock;
    use super::*;

    fn desk_time(at: &str, offset_hours: i32) -> DeskTime {
        let at = DateTime::parse_from_rfc3339(at).unwrap().with_timezone(&Utc);
        DeskTime::new(
            FixedOffset::east_opt(offset_hours * 3600).unwrap(),
            Arc::new(FixedClock::new(at)),
        )
    }

    #[test]
    fn test_today_uses_offset() {
        // 22:30 UTC is already the next day at UTC+3
        let time = desk_time("2029-12-31T22:30:00Z", 3);
        assert_eq!(time.today(), NaiveDate::from_ymd_opt(2030, 1, 1).unwrap());

        let time = desk_time("2029-12-31T22:30:00Z", 0);
        assert_eq!(time.today(), NaiveDate::from_ymd_opt(2029, 12, 31).unwrap());
    }

    #[test]
    fn test_start_of_today() {
        let time = desk_time("2030-01-01T10:00:00Z", 3);
        let expected = DateTime::parse_from_rfc3339("2029-12-31T21:00:00Z").unwrap();
        assert_eq!(time.start_of_today(), expected.with_timezone(&Utc));
    }
}
