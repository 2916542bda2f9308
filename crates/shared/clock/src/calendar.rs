use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Offset, Utc};
use pivot_ports::Clock;

/// UTC+7, the market's local zone
const DEFAULT_OFFSET_SECS: i32 = 7 * 3600;

/// Local calendar for a fixed UTC offset
///
/// Pivot dates and times are recorded in local time. Daylight saving is not
/// modelled; the offset never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalCalendar {
    offset: FixedOffset,
}

impl LocalCalendar {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Build from an offset in minutes east of UTC.
    /// Returns `None` outside ±24h.
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(Self::new)
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Current instant in local time
    pub fn local_now(&self, clock: &dyn Clock) -> DateTime<FixedOffset> {
        clock.now().with_timezone(&self.offset)
    }

    /// Today's local date
    pub fn today(&self, clock: &dyn Clock) -> NaiveDate {
        self.local_now(clock).date_naive()
    }

    /// Current local time-of-day
    pub fn time_of_day(&self, clock: &dyn Clock) -> NaiveTime {
        self.local_now(clock).time()
    }
}

impl Default for LocalCalendar {
    fn default() -> Self {
        Self::new(FixedOffset::east_opt(DEFAULT_OFFSET_SECS).unwrap_or_else(|| Utc.fix()))
    }
}
