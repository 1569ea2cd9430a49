use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::ports::Clock;

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) NaiveDateTime);

impl FixedClock {
    pub(crate) fn at(hour: u32, minute: u32, second: u32, milli: u32) -> Self {
        let now = NaiveDate::from_ymd_opt(2026, 10, 16)
            .and_then(|date| date.and_hms_milli_opt(hour, minute, second, milli))
            .expect("valid test timestamp");
        Self(now)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
