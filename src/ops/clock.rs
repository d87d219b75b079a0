use std::fmt::Display;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Timelike};

use crate::model::config::ClockConfig;

/// Time and date strings shown by the clock widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockReading {
    pub time: String,
    pub date: String,
}

pub fn read_clock<Tz: TimeZone>(now: &DateTime<Tz>, config: &ClockConfig) -> ClockReading
where
    Tz::Offset: Display,
{
    let time_fmt = match (config.hour24, config.show_seconds) {
        (true, true) => "%H:%M:%S",
        (true, false) => "%H:%M",
        (false, true) => "%-I:%M:%S %p",
        (false, false) => "%-I:%M %p",
    };
    ClockReading {
        time: now.format(time_fmt).to_string(),
        date: now.format("%A, %B %-d, %Y").to_string(),
    }
}

/// Time left until the next whole second
pub fn until_next_tick<Tz: TimeZone>(now: &DateTime<Tz>) -> Duration {
    let into_second = Duration::from_nanos(u64::from(now.nanosecond() % 1_000_000_000));
    Duration::from_secs(1).saturating_sub(into_second)
}
