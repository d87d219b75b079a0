use chrono::{DateTime, Local};

use crate::model::config::ClockConfig;
use crate::ops::clock::{ClockReading, read_clock};

/// Time and date display, refreshed once per second
#[derive(Debug)]
pub struct Clock {
    config: ClockConfig,
    reading: ClockReading,
}

impl Clock {
    pub fn init(config: &ClockConfig, now: DateTime<Local>) -> Self {
        Clock {
            config: config.clone(),
            reading: read_clock(&now, config),
        }
    }

    pub fn tick(&mut self, now: DateTime<Local>) {
        self.reading = read_clock(&now, &self.config);
    }

    pub fn reading(&self) -> &ClockReading {
        &self.reading
    }
}
