use chrono::{Local, NaiveDate, Utc};
use lotto_core::DrawTimezone;
use parking_lot::RwLock;

/// Supplies the calendar date used to schedule tickets and draws.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    timezone: DrawTimezone,
}

impl SystemClock {
    pub fn new(timezone: DrawTimezone) -> Self {
        Self { timezone }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(DrawTimezone::Utc)
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        match self.timezone {
            DrawTimezone::Utc => Utc::now().date_naive(),
            DrawTimezone::Local => Local::now().date_naive(),
        }
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    today: RwLock<NaiveDate>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: RwLock::new(today),
        }
    }

    pub fn set(&self, today: NaiveDate) {
        *self.today.write() = today;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.today.read()
    }
}
