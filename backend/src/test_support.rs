//! Test utilities shared by unit tests across the crate.
//!
//! Only compiled for `cargo test`.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;

use crate::domain::HbnbFacade;
use crate::outbound::memory::in_memory_repositories;

/// Instant every fixture clock starts at.
pub fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 24, 10, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Clock frozen at a settable instant.
#[derive(Debug)]
pub struct FixtureClock {
    utc_now: Mutex<DateTime<Utc>>,
}

impl FixtureClock {
    pub fn new(utc_now: DateTime<Utc>) -> Self {
        Self {
            utc_now: Mutex::new(utc_now),
        }
    }

    /// Move the clock forward by `step`.
    pub fn advance(&self, step: Duration) {
        let mut now = self.utc_now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += step;
    }
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.utc_now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Facade over empty in-memory repositories, plus the clock driving it.
pub fn fixture_facade() -> (HbnbFacade, Arc<FixtureClock>) {
    let clock = Arc::new(FixtureClock::new(fixture_timestamp()));
    let facade = HbnbFacade::new(in_memory_repositories(), clock.clone());
    (facade, clock)
}
