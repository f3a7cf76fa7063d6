// Deterministic identifier and time sources for tests.

use crate::shared::core::primitives::{Clock, IdGenerator};
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

/// Yields `{prefix}-0001`, `{prefix}-0002`, ...
pub struct SequenceIdGenerator {
    prefix: String,
    next: AtomicUsize,
}

impl SequenceIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicUsize::new(1),
        }
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        format!("{}-{n:04}", self.prefix)
    }
}

/// Yields the given ids in order, then falls back to `scripted-{n}`.
pub struct ScriptedIdGenerator {
    ids: Mutex<VecDeque<String>>,
    fallback: AtomicUsize,
}

impl ScriptedIdGenerator {
    pub fn new<const N: usize>(ids: [&str; N]) -> Self {
        Self {
            ids: Mutex::new(ids.iter().map(|id| id.to_string()).collect()),
            fallback: AtomicUsize::new(1),
        }
    }
}

impl IdGenerator for ScriptedIdGenerator {
    fn next_id(&self) -> String {
        match self.ids.lock().unwrap().pop_front() {
            Some(id) => id,
            None => format!("scripted-{}", self.fallback.fetch_add(1, Ordering::SeqCst)),
        }
    }
}

/// Starts at 2024-01-01T00:00:00Z and advances one second per reading.
pub struct SteppingClock {
    start: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self {
            start: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            ticks: AtomicI64::new(0),
        }
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + Duration::seconds(tick)
    }
}

#[cfg(test)]
mod fixture_primitives_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sequence_ids_are_zero_padded_and_increasing() {
        let ids = SequenceIdGenerator::new("book");
        assert_eq!(ids.next_id(), "book-0001");
        assert_eq!(ids.next_id(), "book-0002");
    }

    #[rstest]
    fn scripted_ids_fall_back_when_exhausted() {
        let ids = ScriptedIdGenerator::new(["a"]);
        assert_eq!(ids.next_id(), "a");
        assert_eq!(ids.next_id(), "scripted-1");
    }

    #[rstest]
    fn stepping_clock_advances_on_every_reading() {
        let clock = SteppingClock::new();
        let first = clock.now();
        let second = clock.now();
        assert_eq!(second - first, Duration::seconds(1));
    }
}
