// Identifier and time sources shared by every repository.
//
// Both are traits so the in-memory adapters can be driven deterministically
// from tests, while production wiring uses UUIDv7 identifiers and the wall clock.

use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Fixed-length (32 characters) opaque identifiers built from UUIDv7 in simple format.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::now_v7().simple().to_string()
    }
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock truncated to milliseconds, so the ISO 8601 rendering round-trips exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(3)
    }
}
