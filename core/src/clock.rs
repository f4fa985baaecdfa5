//! Wall-clock source for `created_at` / `updated_at`.
//!
//! # Design
//! Timestamps are rendered as UTC RFC 3339 with a fixed nine-digit fraction,
//! e.g. `2026-10-17T20:58:01.123456789Z`. The fixed width makes string order
//! agree with time order.

use chrono::{SecondsFormat, Utc};

/// Supplies the current time as an opaque string.
pub trait Clock: Send + Sync {
    fn now(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true)
    }
}
