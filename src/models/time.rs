//! Abstract time scalar.
//!
//! All durations and timestamps in the crate are `Time` values: non-negative
//! integer ticks relative to a scheduling epoch (t=0). The consumer defines
//! what one tick means (an hour, a shift, a day).
//!
//! Infeasibility is a first-class time value: `Time::inf()` is larger than
//! every finite time and absorbs under addition and `max`, so "this plan can
//! never finish" flows through duration aggregation without special casing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A non-negative duration or timestamp in abstract ticks.
///
/// Totally ordered; `Time::inf()` compares greater than every finite value.
/// Addition saturates at infinity, so any sum or running total touched by an
/// infinite operand stays infinite.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Time(i64);

impl Time {
    /// The zero duration.
    pub const ZERO: Time = Time(0);

    const INF: i64 = i64::MAX;

    /// Creates a time value from a tick count.
    ///
    /// Negative tick counts are a caller error.
    pub fn new(ticks: i64) -> Self {
        debug_assert!(ticks >= 0, "Time must be non-negative, got {ticks}");
        Time(ticks)
    }

    /// The infinite time: no finite schedule reaches it.
    pub fn inf() -> Self {
        Time(Self::INF)
    }

    /// Whether this is the infinite sentinel.
    pub fn is_inf(&self) -> bool {
        self.0 == Self::INF
    }

    /// The raw tick count. Meaningless for `Time::inf()`.
    pub fn ticks(&self) -> i64 {
        self.0
    }

    /// Duration of a work volume performed at a given rate: `⌊volume / rate⌋`.
    ///
    /// The caller guarantees `rate > 0`; non-positive rates must be mapped
    /// to `Time::inf()` before reaching this constructor.
    pub fn from_work(volume: f64, rate: f64) -> Self {
        debug_assert!(rate > 0.0, "work rate must be positive, got {rate}");
        Time((volume / rate).floor() as i64)
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        if self.is_inf() || rhs.is_inf() {
            Time::inf()
        } else {
            Time(self.0.saturating_add(rhs.0))
        }
    }
}

impl Sum for Time {
    fn sum<I: Iterator<Item = Time>>(iter: I) -> Time {
        iter.fold(Time::ZERO, Add::add)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_inf() {
            write!(f, "inf")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
