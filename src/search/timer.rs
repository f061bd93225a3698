//! Time budget enforcement
//!
//! The caller hands the engine a "milliseconds left" query at the start of
//! each turn. The search consults it through a [`TimeGovernor`] before
//! expanding every node and unwinds with [`Timeout`] as soon as the
//! remaining time drops below the threshold.

use std::time::{Duration, Instant};

use crate::error::Timeout;

/// Default abort threshold in milliseconds
pub const DEFAULT_THRESHOLD_MS: f64 = 10.0;

/// Per-turn guard around the caller's time-left query.
#[derive(Clone, Copy)]
pub struct TimeGovernor<'a> {
    time_left: &'a dyn Fn() -> f64,
    threshold_ms: f64,
}

impl<'a> TimeGovernor<'a> {
    pub fn new(time_left: &'a dyn Fn() -> f64, threshold_ms: f64) -> Self {
        Self {
            time_left,
            threshold_ms,
        }
    }

    /// Milliseconds left according to the caller
    #[inline]
    pub fn remaining_ms(&self) -> f64 {
        (self.time_left)()
    }

    /// Fail with [`Timeout`] once the remaining time is below the threshold.
    #[inline]
    pub fn check(&self) -> Result<(), Timeout> {
        if self.remaining_ms() < self.threshold_ms {
            Err(Timeout)
        } else {
            Ok(())
        }
    }
}

/// Wall-clock turn budget, usable as the time-left query.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    budget: Duration,
}

impl Deadline {
    pub fn after_ms(budget_ms: u64) -> Self {
        Self {
            start: Instant::now(),
            budget: Duration::from_millis(budget_ms),
        }
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Milliseconds left; negative once the budget is overrun
    #[inline]
    pub fn remaining_ms(&self) -> f64 {
        self.budget.as_secs_f64() * 1000.0 - self.elapsed().as_secs_f64() * 1000.0
    }

    /// Overrun: strictly less than zero left. Returning with exactly
    /// nothing left is still on time.
    #[inline]
    pub fn expired(&self) -> bool {
        overrun(self.remaining_ms())
    }
}

#[inline]
fn overrun(remaining_ms: f64) -> bool {
    remaining_ms < 0.0
}
