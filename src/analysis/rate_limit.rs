//! Rolling-window analysis quota, one state per user session.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::config;

/// Quota state for one session. `count` never exceeds `limit` at
/// dispatch time; the window resets only on the time-based path in
/// [`check`], never on success.
#[derive(Debug, Clone, Serialize)]
pub struct RateLimitState {
    pub count: u32,
    pub window_start: DateTime<Utc>,
    pub limit: u32,
}

impl RateLimitState {
    /// Fresh state with the configured daily limit.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self::with_limit(now, config::ANALYSIS_DAILY_LIMIT)
    }

    pub fn with_limit(now: DateTime<Utc>, limit: u32) -> Self {
        Self {
            count: 0,
            window_start: now,
            limit,
        }
    }
}

/// Remaining time until the quota window resets, reported as whole
/// hours and minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryAfter {
    pub hours: i64,
    pub minutes: i64,
}

impl fmt::Display for RetryAfter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

/// Gate an analysis attempt.
///
/// Resets the window when 24 hours have elapsed since `window_start`,
/// then enforces `count < limit`. Rejections carry the time until the
/// window reopens.
pub fn check(state: &mut RateLimitState, now: DateTime<Utc>) -> Result<(), RetryAfter> {
    let elapsed = now - state.window_start;
    if elapsed >= config::rate_limit_window() {
        state.count = 0;
        state.window_start = now;
        return Ok(());
    }

    if state.count >= state.limit {
        let remaining = config::rate_limit_window() - elapsed;
        let hours = remaining.num_hours();
        let minutes = (remaining - Duration::hours(hours)).num_minutes();
        return Err(RetryAfter { hours, minutes });
    }

    Ok(())
}

/// Record a successful analysis. Only increments the counter; the
/// window moves exclusively via the time-based reset in [`check`].
pub fn record_success(state: &mut RateLimitState) {
    state.count += 1;
}
