use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Failed logins allowed before the client is locked out.
pub const MAX_FAILED_ATTEMPTS: u32 = 3;

/// How long a lock triggered by failed logins lasts.
pub const LOCKOUT_SECONDS: i64 = 30;

/// Wait applied when the auth backend rate-limits us without saying how long.
pub const DEFAULT_RATE_LIMIT_WAIT_SECONDS: i64 = 30;

static RETRY_AFTER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Try again in (\d+) seconds").expect("valid regex"));

/// Persisted per-client login attempt record.
///
/// `Normal` while `lock_until` is unset or in the past, `Locked` otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockoutRecord {
    pub attempts: u32,
    #[serde(default)]
    pub lock_until: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockoutState {
    Normal { attempts: u32 },
    Locked { until: DateTime<Utc> },
}

impl LockoutRecord {
    /// A lock that expires `seconds` from `now`, with attempts at the threshold.
    pub fn locked_for(now: DateTime<Utc>, seconds: i64) -> Self {
        Self {
            attempts: MAX_FAILED_ATTEMPTS,
            lock_until: Some(now + Duration::seconds(seconds)),
        }
    }

    pub fn state_at(&self, now: DateTime<Utc>) -> LockoutState {
        match self.lock_until {
            Some(until) if now < until => LockoutState::Locked { until },
            Some(_) => LockoutState::Normal { attempts: 0 },
            None => LockoutState::Normal {
                attempts: self.attempts,
            },
        }
    }

    /// The record as it should be used at `now`: an expired lock resets it.
    pub fn refreshed(self, now: DateTime<Utc>) -> Self {
        match self.lock_until {
            Some(until) if now >= until => Self::default(),
            _ => self,
        }
    }

    /// Count one failed credential check, locking once the threshold is hit.
    pub fn record_failure(self, now: DateTime<Utc>) -> Self {
        let attempts = self.refreshed(now).attempts + 1;

        if attempts >= MAX_FAILED_ATTEMPTS {
            Self::locked_for(now, LOCKOUT_SECONDS)
        } else {
            Self {
                attempts,
                lock_until: None,
            }
        }
    }

    pub fn remaining_attempts(&self, now: DateTime<Utc>) -> u32 {
        match self.state_at(now) {
            LockoutState::Normal { attempts } => MAX_FAILED_ATTEMPTS.saturating_sub(attempts),
            LockoutState::Locked { .. } => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.attempts == 0 && self.lock_until.is_none()
    }
}

/// Whole seconds until `until`, rounded up so the countdown never shows 0
/// while still locked.
pub fn seconds_until(until: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (until - now).num_milliseconds();
    if millis <= 0 {
        0
    } else {
        (millis + 999) / 1000
    }
}

/// Wait time announced by a rate-limited auth backend ("Try again in N seconds").
pub fn parse_rate_limit_wait(message: &str) -> i64 {
    RETRY_AFTER_PATTERN
        .captures(message)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_RATE_LIMIT_WAIT_SECONDS)
}
