//! Sliding-window limits over a client's recent contact submissions.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RateLimitWindow {
    Minute,
    Hour,
    Day,
}

impl RateLimitWindow {
    /// Checked in this order; the first violated window wins.
    pub const ALL: [RateLimitWindow; 3] = [
        RateLimitWindow::Minute,
        RateLimitWindow::Hour,
        RateLimitWindow::Day,
    ];

    pub fn seconds(&self) -> i64 {
        match self {
            RateLimitWindow::Minute => 60,
            RateLimitWindow::Hour => 3_600,
            RateLimitWindow::Day => 86_400,
        }
    }

    /// Submissions allowed inside the window.
    pub fn limit(&self) -> usize {
        match self {
            RateLimitWindow::Minute => 2,
            RateLimitWindow::Hour => 5,
            RateLimitWindow::Day => 10,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RateLimitWindow::Minute => "minute",
            RateLimitWindow::Hour => "hour",
            RateLimitWindow::Day => "day",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimited {
    pub window: RateLimitWindow,
    /// Approximate seconds until the window frees a slot.
    pub time_left_secs: i64,
}

/// Send timestamps of one client, oldest first, never older than a day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionLog(Vec<DateTime<Utc>>);

impl SubmissionLog {
    pub fn new(mut timestamps: Vec<DateTime<Utc>>) -> Self {
        timestamps.sort();
        Self(timestamps)
    }

    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.0
    }

    /// Drop everything outside the trailing day.
    pub fn pruned(self, now: DateTime<Utc>) -> Self {
        let horizon = Duration::seconds(RateLimitWindow::Day.seconds());
        Self(self.0.into_iter().filter(|t| now - *t < horizon).collect())
    }

    pub fn check(&self, now: DateTime<Utc>) -> Result<(), RateLimited> {
        for window in RateLimitWindow::ALL {
            let span = Duration::seconds(window.seconds());
            let inside: Vec<&DateTime<Utc>> =
                self.0.iter().filter(|t| now - **t < span).collect();

            if inside.len() < window.limit() {
                continue;
            }
            if let Some(oldest) = inside.into_iter().min() {
                let elapsed = (now - *oldest).num_seconds();
                return Err(RateLimited {
                    window,
                    time_left_secs: (window.seconds() - elapsed).max(1),
                });
            }
        }
        Ok(())
    }

    pub fn record(mut self, now: DateTime<Utc>) -> Self {
        self.0.push(now);
        self
    }
}
