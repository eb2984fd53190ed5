use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::auth::application::domain::lockout::{seconds_until, LockoutState};
use crate::auth::application::ports::outgoing::LockoutStore;
use crate::shared::clock::Clock;

/// What the login form needs to render its countdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LockoutStatus {
    pub locked: bool,
    pub retry_after_secs: i64,
    pub remaining_attempts: u32,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LockoutStatusError {
    #[error("Lockout store error: {0}")]
    StoreError(String),
}

#[async_trait]
pub trait ILockoutStatusUseCase: Send + Sync {
    async fn execute(&self, client: &str) -> Result<LockoutStatus, LockoutStatusError>;
}

#[derive(Clone)]
pub struct LockoutStatusUseCase<S>
where
    S: LockoutStore,
{
    lockout_store: S,
    clock: Arc<dyn Clock>,
}

impl<S> LockoutStatusUseCase<S>
where
    S: LockoutStore,
{
    pub fn new(lockout_store: S, clock: Arc<dyn Clock>) -> Self {
        Self {
            lockout_store,
            clock,
        }
    }
}

#[async_trait]
impl<S> ILockoutStatusUseCase for LockoutStatusUseCase<S>
where
    S: LockoutStore,
{
    async fn execute(&self, client: &str) -> Result<LockoutStatus, LockoutStatusError> {
        let now = self.clock.now();
        let record = self
            .lockout_store
            .load(client)
            .await
            .map_err(|e| LockoutStatusError::StoreError(e.to_string()))?;

        let status = match record.state_at(now) {
            LockoutState::Locked { until } => LockoutStatus {
                locked: true,
                retry_after_secs: seconds_until(until, now),
                remaining_attempts: 0,
            },
            LockoutState::Normal { .. } => LockoutStatus {
                locked: false,
                retry_after_secs: 0,
                remaining_attempts: record.remaining_attempts(now),
            },
        };

        Ok(status)
    }
}
