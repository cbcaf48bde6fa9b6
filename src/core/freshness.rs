use crate::error::{CheckError, Result};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Rejects samples older than the configured window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Freshness {
    window: Option<Duration>,
}

impl Freshness {
    pub fn new(window: Option<Duration>) -> Self {
        Self { window }
    }

    pub fn disabled() -> Self {
        Self { window: None }
    }

    pub fn window(&self) -> Option<Duration> {
        self.window
    }

    /// Check `timestamp` against `now`; whole seconds are compared.
    pub fn check(&self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> Result<()> {
        let Some(window) = self.window else {
            return Ok(());
        };

        let age = (now - timestamp).num_seconds();
        let allowed = i64::try_from(window.as_secs()).unwrap_or(i64::MAX);
        if age > allowed {
            log::debug!("sample from {} is {}s old (window {}s)", timestamp, age, allowed);
            return Err(CheckError::Stale(age - allowed));
        }
        Ok(())
    }

    pub fn check_now(&self, timestamp: DateTime<Utc>) -> Result<()> {
        self.check(timestamp, Utc::now())
    }
}
