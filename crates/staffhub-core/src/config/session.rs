//! Session management configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Session housekeeping configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Interval for the expired-session sweep in minutes.
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_minutes: u64,
}

impl SessionConfig {
    /// Returns the sweep interval as a duration, floored at one minute.
    /// `tokio::time::interval` panics on a zero duration, so a zero in
    /// config must not reach the ticker.
    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_minutes.max(1) * 60)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cleanup_interval_minutes: default_cleanup_interval(),
        }
    }
}

fn default_cleanup_interval() -> u64 {
    15
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleanup_interval_floors_zero_at_one_minute() {
        let config = SessionConfig {
            cleanup_interval_minutes: 0,
        };
        assert_eq!(config.cleanup_interval(), Duration::from_secs(60));
    }

    #[test]
    fn cleanup_interval_converts_minutes() {
        let config = SessionConfig {
            cleanup_interval_minutes: 15,
        };
        assert_eq!(config.cleanup_interval(), Duration::from_secs(900));
    }
}
