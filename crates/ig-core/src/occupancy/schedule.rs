use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One-shot delay after entering, then a recurring interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollSchedule {
    pub initial_delay: Duration,
    pub interval: Duration,
}

impl PollSchedule {
    pub const DEFAULT_INITIAL_DELAY_SECS: u64 = 5;
    pub const DEFAULT_INTERVAL_SECS: u64 = 30;

    pub fn from_secs(initial_delay_secs: u64, interval_secs: u64) -> Self {
        Self {
            initial_delay: Duration::from_secs(initial_delay_secs),
            interval: Duration::from_secs(interval_secs),
        }
    }
}

impl Default for PollSchedule {
    fn default() -> Self {
        Self::from_secs(Self::DEFAULT_INITIAL_DELAY_SECS, Self::DEFAULT_INTERVAL_SECS)
    }
}
