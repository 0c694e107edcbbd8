use crate::ids::TimerKey;
use crate::occupancy::PollSchedule;

/// Delivered to the session loop each time a scheduled timer elapses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    Fired(TimerKey),
}

#[async_trait::async_trait]
pub trait TimerPort: Send {
    /// Start (or restart) `key`: first fire after `schedule.initial_delay`,
    /// then every `schedule.interval` until stopped.
    async fn start(&mut self, key: &TimerKey, schedule: PollSchedule) -> anyhow::Result<()>;

    /// Cancel `key`. No further events for it are produced once this returns.
    async fn stop(&mut self, key: &TimerKey) -> anyhow::Result<()>;

    /// Number of timers still alive.
    async fn active_count(&self) -> usize;
}
