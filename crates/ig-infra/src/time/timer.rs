use std::collections::HashMap;
use std::sync::Arc;

use ig_core::ports::{TimerEvent, TimerPort};
use ig_core::{PollSchedule, TimerKey};
use tokio::sync::{mpsc, Mutex};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

/// Repeating timers backed by spawned tokio tasks. Each tick is delivered as
/// a [`TimerEvent`] on the channel handed to [`TokioTimer::new`].
pub struct TokioTimer {
    timers: Arc<Mutex<HashMap<TimerKey, tokio::task::AbortHandle>>>,
    events: mpsc::Sender<TimerEvent>,
}

impl TokioTimer {
    pub fn new(events: mpsc::Sender<TimerEvent>) -> Self {
        Self {
            timers: Arc::new(Mutex::new(HashMap::new())),
            events,
        }
    }
}

#[async_trait::async_trait]
impl TimerPort for TokioTimer {
    async fn start(&mut self, key: &TimerKey, schedule: PollSchedule) -> anyhow::Result<()> {
        anyhow::ensure!(!schedule.interval.is_zero(), "timer interval must be non-zero");
        let first_tick = Instant::now()
            .checked_add(schedule.initial_delay)
            .ok_or_else(|| anyhow::anyhow!("timer initial delay out of range: {:?}", schedule.initial_delay))?;

        let timers = Arc::clone(&self.timers);
        let events = self.events.clone();
        let key_clone = key.clone();

        let mut timers_guard = self.timers.lock().await;
        if let Some(existing) = timers_guard.remove(key) {
            existing.abort();
        }

        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(first_tick, schedule.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if events.send(TimerEvent::Fired(key_clone.clone())).await.is_err() {
                    break;
                }
            }
            // Receiver gone: nobody can observe this timer any more.
            timers.lock().await.remove(&key_clone);
        });

        timers_guard.insert(key.clone(), handle.abort_handle());
        debug!(timer = %key, ?schedule, "timer started");
        Ok(())
    }

    async fn stop(&mut self, key: &TimerKey) -> anyhow::Result<()> {
        let mut timers_guard = self.timers.lock().await;
        if let Some(handle) = timers_guard.remove(key) {
            handle.abort();
            debug!(timer = %key, "timer stopped");
        }
        Ok(())
    }

    async fn active_count(&self) -> usize {
        self.timers.lock().await.len()
    }
}
