//! Defaults policy applied on top of the raw [`AppConfig`] DTO.

use ig_core::ports::Identity;
use ig_core::{AppConfig, PollSchedule};

/// Zero means "not configured" and falls back to the built-in schedule.
pub fn poll_schedule(config: &AppConfig) -> PollSchedule {
    let initial = match config.initial_delay_secs {
        0 => PollSchedule::DEFAULT_INITIAL_DELAY_SECS,
        secs => secs,
    };
    let interval = match config.interval_secs {
        0 => PollSchedule::DEFAULT_INTERVAL_SECS,
        secs => secs,
    };
    PollSchedule::from_secs(initial, interval)
}

/// Identity seeded from config; an empty wallet means signed out.
pub fn configured_identity(config: &AppConfig) -> Option<Identity> {
    let wallet = config.wallet.trim();
    if wallet.is_empty() {
        return None;
    }
    let username = Some(config.username.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string);
    Some(Identity::new(wallet, username))
}
