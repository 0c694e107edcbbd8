use serde::{Deserialize, Serialize};

use super::schedule::PollSchedule;
use crate::ids::{SpaceId, TimerKey};
use crate::space::EntryDenyReason;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvictionCause {
    /// A periodic re-check found the player no longer eligible.
    AccessRevoked { reason: Option<EntryDenyReason> },
    /// The server pushed an eviction.
    ServerEvicted { reason: Option<String> },
    /// Auth/wallet went away while inside.
    IdentityLost,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OccupancyAction {
    StartTimer {
        timer: TimerKey,
        schedule: PollSchedule,
    },
    StopTimer {
        timer: TimerKey,
    },
    SendEligibilityCheck {
        space_id: SpaceId,
    },
    Evict {
        space_id: SpaceId,
        cause: EvictionCause,
    },
}
