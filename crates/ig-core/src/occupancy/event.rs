use serde::{Deserialize, Serialize};

use super::schedule::PollSchedule;
use crate::ids::{SpaceId, TimerKey};
use crate::space::EntryDenyReason;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OccupancyEvent {
    // Caller declares occupancy; the caller mints the timer key
    Entered {
        space_id: SpaceId,
        timer: TimerKey,
        schedule: PollSchedule,
    },
    // Caller declares departure
    Left,

    // Timer tick
    TimerFired {
        timer: TimerKey,
    },

    // Server answers
    EligibilityReported {
        space_id: SpaceId,
        eligible: bool,
        is_owner: bool,
        reason: Option<EntryDenyReason>,
    },
    EvictedByServer {
        space_id: SpaceId,
        reason: Option<String>,
    },

    // Auth/wallet disappeared
    IdentityLost,
}
