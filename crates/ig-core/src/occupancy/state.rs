use serde::{Deserialize, Serialize};

use crate::ids::{SpaceId, TimerKey};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OccupancyState {
    /// Not inside a gated space.
    #[default]
    Idle,

    /// Inside `space_id`; the timer identified by `timer` is running.
    Armed { space_id: SpaceId, timer: TimerKey },
}

impl OccupancyState {
    pub fn is_armed(&self) -> bool {
        matches!(self, Self::Armed { .. })
    }

    pub fn space_id(&self) -> Option<&SpaceId> {
        match self {
            Self::Idle => None,
            Self::Armed { space_id, .. } => Some(space_id),
        }
    }
}
