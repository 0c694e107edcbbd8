use tracing::debug;

use super::action::{EvictionCause, OccupancyAction};
use super::event::OccupancyEvent;
use super::state::OccupancyState;

pub struct OccupancyStateMachine;

impl OccupancyStateMachine {
    pub fn transition(
        state: OccupancyState,
        event: OccupancyEvent,
    ) -> (OccupancyState, Vec<OccupancyAction>) {
        match (state, event) {
            // ===== Enter =====
            (
                OccupancyState::Idle,
                OccupancyEvent::Entered {
                    space_id,
                    timer,
                    schedule,
                },
            ) => (
                OccupancyState::Armed {
                    space_id,
                    timer: timer.clone(),
                },
                vec![OccupancyAction::StartTimer { timer, schedule }],
            ),
            (
                OccupancyState::Armed { timer: previous, .. },
                OccupancyEvent::Entered {
                    space_id,
                    timer,
                    schedule,
                },
            ) => (
                OccupancyState::Armed {
                    space_id,
                    timer: timer.clone(),
                },
                vec![
                    OccupancyAction::StopTimer { timer: previous },
                    OccupancyAction::StartTimer { timer, schedule },
                ],
            ),

            // ===== Leave =====
            (OccupancyState::Armed { timer, .. }, OccupancyEvent::Left) => (
                OccupancyState::Idle,
                vec![OccupancyAction::StopTimer { timer }],
            ),

            // ===== Tick =====
            (
                OccupancyState::Armed { space_id, timer },
                OccupancyEvent::TimerFired { timer: fired },
            ) if fired == timer => (
                OccupancyState::Armed {
                    space_id: space_id.clone(),
                    timer,
                },
                vec![OccupancyAction::SendEligibilityCheck { space_id }],
            ),

            // ===== Server answers =====
            (
                OccupancyState::Armed { space_id, timer },
                OccupancyEvent::EligibilityReported {
                    space_id: reported,
                    eligible: false,
                    is_owner: false,
                    reason,
                },
            ) if reported == space_id => (
                OccupancyState::Idle,
                vec![
                    OccupancyAction::StopTimer { timer },
                    OccupancyAction::Evict {
                        space_id,
                        cause: EvictionCause::AccessRevoked { reason },
                    },
                ],
            ),
            (
                OccupancyState::Armed { space_id, timer },
                OccupancyEvent::EvictedByServer {
                    space_id: evicted,
                    reason,
                },
            ) if evicted == space_id => (
                OccupancyState::Idle,
                vec![
                    OccupancyAction::StopTimer { timer },
                    OccupancyAction::Evict {
                        space_id,
                        cause: EvictionCause::ServerEvicted { reason },
                    },
                ],
            ),

            // ===== Identity =====
            (OccupancyState::Armed { space_id, timer }, OccupancyEvent::IdentityLost) => (
                OccupancyState::Idle,
                vec![
                    OccupancyAction::StopTimer { timer },
                    OccupancyAction::Evict {
                        space_id,
                        cause: EvictionCause::IdentityLost,
                    },
                ],
            ),

            // ===== Stale or irrelevant =====
            (state, event) => {
                debug!(?state, ?event, "occupancy event ignored");
                (state, vec![])
            }
        }
    }
}
