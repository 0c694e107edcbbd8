use ig_core::network::protocol::{EligibilityResult, EvictedMessage, SpaceRef};
use ig_core::occupancy::{OccupancyAction, OccupancyEvent, OccupancyStateMachine};
use ig_core::ports::TimerEvent;
use ig_core::{OccupancyState, OutboundMessage, SpaceId, TimerKey};
use tracing::{debug, error, info, info_span, warn, Instrument};

use super::{EvictionNotice, IglooSession};
use crate::error::SessionError;

impl IglooSession {
    /// Start re-validating access to `space_id` on the configured schedule.
    ///
    /// Re-arming replaces the previous timer and callback; the old callback
    /// is dropped without running.
    pub async fn arm<F>(&mut self, space_id: SpaceId, on_evict: F) -> Result<(), SessionError>
    where
        F: FnOnce(EvictionNotice) + Send + 'static,
    {
        let span = info_span!("usecase.occupancy.arm", space_id = %space_id);
        self.on_evict = Some(Box::new(on_evict));
        let event = OccupancyEvent::Entered {
            space_id,
            timer: TimerKey::new(),
            schedule: self.schedule,
        };
        self.apply_occupancy(event).instrument(span).await
    }

    /// Stop polling. A no-op when nothing is armed.
    pub async fn disarm(&mut self) {
        if let Err(err) = self.apply_occupancy(OccupancyEvent::Left).await {
            warn!(error = %err, "disarm did not stop the eligibility timer cleanly");
        }
        self.on_evict = None;
    }

    /// Declare the player inside `space_id` and arm the poller when the
    /// space is gated and not owned by the player. Returns whether it armed.
    pub async fn enter_space<F>(&mut self, space_id: SpaceId, on_evict: F) -> Result<bool, SessionError>
    where
        F: FnOnce(EvictionNotice) + Send + 'static,
    {
        self.declare_occupancy(&space_id).await;

        let space = self.store.find(&space_id);
        let gated = space.map_or(true, |space| space.access_type.is_gated());
        let owned = match (space, self.known_identity.as_ref()) {
            (Some(space), Some(identity)) => space.is_owned_by(&identity.wallet),
            _ => false,
        };

        if gated && !owned {
            self.arm(space_id, on_evict).await?;
            Ok(true)
        } else {
            debug!(%space_id, gated, owned, "no eligibility polling needed");
            self.disarm().await;
            Ok(false)
        }
    }

    /// Tell the server where the player is. Fire and forget.
    pub async fn declare_occupancy(&mut self, space_id: &SpaceId) {
        let message = OutboundMessage::DeclareOccupancy(SpaceRef::from(space_id));
        if let Err(err) = self.channel.send(message).await {
            debug!(%space_id, error = %err, "occupancy not declared");
        }
    }

    pub async fn on_timer_event(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::Fired(timer) => {
                if let Err(err) = self.apply_occupancy(OccupancyEvent::TimerFired { timer }).await {
                    warn!(error = %err, "eligibility tick failed");
                }
            }
        }
    }

    pub(super) async fn on_eligibility_result(&mut self, result: EligibilityResult) {
        if !result.eligible && !result.is_owner && self.clearance.invalidate(&result.space_id) {
            debug!(space_id = %result.space_id, "clearance revoked by eligibility check");
        }
        let event = OccupancyEvent::EligibilityReported {
            space_id: result.space_id,
            eligible: result.eligible,
            is_owner: result.is_owner,
            reason: result.reason,
        };
        if let Err(err) = self.apply_occupancy(event).await {
            warn!(error = %err, "eligibility result not fully applied");
        }
    }

    pub(super) async fn on_evicted(&mut self, message: EvictedMessage) {
        self.clearance.invalidate(&message.space_id);
        let event = OccupancyEvent::EvictedByServer {
            space_id: message.space_id,
            reason: message.reason.or(message.message),
        };
        if let Err(err) = self.apply_occupancy(event).await {
            warn!(error = %err, "server eviction not fully applied");
        }
    }

    pub(super) async fn identity_lost(&mut self) {
        if let Err(err) = self.apply_occupancy(OccupancyEvent::IdentityLost).await {
            warn!(error = %err, "identity loss eviction not fully applied");
        }
    }

    async fn apply_occupancy(&mut self, event: OccupancyEvent) -> Result<(), SessionError> {
        let current = std::mem::take(&mut self.occupancy);
        let (next, actions) = OccupancyStateMachine::transition(current, event);
        self.occupancy = next;
        self.execute_occupancy_actions(actions).await
    }

    /// Runs every action even if an earlier one fails; reports the first error.
    async fn execute_occupancy_actions(
        &mut self,
        actions: Vec<OccupancyAction>,
    ) -> Result<(), SessionError> {
        let mut first_error = None;

        for action in actions {
            match action {
                OccupancyAction::StartTimer { timer, schedule } => {
                    if let Err(err) = self.timer.start(&timer, schedule).await {
                        error!(%timer, error = %err, "failed to start eligibility timer");
                        self.occupancy = OccupancyState::Idle;
                        self.on_evict = None;
                        first_error.get_or_insert(SessionError::Timer(err));
                    }
                }
                OccupancyAction::StopTimer { timer } => {
                    if let Err(err) = self.timer.stop(&timer).await {
                        warn!(%timer, error = %err, "failed to stop eligibility timer");
                        first_error.get_or_insert(SessionError::Timer(err));
                    }
                }
                OccupancyAction::SendEligibilityCheck { space_id } => {
                    let message = OutboundMessage::EligibilityCheck(SpaceRef::from(&space_id));
                    if let Err(err) = self.channel.send(message).await {
                        // Skipped ticks are not retried; the next tick tries again.
                        debug!(%space_id, error = %err, "eligibility check not sent");
                    }
                }
                OccupancyAction::Evict { space_id, cause } => {
                    self.clearance.invalidate(&space_id);
                    let notice = EvictionNotice { space_id, cause };
                    info!(space_id = %notice.space_id, cause = ?notice.cause, "evicting player");
                    self.store.record_eviction(notice.clone());
                    match self.on_evict.take() {
                        Some(on_evict) => on_evict(notice),
                        None => warn!("eviction with no callback registered"),
                    }
                }
            }
        }

        first_error.map_or(Ok(()), Err)
    }
}
